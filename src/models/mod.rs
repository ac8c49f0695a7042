//! Demand projection models.

mod average;
mod demand;
mod traits;

pub use average::AverageDemand;
pub use demand::{forecast_demand, DemandForecaster};
pub use traits::{BoxedForecaster, Forecaster};
