//! Core data structures for demand forecasting.

mod forecast;
mod sale;

pub use forecast::{total_demand, AverageMap, ForecastMap};
pub use sale::SaleRecord;
