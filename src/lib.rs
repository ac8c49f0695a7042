//! # demand-forecast
//!
//! Per-product demand projection from historical sale records.
//!
//! The pipeline groups records by product, drops anomalous quantities with
//! median/dispersion bounds, averages what remains and scales each average
//! linearly over a forecast horizon.
//!
//! ```
//! use chrono::NaiveDate;
//! use demand_forecast::prelude::*;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let records: Vec<_> = [5, 5, 5, 5, 50]
//!     .iter()
//!     .map(|&q| SaleRecord::new("Widget", date, q).unwrap())
//!     .collect();
//!
//! let mut model = AverageDemand::new();
//! model.fit(&records).unwrap();
//! assert_eq!(model.predict(10).unwrap()["Widget"], 50.0);
//! ```

pub mod analysis;
pub mod core;
pub mod detection;
pub mod error;
pub mod io;
pub mod models;
pub mod utils;

pub use error::{DemandError, Result, RowError};

pub mod prelude {
    pub use crate::analysis::SalesAnalyzer;
    pub use crate::core::{AverageMap, ForecastMap, SaleRecord};
    pub use crate::detection::OutlierConfig;
    pub use crate::error::{DemandError, Result};
    pub use crate::models::{AverageDemand, DemandForecaster, Forecaster};
}
