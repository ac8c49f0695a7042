//! Forecaster trait defining the common interface for demand models.

use crate::core::{AverageMap, ForecastMap, SaleRecord};
use crate::error::Result;

/// Common interface for demand models.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Learn per-product demand from historical sale records.
    fn fit(&mut self, records: &[SaleRecord]) -> Result<()>;

    /// Project demand over the next `days` days.
    fn predict(&self, days: i64) -> Result<ForecastMap>;

    /// Per-product daily demand learned by `fit`.
    fn averages(&self) -> Option<&AverageMap>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.averages().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
pub type BoxedForecaster = Box<dyn Forecaster>;
