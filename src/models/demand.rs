//! Linear projection of per-product averages over a horizon.

use std::collections::BTreeSet;

use tracing::debug;

use crate::core::{AverageMap, ForecastMap};

/// Scale every average by `days`.
///
/// An empty map or a non-positive horizon means there is nothing to project
/// and yields an empty map. Values are not rounded.
///
/// # Example
/// ```
/// use demand_forecast::core::AverageMap;
/// use demand_forecast::models::forecast_demand;
///
/// let mut averages = AverageMap::new();
/// averages.insert("Widget".to_string(), 5.0);
///
/// assert_eq!(forecast_demand(&averages, 10)["Widget"], 50.0);
/// assert!(forecast_demand(&averages, 0).is_empty());
/// ```
pub fn forecast_demand(averages: &AverageMap, days: i64) -> ForecastMap {
    DemandForecaster::new().forecast(averages, days)
}

/// Projects per-product averages, optionally for a subset of products.
#[derive(Debug, Clone, Default)]
pub struct DemandForecaster {
    products: Option<BTreeSet<String>>,
}

impl DemandForecaster {
    /// Forecast every product present in the averages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forecast only the given products.
    ///
    /// Identifiers without an average are ignored.
    pub fn with_products<I, S>(products: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            products: Some(products.into_iter().map(Into::into).collect()),
        }
    }

    /// Product subset, if one was requested.
    pub fn products(&self) -> Option<&BTreeSet<String>> {
        self.products.as_ref()
    }

    /// Project each selected average linearly over `days`.
    pub fn forecast(&self, averages: &AverageMap, days: i64) -> ForecastMap {
        if averages.is_empty() || days <= 0 {
            debug!(
                products = averages.len(),
                days, "nothing to project, returning empty forecast"
            );
            return ForecastMap::new();
        }

        let horizon = days as f64;
        averages
            .iter()
            .filter(|(product, _)| self.selects(product))
            .map(|(product, &avg)| (product.clone(), avg * horizon))
            .collect()
    }

    fn selects(&self, product: &str) -> bool {
        self.products
            .as_ref()
            .map_or(true, |subset| subset.contains(product))
    }
}
