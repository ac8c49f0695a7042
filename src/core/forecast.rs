//! Per-product result maps produced by the pipeline.
//!
//! Both maps are keyed by product identifier and ordered by key, so
//! iteration (and therefore any rendered report) is stable across runs.

use std::collections::BTreeMap;

/// Mean observed quantity per product after outlier filtering.
pub type AverageMap = BTreeMap<String, f64>;

/// Projected demand per product over a forecast horizon.
pub type ForecastMap = BTreeMap<String, f64>;

/// Sum of all projected quantities. An empty forecast totals `+0.0`.
pub fn total_demand(forecast: &ForecastMap) -> f64 {
    forecast.values().fold(0.0, |acc, v| acc + v)
}
