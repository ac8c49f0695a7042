//! Sales analyzer bundling outlier filtering and averaging.

use crate::analysis::aggregate::average_sales;
use crate::core::{AverageMap, SaleRecord};
use crate::detection::{remove_outliers, remove_outliers_with_stats, FilterResult, OutlierConfig};
use crate::error::Result;

/// Stateless analyzer over sale records.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use demand_forecast::analysis::SalesAnalyzer;
/// use demand_forecast::core::SaleRecord;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let records: Vec<_> = [4, 6, 5, 5, 5, 90]
///     .iter()
///     .map(|&q| SaleRecord::new("Widget", date, q).unwrap())
///     .collect();
///
/// let analyzer = SalesAnalyzer::new();
/// let averages = analyzer.filtered_averages(&records).unwrap();
/// assert_eq!(averages["Widget"], 5.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesAnalyzer {
    config: OutlierConfig,
}

impl SalesAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutlierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutlierConfig {
        &self.config
    }

    /// Drop anomalous records per product.
    pub fn remove_outliers(&self, records: &[SaleRecord]) -> Result<Vec<SaleRecord>> {
        remove_outliers(records, &self.config)
    }

    /// Drop anomalous records and report per-product counts.
    pub fn remove_outliers_with_stats(&self, records: &[SaleRecord]) -> Result<FilterResult> {
        remove_outliers_with_stats(records, &self.config)
    }

    /// Mean quantity per product, without filtering.
    pub fn average_sales(&self, records: &[SaleRecord]) -> AverageMap {
        average_sales(records)
    }

    /// Filter outliers, then average what is left.
    pub fn filtered_averages(&self, records: &[SaleRecord]) -> Result<AverageMap> {
        let filtered = self.remove_outliers(records)?;
        Ok(average_sales(&filtered))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn sales(product: &str, quantities: &[i64]) -> Vec<SaleRecord> {
        let date = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
        quantities
            .iter()
            .map(|&q| SaleRecord::new(product, date, q).unwrap())
            .collect()
    }

    #[test]
    fn filtered_averages_ignore_spikes() {
        let analyzer = SalesAnalyzer::new();
        let averages = analyzer
            .filtered_averages(&sales("p", &[5, 5, 5, 5, 50]))
            .unwrap();
        assert_relative_eq!(averages["p"], 5.0);
    }

    #[test]
    fn raw_averages_include_spikes() {
        let analyzer = SalesAnalyzer::new();
        let averages = analyzer.average_sales(&sales("p", &[5, 5, 5, 5, 50]));
        assert_relative_eq!(averages["p"], 14.0);
    }

    #[test]
    fn wider_multiplier_keeps_more_records() {
        let records = sales("p", &[5, 5, 5, 5, 50]);
        let wide = SalesAnalyzer::with_config(OutlierConfig::new(3.0).unwrap());
        assert_eq!(wide.remove_outliers(&records).unwrap().len(), 5);
        assert_relative_eq!(wide.config().multiplier(), 3.0);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let analyzer = SalesAnalyzer::new();
        assert!(analyzer.filtered_averages(&[]).unwrap().is_empty());
        assert_eq!(analyzer.remove_outliers_with_stats(&[]).unwrap().removed_count(), 0);
    }
}
