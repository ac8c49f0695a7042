//! Average-demand model: filter outliers, average, project linearly.

use std::collections::BTreeMap;

use crate::analysis::SalesAnalyzer;
use crate::core::{AverageMap, ForecastMap, SaleRecord};
use crate::detection::{FilterStats, OutlierConfig};
use crate::error::{DemandError, Result};
use crate::models::{DemandForecaster, Forecaster};

/// Forecasts each product's demand as its robust average times the horizon.
///
/// Fitting removes outliers per product and averages the remaining
/// quantities. Nothing else is learned, so refitting on the same records
/// always gives the same forecast.
#[derive(Debug, Clone, Default)]
pub struct AverageDemand {
    analyzer: SalesAnalyzer,
    forecaster: DemandForecaster,
    averages: Option<AverageMap>,
    filter_stats: Option<BTreeMap<String, FilterStats>>,
}

impl AverageDemand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom outlier configuration.
    pub fn with_config(mut self, config: OutlierConfig) -> Self {
        self.analyzer = SalesAnalyzer::with_config(config);
        self
    }

    /// Restrict predictions to a subset of products.
    pub fn with_forecaster(mut self, forecaster: DemandForecaster) -> Self {
        self.forecaster = forecaster;
        self
    }

    /// Per-product record counts from the last fit.
    pub fn filter_stats(&self) -> Option<&BTreeMap<String, FilterStats>> {
        self.filter_stats.as_ref()
    }
}

impl Forecaster for AverageDemand {
    fn fit(&mut self, records: &[SaleRecord]) -> Result<()> {
        if records.is_empty() {
            return Err(DemandError::EmptyData);
        }

        let filtered = self.analyzer.remove_outliers_with_stats(records)?;
        self.averages = Some(self.analyzer.average_sales(&filtered.records));
        self.filter_stats = Some(filtered.stats);

        Ok(())
    }

    fn predict(&self, days: i64) -> Result<ForecastMap> {
        let averages = self.averages.as_ref().ok_or(DemandError::FitRequired)?;
        Ok(self.forecaster.forecast(averages, days))
    }

    fn averages(&self) -> Option<&AverageMap> {
        self.averages.as_ref()
    }

    fn name(&self) -> &str {
        "AverageDemand"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BoxedForecaster;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn sales(product: &str, quantities: &[i64]) -> Vec<SaleRecord> {
        quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| {
                let date = NaiveDate::from_ymd_opt(2024, 6, 1 + i as u32).unwrap();
                SaleRecord::new(product, date, q).unwrap()
            })
            .collect()
    }

    #[test]
    fn fit_then_predict() {
        let mut model = AverageDemand::new();
        assert!(!model.is_fitted());

        model.fit(&sales("p", &[5, 5, 5, 5, 50])).unwrap();
        assert!(model.is_fitted());
        assert_relative_eq!(model.averages().unwrap()["p"], 5.0);

        let forecast = model.predict(10).unwrap();
        assert_relative_eq!(forecast["p"], 50.0);
        assert_eq!(
            model.filter_stats().unwrap()["p"],
            FilterStats { before: 5, after: 4 }
        );
    }

    #[test]
    fn predict_before_fit_fails() {
        let model = AverageDemand::new();
        assert!(matches!(model.predict(5), Err(DemandError::FitRequired)));
    }

    #[test]
    fn fit_on_empty_records_fails() {
        let mut model = AverageDemand::new();
        assert!(matches!(model.fit(&[]), Err(DemandError::EmptyData)));
        assert!(!model.is_fitted());
    }

    #[test]
    fn non_positive_horizon_is_empty_not_error() {
        let mut model = AverageDemand::new();
        model.fit(&sales("p", &[1, 2, 3])).unwrap();
        assert!(model.predict(0).unwrap().is_empty());
    }

    #[test]
    fn subset_forecaster_is_applied() {
        let mut records = sales("a", &[2, 2]);
        records.extend(sales("b", &[3, 3]));
        let mut model =
            AverageDemand::new().with_forecaster(DemandForecaster::with_products(["b"]));
        model.fit(&records).unwrap();

        let forecast = model.predict(4).unwrap();
        assert_eq!(forecast.len(), 1);
        assert_relative_eq!(forecast["b"], 12.0);
    }

    #[test]
    fn custom_config_changes_filtering() {
        let mut model = AverageDemand::new().with_config(OutlierConfig::new(3.0).unwrap());
        model.fit(&sales("p", &[5, 5, 5, 5, 50])).unwrap();
        assert_relative_eq!(model.averages().unwrap()["p"], 14.0);
    }

    #[test]
    fn boxed_model() {
        let mut model: BoxedForecaster = Box::new(AverageDemand::new());
        assert_eq!(model.name(), "AverageDemand");
        model.fit(&sales("p", &[1, 1, 1])).unwrap();
        assert_relative_eq!(model.predict(3).unwrap()["p"], 3.0);
    }

    #[test]
    fn refitting_is_deterministic() {
        let records = sales("p", &[3, 9, 4, 4, 5, 60, 4]);
        let mut model = AverageDemand::new();
        model.fit(&records).unwrap();
        let first = model.predict(30).unwrap();
        model.fit(&records).unwrap();
        assert_eq!(first, model.predict(30).unwrap());
    }
}
