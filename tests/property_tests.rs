//! Property-based tests for the filter/average/project pipeline.
//!
//! These tests verify invariants that should hold for all record sets,
//! using randomly generated products and quantities.

use chrono::{Duration, NaiveDate};
use demand_forecast::analysis::{average_sales, group_by_product};
use demand_forecast::core::SaleRecord;
use demand_forecast::detection::{remove_outliers, remove_outliers_with_stats, OutlierConfig};
use demand_forecast::models::{forecast_demand, AverageDemand, Forecaster};
use demand_forecast::utils::{dispersion, median};
use proptest::prelude::*;

const PRODUCTS: &[&str] = &["apples", "bread", "cheese", "dates"];

/// Strategy for generating sale records over a handful of products.
fn records_strategy(max_len: usize) -> impl Strategy<Value = Vec<SaleRecord>> {
    prop::collection::vec((0..PRODUCTS.len(), -50i64..500, 0i64..365), 0..max_len).prop_map(
        |rows| {
            let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            rows.into_iter()
                .map(|(p, q, d)| SaleRecord::new(PRODUCTS[p], base + Duration::days(d), q).unwrap())
                .collect()
        },
    )
}

fn sorted(mut records: Vec<SaleRecord>) -> Vec<SaleRecord> {
    records.sort_by(|a, b| {
        (a.product(), a.date(), a.quantity()).cmp(&(b.product(), b.date(), b.quantity()))
    });
    records
}

// =============================================================================
// Property: grouping partitions the input exactly
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn grouping_preserves_every_record(records in records_strategy(60)) {
        let groups = group_by_product(&records);
        let regrouped: Vec<SaleRecord> = groups
            .iter()
            .flat_map(|(product, group)| {
                group.iter().map(move |r| {
                    assert_eq!(r.product(), *product);
                    (*r).clone()
                })
            })
            .collect();

        prop_assert!(groups.values().all(|g| !g.is_empty()));
        prop_assert_eq!(sorted(regrouped), sorted(records));
    }

    #[test]
    fn filtering_keeps_values_equal_to_the_median(
        quantities in prop::collection::vec(-1000i64..1000, 1..40)
    ) {
        let m = median(&quantities).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records: Vec<_> = quantities
            .iter()
            .map(|&q| SaleRecord::new("p", date, q).unwrap())
            .collect();

        let kept = remove_outliers(&records, &OutlierConfig::default()).unwrap();
        let at_median_before = quantities.iter().filter(|&&q| q as f64 == m).count();
        let at_median_after = kept.iter().filter(|r| r.quantity() as f64 == m).count();
        prop_assert_eq!(at_median_before, at_median_after);
    }

    #[test]
    fn filtered_records_are_a_subset(records in records_strategy(60)) {
        let result = remove_outliers_with_stats(&records, &OutlierConfig::default()).unwrap();
        prop_assert!(result.records.iter().all(|r| records.contains(r)));
        prop_assert_eq!(
            result.stats.values().map(|s| s.before).sum::<usize>(),
            records.len()
        );
        prop_assert_eq!(
            result.stats.values().map(|s| s.after).sum::<usize>(),
            result.records.len()
        );
    }

    #[test]
    fn stats_variant_never_changes_the_result(records in records_strategy(60)) {
        let config = OutlierConfig::default();
        let plain = remove_outliers(&records, &config).unwrap();
        let with_stats = remove_outliers_with_stats(&records, &config).unwrap();
        prop_assert_eq!(plain, with_stats.records);
    }

    #[test]
    fn dispersion_is_non_negative(
        quantities in prop::collection::vec(-1000i64..1000, 1..40)
    ) {
        let m = median(&quantities).unwrap();
        prop_assert!(dispersion(&quantities, m).unwrap() >= 0.0);
    }

    #[test]
    fn forecast_is_average_times_days(
        records in records_strategy(60),
        days in 1i64..365
    ) {
        let averages = average_sales(&records);
        let forecast = forecast_demand(&averages, days);
        prop_assert_eq!(forecast.len(), averages.len());
        for (product, avg) in &averages {
            prop_assert!((forecast[product] - avg * days as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn pipeline_is_deterministic(records in records_strategy(60), days in 1i64..90) {
        prop_assume!(!records.is_empty());
        let mut first = AverageDemand::new();
        first.fit(&records).unwrap();
        let mut second = AverageDemand::new();
        second.fit(&records).unwrap();
        prop_assert_eq!(first.predict(days).unwrap(), second.predict(days).unwrap());
    }
}
