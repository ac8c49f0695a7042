//! Per-product outlier filtering.
//!
//! Each product's quantities are bounded by `median ± multiplier · dispersion`,
//! where the dispersion is measured around the median. Records outside the
//! inclusive bounds are dropped. Products are filtered independently, so an
//! anomaly in one product never moves another product's bounds.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::analysis::grouping::{group_by_product, quantities};
use crate::core::SaleRecord;
use crate::error::{DemandError, Result};
use crate::utils::SampleStatistics;

/// Multiplier applied to the dispersion when no other is configured.
pub const DEFAULT_MULTIPLIER: f64 = 2.0;

/// Configuration for outlier filtering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierConfig {
    multiplier: f64,
}

impl Default for OutlierConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_MULTIPLIER,
        }
    }
}

impl OutlierConfig {
    /// Use a custom dispersion multiplier (default 2.0).
    ///
    /// # Errors
    /// Returns [`DemandError::InvalidParameter`] if the multiplier is
    /// negative or not finite.
    pub fn new(multiplier: f64) -> Result<Self> {
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(DemandError::InvalidParameter(format!(
                "outlier multiplier must be a finite non-negative number, got {multiplier}"
            )));
        }
        Ok(Self { multiplier })
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Bounds implied by a sample's statistics.
    pub fn bounds(&self, stats: &SampleStatistics) -> OutlierBounds {
        let half_width = self.multiplier * stats.dispersion;
        OutlierBounds {
            lower: stats.median - half_width,
            upper: stats.median + half_width,
        }
    }
}

/// Inclusive interval of acceptable quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlierBounds {
    pub lower: f64,
    pub upper: f64,
}

impl OutlierBounds {
    /// Check whether a quantity lies within the bounds (inclusive).
    pub fn contains(&self, quantity: i64) -> bool {
        let q = quantity as f64;
        q >= self.lower && q <= self.upper
    }
}

/// Record counts for one product before and after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    pub before: usize,
    pub after: usize,
}

impl FilterStats {
    /// Number of records dropped as outliers.
    pub fn removed(&self) -> usize {
        self.before - self.after
    }
}

/// Result of a filter pass that also reports per-product counts.
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    /// Records that survived filtering.
    pub records: Vec<SaleRecord>,
    /// Counts per product, including products that lost every record.
    pub stats: BTreeMap<String, FilterStats>,
}

impl FilterResult {
    /// Total number of records dropped across all products.
    pub fn removed_count(&self) -> usize {
        self.stats.values().map(FilterStats::removed).sum()
    }
}

/// Drop statistically anomalous records from every product group.
///
/// Output is grouped by product (in key order); records keep their input
/// order within a product. Empty input yields an empty result.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use demand_forecast::core::SaleRecord;
/// use demand_forecast::detection::{remove_outliers, OutlierConfig};
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let records: Vec<_> = [5, 5, 5, 5, 50]
///     .iter()
///     .map(|&q| SaleRecord::new("Widget", date, q).unwrap())
///     .collect();
///
/// let kept = remove_outliers(&records, &OutlierConfig::default()).unwrap();
/// assert_eq!(kept.len(), 4);
/// assert!(kept.iter().all(|r| r.quantity() == 5));
/// ```
pub fn remove_outliers(records: &[SaleRecord], config: &OutlierConfig) -> Result<Vec<SaleRecord>> {
    Ok(filter(records, config)?.records)
}

/// Like [`remove_outliers`], also reporting record counts per product.
///
/// The counts are observational; the kept records are identical to what
/// [`remove_outliers`] returns.
pub fn remove_outliers_with_stats(
    records: &[SaleRecord],
    config: &OutlierConfig,
) -> Result<FilterResult> {
    filter(records, config)
}

fn filter(records: &[SaleRecord], config: &OutlierConfig) -> Result<FilterResult> {
    if records.is_empty() {
        return Ok(FilterResult::default());
    }

    let groups = group_by_product(records);
    let mut result = FilterResult {
        records: Vec::with_capacity(records.len()),
        stats: BTreeMap::new(),
    };

    for (product, group) in &groups {
        let stats = SampleStatistics::from_values(&quantities(group))?;
        let bounds = config.bounds(&stats);

        let before = result.records.len();
        result.records.extend(
            group
                .iter()
                .filter(|r| bounds.contains(r.quantity()))
                .map(|&r| r.clone()),
        );
        let counts = FilterStats {
            before: group.len(),
            after: result.records.len() - before,
        };

        debug!(
            product,
            median = stats.median,
            dispersion = stats.dispersion,
            lower = bounds.lower,
            upper = bounds.upper,
            kept = counts.after,
            removed = counts.removed(),
            "filtered product group"
        );
        result.stats.insert(product.to_string(), counts);
    }

    info!(
        products = groups.len(),
        input = records.len(),
        kept = result.records.len(),
        "outlier filter pass complete"
    );
    Ok(result)
}
