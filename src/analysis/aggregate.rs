//! Per-product averaging of sale quantities.

use tracing::warn;

use crate::analysis::grouping::{group_by_product, quantities, ProductGroups};
use crate::core::{AverageMap, SaleRecord};
use crate::utils::mean;

/// Mean quantity per product.
pub fn average_sales(records: &[SaleRecord]) -> AverageMap {
    average_groups(&group_by_product(records))
}

/// Mean quantity per group.
///
/// Groups built by [`group_by_product`] are never empty. A hand-built empty
/// group is skipped rather than divided by zero.
pub fn average_groups(groups: &ProductGroups<'_>) -> AverageMap {
    groups
        .iter()
        .filter_map(|(&product, group)| match group_mean(group) {
            Some(avg) => Some((product.to_string(), avg)),
            None => {
                warn!(product, "skipping product without sale records");
                None
            }
        })
        .collect()
}

fn group_mean(group: &[&SaleRecord]) -> Option<f64> {
    mean(&quantities(group)).ok()
}
