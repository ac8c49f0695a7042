//! Partitioning of sale records by product.

use std::collections::BTreeMap;

use crate::core::SaleRecord;

/// Sale records borrowed from the input, keyed by product identifier.
///
/// Records keep their input order within a group. Groups iterate in key
/// order.
pub type ProductGroups<'a> = BTreeMap<&'a str, Vec<&'a SaleRecord>>;

/// Group sale records by product.
///
/// Every record lands in exactly one group, so no group is ever empty and
/// the union of all groups is the input.
pub fn group_by_product(records: &[SaleRecord]) -> ProductGroups<'_> {
    let mut groups = ProductGroups::new();
    for record in records {
        groups.entry(record.product()).or_default().push(record);
    }
    groups
}

/// Quantities of a group, in record order.
pub fn quantities(group: &[&SaleRecord]) -> Vec<i64> {
    group.iter().map(|r| r.quantity()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sale(product: &str, day: u32, quantity: i64) -> SaleRecord {
        SaleRecord::new(product, NaiveDate::from_ymd_opt(2024, 5, day).unwrap(), quantity).unwrap()
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_product(&[]).is_empty());
    }

    #[test]
    fn groups_partition_the_input() {
        let records = vec![
            sale("b", 1, 3),
            sale("a", 1, 1),
            sale("b", 2, 4),
            sale("a", 2, 2),
            sale("c", 1, 9),
        ];
        let groups = group_by_product(&records);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups.values().map(Vec::len).sum::<usize>(), records.len());
        assert_eq!(quantities(&groups["a"]), vec![1, 2]);
        assert_eq!(quantities(&groups["b"]), vec![3, 4]);
        assert_eq!(quantities(&groups["c"]), vec![9]);
    }

    #[test]
    fn duplicate_records_are_kept() {
        let records = vec![sale("a", 1, 5), sale("a", 1, 5)];
        let groups = group_by_product(&records);
        assert_eq!(groups["a"].len(), 2);
    }

    #[test]
    fn groups_iterate_in_key_order() {
        let records = vec![sale("pear", 1, 1), sale("apple", 1, 1), sale("fig", 1, 1)];
        let keys: Vec<_> = group_by_product(&records).into_keys().collect();
        assert_eq!(keys, vec!["apple", "fig", "pear"]);
    }
}
