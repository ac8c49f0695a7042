//! Grouping, filtering and averaging of historical sales.

pub mod aggregate;
mod analyzer;
pub mod grouping;

pub use aggregate::{average_groups, average_sales};
pub use analyzer::SalesAnalyzer;
pub use grouping::{group_by_product, quantities, ProductGroups};
