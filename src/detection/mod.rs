//! Detection of anomalous sale records.

mod outlier;

pub use outlier::{
    remove_outliers, remove_outliers_with_stats, FilterResult, FilterStats, OutlierBounds,
    OutlierConfig, DEFAULT_MULTIPLIER,
};
