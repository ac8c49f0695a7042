//! Numeric helpers shared by the analysis stages.

pub mod stats;

pub use stats::{dispersion, mean, median, SampleStatistics};
