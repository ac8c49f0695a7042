//! Error types for the demand-forecast library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for demand forecasting operations.
pub type Result<T> = std::result::Result<T, DemandError>;

/// Errors that can occur while filtering, aggregating or projecting demand.
///
/// Only [`DemandError::EmptyData`] comes out of the numeric core. An empty
/// projection (no averages, or a non-positive horizon) is a valid empty
/// result and never shows up here.
#[derive(Error, Debug)]
pub enum DemandError {
    /// A statistic was requested over an empty sample.
    #[error("empty input data")]
    EmptyData,

    /// A sale record failed validation on construction.
    #[error("invalid sale record: {0}")]
    InvalidRecord(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// A sales file could not be opened or created.
    #[error("cannot access {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic I/O failure while reading input or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited reader rejected the input.
    #[error("malformed sales data: {0}")]
    Csv(#[from] csv::Error),

    /// Rows that had the right shape but a field could not be parsed.
    #[error("{} malformed row(s): {}", .0.len(), describe_rows(.0))]
    MalformedRows(Vec<RowError>),

    /// Input ended before a forecast horizon was entered.
    #[error("no forecast horizon entered")]
    NoInput,
}

/// A single unparseable input row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct RowError {
    pub line: u64,
    pub reason: String,
}

fn describe_rows(rows: &[RowError]) -> String {
    rows.iter()
        .map(RowError::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
