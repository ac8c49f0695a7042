//! Delimited-text source of sale records.
//!
//! Each row holds `product;date;quantity`. Rows with a different number of
//! fields are skipped. Rows with the right shape but an unparseable date or
//! quantity fail the read, reported together once the whole input is seen.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::core::SaleRecord;
use crate::error::{DemandError, Result, RowError};

/// Date layouts accepted in the date column, tried in order.
pub const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%d/%m/%Y"];

/// Configuration for reading sale records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Field delimiter.
    pub delimiter: u8,
    /// Whether the first row is a header.
    pub has_headers: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b';',
            has_headers: false,
        }
    }
}

impl ReaderConfig {
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }
}

/// Read sale records from a file.
pub fn read_sales(path: impl AsRef<Path>, config: &ReaderConfig) -> Result<Vec<SaleRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DemandError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_sales_from(file, config)?;
    info!(path = %path.display(), records = records.len(), "loaded sale records");
    Ok(records)
}

/// Read sale records from any reader.
pub fn read_sales_from<R: Read>(reader: R, config: &ReaderConfig) -> Result<Vec<SaleRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(config.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut malformed = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map_or(0, |p| p.line());

        if row.len() != 3 {
            warn!(line, fields = row.len(), "skipping row without three fields");
            continue;
        }

        match parse_row(&row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(line, %reason, "malformed sale row");
                malformed.push(RowError { line, reason });
            }
        }
    }

    if !malformed.is_empty() {
        return Err(DemandError::MalformedRows(malformed));
    }
    Ok(records)
}

fn parse_row(row: &csv::StringRecord) -> std::result::Result<SaleRecord, String> {
    let date = parse_date(&row[1]).ok_or_else(|| format!("invalid date '{}'", &row[1]))?;
    let quantity: i64 = row[2]
        .parse()
        .map_err(|_| format!("invalid quantity '{}'", &row[2]))?;
    SaleRecord::new(&row[0], date, quantity).map_err(|e| e.to_string())
}

/// Parse a date in any of the [`DATE_FORMATS`].
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}
