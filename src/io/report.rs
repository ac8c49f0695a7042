//! Human-readable forecast report.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::info;

use crate::core::ForecastMap;
use crate::detection::FilterStats;
use crate::error::{DemandError, Result};

const TITLE: &str = "Demand forecast by product:";
const RULE: &str = "--------------------------";

/// Round to a fixed number of decimal places for display.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Write one `"<product>: <quantity> units"` line per product.
///
/// Quantities are rounded to two decimal places; trailing zeros are dropped.
pub fn write_forecast_lines<W: Write>(writer: &mut W, forecast: &ForecastMap) -> Result<()> {
    for (product, value) in forecast {
        writeln!(writer, "{}: {} units", product, round_to(*value, 2))?;
    }
    Ok(())
}

/// Write one `"<product>: <before> -> <after> records"` line per product.
pub fn write_filter_stats<W: Write>(
    writer: &mut W,
    stats: &BTreeMap<String, FilterStats>,
) -> Result<()> {
    for (product, counts) in stats {
        writeln!(
            writer,
            "{}: {} -> {} records",
            product, counts.before, counts.after
        )?;
    }
    Ok(())
}

/// Write the full report: title, forecast lines and creation time.
pub fn write_report<W: Write>(
    writer: &mut W,
    forecast: &ForecastMap,
    generated_at: NaiveDateTime,
) -> Result<()> {
    writeln!(writer, "{TITLE}")?;
    writeln!(writer, "{RULE}")?;
    write_forecast_lines(writer, forecast)?;
    writeln!(writer, "{RULE}")?;
    writeln!(writer, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    Ok(())
}

/// Write the report to a file, replacing any existing content.
pub fn save_report(
    path: impl AsRef<Path>,
    forecast: &ForecastMap,
    generated_at: NaiveDateTime,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| DemandError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, forecast, generated_at)?;
    writer.flush()?;
    info!(path = %path.display(), products = forecast.len(), "saved forecast report");
    Ok(())
}
