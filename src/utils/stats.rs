//! Statistical primitives over integer quantity samples.

use crate::error::{DemandError, Result};

/// Calculate the median of a sample.
///
/// Odd-sized samples return the middle element, even-sized samples the
/// mean of the two central elements.
///
/// # Errors
/// Returns [`DemandError::EmptyData`] for an empty sample.
///
/// # Example
/// ```
/// use demand_forecast::utils::median;
///
/// assert_eq!(median(&[4, 1, 3, 2]).unwrap(), 2.5);
/// assert_eq!(median(&[5, 1, 3]).unwrap(), 3.0);
/// assert!(median(&[]).is_err());
/// ```
pub fn median(values: &[i64]) -> Result<f64> {
    if values.is_empty() {
        return Err(DemandError::EmptyData);
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] as f64 + sorted[n / 2] as f64) / 2.0)
    } else {
        Ok(sorted[n / 2] as f64)
    }
}

/// Root mean squared deviation of a sample from `center`.
///
/// Population-style: the squared deviations are divided by `n`, not `n - 1`.
/// The center is supplied by the caller; the outlier filter passes the
/// median, not the mean. A single observation has no spread and yields 0.0.
///
/// # Errors
/// Returns [`DemandError::EmptyData`] for an empty sample.
pub fn dispersion(values: &[i64], center: f64) -> Result<f64> {
    match values.len() {
        0 => Err(DemandError::EmptyData),
        1 => Ok(0.0),
        n => {
            let sum_sq: f64 = values.iter().map(|&v| (v as f64 - center).powi(2)).sum();
            Ok((sum_sq / n as f64).sqrt())
        }
    }
}

/// Arithmetic mean of a sample.
///
/// # Errors
/// Returns [`DemandError::EmptyData`] for an empty sample.
pub fn mean(values: &[i64]) -> Result<f64> {
    if values.is_empty() {
        return Err(DemandError::EmptyData);
    }
    let sum: f64 = values.iter().map(|&v| v as f64).sum();
    Ok(sum / values.len() as f64)
}

/// Location and spread of one product's quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStatistics {
    /// Median of the sample.
    pub median: f64,
    /// Dispersion around the median.
    pub dispersion: f64,
}

impl SampleStatistics {
    /// Compute the median and the dispersion around it.
    pub fn from_values(values: &[i64]) -> Result<Self> {
        let median = median(values)?;
        let dispersion = dispersion(values, median)?;
        Ok(Self { median, dispersion })
    }
}
