//! Sale record representing one historical observation.

use chrono::NaiveDate;

use crate::error::{DemandError, Result};

/// A single sale of a product on a calendar date.
///
/// Quantity is a signed integer. Returns and corrections may show up as
/// negative quantities and are carried through the pipeline unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SaleRecord {
    product: String,
    date: NaiveDate,
    quantity: i64,
}

impl SaleRecord {
    /// Create a sale record.
    ///
    /// The product identifier is trimmed and must not be blank.
    ///
    /// # Example
    /// ```
    /// use chrono::NaiveDate;
    /// use demand_forecast::core::SaleRecord;
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let sale = SaleRecord::new(" Widget ", date, 12).unwrap();
    /// assert_eq!(sale.product(), "Widget");
    /// assert!(SaleRecord::new("  ", date, 12).is_err());
    /// ```
    pub fn new(product: impl Into<String>, date: NaiveDate, quantity: i64) -> Result<Self> {
        let product = product.into();
        let trimmed = product.trim();
        if trimmed.is_empty() {
            return Err(DemandError::InvalidRecord(
                "product identifier must not be empty".to_string(),
            ));
        }

        let product = if trimmed.len() == product.len() {
            product
        } else {
            trimmed.to_string()
        };

        Ok(Self {
            product,
            date,
            quantity,
        })
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}
