//! Unified error types for `InventoryBuddy`.
//!
//! Validation failures and collaborator failures share one enum so that the
//! session layer can turn any of them into a user-facing notice.

use thiserror::Error;

/// All errors that can occur in the tracker.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// One or more required form fields were left empty
    #[error("Please fill in all fields (missing: {})", .missing.join(", "))]
    IncompleteFields {
        /// Names of the empty fields, in form order
        missing: Vec<&'static str>,
    },

    /// A numeric form field did not contain a valid number
    #[error("Invalid {field}: '{input}' is not a valid number")]
    InvalidNumber {
        /// Name of the offending field
        field: &'static str,
        /// The raw text that failed to parse
        input: String,
    },

    /// A numeric form field contained a negative value
    #[error("Invalid {field}: {value} cannot be negative")]
    NegativeValue {
        /// Name of the offending field
        field: &'static str,
        /// The raw text of the negative value
        value: String,
    },

    /// An amount times the quantity does not fit in a `Decimal`
    #[error("Invalid {field}: {field} times quantity is too large to track")]
    AmountTooLarge {
        /// Name of the offending field
        field: &'static str,
    },

    /// Adding or updating the product would push a catalog total out of range
    #[error("Catalog totals would exceed the largest trackable amount")]
    TotalsOutOfRange,

    /// A known product carried a price that cannot be represented
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// No product with the given identifier exists in the catalog
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The identifier that was looked up
        id: String,
    },

    /// No product is displayed at the given table row
    #[error("No product at row {row}")]
    RowNotFound {
        /// The 1-based row number that was requested
        row: usize,
    },

    /// Known-product lookup failed at the database layer
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Spreadsheet generation failed
    #[error("Export error: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Terminal or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_fields_lists_missing_names() {
        let err = Error::IncompleteFields {
            missing: vec!["price", "quantity"],
        };
        assert_eq!(
            err.to_string(),
            "Please fill in all fields (missing: price, quantity)"
        );
    }

    #[test]
    fn test_invalid_number_message() {
        let err = Error::InvalidNumber {
            field: "cost",
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid cost: 'abc' is not a valid number");
    }

    #[test]
    fn test_amount_too_large_message() {
        let err = Error::AmountTooLarge { field: "price" };
        assert_eq!(
            err.to_string(),
            "Invalid price: price times quantity is too large to track"
        );
    }
}
