//! Error types for transaction ingestion.

use thiserror::Error;

/// Result type alias for parsing operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Errors raised when a transaction line does not match the
/// `date,category,amount` record format.
///
/// Not recoverable locally; surfaced to the caller, who decides whether to
/// skip the line or abort ingestion.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The line did not split into exactly three comma-separated fields
    #[error("expected 3 comma-separated fields, found {found} in {line:?}")]
    FieldCount { line: String, found: usize },

    /// The amount field could not be parsed as a decimal number
    #[error("amount field {value:?} is not numeric: {source}")]
    Amount {
        value: String,
        source: rust_decimal::Error,
    },
}
