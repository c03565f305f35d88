//! Transaction record model and line-format parsing.

use crate::error::{FormatError, Result};
use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Category label recognized as revenue by the analyzer.
pub const CATEGORY_INCOME: &str = "Income";

/// Category label recognized as an expense by the analyzer.
pub const CATEGORY_EXPENSE: &str = "Expense";

/// An immutable dated transaction.
///
/// The date is carried as an opaque string in its source form ("YYYY-MM-DD")
/// and never interpreted as a calendar date. The category is an open string
/// set; only exact [`CATEGORY_INCOME`] and [`CATEGORY_EXPENSE`] matches are
/// recognized by the analyzer, and anything else is silently excluded from
/// the sums. The amount keeps whatever scale the source gave it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Calendar date in "YYYY-MM-DD" source form, carried as data
    pub date: String,

    /// Category label, e.g. "Income" or "Expense"
    pub category: String,

    /// Transaction amount in the input currency unit
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
}

impl TransactionRecord {
    /// Creates a record directly from its three fields. No validation.
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: Decimal) -> Self {
        TransactionRecord {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }

    /// Parses a record from a `date,category,amount` line.
    ///
    /// Leading and trailing whitespace on the line is stripped before
    /// splitting; the individual date and category fields are NOT trimmed,
    /// so `"2024-02-01, Income, 12.5"` yields the category `" Income"`.
    /// The amount field alone tolerates surrounding whitespace.
    ///
    /// Fails with a [`FormatError`] if the line does not contain exactly
    /// three comma-separated fields or the amount is not numeric. Embedded
    /// commas and quoting are not supported. The category is not checked
    /// against a known set.
    pub fn from_line(line: &str) -> Result<Self> {
        let trimmed = line.trim();
        let fields: Vec<&str> = trimmed.split(',').collect();
        if fields.len() != 3 {
            return Err(FormatError::FieldCount {
                line: trimmed.to_string(),
                found: fields.len(),
            });
        }

        let amount = Decimal::from_str(fields[2].trim()).map_err(|source| FormatError::Amount {
            value: fields[2].to_string(),
            source,
        })?;

        Ok(TransactionRecord::new(fields[0], fields[1], amount))
    }
}

/// Parses every non-blank line of `input`, aborting on the first malformed one.
///
/// Blank lines are ignored. The error carries the offending line, so the
/// caller can report it or fall back to [`parse_lines_lossy`].
pub fn parse_lines(input: &str) -> Result<Vec<TransactionRecord>> {
    let mut records = Vec::new();

    for line in input.lines() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(TransactionRecord::from_line(line)?);
    }

    debug!("Parsed {} transaction records", records.len());
    Ok(records)
}

/// Parses every non-blank line of `input`, skipping malformed lines.
///
/// Malformed lines are logged at warn level and dropped; everything that
/// parses is kept in input order.
pub fn parse_lines_lossy(input: &str) -> Vec<TransactionRecord> {
    let mut records = Vec::new();

    for (line_idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match TransactionRecord::from_line(line) {
            Ok(record) => records.push(record),
            Err(e) => warn!("Line {}: {}", line_idx + 1, e),
        }
    }

    records
}
