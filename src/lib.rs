//! # Financial Health Analyzer
//!
//! Computes aggregate financial metrics (revenue, expenses, profit, margin,
//! average transaction size, and a qualitative health rating) over an
//! in-memory sequence of dated transaction records.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: currency metrics round to 2 decimal places
//!   via `rust_decimal`, the margin to 4
//! - **Pure metrics**: the analyzer borrows the caller's records and
//!   re-derives every metric on demand, with no caching or mutation
//! - **Exact category matching**: only `"Income"` and `"Expense"` count;
//!   anything else is silently excluded from both sums
//!
//! ## Example
//!
//! ```
//! use financial_health::{HealthAnalyzer, TransactionRecord};
//! use rust_decimal::Decimal;
//!
//! let transactions = vec![
//!     TransactionRecord::new("2024-01-01", "Income", Decimal::from(50)),
//!     TransactionRecord::new("2024-01-02", "Expense", Decimal::from(500)),
//! ];
//! let analyzer = HealthAnalyzer::new(&transactions);
//! assert_eq!(analyzer.total_revenue().to_string(), "1000.00");
//! assert_eq!(analyzer.profit().to_string(), "500.00");
//! ```

pub mod analyzer;
pub mod decimal;
pub mod error;
pub mod report;
pub mod transaction;

pub use analyzer::{FinancialHealth, HealthAnalyzer};
pub use decimal::Money;
pub use error::{FormatError, Result};
pub use report::FinancialReport;
pub use transaction::{parse_lines, parse_lines_lossy, TransactionRecord};
