//! Financial Health Analyzer CLI
//!
//! Computes the headline metrics over the built-in reference transactions
//! and prints the report to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use financial_health::{FinancialReport, HealthAnalyzer, TransactionRecord};
use rust_decimal::Decimal;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    // Reference data; the expected report is pinned by the integration tests.
    let transactions = vec![
        TransactionRecord::new("2024-01-01", "Income", Decimal::from(50)),
        TransactionRecord::new("2024-01-02", "Expense", Decimal::from(500)),
        TransactionRecord::new("2024-01-03", "Expense", Decimal::from(300)),
        TransactionRecord::new("2024-01-04", "Income", Decimal::from(75)),
    ];

    let analyzer = HealthAnalyzer::new(&transactions);
    let report = FinancialReport::from_analyzer(&analyzer);

    let stdout = io::stdout();
    let handle = stdout.lock();
    report.write_report(handle)
}
