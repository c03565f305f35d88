//! Report presentation for the computed metrics.
//!
//! Prints the headline metrics as labeled lines. The numeric values follow
//! the analyzer's rounding rules; the labels and currency symbol are purely
//! a presentation concern.

use crate::analyzer::{FinancialHealth, HealthAnalyzer};
use crate::decimal::Money;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// Symbol of the reporting currency (South African rand).
pub const CURRENCY_SYMBOL: &str = "R";

/// A snapshot of the headline metrics at the time it was built.
///
/// Unlike the analyzer, which re-derives each metric per call, the report
/// captures the values once so the printed lines are mutually consistent.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialReport {
    /// Revenue minus expenses, in the reporting currency
    pub profit: Money,

    /// Profit as a fraction of revenue, 4 decimal places
    #[serde(with = "rust_decimal::serde::str")]
    pub profit_margin: Decimal,

    /// Profit divided by the transaction count, in the reporting currency
    pub average_transaction_amount: Money,

    /// Three-tier health classification
    pub financial_health: FinancialHealth,
}

impl FinancialReport {
    /// Builds a report from the analyzer's current metrics.
    pub fn from_analyzer(analyzer: &HealthAnalyzer<'_>) -> Self {
        let report = FinancialReport {
            profit: analyzer.profit(),
            profit_margin: analyzer.profit_margin(),
            average_transaction_amount: analyzer.average_transaction_amount(),
            financial_health: analyzer.financial_health(),
        };
        debug!(
            "Built report: profit {} {}, health {}",
            CURRENCY_SYMBOL, report.profit, report.financial_health
        );
        report
    }

    /// Writes the labeled report lines to the given writer.
    pub fn write_report<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }
}

impl fmt::Display for FinancialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Profit: {}{}", CURRENCY_SYMBOL, self.profit)?;
        writeln!(f, "Profit margin: {:.4}", self.profit_margin)?;
        writeln!(
            f,
            "Average transaction amount: {}{}",
            CURRENCY_SYMBOL, self.average_transaction_amount
        )?;
        writeln!(f, "Financial health: {}", self.financial_health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionRecord;
    use rust_decimal::Decimal;

    fn healthy_transactions() -> Vec<TransactionRecord> {
        vec![
            TransactionRecord::new("2024-01-01", "Income", Decimal::from(50)),
            TransactionRecord::new("2024-01-02", "Expense", Decimal::from(500)),
            TransactionRecord::new("2024-01-03", "Expense", Decimal::from(300)),
            TransactionRecord::new("2024-01-04", "Income", Decimal::from(75)),
        ]
    }

    #[test]
    fn test_report_lines() {
        let transactions = healthy_transactions();
        let analyzer = HealthAnalyzer::new(&transactions);
        let report = FinancialReport::from_analyzer(&analyzer);

        let mut output = Vec::new();
        report.write_report(&mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert_eq!(
            text,
            "Profit: R1700.00\n\
             Profit margin: 0.6800\n\
             Average transaction amount: R425.00\n\
             Financial health: Healthy\n"
        );
    }

    #[test]
    fn test_report_serializes_to_json() {
        let transactions = healthy_transactions();
        let analyzer = HealthAnalyzer::new(&transactions);
        let report = FinancialReport::from_analyzer(&analyzer);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"profit\":\"1700.00\""));
        assert!(json.contains("\"profit_margin\":\"0.6800\""));
        assert!(json.contains("\"average_transaction_amount\":\"425.00\""));
        assert!(json.contains("\"financial_health\":\"Healthy\""));
    }

    #[test]
    fn test_report_for_empty_sequence() {
        let transactions: Vec<TransactionRecord> = Vec::new();
        let analyzer = HealthAnalyzer::new(&transactions);
        let report = FinancialReport::from_analyzer(&analyzer);

        assert_eq!(report.to_string().lines().next(), Some("Profit: R0.00"));
        assert!(report.to_string().contains("Profit margin: 0.0000"));
        assert!(report.to_string().contains("Financial health: Healthy"));
    }
}
