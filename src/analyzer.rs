//! Core financial metrics over a sequence of transaction records.
//!
//! Every metric is a pure function of the borrowed record slice, re-derived
//! on each call. There is no caching and no internal state.

use crate::decimal::Money;
use crate::transaction::{TransactionRecord, CATEGORY_EXPENSE, CATEGORY_INCOME};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Fixed conversion rate from the input currency unit (dollars) to the
/// reporting currency (rands), applied to income amounts only.
pub const REVENUE_CONVERSION_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Lowest profit still classified as [`FinancialHealth::Warning`];
/// anything below is [`FinancialHealth::Critical`].
pub const WARNING_PROFIT_FLOOR: Decimal = Decimal::from_parts(1000, 0, 0, true, 0);

/// Decimal places kept for the profit margin, which is a ratio rather than
/// a currency amount.
pub const MARGIN_SCALE: u32 = 4;

/// Three-tier qualitative classification of profit.
///
/// The tiers are mutually exclusive and cover every real-valued profit:
/// non-negative is `Healthy`, `[-1000, 0)` is `Warning`, below `-1000`
/// is `Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FinancialHealth {
    Healthy,
    Warning,
    Critical,
}

impl fmt::Display for FinancialHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FinancialHealth::Healthy => "Healthy",
            FinancialHealth::Warning => "Warning",
            FinancialHealth::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Computes aggregate metrics over a borrowed sequence of transactions.
///
/// The analyzer holds a shared borrow of the caller's records for its whole
/// lifetime, so the sequence cannot be mutated underneath it. Records with a
/// category other than exactly `"Income"` or `"Expense"` contribute to
/// neither sum; the match is case-sensitive.
pub struct HealthAnalyzer<'a> {
    transactions: &'a [TransactionRecord],
}

impl<'a> HealthAnalyzer<'a> {
    /// Creates an analyzer over the given records.
    pub fn new(transactions: &'a [TransactionRecord]) -> Self {
        HealthAnalyzer { transactions }
    }

    /// Sum of income amounts converted to the reporting currency,
    /// rounded to 2 decimal places. Zero for an empty sequence.
    pub fn total_revenue(&self) -> Money {
        let sum: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.category == CATEGORY_INCOME)
            .map(|t| t.amount * REVENUE_CONVERSION_RATE)
            .sum();
        Money::new(sum)
    }

    /// Sum of expense amounts, rounded to 2 decimal places. Expenses are
    /// already in the reporting currency, so no conversion applies.
    pub fn total_expenses(&self) -> Money {
        let sum: Decimal = self
            .transactions
            .iter()
            .filter(|t| t.category == CATEGORY_EXPENSE)
            .map(|t| t.amount)
            .sum();
        Money::new(sum)
    }

    /// Revenue minus expenses, computed on the already-rounded operands.
    pub fn profit(&self) -> Money {
        self.total_revenue() - self.total_expenses()
    }

    /// Profit as a fraction of revenue, rounded to 4 decimal places.
    ///
    /// Returns exactly 0 when revenue is zero, by policy, rather than
    /// failing on the division.
    pub fn profit_margin(&self) -> Decimal {
        let revenue = self.total_revenue();
        let mut margin = if revenue.is_zero() {
            Decimal::ZERO
        } else {
            (self.profit().amount() / revenue.amount()).round_dp(MARGIN_SCALE)
        };
        margin.rescale(MARGIN_SCALE);
        margin
    }

    /// Profit divided by the number of transactions, rounded to 2 decimal
    /// places. Returns exactly 0 for an empty sequence, by policy.
    ///
    /// Despite the name, this is NOT the mean transaction amount: the
    /// numerator is profit, not the amount sum. Downstream reports depend
    /// on the profit-over-count formula, so it is kept as is.
    pub fn average_transaction_amount(&self) -> Money {
        if self.transactions.is_empty() {
            return Money::ZERO;
        }
        let count = Decimal::from(self.transactions.len());
        Money::new(self.profit().amount() / count)
    }

    /// Classifies profit into one of the three health tiers.
    pub fn financial_health(&self) -> FinancialHealth {
        let profit = self.profit().amount();
        if profit >= Decimal::ZERO {
            FinancialHealth::Healthy
        } else if profit >= WARNING_PROFIT_FLOOR {
            FinancialHealth::Warning
        } else {
            FinancialHealth::Critical
        }
    }
}
