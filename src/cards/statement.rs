//! Mini-statement aggregation

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Direction, Transaction};

/// Statement period and due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatementPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub due: NaiveDate,
}

impl StatementPeriod {
    pub fn display(&self) -> String {
        format!(
            "{} - {}",
            self.from.format("%d/%m/%Y"),
            self.to.format("%d/%m/%Y")
        )
    }

    pub fn display_due(&self) -> String {
        self.due.format("%d/%m/%Y").to_string()
    }

    /// Inclusive on both ends
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    /// Same due date over a different date range
    pub fn with_range(&self, from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to, ..*self }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatementSummary {
    pub total_debit: u64,
    pub total_credit: u64,
    pub transaction_count: usize,
}

impl StatementSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let total = |direction: Direction| -> u64 {
            transactions
                .iter()
                .filter(|t| t.direction == direction)
                .map(|t| t.amount)
                .sum()
        };
        Self {
            total_debit: total(Direction::Debit),
            total_credit: total(Direction::Credit),
            transaction_count: transactions.len(),
        }
    }

    /// Debits minus credits
    pub fn balance_due(&self) -> i64 {
        self.total_debit as i64 - self.total_credit as i64
    }
}
