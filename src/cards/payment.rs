//! Derived payment values for a card

use serde::Serialize;

use crate::models::{Card, CardKind, CreditLine};

/// Minimum payment rate, in percent of the used credit
pub const MINIMUM_PAYMENT_PERCENT: u64 = 5;

/// round(used × 5%), half rounded up
pub fn minimum_payment(used_credit: u64) -> u64 {
    (used_credit * MINIMUM_PAYMENT_PERCENT + 50) / 100
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentSummary {
    pub used_credit: u64,
    pub minimum_payment: u64,
    pub statement_balance: u64,
    pub total_outstanding: u64,
    /// Payments already posted against the current statement
    pub statement_paid: u64,
    pub source_balance: u64,
}

impl PaymentSummary {
    pub fn for_credit_line(line: &CreditLine, source_balance: u64) -> Self {
        let used = line.used_credit();
        Self {
            used_credit: used,
            minimum_payment: minimum_payment(used),
            statement_balance: used,
            total_outstanding: used,
            statement_paid: 0,
            source_balance,
        }
    }

    /// Debit cards carry no debt, so every figure but the balance is zero
    pub fn for_card(card: &Card) -> Self {
        match &card.kind {
            CardKind::Credit(line) => Self::for_credit_line(line, card.balance),
            CardKind::Debit => Self {
                used_credit: 0,
                minimum_payment: 0,
                statement_balance: 0,
                total_outstanding: 0,
                statement_paid: 0,
                source_balance: card.balance,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn test_minimum_payment_for_mock_credit_card() {
        let card = mock_data::cards().unwrap().remove(0);
        let summary = PaymentSummary::for_card(&card);
        assert_eq!(summary.used_credit, 15_000_000);
        assert_eq!(summary.minimum_payment, 750_000);
        assert_eq!(summary.statement_balance, 15_000_000);
        assert_eq!(summary.source_balance, 15_000_000);
        assert_eq!(summary.statement_paid, 0);
    }

    #[test]
    fn test_minimum_payment_rounds_half_up() {
        assert_eq!(minimum_payment(10), 1); // 0.5
        assert_eq!(minimum_payment(9), 0); // 0.45
        assert_eq!(minimum_payment(0), 0);
    }

    #[test]
    fn test_debit_card_has_zero_debt() {
        let card = mock_data::cards().unwrap().remove(1);
        let summary = PaymentSummary::for_card(&card);
        assert_eq!(summary.minimum_payment, 0);
        assert_eq!(summary.total_outstanding, 0);
        assert_eq!(summary.source_balance, 8_500_000);
    }
}
