//! Static sample data shown by the client
//!
//! Everything here is rebuilt on every launch; changes made in the UI live
//! only in memory for the session.

use chrono::NaiveDate;

use crate::cards::contact::{ContactDetails, DeliveryPreference};
use crate::cards::errors::CardError;
use crate::cards::limits::MonthlyUsage;
use crate::cards::statement::StatementPeriod;
use crate::models::{
    Brand, Card, CardKind, CreditLine, Direction, Transaction, TransactionState,
};

const HOLDER: &str = "PHAM QUOC TUAN";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn cards() -> Result<Vec<Card>, CardError> {
    Ok(vec![
        Card {
            id: "1".to_string(),
            brand: Brand::Visa,
            masked_number: "4532 **** **** 1234".to_string(),
            last_four: "1234".to_string(),
            holder_name: HOLDER.to_string(),
            expiry: "04/2028".to_string(),
            is_active: true,
            linked_account: Some("1234567890".to_string()),
            balance: 15_000_000,
            kind: CardKind::Credit(CreditLine::new(50_000_000, 35_000_000)?),
        },
        Card {
            id: "2".to_string(),
            brand: Brand::Mastercard,
            masked_number: "5412 **** **** 5678".to_string(),
            last_four: "5678".to_string(),
            holder_name: HOLDER.to_string(),
            expiry: "-/-".to_string(),
            is_active: true,
            linked_account: Some("0987654321".to_string()),
            balance: 8_500_000,
            kind: CardKind::Debit,
        },
        Card {
            id: "3".to_string(),
            brand: Brand::Visa,
            masked_number: "4916 **** **** 9012".to_string(),
            last_four: "9012".to_string(),
            holder_name: HOLDER.to_string(),
            expiry: "11/2028".to_string(),
            is_active: true,
            linked_account: Some("1122334455".to_string()),
            balance: 12_000_000,
            kind: CardKind::Debit,
        },
    ])
}

pub fn transactions() -> Vec<Transaction> {
    let tx = |id: &str, day: u32, description: &str, amount: u64, direction, state| Transaction {
        id: id.to_string(),
        date: date(2025, 12, day),
        description: description.to_string(),
        amount,
        direction,
        state,
    };

    vec![
        tx("1", 5, "Payment at ABC Store", 1_250_000, Direction::Debit, TransactionState::Completed),
        tx("2", 4, "ATM Cash Withdrawal", 2_000_000, Direction::Debit, TransactionState::Completed),
        tx("3", 3, "Online Payment", 850_000, Direction::Debit, TransactionState::Completed),
        tx("4", 2, "Transaction Refund", 350_000, Direction::Credit, TransactionState::Completed),
        tx("5", 1, "Bill Payment", 3_200_000, Direction::Debit, TransactionState::Pending),
    ]
}

pub fn statement_period() -> StatementPeriod {
    StatementPeriod {
        from: date(2025, 11, 6),
        to: date(2025, 12, 5),
        due: date(2025, 12, 5),
    }
}

pub fn monthly_usage() -> MonthlyUsage {
    MonthlyUsage {
        atm: 2_500_000,
        pos: 8_750_000,
        online: 3_200_000,
    }
}

pub fn contact_details() -> ContactDetails {
    ContactDetails {
        email: "phamquoctuan@email.com".to_string(),
        phone: "+856 20 12345678".to_string(),
        address: "123 Main Street, Vientiane".to_string(),
        delivery: DeliveryPreference::Email,
    }
}
