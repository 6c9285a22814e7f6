use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cards::CardError;

/// Card network brand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Visa,
    Mastercard,
    UnionPay,
    Jcb,
}

impl Brand {
    pub fn as_str(&self) -> &str {
        match self {
            Brand::Visa => "VISA",
            Brand::Mastercard => "Mastercard",
            Brand::UnionPay => "UnionPay",
            Brand::Jcb => "JCB",
        }
    }

    /// Brand name as used in product titles ("Visa", "Mastercard", ...)
    pub fn product_name(&self) -> &str {
        match self {
            Brand::Visa => "Visa",
            Brand::Mastercard => "Mastercard",
            Brand::UnionPay => "Unionpay",
            Brand::Jcb => "Jcb",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Credit,
    Debit,
}

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Credit => "Credit",
            Category::Debit => "Debit",
        }
    }
}

/// Credit facility attached to a credit card.
///
/// `available_credit` never exceeds `credit_limit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditLine {
    credit_limit: u64,
    available_credit: u64,
    temporary_limit: Option<u64>,
}

impl CreditLine {
    pub fn new(credit_limit: u64, available_credit: u64) -> Result<Self, CardError> {
        if available_credit > credit_limit {
            return Err(CardError::InvalidCreditLine {
                credit_limit,
                available_credit,
            });
        }
        Ok(Self {
            credit_limit,
            available_credit,
            temporary_limit: None,
        })
    }

    pub fn with_temporary_limit(mut self, limit: u64) -> Self {
        self.temporary_limit = Some(limit);
        self
    }

    pub fn credit_limit(&self) -> u64 {
        self.credit_limit
    }

    pub fn available_credit(&self) -> u64 {
        self.available_credit
    }

    pub fn temporary_limit(&self) -> Option<u64> {
        self.temporary_limit
    }

    /// Outstanding amount: limit minus available credit
    pub fn used_credit(&self) -> u64 {
        self.credit_limit - self.available_credit
    }
}

/// Category-specific part of a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CardKind {
    Credit(CreditLine),
    Debit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub brand: Brand,
    pub masked_number: String,
    pub last_four: String,
    pub holder_name: String,
    pub expiry: String,
    pub is_active: bool,
    pub linked_account: Option<String>,
    pub balance: u64,
    #[serde(flatten)]
    pub kind: CardKind,
}

impl Card {
    pub fn category(&self) -> Category {
        match self.kind {
            CardKind::Credit(_) => Category::Credit,
            CardKind::Debit => Category::Debit,
        }
    }

    pub fn credit_line(&self) -> Option<&CreditLine> {
        match &self.kind {
            CardKind::Credit(line) => Some(line),
            CardKind::Debit => None,
        }
    }

    /// Product title, e.g. "Phongsavanh Visa Credit"
    pub fn product_title(&self) -> String {
        let suffix = match self.kind {
            CardKind::Credit(_) => "Credit",
            CardKind::Debit => "debit",
        };
        format!("Phongsavanh {} {}", self.brand.product_name(), suffix)
    }

    /// Linked account with everything but the last four digits hidden
    pub fn masked_account(&self) -> String {
        match &self.linked_account {
            Some(account) => {
                let tail: String = account
                    .chars()
                    .rev()
                    .take(4)
                    .collect::<Vec<_>>()
                    .into_iter()
                    .rev()
                    .collect();
                format!("••••••{}", tail)
            }
            None => "-".to_string(),
        }
    }
}

/// Plastic status of a card as managed from the status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    Active,
    Locked,
    Blocked,
    Lost,
}

impl CardStatus {
    pub fn label(&self) -> &str {
        match self {
            CardStatus::Active => "Active",
            CardStatus::Locked => "Temporarily Locked",
            CardStatus::Blocked => "Permanently Blocked",
            CardStatus::Lost => "Reported Lost",
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CardStatus::Active => "Card is currently active and functional",
            CardStatus::Locked => "Card is temporarily locked, can be unlocked anytime",
            CardStatus::Blocked => "Card is permanently blocked, cannot be reactivated",
            CardStatus::Lost => "Card has been reported lost, need to request new card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Debit,
    Credit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionState {
    Completed,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub description: String,
    pub amount: u64,
    pub direction: Direction,
    pub state: TransactionState,
}

impl Transaction {
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Amount signed by direction: debits negative, credits positive
    pub fn signed_amount(&self) -> i64 {
        match self.direction {
            Direction::Debit => -(self.amount as i64),
            Direction::Credit => self.amount as i64,
        }
    }
}
