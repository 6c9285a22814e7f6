//! Card domain error types

use thiserror::Error;

use crate::models::CardStatus;

use super::navigation::Screen;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CardError {
    #[error("Screen '{0}' requires a selected card")]
    CardRequired(Screen),

    #[error("Cannot change card status from {from:?} to {to:?}")]
    TransitionNotAllowed { from: CardStatus, to: CardStatus },

    #[error("No pending status change to confirm")]
    NoPendingChange,

    #[error("Card with id '{0}' not found")]
    CardNotFound(String),

    #[error("Available credit {available_credit} exceeds credit limit {credit_limit}")]
    InvalidCreditLine {
        credit_limit: u64,
        available_credit: u64,
    },
}
