//! Screen navigation state
//!
//! Navigation is an immutable value: `navigate` and `back` return the next
//! state instead of mutating in place, so the app only ever swaps states.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Card;

use super::errors::CardError;

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    List,
    Detail,
    Payment,
    Statement,
    Status,
    UpdateInfo,
    ChangePin,
    Limits,
}

impl Screen {
    pub fn as_str(&self) -> &str {
        match self {
            Screen::List => "Card List",
            Screen::Detail => "Card Services",
            Screen::Payment => "Statement Payment",
            Screen::Statement => "Card Statement",
            Screen::Status => "Card Status Management",
            Screen::UpdateInfo => "Update Card Information",
            Screen::ChangePin => "Change PIN",
            Screen::Limits => "Transaction Limits",
        }
    }

    /// Every screen except the card list renders a selected card
    pub fn requires_card(&self) -> bool {
        !matches!(self, Screen::List)
    }

    /// Fixed back table
    pub fn parent(&self) -> Screen {
        match self {
            Screen::List | Screen::Detail => Screen::List,
            Screen::Payment
            | Screen::Statement
            | Screen::Status
            | Screen::UpdateInfo
            | Screen::ChangePin
            | Screen::Limits => Screen::Detail,
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    screen: Screen,
    card: Option<Card>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            screen: Screen::List,
            card: None,
        }
    }
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn card(&self) -> Option<&Card> {
        self.card.as_ref()
    }

    /// Move to `screen`; a supplied card becomes the active card.
    pub fn navigate(&self, screen: Screen, card: Option<Card>) -> Result<Self, CardError> {
        let card = card.or_else(|| self.card.clone());
        if screen.requires_card() && card.is_none() {
            return Err(CardError::CardRequired(screen));
        }
        Ok(Self { screen, card })
    }

    pub fn back(&self) -> Self {
        Self {
            screen: self.screen.parent(),
            card: self.card.clone(),
        }
    }
}
