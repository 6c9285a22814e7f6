//! Card collection grouped by category

use crate::models::{Card, Category};

use super::errors::CardError;

#[derive(Debug, Clone)]
pub struct CardCatalog {
    cards: Vec<Card>,
}

impl CardCatalog {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn all(&self) -> &[Card] {
        &self.cards
    }

    pub fn by_category(&self, category: Category) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|card| card.category() == category)
            .collect()
    }

    pub fn credit_cards(&self) -> Vec<&Card> {
        self.by_category(Category::Credit)
    }

    pub fn debit_cards(&self) -> Vec<&Card> {
        self.by_category(Category::Debit)
    }

    /// Display order: credit group first, then debit
    pub fn ordered(&self) -> Vec<&Card> {
        let mut ordered = self.credit_cards();
        ordered.extend(self.debit_cards());
        ordered
    }

    pub fn find(&self, id: &str) -> Result<&Card, CardError> {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .ok_or_else(|| CardError::CardNotFound(id.to_string()))
    }
}
