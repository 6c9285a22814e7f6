//! Card status state machine with confirm-before-apply semantics

use tracing::info;

use crate::models::{Card, CardStatus};

use super::errors::CardError;

/// A status change the user can pick, with its display copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAction {
    pub target: CardStatus,
    pub title: &'static str,
    pub description: &'static str,
}

impl StatusAction {
    fn for_target(target: CardStatus) -> Self {
        let (title, description) = match target {
            CardStatus::Active => ("Unlock Card", "Reactivate card for use"),
            CardStatus::Locked => (
                "Temporarily Lock Card",
                "Temporarily lock, can be unlocked later",
            ),
            CardStatus::Blocked => (
                "Block Permanently",
                "Permanently block card, cannot be unlocked",
            ),
            CardStatus::Lost => ("Report Lost Card", "Report lost and request new card"),
        };
        Self {
            target,
            title,
            description,
        }
    }
}

/// Targets reachable in one step from `status`
pub fn allowed_targets(status: CardStatus) -> &'static [CardStatus] {
    match status {
        CardStatus::Active => &[CardStatus::Locked, CardStatus::Blocked, CardStatus::Lost],
        CardStatus::Locked => &[CardStatus::Active, CardStatus::Blocked, CardStatus::Lost],
        CardStatus::Blocked | CardStatus::Lost => &[],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusManager {
    current: CardStatus,
    pending: Option<CardStatus>,
}

impl StatusManager {
    pub fn new(initial: CardStatus) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    /// Starts from `Active` for active cards, `Locked` otherwise
    pub fn for_card(card: &Card) -> Self {
        Self::new(if card.is_active {
            CardStatus::Active
        } else {
            CardStatus::Locked
        })
    }

    pub fn current(&self) -> CardStatus {
        self.current
    }

    pub fn pending(&self) -> Option<CardStatus> {
        self.pending
    }

    pub fn is_terminal(&self) -> bool {
        allowed_targets(self.current).is_empty()
    }

    pub fn available_actions(&self) -> Vec<StatusAction> {
        allowed_targets(self.current)
            .iter()
            .map(|target| StatusAction::for_target(*target))
            .collect()
    }

    /// Stage `target` for confirmation
    pub fn request(&mut self, target: CardStatus) -> Result<(), CardError> {
        if !allowed_targets(self.current).contains(&target) {
            return Err(CardError::TransitionNotAllowed {
                from: self.current,
                to: target,
            });
        }
        self.pending = Some(target);
        Ok(())
    }

    /// Commit the staged target
    pub fn confirm(&mut self) -> Result<CardStatus, CardError> {
        let target = self.pending.take().ok_or(CardError::NoPendingChange)?;
        info!("Card status changed: {:?} -> {:?}", self.current, target);
        self.current = target;
        Ok(target)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Prompt shown while a change is pending
    pub fn confirmation_prompt(&self) -> Option<String> {
        self.pending.map(|target| {
            format!(
                "Are you sure you want to {} this card?",
                target.label().to_lowercase()
            )
        })
    }
}
