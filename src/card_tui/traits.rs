//! Core traits for the card TUI architecture
//!
//! Screens are leaves: they draw themselves, turn key presses into
//! `ScreenAction`s and leave navigation to the app.

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::cards::{Screen as ScreenType, StatementPeriod};
use crate::models::Card;

/// Success notice raised by a form submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }
}

/// Actions that can be returned from screen event handling
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    /// Navigate to a screen; a supplied card becomes the active card
    Navigate {
        screen: ScreenType,
        card: Option<Card>,
    },
    /// Go back along the fixed back table
    NavigateBack,
    /// Open the full statement for a searched period
    ViewStatement(StatementPeriod),
    /// Show a success notice, then go back once it is dismissed
    Submitted(Notice),
    /// Quit the application
    Quit,
    /// Set status message
    SetStatus(String),
    /// Set success message
    SetSuccess(String),
    /// Set warning message
    SetWarning(String),
    /// Set error message
    SetError(String),
    /// Clear messages
    ClearMessages,
    /// No action taken
    None,
}

impl ScreenAction {
    pub fn navigate(screen: ScreenType) -> Self {
        ScreenAction::Navigate { screen, card: None }
    }
}

/// Core trait for all TUI screens
pub trait Screen {
    /// Draw the screen content
    fn draw(&mut self, f: &mut Frame, area: Rect);

    /// Handle keyboard input and return an action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction>;

    /// Whether printable keys go to a text input; the app then leaves
    /// `q` and `?` to the screen
    fn captures_text(&self) -> bool {
        false
    }

    /// Shortcut list shown in the help popup
    fn help_text(&self) -> &str;
}

/// Trait for screens with navigable lists
pub trait Navigable {
    /// Move selection up
    fn navigate_up(&mut self);

    /// Move selection down
    fn navigate_down(&mut self);

    /// Get currently selected index
    fn get_selected_index(&self) -> Option<usize>;

    /// Set selected index
    fn set_selected_index(&mut self, index: Option<usize>);

    /// Get total number of items
    fn get_item_count(&self) -> usize;

    /// Navigate to first item
    fn navigate_to_first(&mut self) {
        if self.get_item_count() > 0 {
            self.set_selected_index(Some(0));
        }
    }

    /// Navigate to last item
    fn navigate_to_last(&mut self) {
        let count = self.get_item_count();
        if count > 0 {
            self.set_selected_index(Some(count - 1));
        }
    }
}

/// Trait for form handling
pub trait FormHandler {
    /// Get current field index
    fn get_current_field(&self) -> usize;

    /// Set current field
    fn set_current_field(&mut self, field: usize);

    /// Get total number of fields
    fn get_field_count(&self) -> usize;

    /// Move to next field
    fn next_field(&mut self) {
        let total = self.get_field_count();
        if total == 0 {
            return;
        }
        let current = self.get_current_field();
        self.set_current_field((current + 1) % total);
    }

    /// Move to previous field
    fn previous_field(&mut self) {
        let total = self.get_field_count();
        if total == 0 {
            return;
        }
        let current = self.get_current_field();
        self.set_current_field(if current == 0 { total - 1 } else { current - 1 });
    }

    /// Handle character input for current field
    fn handle_char_input(&mut self, c: char);

    /// Handle backspace for current field
    fn handle_backspace(&mut self);

    /// Handle delete for current field
    fn handle_delete(&mut self);

    /// Validate form data
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
