//! Status bar component for showing messages

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::card_tui::ui::Styles;

/// Types of status messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
    pub status_type: StatusType,
}

impl StatusMessage {
    pub fn new(message: String, status_type: StatusType) -> Self {
        Self {
            message,
            status_type,
        }
    }
}

/// Status bar: the current message, or the screen name and global keys
#[derive(Debug, Default)]
pub struct StatusDisplay {
    current_message: Option<StatusMessage>,
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_message(&mut self, message: StatusMessage) {
        self.current_message = Some(message);
    }

    pub fn set_info(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Info));
    }

    pub fn set_success(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Success));
    }

    pub fn set_warning(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Warning));
    }

    pub fn set_error(&mut self, message: String) {
        self.set_message(StatusMessage::new(message, StatusType::Error));
    }

    pub fn clear(&mut self) {
        self.current_message = None;
    }

    pub fn get_current(&self) -> Option<&StatusMessage> {
        self.current_message.as_ref()
    }

    /// Render the status bar; `screen_title` fills it when no message is set
    pub fn render(&self, f: &mut Frame, area: Rect, screen_title: &str) {
        let (content, style) = match &self.current_message {
            Some(message) => {
                let style = match message.status_type {
                    StatusType::Info => Styles::info(),
                    StatusType::Success => Styles::success(),
                    StatusType::Warning => Styles::warning(),
                    StatusType::Error => Styles::error(),
                };
                (Self::format_message(message), style)
            }
            None => (
                format!("CardHub - {} | Esc: Back | q: Quit | F1: Help", screen_title),
                Styles::inactive(),
            ),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());

        f.render_widget(Paragraph::new(content).style(style).block(block), area);
    }

    fn format_message(message: &StatusMessage) -> String {
        let prefix = match message.status_type {
            StatusType::Info => "ℹ",
            StatusType::Success => "✓",
            StatusType::Warning => "⚠",
            StatusType::Error => "✗",
        };
        format!("{} {}", prefix, message.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_message_wins() {
        let mut status = StatusDisplay::new();
        status.set_info("first".to_string());
        status.set_error("second".to_string());
        let current = status.get_current().unwrap();
        assert_eq!(current.message, "second");
        assert_eq!(current.status_type, StatusType::Error);
        status.clear();
        assert!(status.get_current().is_none());
    }

    #[test]
    fn test_success_and_warning_messages() {
        let mut status = StatusDisplay::new();
        status.set_success("Card status updated: Locked".to_string());
        assert_eq!(status.get_current().unwrap().status_type, StatusType::Success);
        status.set_warning("Debit cards have no statement to pay".to_string());
        let current = status.get_current().unwrap();
        assert_eq!(current.status_type, StatusType::Warning);
        assert_eq!(
            StatusDisplay::format_message(current),
            "⚠ Debit cards have no statement to pay"
        );
    }

    #[test]
    fn test_format_prefix() {
        let message = StatusMessage::new("Saved".to_string(), StatusType::Success);
        assert_eq!(StatusDisplay::format_message(&message), "✓ Saved");
    }
}
