//! Form field component for user input

use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::card_tui::{traits::FormHandler, ui::Styles};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Type of form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFieldType {
    /// Free text
    Text,
    /// ASCII digits only, at most `max` of them
    Digits { max: usize },
    /// `YYYY-MM-DD`, checked on validate
    Date,
}

/// Individual form field. The cursor counts characters, not bytes.
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub field_type: FormFieldType,
    pub is_focused: bool,
    pub cursor_position: usize,
    pub masked: bool,
    pub validation_error: Option<String>,
}

impl FormField {
    pub fn new(label: &str, field_type: FormFieldType) -> Self {
        Self {
            label: label.to_string(),
            value: String::new(),
            placeholder: String::new(),
            field_type,
            is_focused: false,
            cursor_position: 0,
            masked: false,
            validation_error: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    pub fn with_mask(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_position = self.value.chars().count();
        self.validation_error = None;
    }

    pub fn set_focus(&mut self, focused: bool) {
        self.is_focused = focused;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn accepts(&self, c: char) -> bool {
        match self.field_type {
            FormFieldType::Text => !c.is_control(),
            FormFieldType::Digits { max } => c.is_ascii_digit() && self.value.chars().count() < max,
            FormFieldType::Date => c.is_ascii_digit() || c == '-',
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.accepts(c) {
            return;
        }
        let at = self.byte_index(self.cursor_position);
        self.value.insert(at, c);
        self.cursor_position += 1;
        self.validation_error = None;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.value.remove(at);
            self.validation_error = None;
        }
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor_position < self.value.chars().count() {
            let at = self.byte_index(self.cursor_position);
            self.value.remove(at);
            self.validation_error = None;
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.value.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor_position = self.value.chars().count();
    }

    /// Parsed value of a date field
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.value, DATE_FORMAT).ok()
    }

    fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Render the form field
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let showing_placeholder = self.value.is_empty() && !self.placeholder.is_empty();
        let display_text = if showing_placeholder {
            self.placeholder.clone()
        } else {
            self.display_value()
        };

        let border_style = if self.is_focused {
            Styles::active_border()
        } else if self.validation_error.is_some() {
            Styles::error()
        } else {
            Styles::inactive_border()
        };

        let title = match &self.validation_error {
            Some(error) => format!("{} - Error: {}", self.label, error),
            None => self.label.clone(),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style);

        let text_style = if showing_placeholder {
            Styles::inactive()
        } else {
            Styles::default()
        };

        f.render_widget(Paragraph::new(display_text).style(text_style).block(block), area);

        if self.is_focused && area.width > 2 {
            let before: String = self.display_value().chars().take(self.cursor_position).collect();
            let cursor_x = area.x + 1 + before.width() as u16;
            if cursor_x < area.x + area.width - 1 {
                f.set_cursor(cursor_x, area.y + 1);
            }
        }
    }

    /// Validate field value
    pub fn validate(&mut self) -> bool {
        self.validation_error = None;
        if self.field_type == FormFieldType::Date && self.date().is_none() {
            self.validation_error = Some("Invalid date format (YYYY-MM-DD)".to_string());
            return false;
        }
        true
    }
}

/// Form container that manages multiple fields
#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<FormField>,
    pub current_field: usize,
}

impl Form {
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut form = Self {
            fields,
            current_field: 0,
        };
        form.update_focus();
        form
    }

    fn update_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focus(i == self.current_field);
        }
    }

    /// Drop focus from every field, e.g. while a non-text control is active
    pub fn blur(&mut self) {
        for field in &mut self.fields {
            field.set_focus(false);
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn value(&self, index: usize) -> &str {
        self.fields.get(index).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn get_current_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.current_field)
    }

    /// Validate all fields
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in &mut self.fields {
            if !field.validate() {
                all_valid = false;
            }
        }
        all_valid
    }
}

impl FormHandler for Form {
    fn get_current_field(&self) -> usize {
        self.current_field
    }

    fn set_current_field(&mut self, field: usize) {
        if field < self.fields.len() {
            self.current_field = field;
            self.update_focus();
        }
    }

    fn get_field_count(&self) -> usize {
        self.fields.len()
    }

    fn handle_char_input(&mut self, c: char) {
        if let Some(field) = self.get_current_field_mut() {
            field.insert_char(c);
        }
    }

    fn handle_backspace(&mut self) {
        if let Some(field) = self.get_current_field_mut() {
            field.delete_char();
        }
    }

    fn handle_delete(&mut self) {
        if let Some(field) = self.get_current_field_mut() {
            field.delete_char_forward();
        }
    }

    fn validate(&self) -> Result<(), String> {
        for field in &self.fields {
            if let Some(ref error) = field.validation_error {
                return Err(error.clone());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_field_filters_and_caps() {
        let mut field = FormField::new("PIN", FormFieldType::Digits { max: 3 });
        for c in "1a2b34".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.value, "123");
        assert_eq!(field.cursor_position, 3);
    }

    #[test]
    fn test_cursor_edits_multibyte_text() {
        let mut field = FormField::new("Address", FormFieldType::Text).with_value("Viêng");
        field.move_cursor_left();
        field.move_cursor_left();
        field.delete_char();
        assert_eq!(field.value, "Ving");
        field.move_cursor_to_start();
        field.delete_char_forward();
        assert_eq!(field.value, "ing");
    }

    #[test]
    fn test_date_validation() {
        let mut field = FormField::new("From", FormFieldType::Date).with_value("2025-11-06");
        assert!(field.validate());
        assert_eq!(field.date(), NaiveDate::from_ymd_opt(2025, 11, 6));

        field.set_value("2025-13-40");
        assert!(!field.validate());
        assert!(field.validation_error.is_some());
    }

    #[test]
    fn test_form_focus_follows_current_field() {
        let mut form = Form::new(vec![
            FormField::new("A", FormFieldType::Text),
            FormField::new("B", FormFieldType::Text),
        ]);
        form.next_field();
        assert!(!form.fields[0].is_focused);
        assert!(form.fields[1].is_focused);
        form.handle_char_input('x');
        assert_eq!(form.value(1), "x");
        form.next_field();
        assert_eq!(form.get_current_field(), 0);
    }
}
