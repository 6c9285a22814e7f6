//! Contact details and statement delivery form

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tracing::info;

use crate::card_tui::{
    components::{Form, FormField, FormFieldType},
    handlers::CommonKeyHandler,
    traits::{FormHandler, Notice, Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{ContactDetails, DeliveryPreference, Screen as ScreenType};
use crate::models::Card;

const EMAIL: usize = 0;
const PHONE: usize = 1;
const ADDRESS: usize = 2;
/// Focus slot of the delivery selector, after the text fields
const DELIVERY: usize = 3;

pub struct UpdateInfoScreen {
    card: Card,
    form: Form,
    delivery: DeliveryPreference,
    focus: usize,
}

impl UpdateInfoScreen {
    pub fn new(card: &Card) -> Self {
        Self::with_details(card, ContactDetails::default())
    }

    pub fn with_details(card: &Card, details: ContactDetails) -> Self {
        let form = Form::new(vec![
            FormField::new("Email Address", FormFieldType::Text).with_value(&details.email),
            FormField::new("Phone Number", FormFieldType::Text).with_value(&details.phone),
            FormField::new("Mailing Address", FormFieldType::Text).with_value(&details.address),
        ]);
        Self {
            card: card.clone(),
            form,
            delivery: details.delivery,
            focus: EMAIL,
        }
    }

    /// Current form contents
    pub fn details(&self) -> ContactDetails {
        ContactDetails {
            email: self.form.value(EMAIL).to_string(),
            phone: self.form.value(PHONE).to_string(),
            address: self.form.value(ADDRESS).to_string(),
            delivery: self.delivery,
        }
    }

    fn submit(&self) -> ScreenAction {
        let details = self.details();
        info!(
            "Contact details updated for card {} (delivery: {:?})",
            self.card.id, details.delivery
        );
        ScreenAction::Submitted(Notice::new(
            "Success!",
            "Your information has been updated successfully.",
        ))
    }

    fn draw_delivery(&self, f: &mut Frame, area: Rect) {
        let focused = self.focus == DELIVERY;
        let option = |pref: DeliveryPreference| {
            let marker = if pref == self.delivery { "(•)" } else { "( )" };
            let style = if pref == self.delivery && focused {
                Styles::selected()
            } else if pref == self.delivery {
                Styles::success()
            } else {
                Styles::default()
            };
            vec![
                Line::from(Span::styled(format!("{} {}", marker, pref.title()), style)),
                Line::from(Span::styled(format!("    {}", pref.description()), Styles::inactive())),
            ]
        };
        let mut lines = option(DeliveryPreference::Email);
        lines.extend(option(DeliveryPreference::Paper));
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title("Statement Delivery")
                    .borders(Borders::ALL)
                    .border_style(if focused {
                        Styles::active_border()
                    } else {
                        Styles::inactive_border()
                    }),
            ),
            area,
        );
    }
}

impl FormHandler for UpdateInfoScreen {
    fn get_current_field(&self) -> usize {
        self.focus
    }

    fn set_current_field(&mut self, field: usize) {
        if field > DELIVERY {
            return;
        }
        self.focus = field;
        if field == DELIVERY {
            self.form.blur();
        } else {
            self.form.set_current_field(field);
        }
    }

    fn get_field_count(&self) -> usize {
        DELIVERY + 1
    }

    fn handle_char_input(&mut self, c: char) {
        if self.focus == DELIVERY {
            if c == ' ' {
                self.delivery = self.delivery.toggled();
            }
        } else {
            self.form.handle_char_input(c);
        }
    }

    fn handle_backspace(&mut self) {
        if self.focus != DELIVERY {
            self.form.handle_backspace();
        }
    }

    fn handle_delete(&mut self) {
        if self.focus != DELIVERY {
            self.form.handle_delete();
        }
    }
}

impl Screen for UpdateInfoScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Min(0),
            ])
            .split(area);

        ui::draw_title(f, chunks[0], ScreenType::UpdateInfo.as_str());
        ui::draw_card_banner(f, chunks[1], &self.card);
        for (i, field) in self.form.fields.iter().enumerate() {
            field.render(f, chunks[2 + i]);
        }
        self.draw_delivery(f, chunks[5]);

        let note = vec![
            Line::from(Span::styled("Important:", Styles::info())),
            Line::from(
                "Changes to your contact information will be effective within 24 hours. \
                 Please ensure all information is accurate.",
            ),
            Line::from(Span::styled(
                "[Tab] Next field  [Space] Toggle delivery  [Enter] Save  [Esc] Back",
                Styles::info(),
            )),
        ];
        f.render_widget(Paragraph::new(note).wrap(Wrap { trim: true }), chunks[6]);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        if let Some(action) = CommonKeyHandler::handle_back_key(key) {
            return Ok(action);
        }

        match key.code {
            KeyCode::Enter => return Ok(self.submit()),
            KeyCode::Left | KeyCode::Right if self.focus == DELIVERY => {
                self.delivery = self.delivery.toggled();
                return Ok(ScreenAction::None);
            }
            KeyCode::Left => {
                if let Some(field) = self.form.get_current_field_mut() {
                    field.move_cursor_left();
                }
                return Ok(ScreenAction::None);
            }
            KeyCode::Right => {
                if let Some(field) = self.form.get_current_field_mut() {
                    field.move_cursor_right();
                }
                return Ok(ScreenAction::None);
            }
            _ => {}
        }

        Ok(CommonKeyHandler::handle_form_keys(self, key).unwrap_or(ScreenAction::None))
    }

    fn captures_text(&self) -> bool {
        self.focus != DELIVERY
    }

    fn help_text(&self) -> &str {
        "Update Card Information:\n\
        Tab/↑/↓ - Move between fields\n\
        Space/←/→ - Toggle statement delivery\n\
        Enter - Save changes\n\
        Esc - Back to card services"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen() -> UpdateInfoScreen {
        UpdateInfoScreen::new(&mock_data::cards().unwrap()[0])
    }

    #[test]
    fn test_fields_prefilled_from_contact_defaults() {
        assert_eq!(screen().details(), ContactDetails::default());
    }

    #[test]
    fn test_free_text_edits_without_validation() {
        let mut screen = screen();
        for _ in 0.."phamquoctuan@email.com".len() {
            screen.handle_key_event(key(KeyCode::Backspace)).unwrap();
        }
        for c in "not an email".chars() {
            screen.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(screen.details().email, "not an email");
        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(matches!(action, ScreenAction::Submitted(ref n) if n.title == "Success!"));
    }

    #[test]
    fn test_delivery_toggle_is_exclusive() {
        let mut screen = screen();
        for _ in 0..3 {
            screen.handle_key_event(key(KeyCode::Tab)).unwrap();
        }
        assert!(!screen.captures_text());
        screen.handle_key_event(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(screen.details().delivery, DeliveryPreference::Paper);
        screen.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(screen.details().delivery, DeliveryPreference::Email);
    }
}
