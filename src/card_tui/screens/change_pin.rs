//! Change PIN screen

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info};

use crate::card_tui::{
    components::{FormField, FormFieldType},
    handlers::CommonKeyHandler,
    traits::{FormHandler, Notice, Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{pin::PIN_LENGTH, PinField, PinForm, Screen as ScreenType};
use crate::models::Card;

pub struct ChangePinScreen {
    card: Card,
    form: PinForm,
    focus: usize,
    show_pins: bool,
}

impl ChangePinScreen {
    pub fn new(card: &Card) -> Self {
        Self {
            card: card.clone(),
            form: PinForm::new(),
            focus: 0,
            show_pins: false,
        }
    }

    pub fn form(&self) -> &PinForm {
        &self.form
    }

    fn focused_field(&self) -> PinField {
        PinField::ALL[self.focus]
    }

    fn submit(&mut self) -> ScreenAction {
        match self.form.submit() {
            Ok(()) => {
                info!("PIN changed for card {}", self.card.id);
                ScreenAction::Submitted(Notice::new(
                    "PIN Changed!",
                    "Your PIN has been changed successfully.",
                ))
            }
            Err(err) => {
                debug!("PIN change rejected: {}", err);
                ScreenAction::None
            }
        }
    }

    fn field_view(&self, index: usize, field: PinField) -> FormField {
        let mut view = FormField::new(field.label(), FormFieldType::Digits { max: PIN_LENGTH })
            .with_placeholder(field.placeholder())
            .with_value(self.form.value(field))
            .with_mask(!self.show_pins);
        view.set_focus(index == self.focus);
        view
    }
}

impl FormHandler for ChangePinScreen {
    fn get_current_field(&self) -> usize {
        self.focus
    }

    fn set_current_field(&mut self, field: usize) {
        if field < PinField::ALL.len() {
            self.focus = field;
        }
    }

    fn get_field_count(&self) -> usize {
        PinField::ALL.len()
    }

    fn handle_char_input(&mut self, c: char) {
        let field = self.focused_field();
        self.form.push(field, c);
    }

    fn handle_backspace(&mut self) {
        let field = self.focused_field();
        self.form.pop(field);
    }

    fn handle_delete(&mut self) {
        self.handle_backspace();
    }

    fn validate(&self) -> Result<(), String> {
        match self.form.error {
            Some(err) => Err(err.to_string()),
            None => Ok(()),
        }
    }
}

impl Screen for ChangePinScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        ui::draw_title(f, chunks[0], ScreenType::ChangePin.as_str());
        ui::draw_card_banner(f, chunks[1], &self.card);

        for (i, field) in PinField::ALL.iter().enumerate() {
            self.field_view(i, *field).render(f, chunks[2 + i]);
        }

        if let Err(message) = FormHandler::validate(self) {
            let banner = Paragraph::new(Line::from(Span::styled(message, Styles::error()))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::error()),
            );
            f.render_widget(banner, chunks[5]);
        }

        let requirements = vec![
            Line::from(Span::styled("PIN Requirements:", Styles::info())),
            Line::from("• Must be exactly 6 digits"),
            Line::from("• Cannot be the same as current PIN"),
            Line::from("• Avoid using simple sequences (123456, 111111)"),
            Line::from("• Do not share your PIN with anyone"),
            Line::from(""),
            Line::from(Span::styled(
                "[Tab] Next field  [Ctrl+V] Show/hide PINs  [Enter] Change PIN  [Esc] Back",
                Styles::info(),
            )),
        ];
        f.render_widget(Paragraph::new(requirements), chunks[6]);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        if let Some(action) = CommonKeyHandler::handle_back_key(key) {
            return Ok(action);
        }

        match key.code {
            KeyCode::Enter => Ok(self.submit()),
            KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.show_pins = !self.show_pins;
                Ok(ScreenAction::None)
            }
            _ => Ok(CommonKeyHandler::handle_form_keys(self, key).unwrap_or(ScreenAction::None)),
        }
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn help_text(&self) -> &str {
        "Change PIN:\n\
        Tab/↑/↓ - Move between fields\n\
        0-9 - Enter digits (6 per PIN)\n\
        Ctrl+V - Show/hide PINs\n\
        Enter - Change PIN\n\
        Esc - Back to card services"
    }
}
