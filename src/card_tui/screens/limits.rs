//! Transaction limits screen
//!
//! Typed values are committed, and clamped, when focus leaves a field,
//! on `+`/`-` and on save.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};
use tracing::{debug, info};

use crate::card_tui::{
    components::{Form, FormField, FormFieldType},
    handlers::CommonKeyHandler,
    traits::{FormHandler, Notice, Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{format, LimitKind, Screen as ScreenType, TransactionLimits};
use crate::models::Card;

const MAX_INPUT_DIGITS: usize = 12;

pub struct LimitsScreen {
    card: Card,
    limits: TransactionLimits,
    form: Form,
}

impl LimitsScreen {
    pub fn new(card: &Card) -> Self {
        let limits = TransactionLimits::new();
        let fields = LimitKind::ALL
            .iter()
            .map(|kind| {
                FormField::new(kind.label(), FormFieldType::Digits { max: MAX_INPUT_DIGITS })
                    .with_value(&limits.get(*kind).to_string())
            })
            .collect();
        Self {
            card: card.clone(),
            limits,
            form: Form::new(fields),
        }
    }

    pub fn limits(&self) -> &TransactionLimits {
        &self.limits
    }

    fn current_kind(&self) -> LimitKind {
        LimitKind::ALL[self.form.current_field]
    }

    fn show_value(&mut self, value: u64) {
        if let Some(field) = self.form.get_current_field_mut() {
            field.set_value(&value.to_string());
        }
    }

    /// Store the focused field's text, clamped, and echo the stored value back
    fn commit_current(&mut self) {
        let kind = self.current_kind();
        let value = self
            .limits
            .set_from_input(kind, self.form.value(self.form.current_field));
        debug!("Committed {:?} = {}", kind, value);
        self.show_value(value);
    }

    fn step(&mut self, up: bool) {
        self.commit_current();
        let kind = self.current_kind();
        let value = if up {
            self.limits.increase(kind)
        } else {
            self.limits.decrease(kind)
        };
        self.show_value(value);
    }

    fn submit(&mut self) -> ScreenAction {
        self.commit_current();
        info!(
            "Transaction limits updated for card {}: ATM {}, POS {}, online {}, monthly {}",
            self.card.id,
            self.limits.get(LimitKind::AtmDaily),
            self.limits.get(LimitKind::PosDaily),
            self.limits.get(LimitKind::OnlineDaily),
            self.limits.get(LimitKind::Monthly)
        );
        ScreenAction::Submitted(Notice::new(
            "Limits Updated!",
            "Your transaction limits have been updated successfully.",
        ))
    }

    fn draw_limit(&self, f: &mut Frame, area: Rect, index: usize, kind: LimitKind) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);

        if let Some(field) = self.form.get_field(index) {
            field.render(f, columns[0]);
        }

        let value = self.limits.get(kind);
        let span = (kind.max() - kind.min()) as f64;
        let ratio = ((value - kind.min()) as f64 / span).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(
                        "Min: {} - Max: {}",
                        format::amount(kind.min()),
                        format::amount(kind.max())
                    ))
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            )
            .gauge_style(Styles::success())
            .ratio(ratio)
            .label(format::amount(value));
        f.render_widget(gauge, columns[1]);
    }

    fn draw_usage(&self, f: &mut Frame, area: Rect) {
        let usage = self.limits.usage();
        let remaining = self.limits.remaining();
        let lines = vec![
            ui::labeled_row("ATM Withdrawals", format::amount(usage.atm), Styles::default()),
            ui::labeled_row("POS Purchases", format::amount(usage.pos), Styles::default()),
            ui::labeled_row("Online Transactions", format::amount(usage.online), Styles::default()),
            ui::labeled_row("Total Used", format::amount(usage.total()), Styles::warning()),
            ui::labeled_row(
                "Total Monthly Limit",
                format::amount(self.limits.get(LimitKind::Monthly)),
                Styles::default(),
            ),
            ui::labeled_row(
                "Remaining Limit",
                format::signed_amount(remaining),
                if remaining < 0 { Styles::error() } else { Styles::success() },
            ),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title("Current Usage (This Month)")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            ),
            area,
        );
    }
}

impl FormHandler for LimitsScreen {
    fn get_current_field(&self) -> usize {
        self.form.current_field
    }

    fn set_current_field(&mut self, field: usize) {
        if field < LimitKind::ALL.len() {
            self.commit_current();
            self.form.set_current_field(field);
        }
    }

    fn get_field_count(&self) -> usize {
        LimitKind::ALL.len()
    }

    fn handle_char_input(&mut self, c: char) {
        self.form.handle_char_input(c);
    }

    fn handle_backspace(&mut self) {
        self.form.handle_backspace();
    }

    fn handle_delete(&mut self) {
        self.form.handle_delete();
    }
}

impl Screen for LimitsScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(8),
                Constraint::Min(0),
            ])
            .split(area);

        ui::draw_title(
            f,
            chunks[0],
            &format!("{} - {}", ScreenType::Limits.as_str(), self.card.masked_number),
        );
        for (i, kind) in LimitKind::ALL.iter().enumerate() {
            self.draw_limit(f, chunks[1 + i], i, *kind);
        }
        self.draw_usage(f, chunks[5]);

        let note = vec![
            Line::from(Span::styled("Important:", Styles::info())),
            Line::from(
                "Changes to transaction limits will take effect immediately. \
                 You can modify these limits at any time through this screen.",
            ),
            Line::from(Span::styled(
                "[Tab] Next limit  [+/-] Adjust by step  [Enter] Save  [Esc] Back",
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
            KeyCode::Enter => Ok(self.submit()),
            KeyCode::Char('+') | KeyCode::Right => {
                self.step(true);
                Ok(ScreenAction::None)
            }
            KeyCode::Char('-') | KeyCode::Left => {
                self.step(false);
                Ok(ScreenAction::None)
            }
            _ => Ok(CommonKeyHandler::handle_form_keys(self, key).unwrap_or(ScreenAction::None)),
        }
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn help_text(&self) -> &str {
        "Transaction Limits:\n\
        Tab/↑/↓ - Move between limits\n\
        0-9 - Type an amount\n\
        +/- or ←/→ - Adjust by one step\n\
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

    fn screen() -> LimitsScreen {
        LimitsScreen::new(&mock_data::cards().unwrap()[0])
    }

    fn clear_field(screen: &mut LimitsScreen) {
        for _ in 0..MAX_INPUT_DIGITS {
            screen.handle_key_event(key(KeyCode::Backspace)).unwrap();
        }
    }

    #[test]
    fn test_typed_value_clamps_on_focus_change() {
        let mut screen = screen();
        clear_field(&mut screen);
        for c in "99000000".chars() {
            screen.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        screen.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(screen.limits().get(LimitKind::AtmDaily), 10_000_000);
        assert_eq!(screen.form.value(0), "10000000");
    }

    #[test]
    fn test_empty_input_commits_minimum() {
        let mut screen = screen();
        clear_field(&mut screen);
        screen.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(screen.limits().get(LimitKind::AtmDaily), 100_000);
    }

    #[test]
    fn test_step_keys_adjust_focused_limit() {
        let mut screen = screen();
        for _ in 0..3 {
            screen.handle_key_event(key(KeyCode::Tab)).unwrap();
        }
        screen.handle_key_event(key(KeyCode::Char('-'))).unwrap();
        assert_eq!(screen.limits().get(LimitKind::Monthly), 49_000_000);
        assert_eq!(screen.limits().remaining(), 49_000_000 - 14_450_000);
        screen.handle_key_event(key(KeyCode::Char('+'))).unwrap();
        screen.handle_key_event(key(KeyCode::Char('+'))).unwrap();
        assert_eq!(screen.limits().get(LimitKind::Monthly), 51_000_000);
    }

    #[test]
    fn test_save_commits_pending_input() {
        let mut screen = screen();
        clear_field(&mut screen);
        for c in "2500000".chars() {
            screen.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(matches!(action, ScreenAction::Submitted(ref n) if n.title == "Limits Updated!"));
        assert_eq!(screen.limits().get(LimitKind::AtmDaily), 2_500_000);
    }
}
