//! Statement payment screen

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
    components::{FormField, FormFieldType},
    handlers::CommonKeyHandler,
    traits::{Notice, Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{format, PaymentSummary, Screen as ScreenType};
use crate::models::Card;

pub struct PaymentScreen {
    card: Card,
    summary: PaymentSummary,
    amount: FormField,
}

impl PaymentScreen {
    pub fn new(card: &Card) -> Self {
        let summary = PaymentSummary::for_card(card);
        let mut amount = FormField::new("Amount (LAK)", FormFieldType::Text)
            .with_placeholder(&format::with_separators(summary.minimum_payment as i64));
        amount.set_focus(true);
        Self {
            card: card.clone(),
            summary,
            amount,
        }
    }

    pub fn summary(&self) -> &PaymentSummary {
        &self.summary
    }

    pub fn amount(&self) -> &str {
        &self.amount.value
    }

    fn submit(&self) -> ScreenAction {
        info!(
            "Payment submitted for card {}: amount '{}'",
            self.card.id, self.amount.value
        );
        ScreenAction::Submitted(Notice::new(
            "Payment Submitted!",
            "Your payment request has been submitted successfully.",
        ))
    }
}

impl Screen for PaymentScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Length(7),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        ui::draw_title(f, chunks[0], ScreenType::Payment.as_str());

        let source = vec![
            ui::labeled_row("Source Account", self.card.masked_account(), Styles::default()),
            ui::labeled_row("Balance", format::amount(self.summary.source_balance), Styles::success()),
            ui::labeled_row("Service Type", "Payment for Cardholder".to_string(), Styles::default()),
        ];
        f.render_widget(
            Paragraph::new(source).block(
                Block::default()
                    .title("Transaction Information")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            ),
            chunks[1],
        );

        let details = vec![
            ui::labeled_row("Card Number", self.card.masked_number.clone(), Styles::default()),
            ui::labeled_row(
                "Statement Balance Due",
                format::amount(self.summary.statement_balance),
                Styles::default(),
            ),
            ui::labeled_row(
                "Minimum Payment Required",
                format::amount(self.summary.minimum_payment),
                Styles::warning(),
            ),
            ui::labeled_row(
                "Total Outstanding Balance",
                format::amount(self.summary.total_outstanding),
                Styles::default(),
            ),
            ui::labeled_row(
                "Total Statement Payment",
                format::amount(self.summary.statement_paid),
                Styles::default(),
            ),
        ];
        f.render_widget(
            Paragraph::new(details).block(
                Block::default()
                    .title("Select Payment Amount")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            ),
            chunks[2],
        );

        self.amount.render(f, chunks[3]);

        let note = vec![
            Line::from(Span::styled("Note:", Styles::warning())),
            Line::from("• Transactions made before 6:00 PM will be updated in the system on the same day."),
            Line::from(""),
            Line::from(Span::styled("[Enter] Continue  [Esc] Back", Styles::info())),
        ];
        f.render_widget(
            Paragraph::new(note)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).border_style(Styles::inactive_border())),
            chunks[4],
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        if let Some(action) = CommonKeyHandler::handle_back_key(key) {
            return Ok(action);
        }

        match key.code {
            KeyCode::Enter => Ok(self.submit()),
            KeyCode::Char(c) => {
                self.amount.insert_char(c);
                Ok(ScreenAction::None)
            }
            KeyCode::Backspace => {
                self.amount.delete_char();
                Ok(ScreenAction::None)
            }
            KeyCode::Delete => {
                self.amount.delete_char_forward();
                Ok(ScreenAction::None)
            }
            KeyCode::Left => {
                self.amount.move_cursor_left();
                Ok(ScreenAction::None)
            }
            KeyCode::Right => {
                self.amount.move_cursor_right();
                Ok(ScreenAction::None)
            }
            KeyCode::Home => {
                self.amount.move_cursor_to_start();
                Ok(ScreenAction::None)
            }
            KeyCode::End => {
                self.amount.move_cursor_to_end();
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn captures_text(&self) -> bool {
        true
    }

    fn help_text(&self) -> &str {
        "Statement Payment:\n\
        Type the amount to pay\n\
        Enter - Continue\n\
        Esc - Back to card services"
    }
}
