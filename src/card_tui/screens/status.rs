//! Card status management screen

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::card_tui::{
    components::{ListView, ListViewConfig},
    handlers::CommonKeyHandler,
    traits::{Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{Screen as ScreenType, StatusAction, StatusManager};
use crate::models::{Card, CardStatus};

pub struct StatusScreen {
    card: Card,
    manager: StatusManager,
    actions: ListView<StatusAction>,
}

impl StatusScreen {
    pub fn new(card: &Card) -> Self {
        let manager = StatusManager::for_card(card);
        let actions = ListView::new(manager.available_actions(), ListViewConfig::new("Change Card Status"));
        Self {
            card: card.clone(),
            manager,
            actions,
        }
    }

    pub fn current(&self) -> CardStatus {
        self.manager.current()
    }

    pub fn pending(&self) -> Option<CardStatus> {
        self.manager.pending()
    }

    fn status_style(status: CardStatus) -> ratatui::style::Style {
        match status {
            CardStatus::Active => Styles::success(),
            CardStatus::Locked => Styles::warning(),
            CardStatus::Blocked | CardStatus::Lost => Styles::error(),
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let status = self.manager.confirm()?;
                self.actions.set_items(self.manager.available_actions());
                Ok(ScreenAction::SetSuccess(format!("Card status updated: {}", status.label())))
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.manager.cancel();
                Ok(ScreenAction::SetStatus("Status change cancelled".to_string()))
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn draw_current(&self, f: &mut Frame, area: Rect) {
        let status = self.manager.current();
        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {} ", self.card.brand.as_str()), Styles::selected()),
                Span::raw(" "),
                Span::raw(self.card.masked_number.clone()),
            ]),
            Line::from(vec![
                Span::styled("Current Status: ", Styles::inactive()),
                Span::styled(status.label().to_string(), Self::status_style(status).add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(status.description().to_string(), Styles::inactive())),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            ),
            area,
        );
    }

    fn draw_notes(&self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("Important Notes:", Styles::warning())),
            Line::from("• Temporarily Lock: Can be unlocked anytime"),
            Line::from("• Permanently Block: Cannot be reversed, need new card"),
            Line::from("• Report Lost: Card will be blocked immediately"),
            Line::from("• Contact hotline 1900 xxxx for support"),
        ];
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).border_style(Styles::inactive_border())),
            area,
        );
    }

    fn draw_confirmation(&self, f: &mut Frame, area: Rect) {
        let Some(prompt) = self.manager.confirmation_prompt() else {
            return;
        };
        let popup_area = ui::centered_rect(60, 30, area);
        f.render_widget(Clear, popup_area);
        let lines = vec![
            Line::from(""),
            Line::from(prompt),
            Line::from(""),
            Line::from(Span::styled("[y/Enter] Confirm Change   [n/Esc] Cancel", Styles::info())),
        ];
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .title("Confirm Change")
                    .borders(Borders::ALL)
                    .border_style(Styles::warning()),
            ),
            popup_area,
        );
    }
}

impl Screen for StatusScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(6),
                Constraint::Length(7),
            ])
            .split(area);

        ui::draw_title(f, chunks[0], ScreenType::Status.as_str());
        self.draw_current(f, chunks[1]);

        if self.manager.is_terminal() {
            let message = Paragraph::new(Line::from(Span::styled(
                "This card can no longer change status.",
                Styles::inactive(),
            )))
            .block(
                Block::default()
                    .title("Change Card Status")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            );
            f.render_widget(message, chunks[2]);
        } else {
            let focused = self.manager.pending().is_none();
            self.actions.render(f, chunks[2], focused, |_, action, is_selected| {
                let style = if is_selected { Styles::selected() } else { Styles::default() };
                ListItem::new(vec![
                    Line::from(Span::styled(action.title, style.add_modifier(Modifier::BOLD))),
                    Line::from(Span::styled(format!("  {}", action.description), Styles::inactive())),
                ])
            });
        }

        self.draw_notes(f, chunks[3]);
        self.draw_confirmation(f, area);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        if self.manager.pending().is_some() {
            return self.handle_confirmation_key(key);
        }

        if let Some(action) = CommonKeyHandler::handle_navigation_keys(&mut self.actions, key) {
            return Ok(action);
        }

        match key.code {
            KeyCode::Enter => {
                let Some(target) = self.actions.selected().map(|action| action.target) else {
                    return Ok(ScreenAction::None);
                };
                self.manager.request(target)?;
                Ok(ScreenAction::ClearMessages)
            }
            _ => Ok(CommonKeyHandler::handle_global_keys(key).unwrap_or(ScreenAction::None)),
        }
    }

    fn help_text(&self) -> &str {
        "Card Status Management:\n\
        ↑/↓ - Select action\n\
        Enter - Request change\n\
        y/Enter - Confirm, n/Esc - Cancel\n\
        Esc - Back to card services"
    }
}
