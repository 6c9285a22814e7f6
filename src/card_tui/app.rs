//! Main TUI application state and logic

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::components::StatusDisplay;
use super::events::AppEvent;
use super::operations::DismissTimer;
use super::screens::*;
use super::traits::{Notice, Screen, ScreenAction};
use super::ui::{centered_rect, Styles};
use crate::cards::{CardCatalog, CardError, NavigationState, Screen as ScreenType, StatementPeriod};
use crate::config::Config;
use crate::mock_data;
use crate::models::Card;

/// Main TUI application state
pub struct App {
    /// Application configuration
    pub config: Config,
    catalog: CardCatalog,
    navigation: NavigationState,
    screen: Box<dyn Screen>,
    status: StatusDisplay,
    notice: Option<Notice>,
    /// Date range last opened from the Statement tab
    statement_period: StatementPeriod,
    dismiss_timer: DismissTimer,
    event_tx: UnboundedSender<AppEvent>,
    event_rx: UnboundedReceiver<AppEvent>,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
}

impl App {
    /// Create a new TUI application on the card list
    pub fn new(config: Config) -> Result<Self> {
        let catalog = CardCatalog::new(mock_data::cards().context("Failed to load card data")?);
        let navigation = NavigationState::new();
        let statement_period = mock_data::statement_period();
        let screen = mount(&navigation, &catalog, statement_period)?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            catalog,
            navigation,
            screen,
            status: StatusDisplay::new(),
            notice: None,
            statement_period,
            dismiss_timer: DismissTimer::new(),
            event_tx,
            event_rx,
            should_quit: false,
            show_help_popup: false,
        })
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn current_screen(&self) -> ScreenType {
        self.navigation.screen()
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.navigation.card()
    }

    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn status(&self) -> &StatusDisplay {
        &self.status
    }

    pub fn statement_period(&self) -> StatementPeriod {
        self.statement_period
    }

    pub fn dismiss_pending(&self) -> bool {
        self.dismiss_timer.is_pending()
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let tick_rate = self.config.tick_rate();

        loop {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key).await?;
                }
            }

            while let Ok(app_event) = self.event_rx.try_recv() {
                self.handle_app_event(app_event)?;
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Wait for the next event posted on the app channel
    pub async fn next_app_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Handle keyboard input events
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        // The success notice swallows input; Esc or Enter dismisses it early
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dismiss_notice()?;
            }
            return Ok(());
        }

        let captures_text = self.screen.captures_text();
        match key.code {
            KeyCode::F(1) => {
                self.show_help_popup = !self.show_help_popup;
                return Ok(());
            }
            KeyCode::Char('?') if !captures_text => {
                self.show_help_popup = !self.show_help_popup;
                return Ok(());
            }
            KeyCode::Esc if self.show_help_popup => {
                self.show_help_popup = false;
                return Ok(());
            }
            _ => {}
        }

        if self.show_help_popup {
            return Ok(());
        }

        let action = match self.screen.handle_key_event(key) {
            Ok(action) => action,
            Err(err) => {
                warn!("Key handling failed on {}: {}", self.current_screen(), err);
                ScreenAction::SetError(err.to_string())
            }
        };
        self.apply_action(action)
    }

    /// Handle an event posted by a background task
    pub fn handle_app_event(&mut self, app_event: AppEvent) -> Result<()> {
        match app_event {
            AppEvent::DismissElapsed(token) => {
                if self.dismiss_timer.accepts(token) && self.notice.is_some() {
                    debug!("Dismiss timer {} elapsed", token);
                    self.notice = None;
                    self.go_back()?;
                } else {
                    debug!("Ignoring stale dismiss timer {}", token);
                }
            }
        }
        Ok(())
    }

    /// Apply an action returned by the active screen
    pub fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::Navigate { screen, card } => {
                if let Err(err) = self.navigate(screen, card) {
                    self.status.set_error(err.to_string());
                }
            }
            ScreenAction::ViewStatement(period) => {
                self.statement_period = period;
                if let Err(err) = self.navigate(ScreenType::Statement, None) {
                    self.status.set_error(err.to_string());
                }
            }
            ScreenAction::NavigateBack => self.go_back()?,
            ScreenAction::Submitted(notice) => self.show_notice(notice),
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::SetStatus(message) => self.status.set_info(message),
            ScreenAction::SetSuccess(message) => self.status.set_success(message),
            ScreenAction::SetWarning(message) => self.status.set_warning(message),
            ScreenAction::SetError(message) => self.status.set_error(message),
            ScreenAction::ClearMessages => self.status.clear(),
            ScreenAction::None => {}
        }
        Ok(())
    }

    /// Navigate to `screen`; a supplied card becomes the active card
    pub fn navigate(&mut self, screen: ScreenType, card: Option<Card>) -> Result<(), CardError> {
        let next = self.navigation.navigate(screen, card)?;
        self.enter(next)
    }

    fn go_back(&mut self) -> Result<(), CardError> {
        let previous = self.navigation.back();
        self.enter(previous)
    }

    fn enter(&mut self, next: NavigationState) -> Result<(), CardError> {
        let screen = mount(&next, &self.catalog, self.statement_period)?;
        self.dismiss_timer.cancel();
        self.notice = None;
        info!(
            "Navigating {} -> {} (card: {})",
            self.navigation.screen(),
            next.screen(),
            next.card().map(|c| c.id.as_str()).unwrap_or("-")
        );
        self.navigation = next;
        self.screen = screen;
        self.status.clear();
        Ok(())
    }

    fn show_notice(&mut self, notice: Notice) {
        info!("{} on {}", notice.title, self.current_screen());
        self.dismiss_timer
            .schedule(self.config.dismiss_delay(), self.event_tx.clone());
        self.notice = Some(notice);
    }

    fn dismiss_notice(&mut self) -> Result<()> {
        self.dismiss_timer.cancel();
        self.notice = None;
        self.go_back()?;
        Ok(())
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.screen.draw(f, chunks[0]);
        self.status.render(f, chunks[1], self.current_screen().as_str());

        if let Some(notice) = &self.notice {
            draw_notice(f, size, notice);
        }

        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(70, 60, area);
        f.render_widget(Clear, popup_area);

        let help_content = format!(
            "Global Shortcuts:\n\
            Esc - Go back\n\
            q - Quit (outside text fields)\n\
            Ctrl+C - Quit\n\
            F1 / ? - Toggle this help\n\n{}",
            self.screen.help_text()
        );
        let help_popup = Paragraph::new(help_content).wrap(Wrap { trim: false }).block(
            Block::default()
                .title("Help - Context Shortcuts")
                .borders(Borders::ALL)
                .border_style(Styles::warning()),
        );
        f.render_widget(help_popup, popup_area);
    }
}

fn draw_notice(f: &mut Frame, area: Rect, notice: &Notice) {
    let popup_area = centered_rect(50, 30, area);
    f.render_widget(Clear, popup_area);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("✓ {}", notice.title), Styles::success())),
        Line::from(""),
        Line::from(notice.message.clone()),
        Line::from(""),
        Line::from(Span::styled("Returning to card services...", Styles::inactive())),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            ),
        popup_area,
    );
}

/// Build the screen for a navigation state
fn mount(
    state: &NavigationState,
    catalog: &CardCatalog,
    period: StatementPeriod,
) -> Result<Box<dyn Screen>, CardError> {
    let target = state.screen();
    let card = || state.card().ok_or(CardError::CardRequired(target));
    let screen: Box<dyn Screen> = match target {
        ScreenType::List => Box::new(CardListScreen::new(catalog)),
        ScreenType::Detail => Box::new(CardDetailScreen::new(card()?, period)),
        ScreenType::Payment => Box::new(PaymentScreen::new(card()?)),
        ScreenType::Statement => Box::new(StatementScreen::new(card()?, period)),
        ScreenType::Status => Box::new(StatusScreen::new(card()?)),
        ScreenType::UpdateInfo => Box::new(UpdateInfoScreen::new(card()?)),
        ScreenType::ChangePin => Box::new(ChangePinScreen::new(card()?)),
        ScreenType::Limits => Box::new(LimitsScreen::new(card()?)),
    };
    Ok(screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card_tui::components::StatusType;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Config::default()).unwrap()
    }

    #[tokio::test]
    async fn test_starts_on_card_list() {
        let app = app();
        assert_eq!(app.current_screen(), ScreenType::List);
        assert!(app.selected_card().is_none());
    }

    #[tokio::test]
    async fn test_navigate_without_card_is_rejected() {
        let mut app = app();
        let err = app.navigate(ScreenType::Limits, None).unwrap_err();
        assert_eq!(err, CardError::CardRequired(ScreenType::Limits));
        assert_eq!(app.current_screen(), ScreenType::List);
    }

    #[tokio::test]
    async fn test_help_popup_blocks_screen_keys() {
        let mut app = app();
        app.handle_key_event(key(KeyCode::F(1))).await.unwrap();
        assert!(app.show_help_popup);
        app.handle_key_event(key(KeyCode::Enter)).await.unwrap();
        assert_eq!(app.current_screen(), ScreenType::List);
        app.handle_key_event(key(KeyCode::Esc)).await.unwrap();
        assert!(!app.show_help_popup);
    }

    #[tokio::test]
    async fn test_q_is_text_inside_forms() {
        let mut app = app();
        let card = app.catalog().all()[0].clone();
        app.navigate(ScreenType::Payment, Some(card)).unwrap();
        app.handle_key_event(key(KeyCode::Char('q'))).await.unwrap();
        assert!(!app.should_quit);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .await
            .unwrap();
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_stale_dismiss_event_is_ignored() {
        let mut app = app();
        let card = app.catalog().all()[0].clone();
        app.navigate(ScreenType::ChangePin, Some(card)).unwrap();
        app.handle_app_event(AppEvent::DismissElapsed(42)).unwrap();
        assert_eq!(app.current_screen(), ScreenType::ChangePin);
    }

    #[tokio::test]
    async fn test_view_statement_keeps_searched_period() {
        let mut app = app();
        let card = app.catalog().all()[0].clone();
        app.navigate(ScreenType::Detail, Some(card)).unwrap();

        let mock = mock_data::statement_period();
        let searched = mock.with_range(mock.to, mock.to);
        app.apply_action(ScreenAction::ViewStatement(searched)).unwrap();
        assert_eq!(app.current_screen(), ScreenType::Statement);
        assert_eq!(app.statement_period(), searched);

        // Back on the detail screen the same period stays selected
        app.handle_key_event(key(KeyCode::Esc)).await.unwrap();
        assert_eq!(app.current_screen(), ScreenType::Detail);
        assert_eq!(app.statement_period(), searched);
    }

    #[tokio::test]
    async fn test_success_and_warning_reach_the_status_bar() {
        let mut app = app();
        app.apply_action(ScreenAction::SetSuccess("Card status updated: Locked".to_string()))
            .unwrap();
        assert_eq!(app.status().get_current().unwrap().status_type, StatusType::Success);
        app.apply_action(ScreenAction::SetWarning("Debit cards have no statement to pay".to_string()))
            .unwrap();
        assert_eq!(app.status().get_current().unwrap().status_type, StatusType::Warning);
    }
}
