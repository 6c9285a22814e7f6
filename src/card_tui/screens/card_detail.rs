//! Card services screen with Information, Services and Statement tabs

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph, Tabs},
    Frame,
};

use crate::card_tui::{
    components::{form_field::DATE_FORMAT, Form, FormField, FormFieldType, ListView, ListViewConfig},
    handlers::{CommonKeyHandler, MenuHandler},
    traits::{FormHandler, Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{format, PaymentSummary, Screen as ScreenType, StatementPeriod};
use crate::models::{Card, CardKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Information,
    Services,
    Statement,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Information, DetailTab::Services, DetailTab::Statement];

    pub fn title(&self) -> &str {
        match self {
            DetailTab::Information => "Information",
            DetailTab::Services => "Services",
            DetailTab::Statement => "Statement",
        }
    }

    fn index(&self) -> usize {
        match self {
            DetailTab::Information => 0,
            DetailTab::Services => 1,
            DetailTab::Statement => 2,
        }
    }

    fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Entry on the Services tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceItem {
    pub title: &'static str,
    pub description: &'static str,
    pub screen: ScreenType,
}

pub const SERVICES: [ServiceItem; 4] = [
    ServiceItem {
        title: "Update Plastic Status",
        description: "Lock, unlock or report lost card",
        screen: ScreenType::Status,
    },
    ServiceItem {
        title: "Update Card Information",
        description: "Update contact details and preferences",
        screen: ScreenType::UpdateInfo,
    },
    ServiceItem {
        title: "Change PIN",
        description: "Change your card PIN number",
        screen: ScreenType::ChangePin,
    },
    ServiceItem {
        title: "Set Transaction Limits",
        description: "Set daily and monthly limits",
        screen: ScreenType::Limits,
    },
];

/// Rows of the Information tab. Debit cards get no credit rows.
pub fn info_rows(card: &Card, show_account: bool) -> Vec<(&'static str, String)> {
    let account = if show_account {
        card.linked_account.clone().unwrap_or_else(|| "-".to_string())
    } else {
        card.masked_account()
    };
    let mut rows = vec![
        ("Cardholder Name", card.holder_name.clone()),
        ("Card Number", card.masked_number.clone()),
        ("Expiry Date", card.expiry.clone()),
        ("Linked Account Number", account),
    ];
    match &card.kind {
        CardKind::Credit(line) => {
            rows.push(("Available Credit Limit", format::amount(line.available_credit())));
            rows.push(("Outstanding Balance", format::amount(line.used_credit())));
            rows.push(("Remaining Credit Limit", format::amount(line.available_credit())));
            rows.push(("Total Amount Due", format::amount(line.used_credit())));
        }
        CardKind::Debit => {
            rows.push(("Account Balance", format::amount(card.balance)));
        }
    }
    rows
}

// Focus slots on the Statement tab
const FROM_FIELD: usize = 0;
const TO_FIELD: usize = 1;
const SEARCH_BUTTON: usize = 2;
const VIEW_BUTTON: usize = 3;
const STATEMENT_SLOTS: usize = 4;

pub struct CardDetailScreen {
    card: Card,
    tab: DetailTab,
    show_account: bool,
    services: ListView<ServiceItem>,
    period_form: Form,
    statement_focus: usize,
    period: StatementPeriod,
}

impl CardDetailScreen {
    /// `period` fills the Statement tab's date range
    pub fn new(card: &Card, period: StatementPeriod) -> Self {
        let period_form = Form::new(vec![
            FormField::new("From Date", FormFieldType::Date)
                .with_value(&period.from.format(DATE_FORMAT).to_string()),
            FormField::new("To Date", FormFieldType::Date)
                .with_value(&period.to.format(DATE_FORMAT).to_string()),
        ]);
        Self {
            card: card.clone(),
            tab: DetailTab::Information,
            show_account: false,
            services: ListView::new(SERVICES.to_vec(), ListViewConfig::new("Card Services")),
            period_form,
            statement_focus: FROM_FIELD,
            period,
        }
    }

    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    pub fn period(&self) -> StatementPeriod {
        self.period
    }

    fn set_tab(&mut self, tab: DetailTab) {
        self.tab = tab;
        self.sync_statement_focus();
    }

    fn sync_statement_focus(&mut self) {
        if self.tab == DetailTab::Statement && self.statement_focus < SEARCH_BUTTON {
            self.period_form.set_current_field(self.statement_focus);
        } else {
            self.period_form.blur();
        }
    }

    fn pay_action(&self) -> ScreenAction {
        match self.card.kind {
            CardKind::Credit(_) => ScreenAction::navigate(ScreenType::Payment),
            CardKind::Debit => ScreenAction::SetWarning("Debit cards have no statement to pay".to_string()),
        }
    }

    /// Validate the date range and make it the displayed period
    fn search_statement(&mut self) -> Option<String> {
        if !self.period_form.validate_all() {
            return Some("Invalid date format (YYYY-MM-DD)".to_string());
        }
        let from = self.period_form.get_field(FROM_FIELD).and_then(FormField::date);
        let to = self.period_form.get_field(TO_FIELD).and_then(FormField::date);
        match (from, to) {
            (Some(from), Some(to)) if from <= to => {
                self.period = self.period.with_range(from, to);
                None
            }
            (Some(_), Some(_)) => Some("From Date must not be after To Date".to_string()),
            _ => Some("Invalid date format (YYYY-MM-DD)".to_string()),
        }
    }

    fn handle_info_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Char('v') => {
                self.show_account = !self.show_account;
                ScreenAction::None
            }
            KeyCode::Enter | KeyCode::Char('p') => self.pay_action(),
            KeyCode::Char('s') => ScreenAction::navigate(ScreenType::Status),
            _ => CommonKeyHandler::handle_global_keys(key).unwrap_or(ScreenAction::None),
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) -> ScreenAction {
        if let Some(action) = CommonKeyHandler::handle_navigation_keys(&mut self.services, key) {
            return action;
        }
        let actions: Vec<ScreenAction> = self
            .services
            .items
            .iter()
            .map(|service| ScreenAction::navigate(service.screen))
            .collect();
        if let Some(action) = MenuHandler::handle_menu_selection(&self.services, key, &actions) {
            return action;
        }
        CommonKeyHandler::handle_global_keys(key).unwrap_or(ScreenAction::None)
    }

    fn handle_statement_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up => {
                self.statement_focus = (self.statement_focus + STATEMENT_SLOTS - 1) % STATEMENT_SLOTS;
                self.sync_statement_focus();
                ScreenAction::None
            }
            KeyCode::Down => {
                self.statement_focus = (self.statement_focus + 1) % STATEMENT_SLOTS;
                self.sync_statement_focus();
                ScreenAction::None
            }
            KeyCode::Enter => match self.statement_focus {
                VIEW_BUTTON => match self.search_statement() {
                    Some(error) => ScreenAction::SetError(error),
                    None => ScreenAction::ViewStatement(self.period),
                },
                _ => match self.search_statement() {
                    Some(error) => ScreenAction::SetError(error),
                    None => ScreenAction::SetStatus(format!("Showing statement {}", self.period.display())),
                },
            },
            KeyCode::Left if self.statement_focus < SEARCH_BUTTON => {
                if let Some(field) = self.period_form.get_current_field_mut() {
                    field.move_cursor_left();
                }
                ScreenAction::None
            }
            KeyCode::Right if self.statement_focus < SEARCH_BUTTON => {
                if let Some(field) = self.period_form.get_current_field_mut() {
                    field.move_cursor_right();
                }
                ScreenAction::None
            }
            KeyCode::Char(c) if self.statement_focus < SEARCH_BUTTON => {
                self.period_form.handle_char_input(c);
                ScreenAction::None
            }
            KeyCode::Backspace if self.statement_focus < SEARCH_BUTTON => {
                self.period_form.handle_backspace();
                ScreenAction::None
            }
            KeyCode::Delete if self.statement_focus < SEARCH_BUTTON => {
                self.period_form.handle_delete();
                ScreenAction::None
            }
            _ => CommonKeyHandler::handle_back_key(key).unwrap_or(ScreenAction::None),
        }
    }

    fn draw_tabs(&self, f: &mut Frame, area: Rect) {
        let titles: Vec<Line> = DetailTab::ALL.iter().map(|t| Line::from(t.title().to_string())).collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .style(Styles::inactive())
            .highlight_style(Styles::success().add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL).border_style(Styles::inactive_border()));
        f.render_widget(tabs, area);
    }

    fn draw_information(&self, f: &mut Frame, area: Rect) {
        let status = if self.card.is_active { "• Active" } else { "• Inactive" };
        let mut lines = vec![
            Line::from(Span::styled(self.card.product_title(), Styles::title())),
            Line::from(vec![
                Span::styled(format!(" {} ", self.card.brand.as_str()), Styles::selected()),
                Span::raw(" "),
                Span::raw(self.card.masked_number.clone()),
            ]),
            Line::from(vec![
                Span::styled("Primary Card", Styles::success()),
                Span::raw("  "),
                Span::styled(status, if self.card.is_active { Styles::success() } else { Styles::warning() }),
            ]),
            Line::from(""),
        ];
        for (label, value) in info_rows(&self.card, self.show_account) {
            lines.push(ui::labeled_row(label, value, Styles::default()));
        }
        lines.push(Line::from(""));
        let hint = if self.card.credit_line().is_some() {
            "[v] Show/hide account  [Enter/p] Pay Statement  [s] Card status"
        } else {
            "[v] Show/hide account  [s] Card status"
        };
        lines.push(Line::from(Span::styled(hint, Styles::info())));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .title("Card Information")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );
        f.render_widget(panel, area);
    }

    fn draw_services(&mut self, f: &mut Frame, area: Rect) {
        self.services.render(f, area, true, |_, service, is_selected| {
            let style = if is_selected { Styles::selected() } else { Styles::default() };
            ListItem::new(vec![
                Line::from(Span::styled(service.title, style.add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(format!("  {}", service.description), Styles::inactive())),
            ])
        });
    }

    fn draw_statement(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);
        for (i, field) in self.period_form.fields.iter().enumerate() {
            field.render(f, fields[i]);
        }

        let button = |slot: usize, label: &'static str| {
            let style = if self.statement_focus == slot { Styles::selected() } else { Styles::info() };
            Span::styled(format!(" {} ", label), style)
        };
        let buttons = Paragraph::new(Line::from(vec![
            button(SEARCH_BUTTON, "Search Statement"),
            Span::raw("   "),
            button(VIEW_BUTTON, "View Full Statement"),
        ]))
        .block(Block::default().borders(Borders::ALL).border_style(Styles::inactive_border()));
        f.render_widget(buttons, chunks[1]);

        let summary = PaymentSummary::for_card(&self.card);
        let lines = vec![
            ui::labeled_row("Statement Period", self.period.display(), Styles::default()),
            ui::labeled_row("Total Outstanding", format::amount(summary.total_outstanding), Styles::default()),
            ui::labeled_row("Minimum Payment", format::amount(summary.minimum_payment), Styles::warning()),
            ui::labeled_row("Due Date", self.period.display_due(), Styles::default()),
        ];
        let panel = Paragraph::new(lines).block(
            Block::default()
                .title("Statement Period")
                .borders(Borders::ALL)
                .border_style(Styles::inactive_border()),
        );
        f.render_widget(panel, chunks[3]);
    }
}

impl Screen for CardDetailScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        ui::draw_title(f, chunks[0], ScreenType::Detail.as_str());
        self.draw_tabs(f, chunks[1]);
        match self.tab {
            DetailTab::Information => self.draw_information(f, chunks[2]),
            DetailTab::Services => self.draw_services(f, chunks[2]),
            DetailTab::Statement => self.draw_statement(f, chunks[2]),
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        match key.code {
            KeyCode::Tab => {
                self.set_tab(self.tab.next());
                return Ok(ScreenAction::None);
            }
            KeyCode::BackTab => {
                self.set_tab(self.tab.previous());
                return Ok(ScreenAction::None);
            }
            _ => {}
        }

        Ok(match self.tab {
            DetailTab::Information => self.handle_info_key(key),
            DetailTab::Services => self.handle_services_key(key),
            DetailTab::Statement => self.handle_statement_key(key),
        })
    }

    fn captures_text(&self) -> bool {
        self.tab == DetailTab::Statement && self.statement_focus < SEARCH_BUTTON
    }

    fn help_text(&self) -> &str {
        "Card Services:\n\
        Tab/Shift+Tab - Switch tab\n\
        Information: v - Reveal account, Enter/p - Pay, s - Status\n\
        Services: ↑/↓ - Select, Enter - Open\n\
        Statement: ↑/↓ - Move focus, type YYYY-MM-DD, Enter - Search or view"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn card(index: usize) -> Card {
        mock_data::cards().unwrap().remove(index)
    }

    fn detail(index: usize) -> CardDetailScreen {
        CardDetailScreen::new(&card(index), mock_data::statement_period())
    }

    #[test]
    fn test_debit_info_has_no_credit_rows() {
        let rows = info_rows(&card(1), false);
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
        assert!(!labels.contains(&"Available Credit Limit"));
        assert!(!labels.contains(&"Outstanding Balance"));
        assert!(!labels.contains(&"Total Amount Due"));
    }

    #[test]
    fn test_credit_info_rows() {
        let rows = info_rows(&card(0), false);
        assert!(rows.contains(&("Available Credit Limit", "35,000,000 LAK".to_string())));
        assert!(rows.contains(&("Outstanding Balance", "15,000,000 LAK".to_string())));
        assert!(rows.contains(&("Linked Account Number", "••••••7890".to_string())));
    }

    #[test]
    fn test_reveal_toggles_account_number() {
        let mut screen = detail(0);
        screen.handle_key_event(key(KeyCode::Char('v'))).unwrap();
        assert!(info_rows(&screen.card, screen.show_account)
            .contains(&("Linked Account Number", "1234567890".to_string())));
    }

    #[test]
    fn test_pay_only_for_credit_cards() {
        let mut credit = detail(0);
        assert_eq!(
            credit.handle_key_event(key(KeyCode::Char('p'))).unwrap(),
            ScreenAction::navigate(ScreenType::Payment)
        );
        let mut debit = detail(2);
        assert!(matches!(
            debit.handle_key_event(key(KeyCode::Char('p'))).unwrap(),
            ScreenAction::SetWarning(_)
        ));
    }

    #[test]
    fn test_services_open_their_screens() {
        let mut screen = detail(0);
        screen.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(screen.tab(), DetailTab::Services);
        screen.handle_key_event(key(KeyCode::Down)).unwrap();
        screen.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)).unwrap(),
            ScreenAction::navigate(ScreenType::ChangePin)
        );
    }

    #[test]
    fn test_statement_tab_validates_dates() {
        let mut screen = detail(0);
        screen.handle_key_event(key(KeyCode::BackTab)).unwrap();
        assert_eq!(screen.tab(), DetailTab::Statement);
        assert!(screen.captures_text());

        // Corrupt the from date
        screen.handle_key_event(key(KeyCode::Backspace)).unwrap();
        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(matches!(action, ScreenAction::SetError(_)));

        screen.handle_key_event(key(KeyCode::Char('6'))).unwrap();
        for _ in 0..3 {
            screen.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        assert_eq!(
            screen.handle_key_event(key(KeyCode::Enter)).unwrap(),
            ScreenAction::ViewStatement(mock_data::statement_period())
        );
        assert_eq!(screen.period().from, NaiveDate::from_ymd_opt(2025, 11, 6).unwrap());
    }

    #[test]
    fn test_view_full_statement_carries_searched_range() {
        let mut screen = detail(0);
        screen.handle_key_event(key(KeyCode::BackTab)).unwrap();
        // 2025-11-06 -> 2025-11-01
        screen.handle_key_event(key(KeyCode::Backspace)).unwrap();
        screen.handle_key_event(key(KeyCode::Backspace)).unwrap();
        for c in "01".chars() {
            screen.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        for _ in 0..3 {
            screen.handle_key_event(key(KeyCode::Down)).unwrap();
        }
        let ScreenAction::ViewStatement(period) = screen.handle_key_event(key(KeyCode::Enter)).unwrap() else {
            panic!("expected the full statement to open");
        };
        assert_eq!(period.from, NaiveDate::from_ymd_opt(2025, 11, 1).unwrap());
        assert_eq!(period.to, NaiveDate::from_ymd_opt(2025, 12, 5).unwrap());
        assert_eq!(period.due, mock_data::statement_period().due);
    }
}
