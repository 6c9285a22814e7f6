//! Mini-statement screen: period, totals and recent transactions

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::card_tui::{
    handlers::CommonKeyHandler,
    traits::{Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{format, Screen as ScreenType, StatementPeriod, StatementSummary};
use crate::mock_data;
use crate::models::{Card, Direction as TxDirection, Transaction, TransactionState};

pub struct StatementScreen {
    card: Card,
    period: StatementPeriod,
    transactions: Vec<Transaction>,
    summary: StatementSummary,
    table_state: TableState,
}

impl StatementScreen {
    /// Transactions outside `period` are left out of the table and totals
    pub fn new(card: &Card, period: StatementPeriod) -> Self {
        let transactions: Vec<Transaction> = mock_data::transactions()
            .into_iter()
            .filter(|transaction| period.contains(transaction.date))
            .collect();
        let summary = StatementSummary::from_transactions(&transactions);
        let mut table_state = TableState::default();
        if !transactions.is_empty() {
            table_state.select(Some(0));
        }
        Self {
            card: card.clone(),
            period,
            transactions,
            summary,
            table_state,
        }
    }

    pub fn summary(&self) -> &StatementSummary {
        &self.summary
    }

    pub fn period(&self) -> StatementPeriod {
        self.period
    }

    fn select_offset(&mut self, forward: bool) {
        if self.transactions.is_empty() {
            return;
        }
        let len = self.transactions.len();
        let current = self.table_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.table_state.select(Some(next));
    }

    fn transaction_row(transaction: &Transaction) -> Row<'static> {
        let amount_style = match transaction.direction {
            TxDirection::Debit => Styles::error(),
            TxDirection::Credit => Styles::success(),
        };
        let state = match transaction.state {
            TransactionState::Completed => Span::styled("Completed", Styles::success()),
            TransactionState::Pending => Span::styled("Pending", Styles::warning()),
        };
        Row::new(vec![
            Cell::from(transaction.display_date()),
            Cell::from(transaction.description.clone()),
            Cell::from(state),
            Cell::from(Span::styled(format::signed_amount(transaction.signed_amount()), amount_style)),
        ])
    }
}

impl Screen for StatementScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(6),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        ui::draw_title(f, chunks[0], ScreenType::Statement.as_str());

        let period = vec![
            ui::labeled_row("Current Statement Period", self.period.display(), Styles::default()),
            ui::labeled_row("Minimum Payment Due Date", self.period.display_due(), Styles::warning()),
        ];
        f.render_widget(
            Paragraph::new(period).block(
                Block::default()
                    .title(format!("{} {}", self.card.brand.as_str(), self.card.masked_number))
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            ),
            chunks[1],
        );

        let totals = vec![
            ui::labeled_row("Total Spending", format::amount(self.summary.total_debit), Styles::error()),
            ui::labeled_row("Total Refunds", format::amount(self.summary.total_credit), Styles::success()),
            ui::labeled_row("Balance Due", format::signed_amount(self.summary.balance_due()), Styles::title()),
            ui::labeled_row("Transactions", self.summary.transaction_count.to_string(), Styles::default()),
        ];
        f.render_widget(
            Paragraph::new(totals).block(
                Block::default()
                    .title("Summary")
                    .borders(Borders::ALL)
                    .border_style(Styles::inactive_border()),
            ),
            chunks[2],
        );

        let rows: Vec<Row> = self.transactions.iter().map(Self::transaction_row).collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Min(20),
                Constraint::Length(11),
                Constraint::Length(18),
            ],
        )
        .header(Row::new(vec!["Date", "Description", "State", "Amount"]).style(Styles::title()))
        .highlight_style(Styles::selected())
        .block(
            Block::default()
                .title("Recent Transactions")
                .borders(Borders::ALL)
                .border_style(Styles::active_border()),
        );
        f.render_stateful_widget(table, chunks[3], &mut self.table_state);

        let hint = if self.card.credit_line().is_some() {
            "[p] Pay Now  [Esc] Back"
        } else {
            "[Esc] Back"
        };
        f.render_widget(Paragraph::new(Line::from(Span::styled(hint, Styles::info()))), chunks[4]);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_offset(false);
                Ok(ScreenAction::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_offset(true);
                Ok(ScreenAction::None)
            }
            KeyCode::Char('p') => Ok(if self.card.credit_line().is_some() {
                ScreenAction::navigate(ScreenType::Payment)
            } else {
                ScreenAction::SetWarning("Debit cards have no statement to pay".to_string())
            }),
            _ => Ok(CommonKeyHandler::handle_global_keys(key).unwrap_or(ScreenAction::None)),
        }
    }

    fn help_text(&self) -> &str {
        "Card Statement:\n\
        ↑/↓ - Browse transactions\n\
        p - Pay now (credit cards)\n\
        Esc - Back to card services"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(index: usize) -> StatementScreen {
        StatementScreen::new(&mock_data::cards().unwrap()[index], mock_data::statement_period())
    }

    #[test]
    fn test_statement_totals() {
        let screen = screen(0);
        assert_eq!(screen.summary().balance_due(), 6_950_000);
    }

    #[test]
    fn test_searched_period_filters_transactions() {
        let mock = mock_data::statement_period();
        let last_day = mock.with_range(mock.to, mock.to);
        let screen = StatementScreen::new(&mock_data::cards().unwrap()[0], last_day);
        assert_eq!(screen.period(), last_day);
        assert!(screen.transactions.iter().all(|tx| tx.date == mock.to));
        assert_eq!(screen.summary().transaction_count, screen.transactions.len());
        assert!(screen.summary().transaction_count < 5);
    }

    #[test]
    fn test_pay_now_depends_on_card_kind() {
        let mut credit = screen(0);
        assert_eq!(
            credit.handle_key_event(key(KeyCode::Char('p'))).unwrap(),
            ScreenAction::navigate(ScreenType::Payment)
        );
        let mut debit = screen(1);
        assert!(matches!(
            debit.handle_key_event(key(KeyCode::Char('p'))).unwrap(),
            ScreenAction::SetWarning(_)
        ));
    }

    #[test]
    fn test_selection_wraps() {
        let mut screen = screen(0);
        screen.handle_key_event(key(KeyCode::Up)).unwrap();
        assert_eq!(screen.table_state.selected(), Some(4));
    }
}
