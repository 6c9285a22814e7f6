//! Card list screen: credit group first, then debit

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use crate::card_tui::{
    components::{ListView, ListViewConfig},
    handlers::CommonKeyHandler,
    traits::{Screen, ScreenAction},
    ui::{self, Styles},
};
use crate::cards::{CardCatalog, Screen as ScreenType};
use crate::models::{Card, Category};

pub struct CardListScreen {
    cards: ListView<Card>,
}

impl CardListScreen {
    pub fn new(catalog: &CardCatalog) -> Self {
        let cards = catalog.ordered().into_iter().cloned().collect();
        Self {
            cards: ListView::new(cards, ListViewConfig::new("My Cards")),
        }
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.cards.selected()
    }

    fn group_header(category: Category) -> &'static str {
        match category {
            Category::Credit => "Credit Cards",
            Category::Debit => "Debit Cards",
        }
    }

    fn card_item(card: &Card, header: Option<Category>, is_selected: bool) -> ListItem<'static> {
        let mut lines = Vec::new();
        if let Some(category) = header {
            lines.push(Line::from(Span::styled(
                Self::group_header(category),
                Styles::title(),
            )));
        }
        let style = if is_selected {
            Styles::selected()
        } else {
            Styles::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<11}", card.brand.as_str()), style.add_modifier(Modifier::BOLD)),
            Span::styled(format!("{:<22}", card.masked_number), style),
            Span::styled(format!("Exp {}", card.expiry), style),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", card.product_title()),
            Styles::inactive(),
        )));
        ListItem::new(lines)
    }
}

impl Screen for CardListScreen {
    fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        ui::draw_title(f, chunks[0], ScreenType::List.as_str());

        // Header lines sit inside the first item of each group
        let headers: Vec<Option<Category>> = self
            .cards
            .items
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let first = i == 0 || self.cards.items[i - 1].category() != card.category();
                first.then(|| card.category())
            })
            .collect();

        self.cards.render(f, chunks[1], true, |i, card, is_selected| {
            Self::card_item(card, headers.get(i).copied().flatten(), is_selected)
        });
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<ScreenAction> {
        if let Some(action) = CommonKeyHandler::handle_navigation_keys(&mut self.cards, key) {
            return Ok(action);
        }

        match key.code {
            KeyCode::Enter => Ok(match self.cards.selected() {
                Some(card) => ScreenAction::Navigate {
                    screen: ScreenType::Detail,
                    card: Some(card.clone()),
                },
                None => ScreenAction::SetError("No cards available".to_string()),
            }),
            KeyCode::Char('q') => Ok(ScreenAction::Quit),
            _ => Ok(ScreenAction::None),
        }
    }

    fn help_text(&self) -> &str {
        "Card List:\n\
        ↑/↓ - Select card\n\
        Enter - Open card services\n\
        q - Quit"
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

    #[test]
    fn test_enter_opens_selected_card() {
        let catalog = CardCatalog::new(mock_data::cards().unwrap());
        let mut screen = CardListScreen::new(&catalog);
        screen.handle_key_event(key(KeyCode::Down)).unwrap();
        assert_eq!(screen.selected_card().map(|c| c.id.as_str()), Some("2"));

        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        match action {
            ScreenAction::Navigate { screen, card } => {
                assert_eq!(screen, ScreenType::Detail);
                assert_eq!(card.map(|c| c.id), Some("2".to_string()));
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_empty_catalog_reports_error() {
        let mut screen = CardListScreen::new(&CardCatalog::new(Vec::new()));
        let action = screen.handle_key_event(key(KeyCode::Enter)).unwrap();
        assert!(matches!(action, ScreenAction::SetError(_)));
    }
}
