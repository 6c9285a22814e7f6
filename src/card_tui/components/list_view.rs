//! Generic list view component

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::card_tui::{traits::Navigable, ui::Styles};

/// Configuration for list view rendering
#[derive(Debug, Clone)]
pub struct ListViewConfig {
    pub title: String,
}

impl Default for ListViewConfig {
    fn default() -> Self {
        Self {
            title: "List".to_string(),
        }
    }
}

impl ListViewConfig {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

/// Generic list view component
pub struct ListView<T> {
    pub items: Vec<T>,
    pub state: ListState,
    pub config: ListViewConfig,
}

impl<T> ListView<T> {
    pub fn new(items: Vec<T>, config: ListViewConfig) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }

        Self {
            items,
            state,
            config,
        }
    }

    /// Update items and maintain selection if possible
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        let selected = match self.state.selected() {
            _ if self.items.is_empty() => None,
            Some(idx) if idx < self.items.len() => Some(idx),
            _ => Some(0),
        };
        self.state.select(selected);
    }

    /// Get currently selected item
    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.state.select(index);
    }

    /// Navigate to next item, wrapping
    pub fn next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Navigate to previous item, wrapping
    pub fn previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => self.items.len() - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }

    /// Render the list view
    pub fn render<F>(&mut self, f: &mut Frame, area: Rect, focused: bool, item_formatter: F)
    where
        F: Fn(usize, &T, bool) -> ListItem<'static>,
    {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = focused && Some(i) == self.state.selected();
                item_formatter(i, item, is_selected)
            })
            .collect();

        let block = Block::default()
            .title(self.config.title.clone())
            .borders(Borders::ALL)
            .border_style(if focused {
                Styles::active_border()
            } else {
                Styles::inactive_border()
            });

        let list = List::new(items)
            .block(block)
            .highlight_style(if focused {
                Styles::selected()
            } else {
                Style::default()
            });

        f.render_stateful_widget(list, area, &mut self.state);
    }
}

impl<T> Navigable for ListView<T> {
    fn navigate_up(&mut self) {
        self.previous();
    }

    fn navigate_down(&mut self) {
        self.next();
    }

    fn get_selected_index(&self) -> Option<usize> {
        self.selected_index()
    }

    fn set_selected_index(&mut self, index: Option<usize>) {
        self.select(index);
    }

    fn get_item_count(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_wraps() {
        let mut list = ListView::new(vec!["a", "b", "c"], ListViewConfig::default());
        list.previous();
        assert_eq!(list.selected(), Some(&"c"));
        list.next();
        assert_eq!(list.selected(), Some(&"a"));
    }

    #[test]
    fn test_set_items_keeps_valid_selection() {
        let mut list = ListView::new(vec![1, 2, 3], ListViewConfig::default());
        list.select(Some(2));
        list.set_items(vec![4, 5]);
        assert_eq!(list.selected_index(), Some(0));
        list.select(Some(1));
        list.set_items(vec![6, 7, 8]);
        assert_eq!(list.selected_index(), Some(1));
        list.set_items(Vec::new());
        assert_eq!(list.selected_index(), None);
    }

    #[test]
    fn test_render_highlights_selection_only_when_focused() {
        use ratatui::{backend::TestBackend, style::Color, Terminal};

        let mut list = ListView::new(vec!["alpha", "beta"], ListViewConfig::new("Items"));
        let mut terminal = Terminal::new(TestBackend::new(20, 4)).unwrap();
        let mut draw = |list: &mut ListView<&str>, focused: bool| {
            terminal
                .draw(|f| list.render(f, f.size(), focused, |_, item, _| ListItem::new(item.to_string())))
                .unwrap();
            terminal.backend().buffer().clone()
        };

        let focused = draw(&mut list, true);
        assert_eq!(focused.get(1, 0).symbol(), "I");
        assert_eq!(focused.get(1, 1).symbol(), "a");
        assert_eq!(focused.get(1, 1).bg, Color::Green);

        let unfocused = draw(&mut list, false);
        assert_eq!(unfocused.get(1, 1).symbol(), "a");
        assert_ne!(unfocused.get(1, 1).bg, Color::Green);
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut list: ListView<&str> = ListView::new(Vec::new(), ListViewConfig::default());
        list.next();
        assert!(list.selected().is_none());
        assert_eq!(list.get_item_count(), 0);
    }
}
