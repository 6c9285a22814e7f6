//! Common event handlers for the card TUI
//!
//! Screens call these directly and fall through to their own keys when
//! a handler returns `None`.

use crossterm::event::{KeyCode, KeyEvent};

use super::traits::{FormHandler, Navigable, ScreenAction};

/// Common keyboard event handling utilities
pub struct CommonKeyHandler;

impl CommonKeyHandler {
    /// Handle navigation keys for list-based screens
    pub fn handle_navigation_keys<T: Navigable>(
        navigable: &mut T,
        key: KeyEvent,
    ) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                navigable.navigate_up();
                Some(ScreenAction::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                navigable.navigate_down();
                Some(ScreenAction::None)
            }
            KeyCode::Home => {
                navigable.navigate_to_first();
                Some(ScreenAction::None)
            }
            KeyCode::End => {
                navigable.navigate_to_last();
                Some(ScreenAction::None)
            }
            _ => None,
        }
    }

    /// Handle form navigation and input
    pub fn handle_form_keys<T: FormHandler>(form: &mut T, key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                form.next_field();
                Some(ScreenAction::None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.previous_field();
                Some(ScreenAction::None)
            }
            KeyCode::Char(c) => {
                form.handle_char_input(c);
                Some(ScreenAction::None)
            }
            KeyCode::Backspace => {
                form.handle_backspace();
                Some(ScreenAction::None)
            }
            KeyCode::Delete => {
                form.handle_delete();
                Some(ScreenAction::None)
            }
            _ => None,
        }
    }

    /// Esc goes back; used by every screen
    pub fn handle_back_key(key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Esc => Some(ScreenAction::NavigateBack),
            _ => None,
        }
    }

    /// Handle global application keys for screens without text input
    pub fn handle_global_keys(key: KeyEvent) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Char('q') => Some(ScreenAction::Quit),
            KeyCode::Backspace => Some(ScreenAction::NavigateBack),
            _ => Self::handle_back_key(key),
        }
    }
}

/// Specialized handler for menu-style lists
pub struct MenuHandler;

impl MenuHandler {
    /// Handle menu selection with Enter key
    pub fn handle_menu_selection<T: Navigable>(
        navigable: &T,
        key: KeyEvent,
        menu_actions: &[ScreenAction],
    ) -> Option<ScreenAction> {
        match key.code {
            KeyCode::Enter => navigable
                .get_selected_index()
                .and_then(|selected| menu_actions.get(selected).cloned()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    struct Counter {
        selected: Option<usize>,
        count: usize,
    }

    impl Navigable for Counter {
        fn navigate_up(&mut self) {
            self.selected = self.selected.map(|i| i.saturating_sub(1));
        }

        fn navigate_down(&mut self) {
            self.selected = self.selected.map(|i| (i + 1).min(self.count - 1));
        }

        fn get_selected_index(&self) -> Option<usize> {
            self.selected
        }

        fn set_selected_index(&mut self, index: Option<usize>) {
            self.selected = index;
        }

        fn get_item_count(&self) -> usize {
            self.count
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys_move_selection() {
        let mut counter = Counter {
            selected: Some(0),
            count: 3,
        };
        CommonKeyHandler::handle_navigation_keys(&mut counter, key(KeyCode::Down));
        CommonKeyHandler::handle_navigation_keys(&mut counter, key(KeyCode::Down));
        assert_eq!(counter.selected, Some(2));
        CommonKeyHandler::handle_navigation_keys(&mut counter, key(KeyCode::Home));
        assert_eq!(counter.selected, Some(0));
        assert!(CommonKeyHandler::handle_navigation_keys(&mut counter, key(KeyCode::Enter)).is_none());
    }

    #[test]
    fn test_menu_selection_picks_action_for_index() {
        let counter = Counter {
            selected: Some(1),
            count: 2,
        };
        let actions = [ScreenAction::Quit, ScreenAction::NavigateBack];
        assert_eq!(
            MenuHandler::handle_menu_selection(&counter, key(KeyCode::Enter), &actions),
            Some(ScreenAction::NavigateBack)
        );
    }

    #[test]
    fn test_global_keys() {
        assert_eq!(
            CommonKeyHandler::handle_global_keys(key(KeyCode::Char('q'))),
            Some(ScreenAction::Quit)
        );
        assert_eq!(
            CommonKeyHandler::handle_global_keys(key(KeyCode::Esc)),
            Some(ScreenAction::NavigateBack)
        );
        assert_eq!(CommonKeyHandler::handle_global_keys(key(KeyCode::Char('x'))), None);
    }
}
