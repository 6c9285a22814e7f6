//! Events delivered to the TUI loop from outside the key handler

/// Application events posted on the app channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A success notice timer ran out; carries the timer token
    DismissElapsed(u64),
}
