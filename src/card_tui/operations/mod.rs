//! Background operations owned by the TUI app

pub mod dismiss_timer;

pub use dismiss_timer::DismissTimer;
