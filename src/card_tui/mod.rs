//! Card services terminal user interface
//!
//! The `App` hosts the navigation state and mounts one screen at a time.
//! Screens report `ScreenAction`s; only the app changes screens.

pub mod app;
pub mod components;
pub mod events;
pub mod handlers;
pub mod operations;
pub mod screens;
pub mod traits;
pub mod ui;

pub use app::App;
pub use events::AppEvent;
pub use traits::{Notice, ScreenAction};
