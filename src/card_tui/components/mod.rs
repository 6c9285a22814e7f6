//! Reusable UI components for the card TUI

pub mod form_field;
pub mod list_view;
pub mod status_display;

pub use form_field::{Form, FormField, FormFieldType};
pub use list_view::{ListView, ListViewConfig};
pub use status_display::{StatusDisplay, StatusType};
