//! cardhub: card services client for the terminal
//!
//! `cards` holds the domain rules, `card_tui` the interactive front-end and
//! `cli` the non-interactive reports. All data comes from `mock_data`.

pub mod card_tui;
pub mod cards;
pub mod cli;
pub mod config;
pub mod mock_data;
pub mod models;
