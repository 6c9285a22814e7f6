//! Card services domain
//!
//! Navigation, status management, form rules and derived values for the
//! card services client. Nothing here touches the terminal.

pub mod catalog;
pub mod contact;
pub mod errors;
pub mod format;
pub mod limits;
pub mod navigation;
pub mod payment;
pub mod pin;
pub mod statement;
pub mod status;

pub use catalog::CardCatalog;
pub use contact::{ContactDetails, DeliveryPreference};
pub use errors::CardError;
pub use limits::{LimitKind, TransactionLimits};
pub use navigation::{NavigationState, Screen};
pub use payment::PaymentSummary;
pub use pin::{PinError, PinField, PinForm};
pub use statement::{StatementPeriod, StatementSummary};
pub use status::{StatusAction, StatusManager};
