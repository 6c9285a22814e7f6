//! TUI screens, one per navigation target

pub mod card_detail;
pub mod card_list;
pub mod change_pin;
pub mod limits;
pub mod payment;
pub mod statement;
pub mod status;
pub mod update_info;

pub use card_detail::CardDetailScreen;
pub use card_list::CardListScreen;
pub use change_pin::ChangePinScreen;
pub use limits::LimitsScreen;
pub use payment::PaymentScreen;
pub use statement::StatementScreen;
pub use status::StatusScreen;
pub use update_info::UpdateInfoScreen;
