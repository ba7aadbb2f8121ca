mod use_account;
mod use_freighter;
mod use_is_mounted;

pub use use_account::{use_account, use_account_error};
pub use use_freighter::{use_freighter, UseFreighterHandle};
pub use use_is_mounted::use_is_mounted;
