//! Yew components for connecting a page to the Freighter wallet extension.
//!
//! Wrap the tree in a [`FreighterProvider`](components::FreighterProvider)
//! and drop a [`WalletData`](components::WalletData) where the account
//! should appear.

pub mod account;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod wallet;

pub use account::Account;
pub use config::{init_logging, WalletConfig};
pub use error::WalletError;
pub use wallet::{FreighterWallet, WalletHandle, WalletProvider};
