mod account_label;
mod connect_button;
mod freighter_provider;
mod wallet_data;

pub use account_label::AccountLabel;
pub use connect_button::{ConnectButton, ConnectButtonProps};
pub use freighter_provider::{FreighterProvider, FreighterProviderProps};
pub use wallet_data::{select_view, WalletData, WalletView};
