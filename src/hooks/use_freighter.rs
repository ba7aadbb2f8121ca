use crate::{account::Account, config::WalletConfig, error::WalletError, wallet::WalletHandle};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct UseFreighterHandle {
    wallet: WalletHandle,
    config: WalletConfig,
    account: UseStateHandle<Option<Account>>,
    error: UseStateHandle<Option<WalletError>>,
}

impl UseFreighterHandle {
    pub fn account(&self) -> Option<Account> {
        (*self.account).clone()
    }

    /// Last error seen while reading the account.
    pub fn error(&self) -> Option<WalletError> {
        (*self.error).clone()
    }

    /// Re-reads the active account from the wallet.
    pub fn refresh(&self) {
        let account = self.account.clone();
        let error = self.error.clone();
        let display_chars = self.config.display_chars;
        let on_key = move |result: Result<Option<String>, WalletError>| {
            match to_account(result, display_chars) {
                Ok(next) => {
                    log::debug!("wallet account: {:?}", next);
                    error.set(None);
                    account.set(next);
                }
                Err(e) => {
                    log::warn!("failed to read wallet account: {}", e);
                    account.set(None);
                    error.set(Some(e));
                }
            }
        };
        self.wallet.fetch_public_key(Callback::from(on_key));
    }

    /// Asks the wallet for permission once and refreshes the account when
    /// it is granted. The outcome is forwarded to `done`.
    pub fn request_permission(&self, done: Callback<Result<(), WalletError>>) {
        log::debug!("requesting permission from {}", self.wallet.name());
        let handle = self.clone();
        let on_outcome = move |result: Result<(), WalletError>| {
            if result.is_ok() {
                handle.refresh();
            }
            done.emit(result);
        };
        self.wallet.request_permission(Callback::from(on_outcome));
    }
}

fn to_account(
    result: Result<Option<String>, WalletError>,
    display_chars: usize,
) -> Result<Option<Account>, WalletError> {
    result.map(|key| key.map(|key| Account::from_public_key(&key, display_chars)))
}

#[hook]
pub fn use_freighter(wallet: WalletHandle, config: WalletConfig) -> UseFreighterHandle {
    let account = use_state(|| None);
    let error = use_state(|| None);
    let handle = UseFreighterHandle {
        wallet,
        config,
        account,
        error,
    };

    {
        let handle = handle.clone();
        let wallet = handle.wallet.clone();
        use_effect_with_deps(
            move |_| {
                handle.refresh();
                || ()
            },
            wallet,
        );
    }

    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_become_accounts() {
        let key = "GCKFBEIYTKP6RQ2KBXWVHSB5ZXJ3ZRNN5BK2OB2FH6ULMMXYNSPZ5EYW".to_owned();
        let account = to_account(Ok(Some(key.clone())), 4).unwrap().unwrap();
        assert_eq!(account.address, key);
        assert_eq!(account.display_name, "GCKF…5EYW");
    }

    #[test]
    fn missing_key_is_no_account() {
        assert_eq!(to_account(Ok(None), 4), Ok(None));
        assert_eq!(
            to_account(Err(WalletError::NotInstalled), 4),
            Err(WalletError::NotInstalled)
        );
    }
}
