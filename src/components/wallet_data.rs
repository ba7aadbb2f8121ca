use super::{AccountLabel, ConnectButton};
use crate::{
    account::Account,
    hooks::{use_account, use_account_error, use_is_mounted},
};
use yew::prelude::*;

/// What [`WalletData`] shows for a given mount state and account.
#[derive(Debug, PartialEq, Eq)]
pub enum WalletView<'a> {
    Account(&'a Account),
    Connect,
}

/// The account is only shown once the component is mounted.
pub fn select_view(mounted: bool, account: Option<&Account>) -> WalletView<'_> {
    match account {
        Some(account) if mounted => WalletView::Account(account),
        _ => WalletView::Connect,
    }
}

#[function_component]
pub fn WalletData() -> Html {
    let mounted = use_is_mounted();
    let account = use_account();
    // Wallet state is client-only, so errors wait for the mount as well.
    let error = use_account_error().filter(|_| mounted);

    match select_view(mounted, account.as_ref()) {
        WalletView::Account(account) => html! {
            <AccountLabel account={account.clone()} />
        },
        WalletView::Connect => html! {
            <>
                <ConnectButton label="Connect Wallet" />
                if let Some(error) = error {
                    <p class="wallet-error">{error.to_string()}</p>
                }
            </>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_always_connects() {
        let account = Account::new("alice", "alice.eth");
        assert_eq!(select_view(false, Some(&account)), WalletView::Connect);
        assert_eq!(select_view(false, None), WalletView::Connect);
    }

    #[test]
    fn mounted_without_account_connects() {
        assert_eq!(select_view(true, None), WalletView::Connect);
    }

    #[test]
    fn mounted_with_account_shows_it() {
        let account = Account::new("alice", "alice.eth");
        match select_view(true, Some(&account)) {
            WalletView::Account(shown) => assert_eq!(shown.display_name, "alice.eth"),
            WalletView::Connect => panic!("expected the account to be shown"),
        }
    }
}
