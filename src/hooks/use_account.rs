use super::UseFreighterHandle;
use crate::{account::Account, error::WalletError};
use yew::prelude::*;

#[hook]
fn use_freighter_context() -> UseFreighterHandle {
    use_context::<UseFreighterHandle>().expect(
        "no freighter provider found. you must wrap your components in a <FreighterProvider/>",
    )
}

#[hook]
pub fn use_account() -> Option<Account> {
    use_freighter_context().account()
}

/// Error from the last attempt to read the account, if it failed.
#[hook]
pub fn use_account_error() -> Option<WalletError> {
    use_freighter_context().error()
}
