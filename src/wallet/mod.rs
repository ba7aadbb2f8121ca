mod freighter;

pub use freighter::FreighterWallet;

use crate::error::WalletError;
use std::{ops::Deref, rc::Rc};
use yew::Callback;

/// Capability to talk to a browser wallet.
///
/// Both operations complete through `done`, which may be emitted
/// synchronously or after an async round-trip to the extension.
pub trait WalletProvider {
    fn name(&self) -> &str;

    /// Asks the wallet to allow this site. Resolves to `PermissionDenied`
    /// when the user rejects the prompt.
    fn request_permission(&self, done: Callback<Result<(), WalletError>>);

    /// Reads the public key of the active account, `None` if the site is
    /// not allowed yet.
    fn fetch_public_key(&self, done: Callback<Result<Option<String>, WalletError>>);
}

/// Shared, comparable handle to a [`WalletProvider`], suitable for props
/// and context.
#[derive(Clone)]
pub struct WalletHandle(Rc<dyn WalletProvider>);

impl WalletHandle {
    pub fn new(provider: impl WalletProvider + 'static) -> Self {
        Self(Rc::new(provider))
    }

    pub fn freighter() -> Self {
        Self::new(FreighterWallet)
    }
}

impl Deref for WalletHandle {
    type Target = dyn WalletProvider;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for WalletHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
