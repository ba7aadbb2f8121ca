use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Freighter wallet not found")]
    NotInstalled,
    #[error("Permission denied by the wallet")]
    PermissionDenied,
    #[error("wallet extension error: {0}")]
    Extension(String),
    #[error("unexpected response from wallet: {0}")]
    Interop(String),
}

impl WalletError {
    /// Converts a value thrown across the JS boundary into an extension error.
    pub fn from_js(value: JsValue) -> Self {
        if let Some(error) = value.dyn_ref::<js_sys::Error>() {
            return Self::Extension(String::from(error.message()));
        }
        match value.as_string() {
            Some(message) => Self::Extension(message),
            None => Self::Extension(format!("{:?}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            WalletError::NotInstalled.to_string(),
            "Freighter wallet not found"
        );
        assert_eq!(
            WalletError::PermissionDenied.to_string(),
            "Permission denied by the wallet"
        );
        assert_eq!(
            WalletError::Extension("locked".into()).to_string(),
            "wallet extension error: locked"
        );
    }
}
