use super::WalletProvider;
use crate::error::WalletError;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

// Bindings to the `window.freighterApi` global installed by the
// @stellar/freighter-api browser bundle.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = freighterApi, js_name = isConnected, catch)]
    async fn is_connected() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = freighterApi, js_name = isAllowed, catch)]
    async fn is_allowed() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = freighterApi, js_name = setAllowed, catch)]
    async fn set_allowed() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = freighterApi, js_name = getPublicKey, catch)]
    async fn get_public_key() -> Result<JsValue, JsValue>;
}

/// [`WalletProvider`] backed by the Freighter browser extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct FreighterWallet;

fn api_loaded() -> bool {
    web_sys::window()
        .and_then(|window| js_sys::Reflect::has(&window, &JsValue::from_str("freighterApi")).ok())
        .unwrap_or(false)
}

fn as_bool(value: JsValue) -> Result<bool, WalletError> {
    value
        .as_bool()
        .ok_or_else(|| WalletError::Interop(format!("expected boolean, got {:?}", value)))
}

async fn ensure_connected() -> Result<(), WalletError> {
    if !api_loaded() {
        return Err(WalletError::NotInstalled);
    }
    let connected = as_bool(is_connected().await.map_err(WalletError::from_js)?)?;
    if connected {
        Ok(())
    } else {
        Err(WalletError::NotInstalled)
    }
}

async fn allow() -> Result<(), WalletError> {
    ensure_connected().await?;
    let allowed = as_bool(set_allowed().await.map_err(WalletError::from_js)?)?;
    if allowed {
        Ok(())
    } else {
        Err(WalletError::PermissionDenied)
    }
}

async fn public_key() -> Result<Option<String>, WalletError> {
    ensure_connected().await?;
    if !as_bool(is_allowed().await.map_err(WalletError::from_js)?)? {
        return Ok(None);
    }
    let key = get_public_key().await.map_err(WalletError::from_js)?;
    match key.as_string() {
        Some(key) if key.is_empty() => Ok(None),
        Some(key) => Ok(Some(key)),
        None => Err(WalletError::Interop(format!("expected public key, got {:?}", key))),
    }
}

impl WalletProvider for FreighterWallet {
    fn name(&self) -> &str {
        "Freighter"
    }

    fn request_permission(&self, done: Callback<Result<(), WalletError>>) {
        spawn_local(async move {
            let result = allow().await;
            match &result {
                Ok(()) => log::info!("Freighter granted access"),
                Err(e) => log::warn!("Freighter permission request failed: {}", e),
            }
            done.emit(result);
        });
    }

    fn fetch_public_key(&self, done: Callback<Result<Option<String>, WalletError>>) {
        spawn_local(async move {
            done.emit(public_key().await);
        });
    }
}
