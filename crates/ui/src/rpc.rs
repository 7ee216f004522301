//! RPC forwarding to the native host
//!
//! Thin named wrappers over the bridge `call` primitive so the rest of
//! the UI never handles raw method-name strings. Each function issues
//! exactly one call and returns the host's result as given — no
//! validation, no retry, no caching, no error wrapping.

use std::path::{Path, PathBuf};

use wasm_bindgen::JsValue;

use save_editor_protocol::{Method, RpcFile};

use crate::bridge::HostBridge;

/// Single generic dispatch point, also the escape hatch for host
/// methods without a named wrapper (`Method::Other`).
pub async fn invoke(
    bridge: &HostBridge,
    method: Method,
    payload: Option<&JsValue>,
) -> Result<JsValue, JsValue> {
    bridge.call(&method, payload).await
}

/// Prompt the user for a file to open. `None` when the dialog is
/// cancelled.
pub async fn open(bridge: &HostBridge) -> Result<Option<RpcFile>, JsValue> {
    let value = bridge.call(&Method::Open, None).await?;
    from_js(value)
}

/// Prompt for a save location, starting from `path`. `None` when the
/// dialog is cancelled.
pub async fn save_dialog(bridge: &HostBridge, path: &Path) -> Result<Option<PathBuf>, JsValue> {
    let path = JsValue::from_str(&path.to_string_lossy());
    let value = bridge.call(&Method::SaveDialog, Some(&path)).await?;
    from_js(value)
}

/// Write an assembled file payload. The host's resolved value is
/// returned unmodified.
pub async fn save(bridge: &HostBridge, file: &RpcFile) -> Result<JsValue, JsValue> {
    let payload = serde_wasm_bindgen::to_value(file).map_err(JsValue::from)?;
    bridge.call(&Method::Save, Some(&payload)).await
}

/// Re-read a previously opened file from disk
pub async fn reload(bridge: &HostBridge, path: &Path) -> Result<RpcFile, JsValue> {
    let path = JsValue::from_str(&path.to_string_lossy());
    let value = bridge.call(&Method::Reload, Some(&path)).await?;
    from_js(value)
}

/// Load a database file shipped next to the executable
pub async fn load_database(bridge: &HostBridge, path: &str) -> Result<RpcFile, JsValue> {
    let value = bridge
        .call(&Method::LoadDatabase, Some(&JsValue::from_str(path)))
        .await?;
    from_js(value)
}

fn from_js<T>(value: JsValue) -> Result<T, JsValue>
where
    T: serde::de::DeserializeOwned,
{
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}
