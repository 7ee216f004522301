use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use save_editor_protocol::{Method, Notification};

/// Handle to the `window.rpc` object injected by the native host
///
/// The host installs the bridge before any script runs; a missing or
/// malformed bridge is a startup defect, not a recoverable state.
pub struct HostBridge {
    rpc: JsValue,
    notify_fn: Function,
    call_fn: Function,
}

impl HostBridge {
    pub fn from_window(window: &Window) -> Result<Self, JsValue> {
        let rpc = Reflect::get(window, &"rpc".into())?;
        if rpc.is_undefined() || rpc.is_null() {
            return Err(JsValue::from_str("window.rpc bridge not found"));
        }
        let notify_fn = Reflect::get(&rpc, &"notify".into())?.dyn_into::<Function>()?;
        let call_fn = Reflect::get(&rpc, &"call".into())?.dyn_into::<Function>()?;
        Ok(Self {
            rpc,
            notify_fn,
            call_fn,
        })
    }

    /// Fire-and-forget signal to the host. Never suspends; a failed
    /// dispatch is logged and dropped.
    pub fn notify(&self, notification: Notification) {
        if let Err(e) = self
            .notify_fn
            .call1(&self.rpc, &notification.as_str().into())
        {
            web_sys::console::error_1(
                &format!("[shell] notify '{notification}' failed: {e:?}").into(),
            );
        }
    }

    /// Request/response call to the host. Resolves with the host's result
    /// or rejects with the host's error, unmodified.
    pub async fn call(
        &self,
        method: &Method,
        payload: Option<&JsValue>,
    ) -> Result<JsValue, JsValue> {
        let method_name = JsValue::from_str(&method.to_string());
        let ret = match payload {
            Some(payload) => self.call_fn.call2(&self.rpc, &method_name, payload)?,
            None => self.call_fn.call1(&self.rpc, &method_name)?,
        };
        let promise: Promise = ret.dyn_into()?;
        JsFuture::from(promise).await
    }
}
