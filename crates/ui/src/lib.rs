//! Front-end glue for the frameless save editor window
//!
//! Everything here is thin by design: DOM input on the custom title bar
//! becomes fire-and-forget host notifications, and file operations are
//! forwarded over the injected `window.rpc` bridge. The native host owns
//! all window and filesystem behavior.

pub mod bridge;
mod chrome;
mod config;
pub mod rpc;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Document;

use crate::chrome::{suppress_context_menu, suppress_reload, wire_window_chrome, ChromeTargets};
use crate::config::ChromeConfig;

pub use crate::bridge::HostBridge;

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    let bridge = Rc::new(HostBridge::from_window(&window)?);

    // The suppressors don't touch the title bar, install them right away
    suppress_reload(&document)?;
    suppress_context_menu(&document)?;

    // Title-bar wiring needs the elements to exist. When the module loads
    // before parsing finishes, defer to a one-shot DOMContentLoaded
    // listener so `init` fires exactly once, after the DOM is queryable.
    if document.ready_state() == "loading" {
        let document_wire = document.clone();
        let bridge_wire = Rc::clone(&bridge);
        let on_loaded = Closure::once(Box::new(move || {
            if let Err(e) = wire_chrome(&document_wire, &bridge_wire) {
                web_sys::console::error_1(&format!("[shell] chrome wiring failed: {e:?}").into());
            }
        }) as Box<dyn FnOnce()>);
        document
            .add_event_listener_with_callback("DOMContentLoaded", on_loaded.as_ref().unchecked_ref())?;
        on_loaded.forget();
    } else {
        wire_chrome(&document, &bridge)?;
    }

    Ok(())
}

fn wire_chrome(document: &Document, bridge: &Rc<HostBridge>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let config = ChromeConfig::from_window(&window);
    let targets = ChromeTargets::locate(document, &config)?;
    wire_window_chrome(document, &targets, bridge)?;
    web_sys::console::log_1(&"[shell] window chrome wired".into());
    Ok(())
}
