//! Window chrome controller
//!
//! Maps title-bar input to host notifications, mirrors the host-reported
//! maximize state into the title bar, and suppresses the two WebView
//! default behaviors (page reload, context menu) that make no sense in a
//! frameless desktop window.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, Document, Element, KeyboardEvent, MouseEvent};

use save_editor_protocol::{MaximizedState, Notification, MAXIMIZED_STATE_CHANGED};

use crate::bridge::HostBridge;
use crate::config::ChromeConfig;

/// `MouseEvent.buttons` value for a primary-button-only press
const PRIMARY_BUTTON: u16 = 1;
/// `MouseEvent.detail` click count at which a press becomes a double-click
const DOUBLE_CLICK: i32 = 2;
/// Class toggled on the maximize control to mirror the window state
const MAXIMIZED_CLASS: &str = "maximized";

/// The title-bar elements the controller drives
pub struct ChromeTargets {
    pub drag_zone: Element,
    pub minimize: Element,
    pub maximize: Element,
    pub close: Element,
}

impl ChromeTargets {
    /// Resolve the title-bar elements by id. A missing element is a
    /// wiring-time precondition violation.
    pub fn locate(document: &Document, config: &ChromeConfig) -> Result<Self, JsValue> {
        Ok(Self {
            drag_zone: require_element(document, &config.drag_zone_id)?,
            minimize: require_element(document, &config.minimize_id)?,
            maximize: require_element(document, &config.maximize_id)?,
            close: require_element(document, &config.close_id)?,
        })
    }
}

fn require_element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing title bar element #{id}")))
}

/// Reload chord: bare F5, or Ctrl+R in either case
fn is_reload_chord(key: &str, ctrl: bool) -> bool {
    key == "F5" || (ctrl && (key == "r" || key == "R"))
}

/// Map a drag-zone press to the notification it sends, if any
///
/// Evaluated on every press; double-click detection itself is the only
/// debounce.
fn drag_action(buttons: u16, detail: i32) -> Option<Notification> {
    if buttons != PRIMARY_BUTTON {
        return None;
    }
    if detail >= DOUBLE_CLICK {
        Some(Notification::ToggleMaximize)
    } else {
        Some(Notification::DragWindow)
    }
}

/// Block the WebView's page-reload chords. Pure suppression, nothing is
/// forwarded to the host.
pub fn suppress_reload(document: &Document) -> Result<(), JsValue> {
    let on_keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if is_reload_chord(&e.key(), e.ctrl_key()) {
            e.prevent_default();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
    on_keydown.forget();
    Ok(())
}

/// Disable the WebView default context menu
pub fn suppress_context_menu(document: &Document) -> Result<(), JsValue> {
    let on_contextmenu = Closure::wrap(Box::new(move |e: MouseEvent| {
        e.prevent_default();
    }) as Box<dyn FnMut(MouseEvent)>);
    document
        .add_event_listener_with_callback("contextmenu", on_contextmenu.as_ref().unchecked_ref())?;
    on_contextmenu.forget();
    Ok(())
}

/// Wire the title-bar controls and the maximize-state mirror, then send
/// the `init` handshake that lets the host reveal the window.
pub fn wire_window_chrome(
    document: &Document,
    targets: &ChromeTargets,
    bridge: &Rc<HostBridge>,
) -> Result<(), JsValue> {
    setup_drag_zone(&targets.drag_zone, bridge)?;
    setup_button(&targets.minimize, bridge, Notification::Minimize)?;
    setup_button(&targets.maximize, bridge, Notification::ToggleMaximize)?;
    setup_button(&targets.close, bridge, Notification::Close)?;
    setup_maximize_mirror(document, &targets.maximize)?;

    bridge.notify(Notification::Init);
    Ok(())
}

/// Primary press starts a drag, double-click toggles maximize — the same
/// host action as the maximize button.
fn setup_drag_zone(drag_zone: &Element, bridge: &Rc<HostBridge>) -> Result<(), JsValue> {
    let bridge = Rc::clone(bridge);
    let on_mousedown = Closure::wrap(Box::new(move |e: MouseEvent| {
        if let Some(notification) = drag_action(e.buttons(), e.detail()) {
            bridge.notify(notification);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    drag_zone.add_event_listener_with_callback("mousedown", on_mousedown.as_ref().unchecked_ref())?;
    on_mousedown.forget();
    Ok(())
}

fn setup_button(
    button: &Element,
    bridge: &Rc<HostBridge>,
    notification: Notification,
) -> Result<(), JsValue> {
    let bridge = Rc::clone(bridge);
    let on_click = Closure::wrap(Box::new(move || {
        bridge.notify(notification);
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// Mirror host-reported maximize state into the maximize control.
/// `DomTokenList` add/remove are idempotent, so repeated events with the
/// same flag are harmless.
fn setup_maximize_mirror(document: &Document, maximize: &Element) -> Result<(), JsValue> {
    let class_list = maximize.class_list();
    let on_state = Closure::wrap(Box::new(move |e: CustomEvent| {
        let state: MaximizedState = match serde_wasm_bindgen::from_value(e.detail()) {
            Ok(state) => state,
            Err(e) => {
                web_sys::console::warn_1(
                    &format!("[shell] bad maximize state detail: {e}").into(),
                );
                return;
            }
        };
        let _ = if state.is_maximized {
            class_list.add_1(MAXIMIZED_CLASS)
        } else {
            class_list.remove_1(MAXIMIZED_CLASS)
        };
    }) as Box<dyn FnMut(CustomEvent)>);
    document
        .add_event_listener_with_callback(MAXIMIZED_STATE_CHANGED, on_state.as_ref().unchecked_ref())?;
    on_state.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_chord_suppressed() {
        assert!(is_reload_chord("F5", false));
        assert!(is_reload_chord("F5", true));
        assert!(is_reload_chord("r", true));
        assert!(is_reload_chord("R", true));
    }

    #[test]
    fn test_other_keys_pass_through() {
        assert!(!is_reload_chord("r", false));
        assert!(!is_reload_chord("R", false));
        assert!(!is_reload_chord("F4", false));
        assert!(!is_reload_chord("Enter", true));
        assert!(!is_reload_chord("s", true));
    }

    #[test]
    fn test_single_primary_press_drags() {
        assert_eq!(drag_action(1, 1), Some(Notification::DragWindow));
    }

    #[test]
    fn test_double_click_toggles_maximize() {
        assert_eq!(drag_action(1, 2), Some(Notification::ToggleMaximize));
        // Triple-click still lands within the double-click window
        assert_eq!(drag_action(1, 3), Some(Notification::ToggleMaximize));
    }

    #[test]
    fn test_non_primary_press_ignored() {
        assert_eq!(drag_action(2, 1), None); // secondary
        assert_eq!(drag_action(4, 2), None); // auxiliary
        assert_eq!(drag_action(3, 1), None); // chorded press
        assert_eq!(drag_action(0, 1), None);
    }
}
