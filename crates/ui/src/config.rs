use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Element ids the chrome controller binds to
///
/// Defaults match the ids in the shipped index.html. A page with
/// different markup can override them through an optional
/// `window.EDITOR_CONFIG` object:
///
/// ```js
/// window.EDITOR_CONFIG = { dragZoneId: "titlebar", closeId: "btn-close" };
/// ```
pub struct ChromeConfig {
    pub drag_zone_id: String,
    pub minimize_id: String,
    pub maximize_id: String,
    pub close_id: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            drag_zone_id: String::from("drag_zone"),
            minimize_id: String::from("minimize"),
            maximize_id: String::from("maximize"),
            close_id: String::from("close"),
        }
    }
}

impl ChromeConfig {
    pub fn from_window(window: &Window) -> Self {
        let mut config = Self::default();

        let overrides = match Reflect::get(window, &"EDITOR_CONFIG".into()) {
            Ok(v) if !v.is_undefined() && !v.is_null() => v,
            _ => return config,
        };

        if let Some(id) = string_field(&overrides, "dragZoneId") {
            config.drag_zone_id = id;
        }
        if let Some(id) = string_field(&overrides, "minimizeId") {
            config.minimize_id = id;
        }
        if let Some(id) = string_field(&overrides, "maximizeId") {
            config.maximize_id = id;
        }
        if let Some(id) = string_field(&overrides, "closeId") {
            config.close_id = id;
        }
        config
    }
}

fn string_field(obj: &JsValue, key: &str) -> Option<String> {
    Reflect::get(obj, &key.into()).ok()?.as_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let config = ChromeConfig::default();
        assert_eq!(config.drag_zone_id, "drag_zone");
        assert_eq!(config.minimize_id, "minimize");
        assert_eq!(config.maximize_id, "maximize");
        assert_eq!(config.close_id, "close");
    }
}
