use serde::{Deserialize, Serialize};

/// Name of the host-originated DOM custom event reporting maximize state
///
/// The host dispatches it on `document` whenever the native window's
/// maximized flag changes; the UI mirrors the flag into the title bar.
pub const MAXIMIZED_STATE_CHANGED: &str = "editor_maximized_state_changed";

/// Detail payload of [`MAXIMIZED_STATE_CHANGED`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MaximizedState {
    pub is_maximized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maximized_state_detail_shape() {
        let state: MaximizedState = serde_json::from_str(r#"{ "is_maximized": true }"#).unwrap();
        assert!(state.is_maximized);
    }
}
