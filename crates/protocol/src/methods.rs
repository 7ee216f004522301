/// Fire-and-forget window signals sent UI -> host
///
/// These carry no payload and expect no response; the host reacts by
/// driving the native window (show, drag, minimize, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// DOM is queryable, the host may reveal the window
    Init,
    /// Begin a native window drag from the title bar
    DragWindow,
    /// Flip the maximized state
    ToggleMaximize,
    /// Minimize the window
    Minimize,
    /// Close the window
    Close,
}

impl Notification {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::DragWindow => "drag_window",
            Self::ToggleMaximize => "toggle_maximize",
            Self::Minimize => "minimize",
            Self::Close => "close",
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request/response methods understood by the host
pub enum Method {
    // File operations
    Open,         // open
    SaveDialog,   // save_dialog
    Save,         // save
    Reload,       // reload

    // Persistence
    LoadDatabase, // load_database

    /// Host methods without a named wrapper yet
    Other(String),
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "open" => Self::Open,
            "save_dialog" => Self::SaveDialog,
            "save" => Self::Save,
            "reload" => Self::Reload,
            "load_database" => Self::LoadDatabase,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "open",
            Self::SaveDialog => "save_dialog",
            Self::Save => "save",
            Self::Reload => "reload",
            Self::LoadDatabase => "load_database",
            Self::Other(s) => s,
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_wire_names() {
        assert_eq!(Notification::Init.as_str(), "init");
        assert_eq!(Notification::DragWindow.as_str(), "drag_window");
        assert_eq!(Notification::ToggleMaximize.as_str(), "toggle_maximize");
        assert_eq!(Notification::Minimize.as_str(), "minimize");
        assert_eq!(Notification::Close.as_str(), "close");
    }

    #[test]
    fn test_method_round_trip() {
        for name in ["open", "save_dialog", "save", "reload", "load_database"] {
            assert_eq!(Method::from(name).to_string(), name);
        }
    }

    #[test]
    fn test_unknown_method_lands_in_other() {
        let method = Method::from("export_settings");
        assert!(matches!(method, Method::Other(ref s) if s == "export_settings"));
        assert_eq!(method.to_string(), "export_settings");
    }
}
