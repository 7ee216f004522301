//! Shared host-bridge protocol types for the save editor shell
//!
//! Defines the notification/method vocabulary and the payload shapes used
//! between the WASM UI and the native host.

pub mod events;
pub mod file;
pub mod methods;

pub use events::*;
pub use file::*;
pub use methods::*;
