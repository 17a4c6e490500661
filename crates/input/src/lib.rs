//! Terminal input module.
//!
//! Maps `crossterm` key and mouse events into [`crate::types::Intent`] values
//! and, for the configuration keys, into stepped
//! [`crate::types::ConfigChange`] values. Nothing here touches the session;
//! the caller decides what to apply.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_config_key, handle_key_event, handle_mouse_event, should_quit, FieldSettings};
