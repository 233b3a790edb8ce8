//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The
//! heading buffer itself lives in the core state machine; this module only
//! translates keys.

pub mod map;

pub use tui_snake_types as types;

pub use map::{is_theme_toggle, map_key, should_quit};
