//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::InputAction`] intents and tracks the tile
//! cursor on the board grid.

pub mod cursor;
pub mod map;

pub use brainmatch_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit};
