//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure so screens can be asserted on as plain text
//! - Handle double-width emoji faces without tearing the grid

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use brainmatch_core as core;
pub use brainmatch_types as types;

pub use fb::{display_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Screen, UiView, Viewport};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
