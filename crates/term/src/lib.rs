//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the pure [`GameView`] maps a core
//! snapshot into a framebuffer, and [`TerminalRenderer`] flushes framebuffers
//! to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view a pure function of the snapshot (same input, same frame)
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod theme;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, ScoreRow, Viewport};
pub use renderer::TerminalRenderer;
pub use theme::Theme;
