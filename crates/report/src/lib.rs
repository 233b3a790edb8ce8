//! Score reporting module - best-effort bridge to the remote scoreboard
//!
//! The game loop never talks HTTP itself. It hands final scores to a
//! [`Reporter`] handle, which owns a background tokio runtime and drives two
//! REST calls:
//!
//! - `POST {base}/scores` with `{"name": ..., "score": ...}` on game over
//! - `GET {base}/scores` on startup and after each successful submission
//!
//! # Failure policy
//!
//! Every failure — refused connection, non-success status, malformed body —
//! is swallowed and logged at debug level. Nothing here ever reaches the
//! player, blocks a tick, or retries. A scoreboard outage leaves the last
//! displayed list (or none) in place.
//!
//! # Environment Variables
//!
//! - `SNAKE_SCORES_URL`: scoreboard base URL (default: `http://localhost:3001`)
//! - `SNAKE_PLAYER`: name submitted with scores (default: `anonymous`)
//! - `SNAKE_SCORES_DISABLED`: set to `1` or `true` to disable reporting entirely

pub mod config;
pub mod reporter;
pub mod wire;

pub use tui_snake_types as types;

pub use config::ReporterConfig;
pub use reporter::Reporter;
pub use wire::{parse_scores, top_entries, ScoreEntry, ScoreList};
