//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: same seed produces the same food sequence
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: runs anywhere (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`snake`]: the snake body, head-first, fixed capacity
//! - [`food`]: rejection-sampling food spawner
//! - [`game_state`]: the Ready/Running/GameOver machine and per-tick step
//! - [`rng`]: seedable LCG so sessions are reproducible from a `u32`
//! - [`snapshot`]: render-facing copy of the committed state
//!
//! # Game Rules
//!
//! - The snake advances one cell per tick along the effective heading
//! - At most one heading change is buffered per tick window (last write wins)
//! - A buffered heading that reverses the one in effect is dropped
//! - Leaving the grid or biting any pre-move body cell ends the game;
//!   the cell the tail is vacating still counts as occupied
//! - Eating food grows the snake by one and scores one point
//!
//! Call [`GameState::tick`](game_state::GameState::tick) once per fixed
//! interval while the phase is `Running`.

pub mod food;
pub mod game_state;
pub mod rng;
pub mod snake;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use food::spawn_food;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use snake::Snake;
pub use snapshot::{GameSnapshot, CELL_BODY, CELL_EMPTY, CELL_FOOD, CELL_HEAD};
