use crate::game_state::GameState;
use crate::types::{Heading, Phase, GRID_SIZE};

/// Empty cell marker in [`GameSnapshot::grid`]
pub const CELL_EMPTY: u8 = 0;
/// Snake body segment marker
pub const CELL_BODY: u8 = 1;
/// Snake head marker
pub const CELL_HEAD: u8 = 2;
/// Food marker
pub const CELL_FOOD: u8 = 3;

/// Render-facing copy of the committed game state.
///
/// Plain data, `Copy`, and cheap to rewrite in place every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Occupancy grid, `grid[y][x]`, using the `CELL_*` markers
    pub grid: [[u8; GRID_SIZE as usize]; GRID_SIZE as usize],
    pub phase: Phase,
    pub heading: Heading,
    pub score: u32,
    pub snake_len: u32,
    pub episode_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.phase = Phase::Ready;
        self.heading = Heading::Right;
        self.score = 0;
        self.snake_len = 0;
        self.episode_id = 0;
        self.seed = 0;
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize],
            phase: Phase::Ready,
            heading: Heading::Right,
            score: 0,
            snake_len: 0,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}

impl GameState {
    /// Write the current state into a caller-owned snapshot.
    ///
    /// This is the allocation-free path; renderers keep one snapshot and
    /// refresh it every frame.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = [[CELL_EMPTY; GRID_SIZE as usize]; GRID_SIZE as usize];
        for &cell in self.snake().cells() {
            out.grid[cell.y as usize][cell.x as usize] = CELL_BODY;
        }
        let head = self.snake().head();
        out.grid[head.y as usize][head.x as usize] = CELL_HEAD;
        let food = self.food();
        out.grid[food.y as usize][food.x as usize] = CELL_FOOD;

        out.phase = self.phase();
        out.heading = self.heading();
        out.score = self.score();
        out.snake_len = self.snake().len() as u32;
        out.episode_id = self.episode_id();
        out.seed = self.seed();
    }

    /// Convenience helper that allocates a fresh snapshot.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
