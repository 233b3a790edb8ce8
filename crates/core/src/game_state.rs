//! Game state module - the Ready/Running/GameOver machine
//!
//! Owns the snake, the food, the score and the heading buffer, and advances
//! them one step per tick. Collisions are normal terminal transitions, not
//! errors; nothing in here can fail.

use crate::food::spawn_food;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{Cell, GameAction, Heading, Phase, StepOutcome};

const SPAWN_HEADING: Heading = Heading::Right;

/// Complete game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    snake: Snake,
    food: Cell,
    /// Heading applied on the most recent tick (or the spawn heading).
    heading: Heading,
    /// At most one buffered heading per tick window, last write wins.
    pending: Option<Heading>,
    score: u32,
    phase: Phase,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: SimpleRng,
    seed: u32,
}

impl GameState {
    /// Create a fresh session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let snake = Snake::new(SPAWN_HEADING);
        let mut rng = SimpleRng::new(seed);
        let food = spawn_food(&mut rng, &snake);

        Self {
            snake,
            food,
            heading: SPAWN_HEADING,
            pending: None,
            score: 0,
            phase: Phase::Ready,
            episode_id: 0,
            rng,
            seed,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// The seed this session was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Buffer a heading change for the next tick.
    ///
    /// Rejects the exact inverse of the heading in effect (the pending one
    /// if set, else the last applied one); a second legal turn inside the
    /// same tick window overwrites the first. The first accepted turn moves
    /// the session from `Ready` to `Running`.
    ///
    /// Returns whether the input was accepted.
    pub fn queue_turn(&mut self, candidate: Heading) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let in_effect = self.pending.unwrap_or(self.heading);
        if candidate.is_reversal_of(in_effect) {
            return false;
        }

        self.pending = Some(candidate);
        if self.phase == Phase::Ready {
            self.phase = Phase::Running;
        }
        true
    }

    /// Reinitialize snake, food, score, heading and phase.
    ///
    /// The episode counter survives and the RNG stream continues, so the new
    /// episode gets a different food layout while the whole session stays
    /// reproducible from the original seed.
    pub fn restart(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        let seed = self.seed;
        let rng = self.rng.clone();

        *self = Self::new(seed);
        self.episode_id = next_episode;
        self.rng = rng;
        self.food = spawn_food(&mut self.rng, &self.snake);
    }

    /// Apply a game action; returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(heading) => self.queue_turn(heading),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Advance one simulation step.
    ///
    /// No-op unless `Running`. Resolves the effective heading, moves the
    /// head one cell, and either dies (wall or any pre-move body cell, the
    /// vacating tail included), grows on food, or just moves.
    pub fn tick(&mut self) -> StepOutcome {
        if self.phase != Phase::Running {
            return StepOutcome::Idle;
        }

        if let Some(pending) = self.pending.take() {
            self.heading = pending;
        }
        let next = self.snake.head().step(self.heading);

        if !next.in_bounds() || self.snake.contains(next) {
            self.phase = Phase::GameOver;
            return StepOutcome::Died;
        }

        let ate = next == self.food;
        self.snake.advance(next, ate);

        if ate {
            self.score += 1;
            self.food = spawn_food(&mut self.rng, &self.snake);
            StepOutcome::Ate
        } else {
            StepOutcome::Moved
        }
    }

    /// Place the food at a fixed cell (test fixtures only)
    #[cfg(test)]
    pub fn set_food(&mut self, cell: Cell) {
        self.food = cell;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GRID_SIZE, INITIAL_SNAKE_LEN, SPAWN_HEAD};

    fn running(seed: u32) -> GameState {
        let mut state = GameState::new(seed);
        assert!(state.queue_turn(Heading::Right));
        state
    }

    #[test]
    fn new_session_matches_documented_initial_values() {
        let state = GameState::new(12345);

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.score(), 0);
        assert_eq!(state.heading(), Heading::Right);
        assert_eq!(state.episode_id(), 0);
        assert_eq!(state.snake().len(), INITIAL_SNAKE_LEN);
        assert_eq!(state.snake().head(), Cell::new(SPAWN_HEAD.0, SPAWN_HEAD.1));
        assert!(state.food().in_bounds());
        assert!(!state.snake().contains(state.food()));
    }

    #[test]
    fn tick_is_idle_until_first_input() {
        let mut state = GameState::new(1);

        assert_eq!(state.tick(), StepOutcome::Idle);
        assert_eq!(state.snake().head(), Cell::new(8, 10));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn first_accepted_input_starts_the_game() {
        let mut state = GameState::new(1);
        state.set_food(Cell::new(0, 0));

        assert!(state.queue_turn(Heading::Up));
        assert_eq!(state.phase(), Phase::Running);
        assert_eq!(state.tick(), StepOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(8, 9));
    }

    #[test]
    fn reversal_in_ready_is_dropped_and_does_not_start() {
        let mut state = GameState::new(1);

        // Spawn heading is Right; Left is its exact inverse.
        assert!(!state.queue_turn(Heading::Left));
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn reversal_of_pending_heading_is_dropped() {
        let mut state = running(1);
        state.set_food(Cell::new(0, 0));

        // Two opposite turns inside one tick window: the second is dropped.
        assert!(state.queue_turn(Heading::Down));
        assert!(!state.queue_turn(Heading::Up));

        assert_eq!(state.tick(), StepOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(8, 11));
    }

    #[test]
    fn second_legal_turn_in_a_window_wins() {
        let mut state = running(1);
        state.set_food(Cell::new(0, 0));

        assert!(state.queue_turn(Heading::Down));
        assert_eq!(state.tick(), StepOutcome::Moved); // (8,11)
        assert_eq!(state.tick(), StepOutcome::Moved); // (8,12)

        // Two legal turns inside one window: Left, then Down overwrites it.
        assert!(state.queue_turn(Heading::Left));
        assert!(state.queue_turn(Heading::Down));
        assert_eq!(state.tick(), StepOutcome::Moved);
        assert_eq!(state.snake().head(), Cell::new(8, 13));
    }

    #[test]
    fn eating_food_grows_and_scores_exactly_once() {
        let mut state = running(7);
        state.set_food(Cell::new(12, 10));

        // Head at (8,10) heading Right: 4 ticks reach the food.
        for _ in 0..3 {
            assert_eq!(state.tick(), StepOutcome::Moved);
            assert_eq!(state.score(), 0);
            assert_eq!(state.snake().len(), 3);
        }
        assert_eq!(state.tick(), StepOutcome::Ate);
        assert_eq!(state.snake().head(), Cell::new(12, 10));
        assert_eq!(state.score(), 1);
        assert_eq!(state.snake().len(), 4);
        // A fresh food was spawned off the grown body.
        assert!(!state.snake().contains(state.food()));
    }

    #[test]
    fn wall_exit_is_terminal_and_freezes_state() {
        let mut state = GameState::new(5);
        assert!(state.queue_turn(Heading::Up));

        // Head starts at y=10; at most 11 ticks reach the top wall. Park the
        // food far from the path so the length stays put.
        state.set_food(Cell::new(0, 19));

        let mut died = false;
        for _ in 0..12 {
            if state.tick() == StepOutcome::Died {
                died = true;
                break;
            }
        }
        assert!(died);
        assert_eq!(state.phase(), Phase::GameOver);

        let head = state.snake().head();
        let food = state.food();
        let score = state.score();

        // Frozen: further ticks and inputs change nothing.
        assert_eq!(state.tick(), StepOutcome::Idle);
        assert!(!state.queue_turn(Heading::Down));
        assert_eq!(state.snake().head(), head);
        assert_eq!(state.food(), food);
        assert_eq!(state.score(), score);
        // The snake itself never left the grid.
        assert!(head.in_bounds());
    }

    #[test]
    fn left_wall_exit_from_x0_is_terminal() {
        let mut state = GameState::new(5);
        assert!(state.queue_turn(Heading::Up));
        state.set_food(Cell::new(0, 19));
        assert_eq!(state.tick(), StepOutcome::Moved);

        assert!(state.queue_turn(Heading::Left));
        // x goes 8 -> 0 in 8 ticks, then the 9th leaves the grid.
        for _ in 0..8 {
            assert_eq!(state.tick(), StepOutcome::Moved);
        }
        assert_eq!(state.snake().head().x, 0);
        assert_eq!(state.tick(), StepOutcome::Died);
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn vacating_tail_cell_still_blocks() {
        // Grow to length 4, then loop back onto the tail cell. With the
        // pre-move body rule this dies even though the tail would have moved
        // out on the same tick.
        let mut state = running(3);
        state.set_food(Cell::new(9, 10));
        assert_eq!(state.tick(), StepOutcome::Ate);
        assert_eq!(state.snake().len(), 4);
        // Body now: (9,10) (8,10) (7,10) (6,10).
        state.set_food(Cell::new(0, 0));

        assert!(state.queue_turn(Heading::Down));
        assert_eq!(state.tick(), StepOutcome::Moved); // (9,11)
        assert!(state.queue_turn(Heading::Left));
        assert_eq!(state.tick(), StepOutcome::Moved); // (8,11)
        assert!(state.queue_turn(Heading::Up));
        // Next cell is (8,10): the tail is about to vacate it, but the
        // pre-move check counts it as occupied.
        assert_eq!(state.tick(), StepOutcome::Died);
        assert_eq!(state.phase(), Phase::GameOver);
    }

    #[test]
    fn self_collision_on_longer_body_is_terminal() {
        let mut state = running(2);
        // Feed the snake to length 6 along a straight line.
        for step in 1..=3 {
            state.set_food(Cell::new(8 + step, 10));
            assert_eq!(state.tick(), StepOutcome::Ate);
        }
        assert_eq!(state.snake().len(), 6);
        state.set_food(Cell::new(0, 0));

        // Tight clockwise turn back into the body.
        assert!(state.queue_turn(Heading::Down));
        assert_eq!(state.tick(), StepOutcome::Moved);
        assert!(state.queue_turn(Heading::Left));
        assert_eq!(state.tick(), StepOutcome::Moved);
        assert!(state.queue_turn(Heading::Up));
        assert_eq!(state.tick(), StepOutcome::Died);
    }

    #[test]
    fn restart_restores_initial_values_and_bumps_episode() {
        let mut state = running(9);
        state.set_food(Cell::new(9, 10));
        assert_eq!(state.tick(), StepOutcome::Ate);
        assert!(state.queue_turn(Heading::Up));

        assert!(state.apply_action(GameAction::Restart));

        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.score(), 0);
        assert_eq!(state.heading(), Heading::Right);
        assert_eq!(state.episode_id(), 1);
        assert_eq!(state.snake().len(), INITIAL_SNAKE_LEN);
        assert_eq!(state.snake().head(), Cell::new(8, 10));
        assert!(!state.snake().contains(state.food()));
        // Buffered heading did not leak across the restart.
        assert_eq!(state.tick(), StepOutcome::Idle);
    }

    #[test]
    fn restart_from_game_over_reenters_ready() {
        let mut state = GameState::new(4);
        assert!(state.queue_turn(Heading::Up));
        state.set_food(Cell::new(0, 19));
        while state.tick() != StepOutcome::Died {}
        assert_eq!(state.phase(), Phase::GameOver);

        state.restart();
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.queue_turn(Heading::Down));
        assert_eq!(state.phase(), Phase::Running);
    }

    #[test]
    fn restarted_episodes_draw_fresh_food() {
        let mut state = GameState::new(8);
        let mut foods = Vec::new();
        for _ in 0..8 {
            foods.push(state.food());
            state.restart();
        }
        // The RNG stream continues across restarts, so at least two of the
        // eight placements differ.
        assert!(foods.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn snake_stays_in_bounds_while_running() {
        for seed in 1..6 {
            let mut state = GameState::new(seed);
            assert!(state.queue_turn(Heading::Right));
            let mut rng = SimpleRng::new(seed ^ 0xdead_beef);

            for _ in 0..2000 {
                let candidate = match rng.next_range(4) {
                    0 => Heading::Up,
                    1 => Heading::Down,
                    2 => Heading::Left,
                    _ => Heading::Right,
                };
                state.queue_turn(candidate);

                if state.tick() == StepOutcome::Died {
                    state.restart();
                    state.queue_turn(Heading::Right);
                    continue;
                }
                for &cell in state.snake().cells() {
                    assert!(cell.in_bounds());
                }
                assert!(!state.snake().contains(state.food()));
            }
        }
    }

    #[test]
    fn grid_size_is_the_only_bound() {
        // Walk the full width: from (8,10) heading Right there are exactly
        // GRID_SIZE - 1 - 8 in-bounds moves before the wall.
        let mut state = running(6);
        state.set_food(Cell::new(0, 0));

        let moves = GRID_SIZE as i8 - 1 - SPAWN_HEAD.0;
        for _ in 0..moves {
            assert_eq!(state.tick(), StepOutcome::Moved);
        }
        assert_eq!(state.snake().head().x, GRID_SIZE as i8 - 1);
        assert_eq!(state.tick(), StepOutcome::Died);
    }
}
