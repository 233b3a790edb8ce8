//! Food module - picks the next food cell

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::Cell;

/// Sample an unoccupied cell uniformly at random.
///
/// Rejection sampling: draw grid cells until one misses the snake. The board
/// is far larger than the snake in practice; a body covering the entire grid
/// would spin forever, which is accepted rather than handled.
pub fn spawn_food(rng: &mut SimpleRng, snake: &Snake) -> Cell {
    loop {
        let cell = rng.next_cell();
        if !snake.contains(cell) {
            return cell;
        }
    }
}
