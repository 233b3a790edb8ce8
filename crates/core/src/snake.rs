//! Snake module - the ordered body of occupied cells
//!
//! Head first, tail last, backed by a fixed-capacity array. The grid area
//! bounds the length, so the body never allocates.

use arrayvec::ArrayVec;

use crate::types::{Cell, Heading, GRID_AREA, INITIAL_SNAKE_LEN, SPAWN_HEAD};

/// The snake body. Cells are unique; the head is index 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    cells: ArrayVec<Cell, GRID_AREA>,
}

impl Snake {
    /// Create the spawn-position snake: head at [`SPAWN_HEAD`], body
    /// extending opposite `heading`.
    pub fn new(heading: Heading) -> Self {
        let (hx, hy) = SPAWN_HEAD;
        let (dx, dy) = heading.delta();

        let mut cells = ArrayVec::new();
        for i in 0..INITIAL_SNAKE_LEN as i8 {
            cells.push(Cell::new(hx - dx * i, hy - dy * i));
        }
        Self { cells }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All occupied cells, head first.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True iff `cell` is occupied by any body segment.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.iter().any(|&c| c == cell)
    }

    /// Advance the head onto `next`.
    ///
    /// With `grow` the tail stays (length +1), otherwise the tail cell is
    /// vacated. Callers have already ruled `next` out of the body, so the
    /// no-duplicates invariant holds after the move.
    pub fn advance(&mut self, next: Cell, grow: bool) {
        if !grow {
            let _ = self.cells.pop();
        }
        self.cells.insert(0, next);
    }
}
