//! Bounded arena grid
//!
//! Classifies every cell as empty or wall. Coordinates are 1-based in the
//! public contract: valid positions are [1, rows] x [1, cols]. Passing an
//! out-of-bounds position to an accessor is a caller bug, not a runtime
//! condition, and panics.

use serde::{Deserialize, Serialize};

use crate::core::types::{Direction, Position, MAX_COLS, MAX_ROWS};

/// Classification of a single arena cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Empty,
    Wall,
}

/// Bounded 2D grid of cell statuses
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<CellStatus>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is outside [1, 20].
    pub fn new(rows: u32, cols: u32) -> Self {
        if rows < 1 || rows > MAX_ROWS || cols < 1 || cols > MAX_COLS {
            panic!("invalid arena size {} by {}", rows, cols);
        }
        Self {
            rows,
            cols,
            cells: vec![CellStatus::Empty; (rows * cols) as usize],
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 1 && pos.row <= self.rows && pos.col >= 1 && pos.col <= self.cols
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        if !self.in_bounds(pos) {
            panic!("invalid arena position {}", pos);
        }
        ((pos.row - 1) * self.cols + (pos.col - 1)) as usize
    }

    /// # Panics
    ///
    /// Panics when `pos` is out of bounds.
    pub fn status_at(&self, pos: Position) -> CellStatus {
        self.cells[self.index(pos)]
    }

    /// # Panics
    ///
    /// Panics when `pos` is out of bounds.
    pub fn set_status(&mut self, pos: Position, status: CellStatus) {
        let idx = self.index(pos);
        self.cells[idx] = status;
    }

    /// The position one step from `pos` in `dir`, provided the step stays
    /// in bounds and does not land on a wall. `None` means the move is
    /// blocked.
    pub fn try_step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let dest = pos.neighbor(dir)?;
        if !self.in_bounds(dest) || self.status_at(dest) == CellStatus::Wall {
            return None;
        }
        Some(dest)
    }
}
