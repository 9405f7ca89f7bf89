//! First-class move type for tic-tac-toe.
//!
//! A move is a bare coordinate pair. It carries no mark and no reference to a
//! board, so the same value can be tested against any board or handed from the
//! search engine back to the game engine unchanged.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Creates a move. Coordinates are not range-checked here; see
    /// [`Board::is_legal`](crate::Board::is_legal).
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index (0-2 when legal).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index (0-2 when legal).
    pub fn col(&self) -> usize {
        self.col
    }
}

impl From<(usize, usize)> for Move {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
