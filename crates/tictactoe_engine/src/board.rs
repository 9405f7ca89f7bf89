//! The 3x3 grid.

use crate::action::Move;
use crate::error::{EngineError, EngineErrorKind};
use crate::rules;
use crate::types::CellState;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// 3x3 tic-tac-toe board.
///
/// The grid is stored inline, so `Clone` produces a fully independent board.
/// Search code relies on this to explore hypothetical positions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    grid: [[CellState; 3]; 3],
}

impl Board {
    /// Side length of the grid.
    pub const SIZE: usize = 3;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        Self::SIZE
    }

    /// Reads a cell.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::OutOfRange`] if either coordinate is not in `0..3`.
    #[track_caller]
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, EngineError> {
        if !Self::in_bounds(row, col) {
            return Err(EngineErrorKind::OutOfRange { row, col }.into());
        }
        Ok(self.grid[row][col])
    }

    /// Returns true iff the move is on the grid and its cell is empty.
    pub fn is_legal(&self, mv: Move) -> bool {
        Self::in_bounds(mv.row(), mv.col()) && self.grid[mv.row()][mv.col()] == CellState::Empty
    }

    /// Places `mark` if the move is legal.
    ///
    /// Returns whether the board changed. `mark` must not be `Empty`.
    #[instrument(level = "trace", skip(self))]
    pub fn place(&mut self, mv: Move, mark: CellState) -> bool {
        debug_assert!(mark.is_mark(), "cannot place an Empty mark");
        if !self.is_legal(mv) {
            trace!("Rejected placement");
            return false;
        }
        self.grid[mv.row()][mv.col()] = mark;
        true
    }

    /// Returns true iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.grid)
    }

    /// Returns true iff `mark` holds all three cells of a line. Always false for `Empty`.
    pub fn has_won(&self, mark: CellState) -> bool {
        rules::has_won(&self.grid, mark)
    }

    /// Returns the mark holding a completed line, if any.
    pub fn winner(&self) -> Option<CellState> {
        rules::winner(&self.grid)
    }

    /// Returns a deep, independent copy of this board.
    pub fn copy(&self) -> Board {
        self.clone()
    }

    /// Resets every cell to `Empty` in place.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        for row in self.grid.iter_mut() {
            row.fill(CellState::Empty);
        }
    }

    /// All legal moves in row-major order.
    ///
    /// The order is fixed; search tie-breaking depends on it.
    pub fn legal_moves(&self) -> Vec<Move> {
        (0..Self::SIZE)
            .flat_map(|row| (0..Self::SIZE).map(move |col| Move::new(row, col)))
            .filter(|&mv| self.is_legal(mv))
            .collect()
    }

    /// Cells of one line, in line order.
    pub(crate) fn line(&self, line: &rules::Line) -> [CellState; 3] {
        line.map(|(r, c)| self.grid[r][c])
    }

    fn in_bounds(row: usize, col: usize) -> bool {
        row < Self::SIZE && col < Self::SIZE
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with row and column headers:
    ///
    /// ```text
    ///   0   1   2
    /// 0 X | O |
    ///   ---------
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  0   1   2")?;
        for (i, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
            writeln!(f, "{} {}", i, cells.join(" | "))?;
            if i < Self::SIZE - 1 {
                writeln!(f, "  ---------")?;
            }
        }
        Ok(())
    }
}
