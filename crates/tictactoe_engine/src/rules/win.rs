//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::types::CellState;

/// Checks if `mark` occupies all three cells of any line.
///
/// `Empty` never wins, even on an empty grid.
pub fn has_won(grid: &[[CellState; 3]; 3], mark: CellState) -> bool {
    if !mark.is_mark() {
        return false;
    }
    LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| grid[r][c] == mark))
}

/// Returns the mark holding a completed line, if any.
///
/// X is checked first; a well-formed game never has both.
pub fn winner(grid: &[[CellState; 3]; 3]) -> Option<CellState> {
    CellState::MARKS
        .into_iter()
        .find(|&mark| has_won(grid, mark))
}
