//! Draw detection logic for tic-tac-toe.

use crate::types::CellState;

/// Checks if no cell is empty.
///
/// A full board with no winner indicates a draw.
pub fn is_full(grid: &[[CellState; 3]; 3]) -> bool {
    grid.iter().flatten().all(|cell| cell.is_mark())
}

#[cfg(test)]
mod tests {
    use super::super::win::winner;
    use super::*;

    const E: CellState = CellState::Empty;
    const X: CellState = CellState::X;
    const O: CellState = CellState::O;

    #[test]
    fn test_partial_grid_not_full() {
        assert!(!is_full(&[[E; 3]; 3]));
        assert!(!is_full(&[[X, O, X], [O, X, O], [O, X, E]]));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let grid = [[X, O, X], [O, X, X], [O, X, O]];
        assert!(is_full(&grid));
        assert_eq!(winner(&grid), None);
    }

    #[test]
    fn test_win_with_empty_cells_not_full() {
        let grid = [[X, X, X], [O, O, E], [E, E, E]];
        assert!(!is_full(&grid));
    }
}
