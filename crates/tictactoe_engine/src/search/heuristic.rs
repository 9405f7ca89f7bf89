//! Static evaluation for positions cut off before a terminal state.

use crate::board::Board;
use crate::rules::LINES;
use crate::types::CellState;

/// Weight of one open two-in-a-row.
pub const OPEN_TWO_WEIGHT: i32 = 3;

/// Scores a non-terminal board from `mark`'s point of view.
///
/// Counts lines holding exactly two of `mark` and one empty cell, minus lines
/// holding exactly two opponent marks and one empty cell, each weighted by
/// [`OPEN_TWO_WEIGHT`].
pub fn evaluate_lines(board: &Board, mark: CellState) -> i32 {
    let opponent = mark.opponent();
    let mut own = 0;
    let mut theirs = 0;

    for line in &LINES {
        let cells = board.line(line);
        let empty = cells.iter().filter(|&&c| c == CellState::Empty).count();
        if empty != 1 {
            continue;
        }
        let ours = cells.iter().filter(|&&c| c == mark).count();
        if ours == 2 {
            own += 1;
        } else if cells.iter().filter(|&&c| c == opponent).count() == 2 {
            theirs += 1;
        }
    }

    OPEN_TWO_WEIGHT * own - OPEN_TWO_WEIGHT * theirs
}
