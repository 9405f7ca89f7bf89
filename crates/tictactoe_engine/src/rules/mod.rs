//! Line geometry and terminal-condition rules.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{has_won, winner};

/// A line of three cells, as `(row, col)` pairs.
pub type Line = [(usize, usize); 3];

/// Every line that wins the game: 3 rows, 3 columns, 2 diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];
