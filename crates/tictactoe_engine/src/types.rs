//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Mark of the first player to move.
    X,
    /// Mark of the second player to move.
    O,
}

impl CellState {
    /// The two marks a player can hold, in turn order.
    pub const MARKS: [CellState; 2] = [CellState::X, CellState::O];

    /// Returns the opposing mark. `Empty` has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            CellState::X => CellState::O,
            CellState::O => CellState::X,
            CellState::Empty => CellState::Empty,
        }
    }

    /// Returns true for `X` and `O`.
    pub fn is_mark(self) -> bool {
        self != CellState::Empty
    }

    /// Single-character symbol used when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            CellState::X => 'X',
            CellState::O => 'O',
            CellState::Empty => ' ',
        }
    }
}

impl std::fmt::Display for CellState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellState::Empty => write!(f, "Empty"),
            mark => write!(f, "{}", mark.symbol()),
        }
    }
}

/// Overall status of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Game is ongoing.
    #[default]
    Playing,
    /// X completed a line.
    XWins,
    /// O completed a line.
    OWins,
    /// Board filled with no winner.
    Draw,
}

impl GameState {
    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameState::Playing
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<CellState> {
        match self {
            GameState::XWins => Some(CellState::X),
            GameState::OWins => Some(CellState::O),
            GameState::Playing | GameState::Draw => None,
        }
    }

    /// Terminal state for a win by `mark`.
    ///
    /// Returns `None` for `Empty`, which cannot win.
    pub fn won_by(mark: CellState) -> Option<Self> {
        match mark {
            CellState::X => Some(GameState::XWins),
            CellState::O => Some(GameState::OWins),
            CellState::Empty => None,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Playing => write!(f, "In progress"),
            GameState::XWins => write!(f, "X wins!"),
            GameState::OWins => write!(f, "O wins!"),
            GameState::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Strength of a computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random legal moves.
    Easy,
    /// Shallow search that sometimes plays at random.
    #[default]
    Medium,
    /// Exhaustive search; never loses.
    Hard,
}
