//! Players and their move-selection capability.
//!
//! A player is plain data: a fixed mark, a display name, and a [`PlayerKind`]
//! that decides how moves are produced. Computer players delegate to the
//! search engine. Human moves arrive from outside through
//! [`GameEngine::submit_move`](crate::GameEngine::submit_move), so asking a
//! human to select a move is a wiring error rather than a gameplay event.

use crate::action::Move;
use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind};
use crate::search;
use crate::types::{CellState, Difficulty};
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// How a player's moves are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves are supplied by an external actor.
    Human,
    /// Moves are computed by the search engine at the given strength.
    Computer(Difficulty),
}

/// A participant in a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Mark placed by this player.
    #[getter(copy)]
    mark: CellState,
    /// Display name.
    name: String,
    /// Move source.
    #[getter(copy)]
    kind: PlayerKind,
}

impl Player {
    /// Creates a human player.
    pub fn human(mark: CellState, name: impl Into<String>) -> Self {
        Self {
            mark,
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    /// Creates a computer player.
    pub fn computer(mark: CellState, name: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            mark,
            name: name.into(),
            kind: PlayerKind::Computer(difficulty),
        }
    }

    /// Returns true if moves are computed rather than submitted.
    pub fn is_computer(&self) -> bool {
        matches!(self.kind, PlayerKind::Computer(_))
    }

    /// Search strength, for computer players.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self.kind {
            PlayerKind::Computer(difficulty) => Some(difficulty),
            PlayerKind::Human => None,
        }
    }

    /// Selects a move on `board` for this player's mark.
    ///
    /// Returns `Ok(None)` when no legal move exists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::UnsupportedMoveSelection`] for human players.
    #[track_caller]
    #[instrument(skip(self, board, rng), fields(player = %self.name, mark = ?self.mark))]
    pub fn select_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Option<Move>, EngineError> {
        match self.kind {
            PlayerKind::Computer(difficulty) => {
                Ok(search::choose_move(board, self.mark, difficulty, rng))
            }
            PlayerKind::Human => {
                warn!("Move selection requested from a human player");
                Err(EngineErrorKind::UnsupportedMoveSelection(format!(
                    "Human player '{}'",
                    self.name
                ))
                .into())
            }
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
