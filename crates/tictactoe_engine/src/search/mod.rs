//! Move selection for computer players.
//!
//! # Difficulty tiers
//!
//! - **Easy**: a uniformly random legal move.
//! - **Medium**: with probability [`MEDIUM_SEARCH_PROBABILITY`], the win/block
//!   shortcut followed by minimax cut off at [`MEDIUM_MAX_DEPTH`] plies and
//!   scored by [`evaluate_lines`]; otherwise the Easy behaviour.
//! - **Hard**: the win/block shortcut followed by a full alpha-beta search.
//!   Never loses.
//!
//! The board passed in is never mutated. Randomness comes from the caller so
//! tests can inject a deterministic source.

mod heuristic;
mod minimax;

pub use heuristic::{OPEN_TWO_WEIGHT, evaluate_lines};
pub use minimax::{MEDIUM_MAX_DEPTH, SearchLimits, SearchResult, WIN_BASE, search};

use crate::action::Move;
use crate::board::Board;
use crate::types::{CellState, Difficulty};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Chance that a Medium opponent searches instead of playing at random.
pub const MEDIUM_SEARCH_PROBABILITY: f64 = 0.8;

/// Picks a move for `mark` at the given difficulty.
///
/// Returns `None` only when the board has no legal move.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    mark: CellState,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Move> {
    let chosen = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.gen_bool(MEDIUM_SEARCH_PROBABILITY) {
                best_move(board, mark, SearchLimits::depth_limited(MEDIUM_MAX_DEPTH))
            } else {
                debug!("Medium falling back to a random move");
                random_move(board, rng)
            }
        }
        Difficulty::Hard => best_move(board, mark, SearchLimits::full()),
    };
    debug!(?chosen, "Move chosen");
    chosen
}

/// Uniformly random legal move.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Move> {
    board.legal_moves().choose(rng).copied()
}

/// Win/block shortcut, then a tree search bounded by `limits`.
pub fn best_move(board: &Board, mark: CellState, limits: SearchLimits) -> Option<Move> {
    if let Some(mv) = winning_move(board, mark) {
        debug!(%mv, "Taking immediate win");
        return Some(mv);
    }
    if let Some(mv) = winning_move(board, mark.opponent()) {
        debug!(%mv, "Blocking opponent win");
        return Some(mv);
    }
    search(board, mark, limits).best_move
}

/// First legal move, in row-major order, that completes a line for `mark`.
pub fn winning_move(board: &Board, mark: CellState) -> Option<Move> {
    board.legal_moves().into_iter().find(|&mv| {
        let mut trial = board.copy();
        trial.place(mv, mark);
        trial.has_won(mark)
    })
}
