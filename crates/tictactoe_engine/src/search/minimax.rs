//! Minimax search with optional alpha-beta pruning and depth cutoff.
//!
//! Scores are always from the searching mark's point of view. A win scores
//! `WIN_BASE - depth` so nearer wins are preferred, a loss scores
//! `depth - WIN_BASE` so losses are delayed, and a full board scores 0.
//! Depth counts plies below the root; the root's children sit at depth 1.
//!
//! Every recursive call owns its board copy, so no state is shared between
//! branches.

use super::heuristic::evaluate_lines;
use crate::action::Move;
use crate::board::Board;
use crate::types::CellState;
use tracing::{debug, instrument};

/// Base score of a decided game.
pub const WIN_BASE: i32 = 100;

/// Bound larger than any reachable score.
const INFINITY: i32 = i32::MAX / 2;

/// Depth cutoff of the Medium tier, in plies.
pub const MEDIUM_MAX_DEPTH: u8 = 5;

/// How far and how the tree is explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Depth at which the heuristic replaces the true score. `None` searches to
    /// terminal states.
    pub max_depth: Option<u8>,
    /// Whether alpha-beta cutoffs are applied.
    pub pruning: bool,
}

impl SearchLimits {
    /// Full tree with alpha-beta pruning (Hard).
    pub fn full() -> Self {
        Self {
            max_depth: None,
            pruning: true,
        }
    }

    /// Depth-limited plain minimax (Medium).
    pub fn depth_limited(max_depth: u8) -> Self {
        Self {
            max_depth: Some(max_depth),
            pruning: false,
        }
    }

    /// Full tree without pruning. Reference search for checking that pruning
    /// never changes the chosen move.
    pub fn exhaustive() -> Self {
        Self {
            max_depth: None,
            pruning: false,
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move, or `None` on a full board.
    pub best_move: Option<Move>,
    /// Score of `best_move`.
    pub score: i32,
    /// Nodes visited below the root.
    pub nodes: u64,
}

struct Searcher {
    mark: CellState,
    opponent: CellState,
    limits: SearchLimits,
    nodes: u64,
}

/// Searches every legal move for `mark` and returns the best one.
///
/// Moves are tried in row-major order and a later move replaces the current
/// best only on a strictly higher score, so ties go to the first move found.
#[instrument(skip(board), fields(empty = board.legal_moves().len()))]
pub fn search(board: &Board, mark: CellState, limits: SearchLimits) -> SearchResult {
    let mut searcher = Searcher {
        mark,
        opponent: mark.opponent(),
        limits,
        nodes: 0,
    };

    let mut best_move = None;
    let mut best_score = -INFINITY;
    let mut alpha = -INFINITY;

    for mv in board.legal_moves() {
        let mut child = board.copy();
        child.place(mv, mark);
        let score = searcher.minimax(&child, 1, alpha, INFINITY, false);
        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if limits.pruning {
            alpha = alpha.max(best_score);
        }
    }

    let score = if best_move.is_some() { best_score } else { 0 };
    debug!(?best_move, score, nodes = searcher.nodes, "Search complete");
    SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
    }
}

impl Searcher {
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;
        let plies = i32::from(depth);

        if board.has_won(self.mark) {
            return WIN_BASE - plies;
        }
        if board.has_won(self.opponent) {
            return plies - WIN_BASE;
        }
        if board.is_full() {
            return 0;
        }
        if let Some(max_depth) = self.limits.max_depth
            && depth >= max_depth
        {
            return evaluate_lines(board, self.mark);
        }

        let to_move = if maximizing { self.mark } else { self.opponent };
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for mv in board.legal_moves() {
            let mut child = board.copy();
            child.place(mv, to_move);
            let score = self.minimax(&child, depth + 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.limits.pruning && beta <= alpha {
                break;
            }
        }

        best
    }
}
