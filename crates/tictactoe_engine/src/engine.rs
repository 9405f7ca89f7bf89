//! Turn management and the public game contract.
//!
//! [`GameEngine`] is the only thing that mutates the board during play. A
//! presentation layer drives it with three calls:
//!
//! - [`submit_move`](GameEngine::submit_move) for every move, human or computer;
//! - [`computer_move`](GameEngine::computer_move) to ask an AI player what it
//!   would play, without applying it;
//! - [`reset`](GameEngine::reset) to start over with the same players.
//!
//! The engine never calls back into the presentation layer and has no internal
//! synchronization. Callers that run [`computer_move`](GameEngine::computer_move)
//! on another thread must not submit moves until it returns.

use crate::action::Move;
use crate::board::Board;
use crate::error::{EngineError, EngineErrorKind};
use crate::player::Player;
use crate::types::{CellState, GameState};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// Mark that always moves first.
pub const FIRST_MARK: CellState = CellState::X;

/// Tic-tac-toe game engine.
#[derive(Debug)]
pub struct GameEngine<R = StdRng> {
    board: Board,
    player_x: Player,
    player_o: Player,
    to_move: CellState,
    state: GameState,
    rng: R,
}

impl GameEngine<StdRng> {
    /// Creates an engine whose computer players draw randomness from the OS.
    ///
    /// # Errors
    ///
    /// See [`GameEngine::with_rng`].
    #[track_caller]
    pub fn new(first: Player, second: Player) -> Result<Self, EngineError> {
        Self::with_rng(first, second, StdRng::from_entropy())
    }

    /// Creates an engine with reproducible computer play.
    ///
    /// # Errors
    ///
    /// See [`GameEngine::with_rng`].
    #[track_caller]
    pub fn seeded(first: Player, second: Player, seed: u64) -> Result<Self, EngineError> {
        Self::with_rng(first, second, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Creates an engine with an explicit randomness source.
    ///
    /// The players may be given in either order; one must hold `X` and the
    /// other `O`. The `X` player always moves first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineErrorKind::Configuration`] if either player holds
    /// `Empty` or both hold the same mark.
    #[track_caller]
    #[instrument(skip(rng), fields(first = %first, second = %second))]
    pub fn with_rng(first: Player, second: Player, rng: R) -> Result<Self, EngineError> {
        let (player_x, player_o) = match (first.mark(), second.mark()) {
            (CellState::X, CellState::O) => (first, second),
            (CellState::O, CellState::X) => (second, first),
            (a, b) => {
                warn!(?a, ?b, "Rejected player configuration");
                return Err(EngineErrorKind::Configuration(format!(
                    "players must hold X and O once each, got {a} and {b}"
                ))
                .into());
            }
        };

        info!(x = %player_x, o = %player_o, "Game created");
        Ok(Self {
            board: Board::new(),
            player_x,
            player_o,
            to_move: FIRST_MARK,
            state: GameState::Playing,
            rng,
        })
    }

    /// Applies `mv` for the player to move.
    ///
    /// Returns false, leaving everything unchanged, if the game is over or the
    /// move is illegal. On success the state is recomputed and, if the game
    /// continues, the turn passes to the other player.
    #[instrument(skip(self), fields(to_move = ?self.to_move, state = ?self.state))]
    pub fn submit_move(&mut self, mv: Move) -> bool {
        if self.state.is_terminal() {
            debug!("Move rejected: game is over");
            return false;
        }
        if !self.board.place(mv, self.to_move) {
            debug!("Move rejected: illegal on current board");
            return false;
        }

        self.state = self.derive_state();
        if self.state.is_terminal() {
            info!(state = ?self.state, "Game over");
        } else {
            self.to_move = self.to_move.opponent();
        }
        true
    }

    /// Convenience for [`submit_move`](Self::submit_move) with raw coordinates.
    pub fn submit_move_at(&mut self, row: usize, col: usize) -> bool {
        self.submit_move(Move::new(row, col))
    }

    /// Asks the current player, if it is a computer, which move it would play.
    ///
    /// The move is not applied; pass it to [`submit_move`](Self::submit_move).
    /// Returns `None` if the game is over, the current player is human, or no
    /// legal move exists.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn computer_move(&mut self) -> Option<Move> {
        if self.state.is_terminal() {
            return None;
        }
        let player = seat(&self.player_x, &self.player_o, self.to_move);
        if !player.is_computer() {
            return None;
        }
        match player.select_move(&self.board, &mut self.rng) {
            Ok(mv) => mv,
            Err(e) => {
                warn!(error = %e, "Computer move selection failed");
                None
            }
        }
    }

    /// Clears the board and hands the first move back to `X`.
    ///
    /// Players, names and difficulties are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = FIRST_MARK;
        self.state = GameState::Playing;
        info!("Game reset");
    }

    fn derive_state(&self) -> GameState {
        if self.board.has_won(CellState::X) {
            GameState::XWins
        } else if self.board.has_won(CellState::O) {
            GameState::OWins
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }
}

impl<R> GameEngine<R> {
    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is. After a game ends, the player who made the
    /// final move.
    pub fn current_player(&self) -> &Player {
        self.player(self.to_move)
    }

    /// Returns true if the player to move is computer-controlled.
    pub fn is_current_player_computer(&self) -> bool {
        self.current_player().is_computer()
    }

    /// Player holding `mark`. `Empty` resolves to the first player.
    pub fn player(&self, mark: CellState) -> &Player {
        seat(&self.player_x, &self.player_o, mark)
    }
}

/// Borrows only the players, leaving the rest of the engine free for `&mut`.
fn seat<'a>(player_x: &'a Player, player_o: &'a Player, mark: CellState) -> &'a Player {
    match mark {
        CellState::O => player_o,
        CellState::X | CellState::Empty => player_x,
    }
}
