//! Tic-tac-toe game engine with a difficulty-tiered computer opponent.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid, move legality, win and draw detection
//! - **Move / Player**: value types; players are human or computer
//! - **Search**: minimax with alpha-beta pruning and a line-counting heuristic
//! - **GameEngine**: turns, state transitions, and the presentation contract
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{CellState, Difficulty, GameEngine, GameState, Player};
//!
//! # fn example() -> Result<(), tictactoe_engine::EngineError> {
//! let mut engine = GameEngine::seeded(
//!     Player::human(CellState::X, "Alice"),
//!     Player::computer(CellState::O, "Computer", Difficulty::Hard),
//!     7,
//! )?;
//!
//! assert!(engine.submit_move_at(1, 1));
//! if let Some(reply) = engine.computer_move() {
//!     assert!(engine.submit_move(reply));
//! }
//! assert_eq!(engine.state(), GameState::Playing);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod engine;
mod error;
mod player;
mod rules;
mod types;

pub mod search;

// Crate-level exports - Game types
pub use action::Move;
pub use board::Board;
pub use types::{CellState, Difficulty, GameState};

// Crate-level exports - Players
pub use player::{Player, PlayerKind};

// Crate-level exports - Engine
pub use engine::{FIRST_MARK, GameEngine};
pub use error::{EngineError, EngineErrorKind};

// Crate-level exports - Rules
pub use rules::LINES;
