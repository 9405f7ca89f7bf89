//! Engine error types.
//!
//! Only API misuse is an error. Ordinary gameplay failures such as an occupied
//! cell or a move after the game ended are reported as `false` by the engine.

use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineErrorKind {
    /// A raw cell read addressed a cell outside the grid.
    #[display("Position out of bounds: ({row}, {col})")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The engine was built with an invalid pair of players.
    #[display("Invalid player configuration: {_0}")]
    Configuration(String),

    /// Move selection was invoked on a player whose moves arrive externally.
    #[display("{_0} does not select moves; submit them through the engine")]
    UnsupportedMoveSelection(String),
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// Error category.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}
