//! Player line-up configuration.

use crate::cli::Mode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_engine::{CellState, Difficulty, Player};
use tracing::{debug, info, instrument};

/// How one side is controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideKind {
    /// Moves typed at the terminal.
    Human,
    /// Moves computed by the engine.
    Computer,
}

/// Configuration for one side of the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SideConfig {
    /// Display name.
    name: String,

    /// Who controls this side.
    kind: SideKind,

    /// Computer strength; ignored for humans.
    #[serde(default)]
    difficulty: Difficulty,
}

impl SideConfig {
    fn human(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: SideKind::Human,
            difficulty: Difficulty::default(),
        }
    }

    fn computer(name: &str, difficulty: Difficulty) -> Self {
        Self {
            name: name.to_string(),
            kind: SideKind::Computer,
            difficulty,
        }
    }

    fn into_player(self, mark: CellState) -> Player {
        match self.kind {
            SideKind::Human => Player::human(mark, self.name),
            SideKind::Computer => Player::computer(mark, self.name, self.difficulty),
        }
    }
}

/// Both sides of a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// The side playing X (moves first).
    x: SideConfig,

    /// The side playing O.
    o: SideConfig,
}

impl GameConfig {
    /// Line-up for a command-line mode.
    #[instrument]
    pub fn for_mode(mode: Mode, difficulty: Difficulty) -> Self {
        let (x, o) = match mode {
            Mode::Pvp => (SideConfig::human("Player 1"), SideConfig::human("Player 2")),
            Mode::Pvc => (
                SideConfig::human("Player 1"),
                SideConfig::computer("Computer", difficulty),
            ),
            Mode::Cvp => (
                SideConfig::computer("Computer", difficulty),
                SideConfig::human("Player 1"),
            ),
            Mode::Cvc => (
                SideConfig::computer("Computer X", difficulty),
                SideConfig::computer("Computer O", difficulty),
            ),
        };
        Self { x, o }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(x = %config.x.name, o = %config.o.name, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces display names where given.
    pub fn with_names(mut self, x_name: Option<String>, o_name: Option<String>) -> Self {
        if let Some(name) = x_name {
            self.x.name = name;
        }
        if let Some(name) = o_name {
            self.o.name = name;
        }
        self
    }

    /// Returns true if neither side needs terminal input.
    pub fn is_unattended(&self) -> bool {
        self.x.kind == SideKind::Computer && self.o.kind == SideKind::Computer
    }

    /// Builds the X and O players.
    pub fn into_players(self) -> (Player, Player) {
        (
            self.x.into_player(CellState::X),
            self.o.into_player(CellState::O),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
