//! Terminal front end for [`tictactoe_engine`].
//!
//! - **cli**: command-line flags
//! - **config**: who plays X and O, from flags or a TOML file
//! - **terminal**: the line-based game loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod terminal;

pub use cli::{Cli, Mode};
pub use config::{ConfigError, GameConfig, SideConfig, SideKind};
pub use terminal::{Terminal, Turn};
