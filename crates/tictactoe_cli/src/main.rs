//! Tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{Cli, GameConfig, Terminal};
use tictactoe_engine::{CellState, GameEngine};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::for_mode(cli.mode, cli.difficulty),
    }
    .with_names(cli.x_name, cli.o_name);
    debug!(?config, "Resolved players");

    let offer_rematch = !config.is_unattended();
    let (x, o) = config.into_players();
    let mut engine = match cli.seed {
        Some(seed) => GameEngine::seeded(x, o, seed)?,
        None => GameEngine::new(x, o)?,
    };

    info!(
        x = %engine.player(CellState::X),
        o = %engine.player(CellState::O),
        "Starting session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut terminal = Terminal::new(stdin.lock(), stdout.lock());
    terminal.run(&mut engine, offer_rematch)
}
