//! Command-line interface for tictactoe.

use clap::{Parser, ValueEnum};
use tictactoe_engine::Difficulty;

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Who plays X and O
    #[arg(short, long, value_enum, default_value_t = Mode::Pvc)]
    pub mode: Mode,

    /// Computer strength (easy, medium, hard)
    #[arg(short, long, default_value = "hard")]
    pub difficulty: Difficulty,

    /// Display name for X
    #[arg(long)]
    pub x_name: Option<String>,

    /// Display name for O
    #[arg(long)]
    pub o_name: Option<String>,

    /// Seed for reproducible computer play
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file describing both players; replaces --mode and --difficulty
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

/// Player line-up.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Human vs human
    Pvp,
    /// Human (X) vs computer (O)
    Pvc,
    /// Computer (X) vs human (O)
    Cvp,
    /// Computer vs computer, single game
    Cvc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.mode, Mode::Pvc);
        assert_eq!(cli.difficulty, Difficulty::Hard);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parses_flags() {
        let cli = Cli::parse_from([
            "tictactoe",
            "--mode",
            "cvc",
            "--difficulty",
            "Easy",
            "--x-name",
            "Deep",
            "--seed",
            "9",
        ]);
        assert_eq!(cli.mode, Mode::Cvc);
        assert_eq!(cli.difficulty, Difficulty::Easy);
        assert_eq!(cli.x_name.as_deref(), Some("Deep"));
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["tictactoe", "--difficulty", "godlike"]).is_err());
    }
}
