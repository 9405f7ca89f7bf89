//! Line-based terminal front end.
//!
//! Reads moves as `row col` from any [`BufRead`] and writes the board to any
//! [`Write`], so whole sessions can be scripted in tests.

use anyhow::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, GameState, Move};
use tracing::{debug, info, instrument, warn};

/// Parses `row col` with both coordinates in `0..3`.
pub fn parse_move(input: &str) -> Option<Move> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || row > 2 || col > 2 {
        return None;
    }
    Some(Move::new(row, col))
}

/// Result text shown when a game ends.
pub fn result_message(state: GameState) -> &'static str {
    match state {
        GameState::XWins => "X wins!",
        GameState::OWins => "O wins!",
        GameState::Draw => "It's a draw!",
        GameState::Playing => "",
    }
}

/// How a single turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// A move was applied.
    Moved,
    /// Input ended while waiting for a human move.
    InputClosed,
    /// The computer produced no move the engine accepted.
    ComputerStuck,
}

/// Drives a [`GameEngine`] from a text stream.
pub struct Terminal<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Terminal<I, O> {
    /// Creates a terminal over the given streams.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Consumes the terminal, returning the output stream.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Plays games until the user declines a rematch or input ends.
    ///
    /// With `offer_rematch` false, exactly one game is played.
    #[instrument(skip(self, engine))]
    pub fn run<R: Rng>(&mut self, engine: &mut GameEngine<R>, offer_rematch: bool) -> Result<()> {
        self.print_welcome()?;

        loop {
            writeln!(self.output, "{}", engine.board())?;
            let player = engine.current_player();
            writeln!(self.output, "Current player: {} ({})", player.name(), player.mark())?;

            let turn = if engine.is_current_player_computer() {
                self.computer_turn(engine)?
            } else {
                self.human_turn(engine)?
            };
            match turn {
                Turn::Moved => {}
                Turn::InputClosed => {
                    info!("Input closed, ending session");
                    break;
                }
                Turn::ComputerStuck => {
                    warn!(board = %engine.board(), "Computer could not move, ending session");
                    break;
                }
            }

            let state = engine.state();
            if state.is_terminal() {
                writeln!(self.output, "{}", engine.board())?;
                writeln!(self.output, "{}", result_message(state))?;

                if offer_rematch && self.ask_play_again()? {
                    engine.reset();
                } else {
                    break;
                }
            }
        }

        writeln!(self.output, "Thanks for playing!")?;
        self.output.flush()?;
        Ok(())
    }

    fn computer_turn<R: Rng>(&mut self, engine: &mut GameEngine<R>) -> Result<Turn> {
        writeln!(self.output, "Computer is thinking...")?;
        let Some(mv) = engine.computer_move() else {
            warn!("Computer had no move");
            return Ok(Turn::ComputerStuck);
        };
        debug!(%mv, "Computer move");
        writeln!(self.output, "Computer plays {}", mv)?;
        if engine.submit_move(mv) {
            Ok(Turn::Moved)
        } else {
            warn!(%mv, "Engine rejected computer move");
            Ok(Turn::ComputerStuck)
        }
    }

    /// Prompts until a move is accepted.
    fn human_turn<R: Rng>(&mut self, engine: &mut GameEngine<R>) -> Result<Turn> {
        loop {
            write!(
                self.output,
                "Enter your move (row col, e.g., '0 2' for row 0, column 2): "
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Turn::InputClosed);
            };

            let Some(mv) = parse_move(&line) else {
                writeln!(
                    self.output,
                    "Invalid input. Please enter two numbers (row and column, 0-2)."
                )?;
                continue;
            };

            if engine.submit_move(mv) {
                return Ok(Turn::Moved);
            }
            writeln!(
                self.output,
                "Invalid move. That position is already taken or out of bounds."
            )?;
        }
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "Play again? (yes/no): ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default().to_lowercase();
        Ok(answer == "yes" || answer == "y")
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_welcome(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!")?;
        writeln!(
            self.output,
            "Enter moves as 'row col' (e.g., '0 0' for top-left, '1 1' for center)"
        )?;
        writeln!(
            self.output,
            "First number is the row (0-2), second number is the column (0-2)\n"
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::io::Cursor;
    use tictactoe_engine::{CellState, Difficulty, Player};

    fn run_script(engine: &mut GameEngine<StepRng>, script: &str, rematch: bool) -> String {
        let mut terminal = Terminal::new(Cursor::new(script.to_string()), Vec::new());
        terminal.run(engine, rematch).unwrap();
        String::from_utf8(terminal.into_output()).unwrap()
    }

    fn humans() -> GameEngine<StepRng> {
        GameEngine::with_rng(
            Player::human(CellState::X, "Ann"),
            Player::human(CellState::O, "Bob"),
            StepRng::new(0, 0),
        )
        .unwrap()
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0 2"), Some(Move::new(0, 2)));
        assert_eq!(parse_move("  1   1 "), Some(Move::new(1, 1)));
        assert_eq!(parse_move("3 0"), None);
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("1 2 3"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("-1 0"), None);
    }

    #[test]
    fn test_scripted_pvp_win() {
        let mut engine = humans();
        let out = run_script(&mut engine, "0 0\n1 0\n0 1\n1 1\n0 2\nno\n", true);
        assert!(out.contains("Current player: Ann (X)"));
        assert!(out.contains("Current player: Bob (O)"));
        assert!(out.contains("X wins!"));
        assert!(out.ends_with("Thanks for playing!\n"));
        assert_eq!(engine.state(), GameState::XWins);
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut engine = humans();
        let out = run_script(&mut engine, "hello\n0 0\n0 0\n", true);
        assert!(out.contains("Invalid input."));
        assert!(out.contains("Invalid move."));
        // Input ran out with O still to move.
        assert_eq!(engine.state(), GameState::Playing);
        assert_eq!(engine.board().cell(0, 0).unwrap(), CellState::X);
    }

    #[test]
    fn test_rematch_resets() {
        let mut engine = humans();
        let script = "0 0\n1 0\n0 1\n1 1\n0 2\nyes\n2 2\n";
        let out = run_script(&mut engine, script, true);
        assert!(out.contains("X wins!"));
        assert_eq!(engine.state(), GameState::Playing);
        assert_eq!(engine.board().cell(2, 2).unwrap(), CellState::X);
        assert_eq!(engine.board().cell(0, 0).unwrap(), CellState::Empty);
    }

    #[test]
    fn test_computer_vs_computer_single_game() {
        let mut engine = GameEngine::with_rng(
            Player::computer(CellState::X, "A", Difficulty::Hard),
            Player::computer(CellState::O, "B", Difficulty::Hard),
            StepRng::new(0, 0),
        )
        .unwrap();
        let out = run_script(&mut engine, "", false);
        assert!(out.contains("It's a draw!"));
        assert!(!out.contains("Play again?"));
    }

    #[test]
    fn test_turn_outcomes() {
        let mut engine = humans();
        let mut terminal = Terminal::new(Cursor::new("1 1\n".to_string()), Vec::new());
        assert_eq!(terminal.human_turn(&mut engine).unwrap(), Turn::Moved);
        assert_eq!(terminal.human_turn(&mut engine).unwrap(), Turn::InputClosed);

        // A computer asked to move for a human seat gets nothing back.
        assert_eq!(terminal.computer_turn(&mut engine).unwrap(), Turn::ComputerStuck);
        assert_eq!(engine.board().cell(1, 1).unwrap(), CellState::X);
    }

    #[test]
    fn test_computer_turn_on_human_seat_is_stuck() {
        // After the computer X moves, O is human and nothing is submitted.
        let mut engine = GameEngine::with_rng(
            Player::computer(CellState::X, "A", Difficulty::Easy),
            Player::human(CellState::O, "B"),
            StepRng::new(0, 0),
        )
        .unwrap();
        let mut terminal = Terminal::new(Cursor::new(String::new()), Vec::new());
        assert_eq!(terminal.computer_turn(&mut engine).unwrap(), Turn::Moved);
        assert_eq!(terminal.computer_turn(&mut engine).unwrap(), Turn::ComputerStuck);
        let out = String::from_utf8(terminal.into_output()).unwrap();
        assert_eq!(out.matches("Computer plays").count(), 1);
    }
}
