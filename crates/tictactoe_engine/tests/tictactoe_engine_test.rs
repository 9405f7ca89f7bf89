//! Tests for turn management and game-state transitions.

use rand::rngs::mock::StepRng;
use tictactoe_engine::{Board, CellState, Difficulty, GameEngine, GameState, Move, Player};

fn two_humans() -> GameEngine<StepRng> {
    GameEngine::with_rng(
        Player::human(CellState::X, "Player 1"),
        Player::human(CellState::O, "Player 2"),
        StepRng::new(0, 0),
    )
    .expect("valid players")
}

fn play(engine: &mut GameEngine<StepRng>, moves: &[(usize, usize)]) {
    for &(r, c) in moves {
        assert!(engine.submit_move_at(r, c), "move ({r}, {c}) rejected");
    }
}

#[test]
fn test_x_wins_top_row() {
    let mut engine = two_humans();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(engine.state(), GameState::Playing);

    assert!(engine.submit_move_at(0, 2));
    assert_eq!(engine.state(), GameState::XWins);
    assert_eq!(engine.state().winner(), Some(CellState::X));

    let before = engine.board().clone();
    for (r, c) in [(2, 2), (2, 0), (1, 2)] {
        assert!(!engine.submit_move_at(r, c));
    }
    assert_eq!(engine.board(), &before);
    assert_eq!(engine.state(), GameState::XWins);
}

#[test]
fn test_o_wins_column() {
    let mut engine = two_humans();
    play(&mut engine, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 1)]);
    assert_eq!(engine.state(), GameState::OWins);
}

#[test]
fn test_draw() {
    let mut engine = two_humans();
    play(
        &mut engine,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (1, 1),
            (2, 0),
            (2, 2),
            (2, 1),
        ],
    );
    assert_eq!(engine.state(), GameState::Draw);
    assert!(engine.board().is_full());
}

#[test]
fn test_rejected_moves_leave_everything_unchanged() {
    let mut engine = two_humans();
    assert!(engine.submit_move_at(1, 1));
    let board = engine.board().clone();
    let player = engine.current_player().clone();

    assert!(!engine.submit_move_at(1, 1));
    assert!(!engine.submit_move_at(3, 0));
    assert!(!engine.submit_move(Move::new(0, 5)));

    assert_eq!(engine.board(), &board);
    assert_eq!(engine.current_player(), &player);
    assert_eq!(engine.state(), GameState::Playing);
}

#[test]
fn test_turn_alternation() {
    let mut engine = two_humans();
    let x = engine.player(CellState::X).clone();
    let o = engine.player(CellState::O).clone();

    assert_eq!(engine.current_player(), &x);
    assert!(engine.submit_move_at(0, 0));
    assert_eq!(engine.current_player(), &o);
    assert!(engine.submit_move_at(1, 1));
    assert_eq!(engine.current_player(), &x);
}

#[test]
fn test_terminal_move_keeps_current_player() {
    let mut engine = two_humans();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(engine.current_player().mark(), CellState::X);
    assert!(engine.submit_move_at(0, 2));
    assert_eq!(engine.current_player().mark(), CellState::X);
}

#[test]
fn test_reset_from_any_state() {
    let mut engine = two_humans();

    // Mid-game, with O to move.
    play(&mut engine, &[(0, 0)]);
    engine.reset();
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.current_player().mark(), CellState::X);
    assert_eq!(engine.board(), &Board::new());

    // After a win.
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(engine.state(), GameState::XWins);
    engine.reset();
    assert_eq!(engine.state(), GameState::Playing);
    assert_eq!(engine.current_player().name(), "Player 1");
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(engine.board().cell(r, c).unwrap(), CellState::Empty);
        }
    }
    assert!(engine.submit_move_at(2, 2));
}

#[test]
fn test_reset_keeps_configuration() {
    let mut engine = GameEngine::with_rng(
        Player::human(CellState::X, "Ann"),
        Player::computer(CellState::O, "Bot", Difficulty::Easy),
        StepRng::new(0, 0),
    )
    .unwrap();
    play_one(&mut engine);
    engine.reset();
    assert_eq!(engine.player(CellState::O).difficulty(), Some(Difficulty::Easy));
    assert_eq!(engine.player(CellState::O).name(), "Bot");
    assert_eq!(engine.player(CellState::X).name(), "Ann");
}

fn play_one(engine: &mut GameEngine<StepRng>) {
    assert!(engine.submit_move_at(1, 1));
    let reply = engine.computer_move().expect("computer to move");
    assert!(engine.submit_move(reply));
}

#[test]
fn test_computer_move_none_when_game_over() {
    let mut engine = GameEngine::with_rng(
        Player::human(CellState::X, "Ann"),
        Player::computer(CellState::O, "Bot", Difficulty::Easy),
        StepRng::new(0, 0),
    )
    .unwrap();
    // Easy with the zero source always answers with the first free cell, so
    // X can finish the middle row.
    assert!(engine.submit_move_at(1, 0));
    let reply = engine.computer_move().unwrap();
    assert_eq!(reply, Move::new(0, 0));
    assert!(engine.submit_move(reply));
    assert!(engine.submit_move_at(1, 1));
    let reply = engine.computer_move().unwrap();
    assert_eq!(reply, Move::new(0, 1));
    assert!(engine.submit_move(reply));
    assert!(engine.submit_move_at(1, 2));

    assert_eq!(engine.state(), GameState::XWins);
    assert_eq!(engine.computer_move(), None);
}
