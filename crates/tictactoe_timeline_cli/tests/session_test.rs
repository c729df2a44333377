//! Tests for the interactive session and config loading.

use std::io::{Cursor, Write};
use tictactoe_timeline::{MoveOrder, Outcome, Player, Position, Square};
use tictactoe_timeline_cli::{Session, ViewConfig};

fn transcript(config: &ViewConfig, input: &str) -> (Session, String) {
    let mut session = Session::new(config);
    let mut output = Vec::new();
    session
        .run(Cursor::new(input.to_string()), &mut output)
        .expect("in-memory session");
    (session, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn test_session_plays_to_a_win() {
    let (session, output) = transcript(&ViewConfig::default(), "0\n3\n1\n4\n2\nquit\n");

    assert_eq!(session.state().outcome().winner(), Some(Player::X));
    assert!(output.starts_with("Next Player: X"));
    assert!(output.trim_end().ends_with("Winner: X"));
}

#[test]
fn test_session_ignores_moves_after_win() {
    let (session, output) = transcript(&ViewConfig::default(), "0\n3\n1\n4\n2\n8\n");

    assert_eq!(session.state().history().len(), 6);
    assert!(output.contains("Game is already over"));
}

#[test]
fn test_session_survives_bad_input() {
    let (session, output) = transcript(
        &ViewConfig::default(),
        "dance\njump nine\nplay 42\njump 5\n4\n",
    );

    assert!(output.contains("Unknown command 'dance'"));
    assert!(output.contains("'jump' expects a number, got 'nine'"));
    assert!(output.contains("Cell 42 is out of bounds"));
    assert!(output.contains("No move #5"));
    assert_eq!(session.state().current_move(), 1);
}

#[test]
fn test_session_plays_square_labels() {
    let (session, output) = transcript(
        &ViewConfig::default(),
        "play center
play bottom-left
play middle
",
    );

    let board = session.state().current_board();
    assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Player::O));
    assert!(output.contains("'play' expects a cell (0-8 or a label), got 'middle'"));
    assert_eq!(session.state().current_move(), 2);
}

#[test]
fn test_session_time_travel_branches() {
    let (session, output) =
        transcript(&ViewConfig::default(), "0\n4\n8\njump 1\n2\nshow\n");

    let state = session.state();
    assert_eq!(state.history().len(), 3);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert!(output.contains("You are at move #2"));
}

#[test]
fn test_config_file_sets_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "move_order = \"descending\"\nshow_coordinates = false").unwrap();

    let config = ViewConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.move_order(), MoveOrder::Descending);
    assert!(!*config.show_coordinates());
    assert_eq!(config.log_filter(), "warn");

    let (session, output) = transcript(&config, "4\nquit\n");
    assert_eq!(session.state().move_order(), MoveOrder::Descending);
    let moves = output.split("Moves (descending):").nth(1).unwrap();
    let first = moves.lines().find(|l| !l.trim().is_empty()).unwrap();
    assert!(first.contains("You are at move #1"));
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ViewConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
