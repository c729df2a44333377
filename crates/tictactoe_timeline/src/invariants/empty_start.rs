//! Empty start invariant: every game begins from a blank board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: Snapshot 0 is the empty board.
pub struct EmptyStartInvariant;

impl Invariant<GameState> for EmptyStartInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().get(0).is_some_and(Board::is_blank)
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}
