//! Cursor invariant: the displayed snapshot exists.

use super::super::GameState;
use super::Invariant;

/// Invariant: `current_move` indexes into the history.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move is a valid history index"
    }
}
