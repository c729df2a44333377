//! Terminal invariant: nothing is played past a finished board.

use super::super::GameState;
use super::super::rules::evaluate;
use super::Invariant;

/// Invariant: Only the latest snapshot may be won or drawn.
///
/// Every earlier snapshot had a successor, so it must still have been in
/// progress when that successor was played.
pub struct NoMoveAfterEndInvariant;

impl Invariant<GameState> for NoMoveAfterEndInvariant {
    fn holds(game: &GameState) -> bool {
        let boards = game.history().boards();
        let played_from = &boards[..boards.len().saturating_sub(1)];
        played_from.iter().all(|board| !evaluate(board).is_terminal())
    }

    fn description() -> &'static str {
        "No move follows a won or drawn snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_won_game_holds() {
        let game = GameState::replay(&[0, 3, 1, 4, 2, 5]);
        assert_eq!(game.history().len(), 6);
        assert!(NoMoveAfterEndInvariant::holds(&game));
    }

    #[test]
    fn test_move_after_win_violates() {
        let mut game = GameState::replay(&[0, 3, 1, 4, 2]);
        let won = game.history.boards[5];
        game.history
            .boards
            .push(won.with_mark(Position::MiddleRight, Player::O));
        assert!(!NoMoveAfterEndInvariant::holds(&game));
    }
}
