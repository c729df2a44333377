//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The mark added by snapshot `i` belongs to X when `i` is odd and to O
/// when `i` is even. First move is always X.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        (1..history.len()).all(|i| {
            history
                .placed_at(i)
                .is_none_or(|action| action.player == Player::to_move_after(i - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let game = GameState::replay(&[0, 4, 2, 6, 8]);
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_o_opening_violates() {
        let mut game = GameState::new();
        game.history
            .boards
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
