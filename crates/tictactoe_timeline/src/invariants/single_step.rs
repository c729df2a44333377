//! Single step invariant: each snapshot adds exactly one mark.

use super::super::GameState;
use super::Invariant;

/// Invariant: Snapshot `i` differs from snapshot `i - 1` in exactly one
/// square, which went from empty to occupied.
///
/// Marks are therefore never overwritten or removed along a history.
pub struct SingleStepInvariant;

impl Invariant<GameState> for SingleStepInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        (1..history.len()).all(|i| history.placed_at(i).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to an empty square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_played_game_holds() {
        let game = GameState::replay(&[4, 0, 8, 2, 1]);
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_mark_violates() {
        let mut game = GameState::replay(&[4, 0]);
        game.history.boards[2].set(Position::Center, Square::Occupied(Player::O));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_snapshot_violates() {
        let mut game = GameState::replay(&[4]);
        let latest = game.history.boards[1];
        game.history.boards.push(latest);
        assert!(!SingleStepInvariant::holds(&game));
    }
}
