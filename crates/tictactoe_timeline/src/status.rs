//! Status line for the snapshot on display.

use super::rules::Outcome;
use super::{GameState, Player};
use serde::{Deserialize, Serialize};

/// What a player looking at the current snapshot should be told.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Status {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// The board is full without a line.
    #[display("Draw")]
    Draw,
    /// The game goes on; `_0` moves next.
    #[display("Next Player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status of the snapshot `state` is displaying.
    pub fn of(state: &GameState) -> Self {
        match state.outcome() {
            Outcome::Win { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(state.to_move()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_texts() {
        assert_eq!(GameState::new().status().to_string(), "Next Player: X");
        assert_eq!(GameState::replay(&[4]).status().to_string(), "Next Player: O");
        assert_eq!(
            GameState::replay(&[0, 3, 1, 4, 2]).status().to_string(),
            "Winner: X"
        );
        assert_eq!(
            GameState::replay(&[0, 4, 8, 1, 7, 6, 2, 5, 3]).status(),
            Status::Draw
        );
    }

    #[test]
    fn test_status_follows_jump() {
        let state = GameState::replay(&[0, 3, 1, 4, 2]).jump_to(3);
        assert_eq!(state.status(), Status::NextPlayer(Player::O));
    }
}
