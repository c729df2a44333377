//! First-class action types for tic-tac-toe.
//!
//! A move is the player's intent. It is validated against the current
//! snapshot before a new snapshot is produced.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was refused.
///
/// Refusals are disallowed user actions, not faults: [`GameState::apply_move`]
/// drops them and returns the state unchanged.
///
/// [`GameState::apply_move`]: crate::GameState::apply_move
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current snapshot already has a winner or a full board.
    #[display("Game is already over")]
    GameOver,

    /// The move names a player whose turn it is not.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The raw cell index names no square.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

impl std::error::Error for MoveError {}
