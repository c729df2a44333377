//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single [`Board`]. Rules know nothing about history
//! or whose turn it is, so they are total over every 3x3 board, including
//! boards no legal game could reach.

pub mod win;

pub use win::{LINES, Line, check_winner, winning_line};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Evaluation of a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// `player` holds every square of `line`.
    Win {
        /// The player owning the line.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// Every square is occupied and no line is complete.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once no further moves may be made.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Returns true once every square is occupied.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| !s.is_empty())
}

/// Evaluates a board: first completed line in [`LINES`] order, else draw
/// when full, else in progress.
#[instrument(level = "trace", skip(board), ret)]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Win { player, line };
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
