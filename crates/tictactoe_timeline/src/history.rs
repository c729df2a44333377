//! Board snapshots in play order.

use super::Board;
use super::GameState;
use super::action::Move;
use super::invariants::{InvalidTimeline, InvariantSet, TimelineInvariants};
use serde::{Deserialize, Serialize};

/// Ordered board snapshots; entry 0 is the empty board, entry `i` the board
/// after the `i`-th move.
///
/// Only [`GameState`](crate::GameState) grows a history, one snapshot at a
/// time, so every history reachable through the public API is never empty.
/// Deserialized histories are checked against the same timeline invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Board>", try_from = "Vec<Board>")]
pub struct History {
    pub(crate) boards: Vec<Board>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
        }
    }

    /// Number of snapshots, including the empty start.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always false for histories built through [`GameState`](crate::GameState).
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Returns the snapshot at `index`.
    pub fn get(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Returns all snapshots in play order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the most recent snapshot.
    pub fn latest(&self) -> Option<&Board> {
        self.boards.last()
    }

    /// Index of the most recent snapshot.
    pub fn latest_index(&self) -> usize {
        self.boards.len().saturating_sub(1)
    }

    /// The mark that turned snapshot `index - 1` into snapshot `index`.
    ///
    /// Returns `None` for the start snapshot, for an index past the end, and
    /// for a pair of snapshots that does not differ by exactly one new mark.
    pub fn placed_at(&self, index: usize) -> Option<Move> {
        let before = self.boards.get(index.checked_sub(1)?)?;
        let after = self.boards.get(index)?;
        match before.differences(after).as_slice() {
            [pos] if before.is_empty(*pos) => {
                after.get(*pos).player().map(|player| Move::new(player, *pos))
            }
            _ => None,
        }
    }

    /// Keeps snapshots `0..=keep` and appends `board` after them.
    pub(crate) fn branch(&self, keep: usize, board: Board) -> Self {
        let mut boards = Vec::with_capacity(keep + 2);
        boards.extend_from_slice(&self.boards[..=keep]);
        boards.push(board);
        Self { boards }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl From<History> for Vec<Board> {
    fn from(history: History) -> Self {
        history.boards
    }
}

impl TryFrom<Vec<Board>> for History {
    type Error = InvalidTimeline;

    fn try_from(boards: Vec<Board>) -> Result<Self, Self::Error> {
        let game = GameState {
            history: Self { boards },
            current_move: 0,
            move_order: Default::default(),
        };
        TimelineInvariants::check_all(&game).map_err(InvalidTimeline::new)?;
        Ok(game.history)
    }
}
