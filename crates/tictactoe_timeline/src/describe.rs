//! Move descriptions for the history list.

use super::action::Move;
use super::history::History;
use super::{GameState, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What snapshot `index` added to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveDescription {
    index: usize,
    placed: Option<Move>,
}

impl MoveDescription {
    /// Index of the described snapshot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True for the empty start snapshot.
    pub fn is_start(&self) -> bool {
        self.placed.is_none()
    }

    /// The mark added by this snapshot; `None` for the start.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }

    /// Position of the added mark.
    pub fn position(&self) -> Option<Position> {
        self.placed.map(|m| m.position)
    }

    /// Player who added the mark.
    pub fn player(&self) -> Option<Player> {
        self.placed.map(|m| m.player)
    }

    /// Zero-based row of the added mark.
    pub fn row(&self) -> Option<usize> {
        self.position().map(Position::row)
    }

    /// Zero-based column of the added mark.
    pub fn col(&self) -> Option<usize> {
        self.position().map(Position::col)
    }
}

/// Jump label: `Go to game start` or `Go to move #i (row, col)`, 1-based.
impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.position() {
            None => write!(f, "Go to game start"),
            Some(pos) => write!(
                f,
                "Go to move #{} ({}, {})",
                self.index,
                pos.row() + 1,
                pos.col() + 1
            ),
        }
    }
}

/// Describes snapshot `move_index` of `history`.
///
/// # Panics
///
/// Panics if `move_index` names no snapshot, or if the snapshot does not add
/// exactly one mark to its predecessor. Neither can happen for a history
/// built by [`GameState`].
#[instrument(skip(history), fields(len = history.len()))]
pub fn describe_move(history: &History, move_index: usize) -> MoveDescription {
    assert!(
        move_index < history.len(),
        "move index {} out of range (history has {} snapshots)",
        move_index,
        history.len()
    );
    if move_index == 0 {
        return MoveDescription {
            index: 0,
            placed: None,
        };
    }
    match history.placed_at(move_index) {
        Some(placed) => MoveDescription {
            index: move_index,
            placed: Some(placed),
        },
        None => panic!(
            "snapshot {} does not add exactly one mark to snapshot {}",
            move_index,
            move_index - 1
        ),
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    /// The described snapshot.
    pub description: MoveDescription,
    /// True for the last snapshot of the history.
    pub is_latest: bool,
    /// True for the snapshot on display.
    pub is_current: bool,
}

impl MoveEntry {
    /// Label shown for the entry; the latest snapshot gets a "you are here"
    /// text instead of a jump label.
    pub fn label(&self) -> String {
        if self.is_latest {
            format!("You are at move #{}", self.description.index())
        } else {
            self.description.to_string()
        }
    }
}

/// Describes every snapshot of `state`, in its move order.
#[instrument(skip(state), fields(order = %state.move_order()))]
pub fn move_list(state: &GameState) -> Vec<MoveEntry> {
    let history = state.history();
    let latest = history.latest_index();
    let entries = (0..history.len())
        .map(|index| MoveEntry {
            description: describe_move(history, index),
            is_latest: index == latest,
            is_current: index == state.current_move(),
        })
        .collect();
    state.move_order().arrange(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_has_no_coordinates() {
        let description = describe_move(GameState::new().history(), 0);
        assert!(description.is_start());
        assert_eq!(description.row(), None);
        assert_eq!(description.col(), None);
        assert_eq!(description.to_string(), "Go to game start");
    }

    #[test]
    fn test_move_reports_row_and_col() {
        let state = GameState::replay(&[4, 7]);
        let description = describe_move(state.history(), 2);
        assert_eq!(description.position(), Some(Position::BottomCenter));
        assert_eq!(description.row(), Some(2));
        assert_eq!(description.col(), Some(1));
        assert_eq!(description.player(), Some(Player::O));
        assert_eq!(description.to_string(), "Go to move #2 (3, 2)");
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_out_of_range_panics() {
        describe_move(GameState::new().history(), 1);
    }

    #[test]
    fn test_move_list_marks_latest_and_current() {
        let state = GameState::replay(&[0, 1, 2]).jump_to(1);
        let entries = move_list(&state);
        assert_eq!(entries.len(), 4);
        assert!(entries[1].is_current);
        assert!(entries[3].is_latest);
        assert_eq!(entries[3].label(), "You are at move #3");
        assert_eq!(entries[0].label(), "Go to game start");
    }

    #[test]
    fn test_descending_list() {
        let state = GameState::replay(&[0, 1]).toggle_move_order();
        let indices: Vec<_> = move_list(&state)
            .iter()
            .map(|e| e.description.index())
            .collect();
        assert_eq!(indices, vec![2, 1, 0]);
    }
}
