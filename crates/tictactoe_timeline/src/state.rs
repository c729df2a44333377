//! Game state with a branching move history.
//!
//! A [`GameState`] is an owned value. Every transition consumes the state
//! and returns the next one; nothing is mutated behind the caller's back.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::history::History;
use super::invariants::{InvalidTimeline, InvariantSet, TimelineInvariants};
use super::rules::{Outcome, evaluate};
use super::status::Status;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Display order of the move list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Game start first.
    #[default]
    #[display("ascending")]
    Ascending,
    /// Latest move first.
    #[display("descending")]
    Descending,
}

impl MoveOrder {
    /// Returns the opposite order.
    pub fn reversed(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }

    /// Arranges items given in ascending order.
    pub fn arrange<T>(self, mut items: Vec<T>) -> Vec<T> {
        if self == MoveOrder::Descending {
            items.reverse();
        }
        items
    }
}

/// Complete game state: every snapshot, the snapshot on display, and the
/// move-list order.
///
/// Deserializing rejects any state that breaks [`TimelineInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameStateSnapshot")]
pub struct GameState {
    pub(crate) history: History,
    pub(crate) current_move: usize,
    pub(crate) move_order: MoveOrder,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateSnapshot {
    history: History,
    current_move: usize,
    #[serde(default)]
    move_order: MoveOrder,
}

impl TryFrom<GameStateSnapshot> for GameState {
    type Error = InvalidTimeline;

    fn try_from(snapshot: GameStateSnapshot) -> Result<Self, Self::Error> {
        let game = Self {
            history: snapshot.history,
            current_move: snapshot.current_move,
            move_order: snapshot.move_order,
        };
        TimelineInvariants::check_all(&game).map_err(InvalidTimeline::new)?;
        Ok(game)
    }
}

impl GameState {
    /// Creates a new game: one empty snapshot, displayed, ascending order.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_move: 0,
            move_order: MoveOrder::Ascending,
        }
    }

    /// Returns the snapshot history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Returns the move-list order.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Returns the snapshot on display.
    pub fn current_board(&self) -> &Board {
        &self.history.boards()[self.current_move]
    }

    /// Player to move from the snapshot on display.
    pub fn to_move(&self) -> Player {
        Player::to_move_after(self.current_move)
    }

    /// Evaluates the snapshot on display.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current_board())
    }

    /// Status line for the snapshot on display.
    pub fn status(&self) -> Status {
        Status::of(self)
    }

    /// Returns true if `target` names a snapshot.
    pub fn can_jump_to(&self, target: usize) -> bool {
        target < self.history.len()
    }

    /// Places the next mark at `pos`, reporting why a move is refused.
    ///
    /// Snapshots after the one on display are discarded before the new one
    /// is appended.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        let action = Move::new(self.to_move(), pos);
        MoveContract::pre(self, &action)?;

        let board = self.current_board().with_mark(pos, action.player);
        let history = self.history.branch(self.current_move, board);
        let next = Self {
            current_move: history.latest_index(),
            history,
            move_order: self.move_order,
        };

        #[cfg(debug_assertions)]
        if let Err(violation) = MoveContract::post(self, &next) {
            panic!("{}", violation);
        }

        debug!(%action, current_move = next.current_move, "Move applied");
        Ok(next)
    }

    /// Places the next mark at `pos`.
    ///
    /// A move on an occupied square or on a finished board is ignored and
    /// the state comes back unchanged.
    pub fn apply_move(self, pos: Position) -> Self {
        match self.try_apply_move(pos) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self
            }
        }
    }

    /// Like [`try_apply_move`](Self::try_apply_move) for a raw cell index.
    pub fn try_apply_move_at(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_apply_move(pos)
    }

    /// Like [`apply_move`](Self::apply_move) for a raw cell index; an index
    /// naming no square is ignored as well.
    pub fn apply_move_at(self, index: usize) -> Self {
        match Position::from_index(index) {
            Some(pos) => self.apply_move(pos),
            None => {
                debug!(index, "Move ignored: cell out of bounds");
                self
            }
        }
    }

    /// Displays snapshot `target`; the history is untouched.
    ///
    /// # Panics
    ///
    /// Panics if `target` names no snapshot. Check
    /// [`can_jump_to`](Self::can_jump_to) with untrusted input.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(self, target: usize) -> Self {
        assert!(
            self.can_jump_to(target),
            "jump target {} out of range (history has {} snapshots)",
            target,
            self.history.len()
        );
        Self {
            current_move: target,
            ..self
        }
    }

    /// Flips the move-list order.
    pub fn toggle_move_order(self) -> Self {
        let move_order = self.move_order.reversed();
        Self { move_order, ..self }
    }

    /// Sets the move-list order.
    pub fn with_move_order(self, move_order: MoveOrder) -> Self {
        Self { move_order, ..self }
    }

    /// Plays raw cell indices from a new game; refused moves are skipped.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Self {
        cells
            .iter()
            .fold(Self::new(), |state, &index| state.apply_move_at(index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
