//! Tic-tac-toe game state with time travel.
//!
//! The crate holds everything a presentation layer needs to run a game:
//! the board snapshots played so far, the snapshot on display, win and draw
//! detection, and descriptions for a move-history list.
//!
//! # Architecture
//!
//! - **Rules**: [`evaluate`] scans the eight lines of a single board
//! - **State**: [`GameState`] owns the [`History`] and moves through it by
//!   value with [`GameState::apply_move`] and [`GameState::jump_to`]
//! - **Descriptions**: [`describe_move`] and [`move_list`] label snapshots
//! - **Invariants/contracts**: properties every reachable state satisfies
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameState, Outcome, Position, Status};
//!
//! let state = GameState::new()
//!     .apply_move(Position::Center)
//!     .apply_move(Position::TopLeft);
//! assert_eq!(state.status(), Status::NextPlayer(tictactoe_timeline::Player::X));
//!
//! // Go back one move and play somewhere else: the old move is discarded.
//! let state = state.jump_to(1).apply_move(Position::BottomRight);
//! assert_eq!(state.history().len(), 3);
//! assert_eq!(state.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod describe;
mod history;
mod invariants;
mod position;
mod rules;
mod state;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use contracts::{
    Contract, GameNotOver, LegalMove, MoveContract, PlayersTurn, PostconditionFailed,
    SquareIsEmpty,
};
pub use describe::{MoveDescription, MoveEntry, describe_move, move_list};
pub use history::History;
pub use invariants::{
    AlternatingTurnInvariant, CursorInBoundsInvariant, EmptyStartInvariant, InvalidTimeline,
    Invariant, InvariantSet, InvariantViolation, NoMoveAfterEndInvariant, SingleStepInvariant,
    TimelineInvariants,
};
pub use position::Position;
pub use rules::{LINES, Line, Outcome, check_winner, evaluate, is_full, winning_line};
pub use state::{GameState, MoveOrder};
pub use status::Status;
pub use types::{Board, Player, Square};
