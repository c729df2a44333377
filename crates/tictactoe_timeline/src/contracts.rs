//! Contract-based validation for timeline transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::GameState;
use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, InvariantViolation, TimelineInvariants, summarize};
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), PostconditionFailed>;
}

/// A transition produced a state it must never produce.
///
/// Unlike [`MoveError`], this is a bug in the transition itself.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Postcondition failed: {}", summary)]
pub struct PostconditionFailed {
    /// Every violated property.
    pub violations: Vec<InvariantViolation>,
    summary: String,
}

impl PostconditionFailed {
    /// Collects the violated properties of one transition.
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        let summary = summarize(&violations);
        Self {
            violations,
            summary,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The snapshot on display has neither a winner nor a full board.
pub struct GameNotOver;

impl GameNotOver {
    /// Checks the precondition.
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.outcome().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if !game.current_board().is_empty(mov.position) {
            Err(MoveError::SquareOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Checks the precondition.
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: A move is legal if the game is still going, the
/// square is empty and it's the player's turn.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        SquareIsEmpty::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is not over
/// - Square must be empty
/// - Must be player's turn
///
/// Postconditions:
/// - All [`TimelineInvariants`] hold
/// - Snapshots up to the one played from are kept, later ones are gone
/// - The new snapshot is the one on display
pub struct MoveContract;

impl MoveContract {
    fn branched_correctly(before: &GameState, after: &GameState) -> bool {
        let kept = before.current_move() + 1;
        let history = after.history();
        history.len() == kept + 1
            && history.boards()[..kept] == before.history().boards()[..kept]
            && after.current_move() == kept
            && history
                .placed_at(kept)
                .is_some_and(|action| action.player == before.to_move())
    }
}

impl Contract<GameState, Move> for MoveContract {
    fn pre(game: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), PostconditionFailed> {
        let mut violations = match TimelineInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };
        if !Self::branched_correctly(before, after) {
            violations.push(InvariantViolation::new(
                "Move appends one snapshot after the one played from",
            ));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(PostconditionFailed::new(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_precondition_empty_square() {
        let game = GameState::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&game, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let game = GameState::new().apply_move(Position::Center);
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::SquareOccupied(Position::Center))
        ));
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let game = GameState::new();
        let action = Move::new(Player::O, Position::Center);
        assert!(matches!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WrongPlayer(Player::O))
        ));
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let game = GameState::replay(&[0, 3, 1, 4, 2]);
        let action = Move::new(Player::O, Position::TopLeft);
        assert_eq!(MoveContract::pre(&game, &action), Err(MoveError::GameOver));
    }

    #[test]
    fn test_postcondition_holds_after_branching_move() {
        let before = GameState::replay(&[0, 4, 8]).jump_to(1);
        let after = before.try_apply_move(Position::TopRight).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = before.try_apply_move(Position::Center).unwrap();
        after.history.boards[1].set(Position::TopLeft, Square::Occupied(Player::O));

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(err.to_string().starts_with("Postcondition failed: "));
        assert!(!err.violations.is_empty());
    }

    #[test]
    fn test_postcondition_detects_unmoved_cursor() {
        let before = GameState::replay(&[0]);
        let mut after = before.try_apply_move(Position::Center).unwrap();
        after.current_move = 0;
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
