//! First-class invariants for the game timeline.
//!
//! Invariants are logical properties that hold for every [`GameState`]
//! reachable through the public API. They are testable independently and
//! double as documentation of what a history may look like.
//!
//! [`GameState`]: crate::GameState

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Joins violation descriptions into one line.
pub(crate) fn summarize(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A restored timeline broke at least one invariant.
///
/// Returned when deserializing a [`GameState`](crate::GameState) or
/// [`History`](crate::History) whose snapshots could never have been played.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid timeline: {}", summary)]
pub struct InvalidTimeline {
    /// Every violated invariant.
    pub violations: Vec<InvariantViolation>,
    summary: String,
}

impl InvalidTimeline {
    /// Collects the violations found while checking a restored timeline.
    pub fn new(violations: Vec<InvariantViolation>) -> Self {
        let summary = summarize(&violations);
        Self {
            violations,
            summary,
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to five invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        tracing::warn!(invariant = $inv::description(), "Invariant violated");
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);
impl_invariant_set!(I1, I2, I3, I4, I5);

pub mod alternating_turn;
pub mod cursor_in_bounds;
pub mod empty_start;
pub mod no_move_after_end;
pub mod single_step;

pub use alternating_turn::AlternatingTurnInvariant;
pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use empty_start::EmptyStartInvariant;
pub use no_move_after_end::NoMoveAfterEndInvariant;
pub use single_step::SingleStepInvariant;

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    EmptyStartInvariant,
    SingleStepInvariant,
    AlternatingTurnInvariant,
    CursorInBoundsInvariant,
    NoMoveAfterEndInvariant,
);
