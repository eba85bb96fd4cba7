//! Contract-based validation for queen transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::invariants::{InvariantSet, QueensInvariants};
use crate::{Position, QueenError, QueensState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
///
/// `before` is a [`Snapshot`](Contract::Snapshot) holding only what the
/// postcondition needs, so a batch of steps never copies the whole state.
pub trait Contract<S, A> {
    /// What the postcondition remembers about the state before the action.
    type Snapshot;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), QueenError>;

    /// Records the parts of `state` the postcondition compares against.
    fn snapshot(state: &S, action: &A) -> Self::Snapshot;

    /// Checks postconditions after applying the action.
    fn post(before: &Self::Snapshot, after: &S, action: &A) -> bool;
}

/// Queen count before a single placement or removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBefore(pub usize);

// ─────────────────────────────────────────────────────────────
//  Placement
// ─────────────────────────────────────────────────────────────

/// Contract for placing a single queen.
///
/// Preconditions:
/// - The cell must be empty
///
/// Postconditions:
/// - The cell holds a queen
/// - Exactly one queen was added
pub struct PlaceQueen;

impl Contract<QueensState, Position> for PlaceQueen {
    type Snapshot = CountBefore;

    #[instrument(level = "trace", skip(state))]
    fn pre(state: &QueensState, position: &Position) -> Result<(), QueenError> {
        if state.has_queen(*position) {
            Err(QueenError::DuplicateQueen(*position))
        } else {
            Ok(())
        }
    }

    fn snapshot(state: &QueensState, _position: &Position) -> CountBefore {
        CountBefore(state.queen_count())
    }

    fn post(before: &CountBefore, after: &QueensState, position: &Position) -> bool {
        let valid = after.has_queen(*position) && after.queen_count() == before.0 + 1;
        if !valid {
            warn!(
                %position,
                before = before.0,
                after = after.queen_count(),
                "Placement postcondition violated"
            );
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Removal
// ─────────────────────────────────────────────────────────────

/// Contract for removing a single queen.
///
/// Preconditions:
/// - The cell must hold a queen
///
/// Postconditions:
/// - The cell is empty
/// - Exactly one queen was removed
pub struct RemoveQueen;

impl Contract<QueensState, Position> for RemoveQueen {
    type Snapshot = CountBefore;

    #[instrument(level = "trace", skip(state))]
    fn pre(state: &QueensState, position: &Position) -> Result<(), QueenError> {
        if state.has_queen(*position) {
            Ok(())
        } else {
            Err(QueenError::MissingQueen(*position))
        }
    }

    fn snapshot(state: &QueensState, _position: &Position) -> CountBefore {
        CountBefore(state.queen_count())
    }

    fn post(before: &CountBefore, after: &QueensState, position: &Position) -> bool {
        let valid = !after.has_queen(*position) && after.queen_count() + 1 == before.0;
        if !valid {
            warn!(
                %position,
                before = before.0,
                after = after.queen_count(),
                "Removal postcondition violated"
            );
        }
        valid
    }
}

/// Asserts that all state invariants hold (panic on violation in debug builds).
#[instrument(level = "trace", skip(state))]
pub fn assert_invariants(state: &QueensState) {
    debug_assert!(
        QueensInvariants::check_all(state).is_ok(),
        "Queens state invariants violated"
    );
}
