//! Properties every queens board must satisfy.
//!
//! Transitions only ever add or remove single cells, so these are checked
//! once per transition in debug builds rather than per step.

use derive_new::new;

/// A property of a board state that no transition may break.
pub trait Invariant<S> {
    /// Returns true if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A broken invariant, named by its description.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct InvariantViolation {
    /// Description of the broken invariant.
    #[new(into)]
    pub description: String,
}

/// Invariants checked together, reporting every one that fails.
///
/// Implemented for pairs; nest pairs to compose more.
pub trait InvariantSet<S> {
    /// Returns the violations found, or `Ok(())` when the state is sound.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod capacity;
pub mod within_bounds;

pub use capacity::CapacityRespected;
pub use within_bounds::QueensWithinBounds;

/// Everything [`assert_invariants`](crate::assert_invariants) checks after a transition.
pub type QueensInvariants = (QueensWithinBounds, CapacityRespected);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, QueensState};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        assert!(QueensInvariants::check_all(&QueensState::new(8, 8)).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_transitions() {
        let state = QueensState::new(5, 5)
            .with_queens_added(&[Position::new(0, 0), Position::new(2, 1), Position::new(4, 4)])
            .unwrap()
            .with_queens_removed(&[Position::new(2, 1)])
            .unwrap();
        assert!(QueensInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = QueensState::new(1, 1);
        state.queens.insert(Position::new(0, 0));
        state.queens.insert(Position::new(0, 1));

        let violations = QueensInvariants::check_all(&state).unwrap_err();
        assert_eq!(
            violations,
            vec![
                InvariantViolation::new(QueensWithinBounds::description()),
                InvariantViolation::new(CapacityRespected::description()),
            ]
        );
    }
}
