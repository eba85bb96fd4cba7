//! Bounds invariant: every queen stands on the board.

use super::Invariant;
use crate::QueensState;
use tracing::warn;

/// Invariant: Every queen lies within `[0, rows) x [0, columns)`.
pub struct QueensWithinBounds;

impl Invariant<QueensState> for QueensWithinBounds {
    fn holds(state: &QueensState) -> bool {
        match state.occupied().find(|position| !state.contains(*position)) {
            Some(position) => {
                warn!(
                    %position,
                    rows = state.rows(),
                    columns = state.columns(),
                    "Queen outside the board"
                );
                false
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Every queen lies on the board"
    }
}
