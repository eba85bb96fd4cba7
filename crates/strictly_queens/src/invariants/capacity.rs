//! Capacity invariant: no more queens than cells.

use super::Invariant;
use crate::QueensState;
use tracing::warn;

/// Invariant: The queen count never exceeds `rows * columns`.
pub struct CapacityRespected;

impl Invariant<QueensState> for CapacityRespected {
    fn holds(state: &QueensState) -> bool {
        let cells = state.rows().saturating_mul(state.columns());
        let valid = state.queen_count() <= cells;
        if !valid {
            warn!(queens = state.queen_count(), cells, "Board over capacity");
        }
        valid
    }

    fn description() -> &'static str {
        "Queen count does not exceed the number of cells"
    }
}
