//! Detection of queens that threaten each other.

use super::ScanDirection;
use crate::{Position, QueensState};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Checks whether any two queens on the board threaten each other.
///
/// Every queen scans forward along each [`ScanDirection`] until the board
/// edge. Each unordered pair sharing a line is thereby inspected once, from
/// its earlier endpoint. Returns on the first conflict found.
#[instrument(skip(state), fields(rows = state.rows(), columns = state.columns(), queens = state.queen_count()))]
pub fn any_queens_unsafe(state: &QueensState) -> bool {
    for origin in state.occupied() {
        for direction in ScanDirection::iter() {
            if let Some(target) = first_queen_from(state, origin, direction) {
                debug!(%origin, %target, ?direction, "Queens in conflict");
                return true;
            }
        }
    }

    false
}

/// Walks from `origin` (exclusive) in `direction` and returns the first queen met.
fn first_queen_from(
    state: &QueensState,
    origin: Position,
    direction: ScanDirection,
) -> Option<Position> {
    let mut cursor = direction.advance(origin)?;
    while state.contains(cursor) {
        if state.has_queen(cursor) {
            return Some(cursor);
        }
        cursor = direction.advance(cursor)?;
    }
    None
}

/// Checks whether queens at two distinct positions attack each other.
///
/// Returns false when `a == b`; a queen does not threaten itself.
pub fn threatens(a: Position, b: Position) -> bool {
    a != b
        && (a.row == b.row
            || a.column == b.column
            || a.row.abs_diff(b.row) == a.column.abs_diff(b.column))
}
