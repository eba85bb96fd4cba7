//! Board coordinates.

use derive_new::new;

/// A cell on the board, given by zero-based row and column.
///
/// Positions are plain values: two positions are equal exactly when both
/// coordinates match. A position knows nothing about board size; the
/// [`QueensState`](crate::QueensState) using it decides whether it is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, new, derive_more::Display)]
#[display("row {row} column {column}")]
pub struct Position {
    /// Zero-based row number.
    pub row: usize,
    /// Zero-based column number.
    pub column: usize,
}

impl Position {
    /// Returns the position `rows` down and `columns` across from this one,
    /// or `None` if that would leave the non-negative quadrant.
    pub fn offset(self, rows: isize, columns: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(rows)?,
            column: self.column.checked_add_signed(columns)?,
        })
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}
