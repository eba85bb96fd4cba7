//! Forward scan directions.

use crate::Position;
use strum::EnumIter;

/// A direction in which a queen's line of attack is scanned.
///
/// Queens attack along eight directions, which pair up into four lines.
/// Scanning each line only forward (toward higher rows, or toward higher
/// columns within a row) reaches every other queen on that line from
/// exactly one end of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ScanDirection {
    /// Down and to the right.
    Diagonal,
    /// Down and to the left.
    AntiDiagonal,
    /// Straight down the column.
    Column,
    /// Right along the row.
    Row,
}

impl ScanDirection {
    /// Returns the `(rows, columns)` step taken per cell.
    pub fn step(self) -> (isize, isize) {
        match self {
            ScanDirection::Diagonal => (1, 1),
            ScanDirection::AntiDiagonal => (1, -1),
            ScanDirection::Column => (1, 0),
            ScanDirection::Row => (0, 1),
        }
    }

    /// Returns the next position in this direction, or `None` past column zero.
    pub fn advance(self, from: Position) -> Option<Position> {
        let (rows, columns) = self.step();
        from.offset(rows, columns)
    }
}
