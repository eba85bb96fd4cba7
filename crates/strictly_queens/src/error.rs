//! Error types for queen placement and removal.

use crate::Position;

/// Error returned when a transition cannot be applied.
///
/// Each variant carries the single position that stopped the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum QueenError {
    /// A queen was added where one already stands.
    #[display("duplicate queen in {}", _0)]
    DuplicateQueen(Position),

    /// A queen was removed from a cell that holds none.
    #[display("missing queen in {}", _0)]
    MissingQueen(Position),
}

impl QueenError {
    /// Returns the position that caused the error.
    pub fn position(&self) -> Position {
        match self {
            QueenError::DuplicateQueen(position) | QueenError::MissingQueen(position) => *position,
        }
    }
}

impl std::error::Error for QueenError {}
