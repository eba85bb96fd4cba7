//! Strictly Queens - immutable board state for the n-queens puzzle
//!
//! This library tracks which cells of a fixed-size board hold queens and
//! whether any of them threaten each other. It does not search for
//! solutions; a solver drives it by deriving new states.
//!
//! # Architecture
//!
//! - **State**: [`QueensState`], an immutable snapshot; transitions return new values
//! - **Rules**: conflict detection by forward scanning
//! - **Contracts**: pre/postconditions checked on every placement and removal
//! - **Invariants**: properties of a single state, asserted in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_queens::{Position, QueenError, QueensState};
//!
//! # fn example() -> Result<(), QueenError> {
//! let state = QueensState::new(8, 8)
//!     .with_queens_added(&[Position::new(0, 0), Position::new(4, 3)])?;
//! assert_eq!(state.queen_count(), 2);
//! assert!(!state.any_queens_unsafe());
//!
//! let crowded = state.with_queens_added(&[Position::new(1, 1)])?;
//! assert!(crowded.any_queens_unsafe());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod contracts;
mod error;
mod invariants;
mod position;
mod rules;
mod state;

// Crate-level exports - Core types
pub use error::QueenError;
pub use position::Position;
pub use state::QueensState;

// Crate-level exports - Conflict rules
pub use rules::{ScanDirection, any_queens_unsafe, threatens};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, CountBefore, PlaceQueen, RemoveQueen, assert_invariants};
pub use invariants::{
    CapacityRespected, Invariant, InvariantSet, InvariantViolation, QueensInvariants,
    QueensWithinBounds,
};
