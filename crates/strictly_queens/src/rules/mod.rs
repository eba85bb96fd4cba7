//! Conflict rules for queens.
//!
//! This module contains pure functions that inspect a board state.
//! Rules are separated from the state type so they can be tested alone.

pub mod conflict;
pub mod direction;

pub use conflict::{any_queens_unsafe, threatens};
pub use direction::ScanDirection;
