//! Immutable board state.
//!
//! A [`QueensState`] is never modified once built. Placing or removing queens
//! clones the occupied cells into a fresh state and applies the change there,
//! so every earlier state stays valid and independent.

use crate::contracts::{Contract, PlaceQueen, RemoveQueen, assert_invariants};
use crate::{Position, QueenError};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, instrument};

/// A `rows` x `columns` board with queens on some of its cells.
///
/// Only occupied cells are stored. Every other cell on the board is empty,
/// so the occupancy of all `rows * columns` cells is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueensState {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) queens: HashSet<Position>,
}

impl QueensState {
    /// Creates an empty board with the given dimensions.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            queens: HashSet::new(),
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Checks whether the position lies on this board.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.column < self.columns
    }

    /// Returns whether a queen occupies the position, or `None` if the
    /// position is off the board.
    pub fn get(&self, position: Position) -> Option<bool> {
        self.contains(position).then(|| self.queens.contains(&position))
    }

    /// Returns the number of queens on the board.
    pub fn queen_count(&self) -> usize {
        self.queens.len()
    }

    /// Returns the positions of all queens, in no particular order.
    pub fn queens(&self) -> Vec<Position> {
        self.queens.iter().copied().collect()
    }

    /// Iterates over occupied cells without allocating.
    pub(crate) fn occupied(&self) -> impl Iterator<Item = Position> + '_ {
        self.queens.iter().copied()
    }

    /// Returns whether a queen occupies the position.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    pub fn has_queen(&self, position: Position) -> bool {
        match self.get(position) {
            Some(occupied) => occupied,
            None => panic!("{} is outside the {}x{} board", position, self.rows, self.columns),
        }
    }

    /// Returns true if at least two queens share a row, column or diagonal.
    pub fn any_queens_unsafe(&self) -> bool {
        crate::rules::any_queens_unsafe(self)
    }

    /// Returns a new state with a queen added at each position, in order.
    ///
    /// Fails with [`QueenError::DuplicateQueen`] at the first position that is
    /// already occupied, whether in `self` or by an earlier position in the
    /// same slice. `self` is left untouched either way.
    ///
    /// # Panics
    ///
    /// Panics if any position is off the board.
    #[instrument(skip(self, positions), fields(rows = self.rows, columns = self.columns, adding = positions.len()))]
    pub fn with_queens_added(&self, positions: &[Position]) -> Result<Self, QueenError> {
        let next = self.transition::<PlaceQueen>(positions, |queens, position| {
            queens.insert(position);
        })?;
        debug!(queens = next.queen_count(), "Queens added");
        Ok(next)
    }

    /// Returns a new state with the queen at each position removed, in order.
    ///
    /// Fails with [`QueenError::MissingQueen`] at the first position holding
    /// no queen, taking earlier removals in the same slice into account.
    /// `self` is left untouched either way.
    ///
    /// # Panics
    ///
    /// Panics if any position is off the board.
    #[instrument(skip(self, positions), fields(rows = self.rows, columns = self.columns, removing = positions.len()))]
    pub fn with_queens_removed(&self, positions: &[Position]) -> Result<Self, QueenError> {
        let next = self.transition::<RemoveQueen>(positions, |queens, position| {
            queens.remove(&position);
        })?;
        debug!(queens = next.queen_count(), "Queens removed");
        Ok(next)
    }

    /// Copies this state and applies `step` for each position, guarded by
    /// contract `C`. The copy is dropped on the first precondition failure.
    fn transition<C>(
        &self,
        positions: &[Position],
        step: impl Fn(&mut HashSet<Position>, Position),
    ) -> Result<Self, QueenError>
    where
        C: Contract<QueensState, Position>,
    {
        let mut next = self.clone();

        for &position in positions {
            C::pre(&next, &position)?;

            #[cfg(debug_assertions)]
            let before = C::snapshot(&next, &position);

            step(&mut next.queens, position);

            #[cfg(debug_assertions)]
            debug_assert!(
                C::post(&before, &next, &position),
                "Postcondition failed at {}",
                position
            );
        }

        assert_invariants(&next);
        Ok(next)
    }
}

impl fmt::Display for QueensState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                f.write_str("\n")?;
            }
            for column in 0..self.columns {
                let symbol = if self.queens.contains(&Position::new(row, column)) {
                    'Q'
                } else {
                    '.'
                };
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells(state: &QueensState) -> Vec<Position> {
        (0..state.rows())
            .flat_map(|row| (0..state.columns()).map(move |column| Position::new(row, column)))
            .collect()
    }

    #[test]
    fn test_new_board_is_empty() {
        for (rows, columns) in [(0, 0), (1, 1), (3, 5), (8, 8)] {
            let state = QueensState::new(rows, columns);
            assert_eq!(state.queen_count(), 0);
            assert!(state.queens().is_empty());
            assert!(all_cells(&state).into_iter().all(|p| !state.has_queen(p)));
        }
    }

    #[test]
    fn test_dimensions() {
        let state = QueensState::new(4, 6);
        assert_eq!(state.rows(), 4);
        assert_eq!(state.columns(), 6);
        assert!(state.contains(Position::new(3, 5)));
        assert!(!state.contains(Position::new(4, 0)));
        assert!(!state.contains(Position::new(0, 6)));
    }

    #[test]
    fn test_get_off_board() {
        let state = QueensState::new(2, 2);
        assert_eq!(state.get(Position::new(1, 1)), Some(false));
        assert_eq!(state.get(Position::new(2, 0)), None);
    }

    #[test]
    #[should_panic(expected = "outside the 8x8 board")]
    fn test_has_queen_off_board_panics() {
        QueensState::new(8, 8).has_queen(Position::new(8, 0));
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 board")]
    fn test_add_off_board_panics() {
        let _ = QueensState::new(3, 3).with_queens_added(&[Position::new(0, 3)]);
    }

    #[test]
    #[should_panic(expected = "outside the 4x2 board")]
    fn test_remove_off_board_panics() {
        let _ = QueensState::new(4, 2).with_queens_removed(&[Position::new(4, 1)]);
    }

    #[test]
    fn test_fill_and_clear_large_board_in_one_batch() {
        let state = QueensState::new(300, 300);
        let cells = all_cells(&state);

        let full = state.with_queens_added(&cells).unwrap();
        assert_eq!(full.queen_count(), 90_000);

        let cleared = full.with_queens_removed(&cells).unwrap();
        assert_eq!(cleared, state);
    }

    #[test]
    fn test_add_leaves_original_untouched() {
        let original = QueensState::new(8, 8);
        let added = original.with_queens_added(&[Position::new(2, 3)]).unwrap();

        assert!(added.has_queen(Position::new(2, 3)));
        assert!(!original.has_queen(Position::new(2, 3)));
        assert_eq!(original.queen_count(), 0);
        assert_eq!(added.rows(), original.rows());
        assert_eq!(added.columns(), original.columns());
    }

    #[test]
    fn test_failed_add_returns_no_state() {
        let state = QueensState::new(8, 8)
            .with_queens_added(&[Position::new(5, 5)])
            .unwrap();
        let result = state.with_queens_added(&[Position::new(1, 1), Position::new(5, 5)]);

        assert_eq!(result, Err(QueenError::DuplicateQueen(Position::new(5, 5))));
        assert!(!state.has_queen(Position::new(1, 1)));
        assert_eq!(state.queen_count(), 1);
    }

    #[test]
    fn test_remove_in_sequence() {
        let state = QueensState::new(4, 4)
            .with_queens_added(&[Position::new(0, 1), Position::new(2, 2)])
            .unwrap();
        let result = state.with_queens_removed(&[Position::new(0, 1), Position::new(0, 1)]);

        assert_eq!(result, Err(QueenError::MissingQueen(Position::new(0, 1))));
        assert_eq!(state.queen_count(), 2);
    }

    #[test]
    fn test_empty_batch_is_a_copy() {
        let state = QueensState::new(3, 3)
            .with_queens_added(&[Position::new(1, 1)])
            .unwrap();
        assert_eq!(state.with_queens_added(&[]).unwrap(), state);
        assert_eq!(state.with_queens_removed(&[]).unwrap(), state);
    }

    #[test]
    fn test_display() {
        let state = QueensState::new(2, 3)
            .with_queens_added(&[Position::new(0, 1)])
            .unwrap();
        assert_eq!(state.to_string(), ".Q.\n...");
        assert_eq!(QueensState::new(0, 0).to_string(), "");
    }
}
