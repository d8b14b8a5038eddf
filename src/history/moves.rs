//! LIFO move history backing undo.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::action::Move;
use crate::core::error::{HanoiError, Result};

/// Applied moves, oldest first.
///
/// Undo always removes the most recent entry; there is no redo stack, so an
/// undone move is gone for good.
///
/// ## Example
///
/// ```
/// use rust_hanoi::core::{Disk, Move, TowerId};
/// use rust_hanoi::history::MoveHistory;
///
/// let mut history = MoveHistory::new();
/// history.record(Move::new(TowerId::START, TowerId::SPARE, Disk::new(1)));
/// history.record(Move::new(TowerId::START, TowerId::GOAL, Disk::new(2)));
///
/// let last = history.undo_last().unwrap();
/// assert_eq!(last.disk, Disk::new(2));
/// assert_eq!(history.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vector<Move>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an applied move.
    pub fn record(&mut self, mv: Move) {
        self.moves.push_back(mv);
    }

    /// Remove and return the most recent move.
    ///
    /// # Errors
    ///
    /// Returns `HanoiError::EmptyHistory` if nothing has been recorded.
    pub fn undo_last(&mut self) -> Result<Move> {
        self.moves.pop_back().ok_or(HanoiError::EmptyHistory)
    }

    /// Forget every recorded move.
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Move> {
        self.moves.back()
    }

    /// Number of recorded moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves are recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Iterate oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
