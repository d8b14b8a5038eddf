//! Move history for undo.
//!
//! Moves are appended as they are applied and popped in reverse order when
//! undone. Setup (new level, restart, difficulty change) clears the history.
//! Storage is an `im::Vector`, so snapshotting a session is O(1).

mod moves;

pub use moves::MoveHistory;
