//! Puzzle rules.
//!
//! - `can_move` / `validate_move`: a disk may only rest on a larger one
//! - `is_won`: every disk in play sits on tower 3
//!
//! The session calls into these rules but never duplicates them.

pub mod validator;

pub use validator::{can_move, is_won, validate_move};
