//! # rust-hanoi
//!
//! A Tower of Hanoi puzzle engine with level progression and move undo.
//!
//! ## Design Principles
//!
//! 1. **UI-Agnostic**: The engine never draws. Session operations return
//!    `Effect`s that a presentation layer applies via the `Presenter` trait.
//!
//! 2. **One Owner**: Towers, history, level and difficulty live in a single
//!    `GameSession`. No global state.
//!
//! 3. **Disks Are Values**: A disk is its size. Adapters map disks to their
//!    own handles.
//!
//! ## Architecture
//!
//! - **Drag state machine**: `Idle` → grab a top disk → `DiskSelected` →
//!   drop → validate, apply, record, check for a win → `Idle`.
//!
//! - **Ticketed level transitions**: A win schedules the next setup with a
//!   `TransitionTicket`. Only the pending ticket is honoured, so late or
//!   repeated timers cannot advance twice.
//!
//! - **Persistent history**: Moves are kept in an `im::Vector`, making
//!   session snapshots cheap.
//!
//! ## Modules
//!
//! - `core`: Disks, towers, moves, configuration, errors
//! - `rules`: Move validator and win condition
//! - `history`: LIFO move history for undo
//! - `session`: The game session, effects and the presenter seam
//! - `invariants`: Consistency checks run after every transition
//! - `render`: Presentation adapters

pub mod core;
pub mod rules;
pub mod history;
pub mod session;
pub mod invariants;
pub mod render;

// Re-export commonly used types
pub use crate::core::{
    Disk, DiskStack, Tower, TowerId, TowerSet,
    Move, Level, Difficulty, SessionConfig,
    HanoiError, Result,
};

pub use crate::rules::{can_move, is_won, validate_move};

pub use crate::history::MoveHistory;

pub use crate::session::{
    Effect, Presenter, GameSession, Selection,
    TransitionGuard, TransitionTicket,
};

pub use crate::invariants::{InvariantViolation, try_validate_invariants, validate_invariants};

pub use crate::render::TextPresenter;
