//! Core types: disks, towers, moves, configuration, errors.
//!
//! These are the leaf building blocks. The session owns every value built
//! from them; nothing here holds global state.

pub mod disk;
pub mod tower;
pub mod action;
pub mod config;
pub mod error;

pub use disk::Disk;
pub use tower::{DiskStack, Tower, TowerId, TowerSet, TOWER_COUNT};
pub use action::Move;
pub use config::{Difficulty, Level, SessionConfig, DEFAULT_ADVANCE_DELAY, MAX_LEVEL};
pub use error::{HanoiError, Result};
