//! Error taxonomy for tower and session operations.
//!
//! Most of these are recovered locally by the session and turned into a user
//! message. `EmptyTower` raised while undoing means the history and the towers
//! disagree, which the session treats as a defect rather than a user error.

use super::disk::Disk;
use super::tower::TowerId;

/// Errors produced by towers, the move validator, history, and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HanoiError {
    /// The moved disk is not smaller than the destination's top disk.
    #[error("cannot place {disk} on top of {onto}")]
    InvalidMove { disk: Disk, onto: Disk },

    /// Undo was requested with no recorded moves.
    #[error("no moves to undo")]
    EmptyHistory,

    /// A disk was requested from a tower that holds none.
    #[error("{0} is empty")]
    EmptyTower(TowerId),

    /// Tower numbers run from 1 to 3.
    #[error("unknown tower {0}, expected 1, 2 or 3")]
    UnknownTower(u8),

    #[error("unknown difficulty {0:?}, expected \"easy\" or \"hard\"")]
    UnknownDifficulty(String),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, HanoiError>;
