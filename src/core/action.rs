//! Move representation.
//!
//! A `Move` records which disk travelled from which tower to which. Moves are
//! only recorded once applied, so every entry in the history is a transition
//! that actually happened and can be reversed by moving the disk back.

use serde::{Deserialize, Serialize};

use super::disk::Disk;
use super::tower::TowerId;

/// An applied disk move.
///
/// ## Example
///
/// ```
/// use rust_hanoi::core::{Disk, Move, TowerId};
///
/// let mv = Move::new(TowerId::START, TowerId::GOAL, Disk::new(1));
/// let back = mv.reversed();
///
/// assert_eq!(back.from, TowerId::GOAL);
/// assert_eq!(back.to, TowerId::START);
/// assert_eq!(back.disk, mv.disk);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Tower the disk was taken from.
    pub from: TowerId,

    /// Tower the disk was placed on.
    pub to: TowerId,

    /// The disk that moved.
    pub disk: Disk,
}

impl Move {
    /// Create a new move record.
    #[must_use]
    pub const fn new(from: TowerId, to: TowerId, disk: Disk) -> Self {
        Self { from, to, disk }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            disk: self.disk,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.disk, self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_fields() {
        let mv = Move::new(TowerId::START, TowerId::SPARE, Disk(1));

        assert_eq!(mv.from, TowerId::START);
        assert_eq!(mv.to, TowerId::SPARE);
        assert_eq!(mv.disk, Disk(1));
    }

    #[test]
    fn test_reversed_twice_is_identity() {
        let mv = Move::new(TowerId::SPARE, TowerId::GOAL, Disk(4));
        assert_eq!(mv.reversed().reversed(), mv);
    }

    #[test]
    fn test_display() {
        let mv = Move::new(TowerId::START, TowerId::GOAL, Disk(2));
        assert_eq!(format!("{}", mv), "Disk(2): Tower 1 -> Tower 3");
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(TowerId::START, TowerId::GOAL, Disk(3));
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"from":1,"to":3,"disk":3}"#);

        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
