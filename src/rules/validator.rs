//! Move legality and the win condition.
//!
//! Both rules are pure: they look at tower tops and counts and never mutate.

use crate::core::disk::Disk;
use crate::core::error::{HanoiError, Result};
use crate::core::tower::{TowerId, TowerSet};

/// Decide whether `source_top` may be placed on a tower whose top is `dest_top`.
///
/// Legal iff the destination is empty or its top disk is strictly larger.
///
/// ```
/// use rust_hanoi::core::Disk;
/// use rust_hanoi::rules::can_move;
///
/// assert!(can_move(Disk::new(2), None));
/// assert!(can_move(Disk::new(1), Some(Disk::new(2))));
/// assert!(!can_move(Disk::new(3), Some(Disk::new(2))));
/// ```
#[must_use]
pub fn can_move(source_top: Disk, dest_top: Option<Disk>) -> bool {
    match dest_top {
        None => true,
        Some(below) => source_top.fits_on(below),
    }
}

/// Like [`can_move`], but reports the offending pair.
///
/// # Errors
///
/// Returns `HanoiError::InvalidMove` when the destination top is not larger.
pub fn validate_move(source_top: Disk, dest_top: Option<Disk>) -> Result<()> {
    match dest_top {
        Some(onto) if !can_move(source_top, dest_top) => Err(HanoiError::InvalidMove {
            disk: source_top,
            onto,
        }),
        _ => Ok(()),
    }
}

/// Check the win condition: tower 3 holds every disk in play.
///
/// Only the count is compared; the stacking invariant guarantees order.
#[must_use]
pub fn is_won(towers: &TowerSet, disk_count: u32) -> bool {
    towers[TowerId::GOAL].count() == disk_count as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_destination_always_legal() {
        for size in 1..=10 {
            assert!(can_move(Disk(size), None));
        }
    }

    #[test]
    fn test_smaller_onto_larger() {
        assert!(can_move(Disk(1), Some(Disk(3))));
        assert!(!can_move(Disk(3), Some(Disk(1))));
    }

    #[test]
    fn test_equal_sizes_rejected() {
        assert!(!can_move(Disk(2), Some(Disk(2))));
    }

    #[test]
    fn test_validate_move_reports_pair() {
        assert_eq!(validate_move(Disk(1), Some(Disk(2))), Ok(()));
        assert_eq!(validate_move(Disk(1), None), Ok(()));
        assert_eq!(
            validate_move(Disk(4), Some(Disk(2))),
            Err(HanoiError::InvalidMove {
                disk: Disk(4),
                onto: Disk(2),
            })
        );
    }

    #[test]
    fn test_is_won() {
        let mut towers = TowerSet::new();
        assert!(!is_won(&towers, 3));

        for size in (1..=3).rev() {
            towers[TowerId::GOAL].push(Disk(size));
        }
        assert!(is_won(&towers, 3));
        assert!(!is_won(&towers, 4));
    }

    #[test]
    fn test_is_won_ignores_other_towers() {
        let mut towers = TowerSet::new();
        for size in (1..=3).rev() {
            towers[TowerId::SPARE].push(Disk(size));
        }
        assert!(!is_won(&towers, 3));
    }
}
