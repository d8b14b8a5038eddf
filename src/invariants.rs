//! Session invariant checks.
//!
//! - Every tower is strictly decreasing from bottom to top
//! - The board holds exactly the disks laid out by the last setup, each once
//! - A selected disk is still the top of its tower
//!
//! The session runs `validate_invariants` after every transition in debug
//! builds. `try_validate_invariants` is the non-panicking form for tests and
//! tooling.

use crate::core::{Disk, Tower, TowerId};
use crate::session::{GameSession, Selection};

/// A broken session invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("{tower} is not strictly decreasing toward the top")]
    Unordered { tower: TowerId },

    #[error("board holds {found} disks, expected {expected}")]
    DiskCount { expected: u32, found: usize },

    #[error("{disk} is outside 1..={max}")]
    DiskOutOfRange { disk: Disk, max: u32 },

    #[error("{0} appears more than once")]
    DuplicateDisk(Disk),

    #[error("selected {disk} is not the top of {tower}")]
    StaleSelection { tower: TowerId, disk: Disk },
}

/// Run every check, panicking on the first failure.
pub fn validate_invariants(session: &GameSession) {
    if let Err(violation) = try_validate_invariants(session) {
        panic!("Invariant violation: {violation}");
    }
}

/// Run every check, returning the first failure.
pub fn try_validate_invariants(session: &GameSession) -> Result<(), InvariantViolation> {
    for tower in session.towers().iter() {
        check_tower(tower)?;
    }
    check_disk_set(session)?;
    check_selection(session)?;
    Ok(())
}

/// Check one tower's stacking order.
pub fn check_tower(tower: &Tower) -> Result<(), InvariantViolation> {
    if tower.is_ordered() {
        Ok(())
    } else {
        Err(InvariantViolation::Unordered { tower: tower.id() })
    }
}

fn check_disk_set(session: &GameSession) -> Result<(), InvariantViolation> {
    let expected = session.disk_count();
    let found = session.towers().total_disks();
    if found != expected as usize {
        return Err(InvariantViolation::DiskCount { expected, found });
    }

    let mut seen = vec![false; expected as usize];
    for tower in session.towers().iter() {
        for &disk in tower.disks() {
            let size = disk.size();
            if size == 0 || size > expected {
                return Err(InvariantViolation::DiskOutOfRange {
                    disk,
                    max: expected,
                });
            }
            let slot = &mut seen[(size - 1) as usize];
            if *slot {
                return Err(InvariantViolation::DuplicateDisk(disk));
            }
            *slot = true;
        }
    }
    Ok(())
}

fn check_selection(session: &GameSession) -> Result<(), InvariantViolation> {
    match session.selection() {
        Selection::DiskSelected { tower, disk } if !session.tower(tower).is_top(disk) => {
            Err(InvariantViolation::StaleSelection { tower, disk })
        }
        _ => Ok(()),
    }
}
