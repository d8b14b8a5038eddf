//! Drag selection state.

use serde::{Deserialize, Serialize};

use crate::core::disk::Disk;
use crate::core::tower::TowerId;

/// Whether a disk is currently being dragged.
///
/// A disk is only ever selected while it is the top of its tower.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing grabbed.
    #[default]
    Idle,
    /// `disk` was grabbed from the top of `tower`.
    DiskSelected { tower: TowerId, disk: Disk },
}

impl Selection {
    /// Check if nothing is selected.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Selection::Idle)
    }

    /// The selected tower and disk, if any.
    #[must_use]
    pub fn selected(&self) -> Option<(TowerId, Disk)> {
        match *self {
            Selection::Idle => None,
            Selection::DiskSelected { tower, disk } => Some((tower, disk)),
        }
    }

    /// Take the selection, leaving `Idle` behind.
    pub fn take(&mut self) -> Option<(TowerId, Disk)> {
        std::mem::take(self).selected()
    }
}
