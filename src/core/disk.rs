//! Disk identification.
//!
//! A disk is identified by its size alone: size 1 is the smallest. Disks are
//! plain values, so a presentation layer keeps its own mapping from `Disk` to
//! whatever handle it renders.
//!
//! ```
//! use rust_hanoi::core::Disk;
//!
//! let small = Disk::new(1);
//! let large = Disk::new(3);
//!
//! assert!(small.fits_on(large));
//! assert!(!large.fits_on(small));
//! assert!(!small.fits_on(small));
//! ```

use serde::{Deserialize, Serialize};

/// A disk of a given size (1 = smallest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Disk(pub u32);

impl Disk {
    /// Create a disk of the given size.
    #[must_use]
    pub const fn new(size: u32) -> Self {
        Self(size)
    }

    /// Get the disk size.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.0
    }

    /// Check whether this disk may rest directly on `below`.
    ///
    /// Only strictly smaller disks fit, so a disk never fits on itself.
    #[must_use]
    pub const fn fits_on(self, below: Disk) -> bool {
        self.0 < below.0
    }
}

impl From<u32> for Disk {
    fn from(size: u32) -> Self {
        Self(size)
    }
}

impl std::fmt::Display for Disk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disk({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_size() {
        assert_eq!(Disk::new(4).size(), 4);
        assert_eq!(Disk::from(2), Disk(2));
    }

    #[test]
    fn test_fits_on() {
        assert!(Disk(1).fits_on(Disk(2)));
        assert!(Disk(2).fits_on(Disk(5)));
        assert!(!Disk(5).fits_on(Disk(2)));
        assert!(!Disk(3).fits_on(Disk(3)));
    }

    #[test]
    fn test_ordering() {
        let mut disks = vec![Disk(2), Disk(5), Disk(1)];
        disks.sort();
        assert_eq!(disks, vec![Disk(1), Disk(2), Disk(5)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Disk(42)), "Disk(42)");
    }

    #[test]
    fn test_serialization() {
        let disk = Disk(7);
        let json = serde_json::to_string(&disk).unwrap();
        let deserialized: Disk = serde_json::from_str(&json).unwrap();
        assert_eq!(disk, deserialized);
    }
}
