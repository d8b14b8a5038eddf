//! Towers and the fixed three-tower set.
//!
//! ## TowerId
//!
//! Type-safe tower identifier. Towers are numbered 1 to 3, matching what a
//! player sees; `TowerId::index` gives the 0-based storage slot.
//!
//! ## Tower
//!
//! An ordered stack of disks, bottom to top. Pushing performs no legality
//! check: callers consult the move validator first.
//!
//! ## TowerSet
//!
//! The three towers of a session, indexed by `TowerId` for O(1) access.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::disk::Disk;
use super::error::{HanoiError, Result};

/// Number of towers in every session.
pub const TOWER_COUNT: usize = 3;

/// Tower identifier, 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TowerId(u8);

impl TowerId {
    /// Tower 1, where a full game starts.
    pub const START: TowerId = TowerId(1);
    /// Tower 2, the spare.
    pub const SPARE: TowerId = TowerId(2);
    /// Tower 3, which must end up holding every disk.
    pub const GOAL: TowerId = TowerId(3);

    /// All towers in display order.
    pub const ALL: [TowerId; TOWER_COUNT] = [Self::START, Self::SPARE, Self::GOAL];

    /// Create a tower ID from its 1-based number.
    ///
    /// ```
    /// use rust_hanoi::core::TowerId;
    ///
    /// assert_eq!(TowerId::new(3).unwrap(), TowerId::GOAL);
    /// assert!(TowerId::new(0).is_err());
    /// assert!(TowerId::new(4).is_err());
    /// ```
    pub fn new(number: u8) -> Result<Self> {
        if (1..=TOWER_COUNT as u8).contains(&number) {
            Ok(Self(number))
        } else {
            Err(HanoiError::UnknownTower(number))
        }
    }

    /// Get the 1-based tower number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Get the 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl TryFrom<u8> for TowerId {
    type Error = HanoiError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

impl From<TowerId> for u8 {
    fn from(id: TowerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TowerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tower {}", self.0)
    }
}

/// Disks stored bottom to top.
///
/// Eight inline slots cover the first few levels without heap allocation.
pub type DiskStack = SmallVec<[Disk; 8]>;

/// A single tower: an ordered stack of disks.
///
/// ## Invariant
///
/// Disk sizes strictly decrease from bottom to top. `push` does not enforce
/// this; see [`Tower::is_ordered`] and the `invariants` module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    id: TowerId,
    disks: DiskStack,
}

impl Tower {
    /// Create an empty tower.
    #[must_use]
    pub fn new(id: TowerId) -> Self {
        Self {
            id,
            disks: SmallVec::new(),
        }
    }

    /// Get this tower's ID.
    #[must_use]
    pub fn id(&self) -> TowerId {
        self.id
    }

    /// Add a disk to the top. No legality check.
    pub fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    /// Remove and return the top disk.
    ///
    /// # Errors
    ///
    /// Returns `HanoiError::EmptyTower` if the tower holds no disks.
    pub fn pop(&mut self) -> Result<Disk> {
        self.disks.pop().ok_or(HanoiError::EmptyTower(self.id))
    }

    /// Get the top disk without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    /// Number of disks on this tower.
    #[must_use]
    pub fn count(&self) -> usize {
        self.disks.len()
    }

    /// Check if the tower holds no disks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Check if `disk` is currently the top disk.
    #[must_use]
    pub fn is_top(&self, disk: Disk) -> bool {
        self.peek() == Some(disk)
    }

    /// Disks bottom to top.
    #[must_use]
    pub fn disks(&self) -> &[Disk] {
        &self.disks
    }

    /// Disk sizes bottom to top.
    pub fn sizes(&self) -> impl Iterator<Item = u32> + '_ {
        self.disks.iter().map(|d| d.size())
    }

    /// Remove every disk.
    pub fn clear(&mut self) {
        self.disks.clear();
    }

    /// Check the stacking invariant: sizes strictly decrease toward the top.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[1].fits_on(pair[0]))
    }
}

/// The three towers of a session.
///
/// ## Example
///
/// ```
/// use rust_hanoi::core::{Disk, TowerId, TowerSet};
///
/// let mut towers = TowerSet::new();
/// towers[TowerId::START].push(Disk::new(2));
/// towers[TowerId::START].push(Disk::new(1));
///
/// assert_eq!(towers[TowerId::START].peek(), Some(Disk::new(1)));
/// assert_eq!(towers.total_disks(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerSet {
    towers: [Tower; TOWER_COUNT],
}

impl TowerSet {
    /// Create three empty towers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            towers: TowerId::ALL.map(Tower::new),
        }
    }

    /// Get a tower.
    #[must_use]
    pub fn get(&self, id: TowerId) -> &Tower {
        &self.towers[id.index()]
    }

    /// Get a mutable tower.
    pub fn get_mut(&mut self, id: TowerId) -> &mut Tower {
        &mut self.towers[id.index()]
    }

    /// Iterate over the towers in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Tower> {
        self.towers.iter()
    }

    /// Empty every tower.
    pub fn clear(&mut self) {
        for tower in &mut self.towers {
            tower.clear();
        }
    }

    /// Total disks across all towers.
    #[must_use]
    pub fn total_disks(&self) -> usize {
        self.towers.iter().map(Tower::count).sum()
    }

    /// Find the tower a disk is on, if any.
    #[must_use]
    pub fn locate(&self, disk: Disk) -> Option<TowerId> {
        self.towers
            .iter()
            .find(|t| t.disks().contains(&disk))
            .map(Tower::id)
    }
}

impl Default for TowerSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<TowerId> for TowerSet {
    type Output = Tower;

    fn index(&self, id: TowerId) -> &Self::Output {
        self.get(id)
    }
}

impl IndexMut<TowerId> for TowerSet {
    fn index_mut(&mut self, id: TowerId) -> &mut Self::Output {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tower_of(id: TowerId, sizes: &[u32]) -> Tower {
        let mut tower = Tower::new(id);
        for &size in sizes {
            tower.push(Disk(size));
        }
        tower
    }

    #[test]
    fn test_tower_id_basics() {
        assert_eq!(TowerId::START.number(), 1);
        assert_eq!(TowerId::START.index(), 0);
        assert_eq!(TowerId::GOAL.index(), 2);
        assert_eq!(format!("{}", TowerId::SPARE), "Tower 2");
    }

    #[test]
    fn test_tower_id_rejects_out_of_range() {
        assert_eq!(TowerId::new(0), Err(HanoiError::UnknownTower(0)));
        assert_eq!(TowerId::new(4), Err(HanoiError::UnknownTower(4)));
        assert_eq!(TowerId::try_from(2), Ok(TowerId::SPARE));
    }

    #[test]
    fn test_tower_id_serialization() {
        let json = serde_json::to_string(&TowerId::GOAL).unwrap();
        assert_eq!(json, "3");
        let back: TowerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TowerId::GOAL);
        assert!(serde_json::from_str::<TowerId>("9").is_err());
    }

    #[test]
    fn test_push_pop_peek() {
        let mut tower = Tower::new(TowerId::START);
        assert_eq!(tower.peek(), None);

        tower.push(Disk(3));
        tower.push(Disk(1));

        assert_eq!(tower.peek(), Some(Disk(1)));
        assert_eq!(tower.count(), 2);
        assert_eq!(tower.pop(), Ok(Disk(1)));
        assert_eq!(tower.pop(), Ok(Disk(3)));
        assert!(tower.is_empty());
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut tower = Tower::new(TowerId::SPARE);
        assert_eq!(tower.pop(), Err(HanoiError::EmptyTower(TowerId::SPARE)));
    }

    #[test]
    fn test_is_top() {
        let tower = tower_of(TowerId::START, &[3, 2, 1]);
        assert!(tower.is_top(Disk(1)));
        assert!(!tower.is_top(Disk(2)));
    }

    #[test]
    fn test_is_ordered() {
        assert!(tower_of(TowerId::START, &[]).is_ordered());
        assert!(tower_of(TowerId::START, &[5]).is_ordered());
        assert!(tower_of(TowerId::START, &[5, 3, 1]).is_ordered());
        assert!(!tower_of(TowerId::START, &[1, 3]).is_ordered());
        assert!(!tower_of(TowerId::START, &[3, 3]).is_ordered());
    }

    #[test]
    fn test_sizes_bottom_to_top() {
        let tower = tower_of(TowerId::START, &[4, 2, 1]);
        assert_eq!(tower.sizes().collect::<Vec<_>>(), vec![4, 2, 1]);
    }

    #[test]
    fn test_tower_set_indexing() {
        let mut towers = TowerSet::new();
        towers[TowerId::GOAL].push(Disk(2));

        assert_eq!(towers[TowerId::GOAL].count(), 1);
        assert!(towers[TowerId::START].is_empty());
        assert_eq!(towers.get(TowerId::GOAL).id(), TowerId::GOAL);
    }

    #[test]
    fn test_tower_set_locate_and_clear() {
        let mut towers = TowerSet::new();
        towers[TowerId::START].push(Disk(2));
        towers[TowerId::SPARE].push(Disk(1));

        assert_eq!(towers.locate(Disk(1)), Some(TowerId::SPARE));
        assert_eq!(towers.locate(Disk(9)), None);
        assert_eq!(towers.total_disks(), 2);

        towers.clear();
        assert_eq!(towers.total_disks(), 0);
    }

    #[test]
    fn test_tower_set_iter_order() {
        let towers = TowerSet::new();
        let ids: Vec<_> = towers.iter().map(Tower::id).collect();
        assert_eq!(ids, TowerId::ALL.to_vec());
    }
}
