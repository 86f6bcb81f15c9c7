use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size set of region ids
///
/// Region ids are small integers in `0..size`, so a bit vector gives O(1)
/// membership tests and cheap set algebra during containment
/// classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionSet {
    bits: BitVec,
}

impl RegionSet {
    /// Create a set with no regions present
    pub fn new(max_regions: usize) -> Self {
        Self {
            bits: bitvec![0; max_regions],
        }
    }

    /// Insert a region id
    pub fn insert(&mut self, region: usize) {
        if region < self.bits.len() {
            self.bits.set(region, true);
        }
    }

    /// Test region membership
    pub fn contains(&self, region: usize) -> bool {
        self.bits.get(region).as_deref() == Some(&true)
    }

    /// Test if no regions are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count regions in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all region ids as a vector, ascending
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Build a set from region ids
    pub fn from_ids(ids: &[usize], max_regions: usize) -> Self {
        let mut set = Self::new(max_regions);
        for &region in ids {
            set.insert(region);
        }
        set
    }
}

impl fmt::Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionSet({} regions: {:?})", self.count(), self.to_vec())
    }
}
