//! Transposition table keyed on a canonical state fingerprint: once a state
//! has been reached at a given total move count, a later path that reaches
//! the same state at an equal or higher count is redundant and gets dropped.
//!
//! The original engine backed this with a fixed-capacity open-addressed
//! table and chained overflow buckets, with growth left unimplemented. A
//! `std` [`HashMap`] with an fxhash hasher gives the same "insert once,
//! update in place" semantics without the fixed-capacity ceiling, so the
//! table simply grows instead of the original's unreachable resize path.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use fxhash::FxBuildHasher;

pub struct FingerprintMap {
    map: HashMap<Vec<u8>, i32, FxBuildHasher>,
}

impl FingerprintMap {
    pub fn with_capacity(capacity: usize) -> Self {
        FingerprintMap { map: HashMap::with_capacity_and_hasher(capacity, FxBuildHasher::default()) }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Inserts `value` under `key` if absent, returning `None`. If `key` is
    /// already present, leaves the stored value untouched and returns it —
    /// the caller decides whether to overwrite via [`FingerprintMap::update`].
    pub fn get_or_insert(&mut self, key: Vec<u8>, value: i32) -> Option<i32> {
        match self.map.entry(key) {
            Entry::Occupied(e) => Some(*e.get()),
            Entry::Vacant(e) => {
                e.insert(value);
                None
            }
        }
    }

    pub fn update(&mut self, key: &[u8], value: i32) {
        if let Some(v) = self.map.get_mut(key) {
            *v = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_returns_none_second_returns_existing() {
        let mut map = FingerprintMap::with_capacity(16);
        assert_eq!(map.get_or_insert(vec![1, 2, 3], 10), None);
        assert_eq!(map.get_or_insert(vec![1, 2, 3], 20), Some(10));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn update_overwrites_stored_value() {
        let mut map = FingerprintMap::with_capacity(16);
        map.get_or_insert(vec![9], 5);
        map.update(&[9], 2);
        assert_eq!(map.get_or_insert(vec![9], 99), Some(2));
    }
}
