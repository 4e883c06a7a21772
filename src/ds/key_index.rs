//! Key → slot lookup for the cache engine.
//!
//! Thin wrapper over `FxHashMap<K, SlotId>`. Keeping it separate from the
//! recency list makes the two views explicit: every engine mutation touches
//! both, and `KeyIndex::len` is the authoritative entry count.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::slot_arena::SlotId;

#[derive(Debug, Clone)]
pub struct KeyIndex<K> {
    map: FxHashMap<K, SlotId>,
}

impl<K> KeyIndex<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.get(key).copied()
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Records `key → id`, returning the handle it replaced.
    #[inline]
    pub fn insert(&mut self, key: K, id: SlotId) -> Option<SlotId> {
        self.map.insert(key, id)
    }

    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<SlotId>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.map.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional);
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn shrink_to_fit(&mut self) {
        self.map.shrink_to_fit();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, SlotId)> {
        self.map.iter().map(|(key, id)| (key, *id))
    }
}

impl<K> Default for KeyIndex<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::slot_arena::SlotArena;

    #[test]
    fn insert_get_remove() {
        let mut arena = SlotArena::new();
        let a = arena.insert(());
        let b = arena.insert(());

        let mut index: KeyIndex<String> = KeyIndex::new();
        assert_eq!(index.insert("a".to_string(), a), None);
        assert_eq!(index.insert("b".to_string(), b), None);

        // Borrowed lookups work with &str.
        assert_eq!(index.get("a"), Some(a));
        assert!(index.contains("b"));
        assert_eq!(index.len(), 2);

        assert_eq!(index.remove("a"), Some(a));
        assert_eq!(index.get("a"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn insert_replaces_handle() {
        let mut arena = SlotArena::new();
        let first = arena.insert(());
        let second = arena.insert(());

        let mut index = KeyIndex::with_capacity(4);
        index.insert(1u32, first);
        assert_eq!(index.insert(1u32, second), Some(first));
        assert_eq!(index.get(&1), Some(second));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn clear_empties_index() {
        let mut arena = SlotArena::new();
        let mut index = KeyIndex::new();
        for i in 0..8u8 {
            index.insert(i, arena.insert(()));
        }
        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
