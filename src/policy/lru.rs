//! # Least Recently Used (LRU) Cache
//!
//! The cache engine: a key index and a recency-ordered list kept in lockstep,
//! with an optional capacity bound that evicts from the cold end.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                          LruCache<K, V>                              │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  KeyIndex<K>  (FxHashMap<K, SlotId>)                         │   │
//!   │   │                                                              │   │
//!   │   │  ┌─────────┬────────────────────────────────────────────┐    │   │
//!   │   │  │   Key   │  SlotId (index, generation)                │    │   │
//!   │   │  ├─────────┼────────────────────────────────────────────┤    │   │
//!   │   │  │  "a"    │  ────────────────────────────────────────┐ │    │   │
//!   │   │  │  "b"    │  ──────────────────────────────────┐     │ │    │   │
//!   │   │  │  "c"    │  ────────────────────────────┐     │     │ │    │   │
//!   │   │  └─────────┴──────────────────────────────┼─────┼─────┼─┘    │   │
//!   │   └───────────────────────────────────────────┼─────┼─────┼──────┘   │
//!   │                                               │     │     │          │
//!   │   ┌───────────────────────────────────────────┼─────┼─────┼──────┐   │
//!   │   │  IntrusiveList<Entry<K, V>> (nodes live in a SlotArena)      │   │
//!   │   │                                           ▼     ▼     ▼      │   │
//!   │   │  head ──► ┌──────┐ ◄──► ┌──────┐ ◄──► ┌──────┐ ◄── tail      │   │
//!   │   │    (MRU)  │ c: 3 │      │ b: 2 │      │ a: 1 │   (LRU)       │   │
//!   │   │           └──────┘      └──────┘      └──────┘               │   │
//!   │   │                                                              │   │
//!   │   │  Most Recently Used ────────────────► Least Recently Used    │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   capacity: Capacity::{Unbounded, Bounded(n)}                        │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Components
//!
//! | Component               | Description                                      |
//! |-------------------------|--------------------------------------------------|
//! | `LruCache<K, V>`        | Single-threaded engine: index + list + capacity  |
//! | `ConcurrentLruCache`    | Thread-safe wrapper with `parking_lot::RwLock`   |
//! | `Entry<K, V>`           | List payload owning the key and the value        |
//! | `IntrusiveList`         | Recency order; its arena is the slot store       |
//! | `KeyIndex<K>`           | Key → `SlotId` lookup                            |
//!
//! ## Operations
//!
//! | Operation        | Recency effect      | Complexity |
//! |------------------|---------------------|------------|
//! | `get`/`get_mut`  | moves to MRU        | O(1)       |
//! | `insert`         | new or updated → MRU| O(1)       |
//! | `peek`/`contains`| none                | O(1)       |
//! | `remove`         | unlinks             | O(1)       |
//! | `pop_lru`        | removes tail        | O(1)       |
//! | `peek_lru`       | none                | O(1)       |
//! | `touch`          | moves to MRU        | O(1)       |
//! | `recency_rank`   | none                | O(n)       |
//! | `resize`         | evicts tail entries | O(evicted) |
//! | `iter`           | none                | O(n)       |
//!
//! ## Eviction
//!
//! A fresh insert into a full cache evicts exactly the current tail before the
//! new entry is linked at the head. Updating an existing key never evicts.
//! `Bounded(0)` accepts no entries: every fresh insert is dropped.
//!
//! ```
//! use rusty_lru::LruCache;
//!
//! let mut cache = LruCache::new(3);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3);
//!
//! cache.insert("d", 4);
//! assert!(!cache.contains(&"a"));
//! assert_eq!(cache.peek_lru(), Some((&"b", &2)));
//! ```
//!
//! ## Consistency
//!
//! Every mutation updates the index and the list together. A stale `SlotId`
//! is rejected by the arena's generation check, so a handle can never reach
//! an entry that replaced the one it was issued for.
//! [`LruCache::check_invariants`] walks both views and reports the first
//! disagreement.
//!
//! ## Thread Safety
//!
//! `LruCache` needs `&mut self` for anything that reorders entries. Wrap it in
//! [`ConcurrentLruCache`] (feature `concurrency`) to share it: `get` takes
//! the write lock because it reorders, while `peek`, `contains`, `len` and
//! `peek_lru` run concurrently under the read lock.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::RwLock;

use crate::capacity::Capacity;
use crate::ds::intrusive_list::{self, IntrusiveList};
use crate::ds::key_index::KeyIndex;
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::LruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, LruMetricsReadRecorder, LruMetricsRecorder, MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// Upper bound on what a constructor preallocates from the capacity alone.
/// Larger caches grow on demand; use the builder's `prealloc` to go beyond.
const MAX_PREALLOC: usize = 4096;

#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Single-threaded LRU cache.
///
/// Keys are stored twice (once in the index, once in the list entry), hence
/// the `K: Clone` bound.
pub struct LruCache<K, V> {
    index: KeyIndex<K>,
    list: IntrusiveList<Entry<K, V>>,
    capacity: Capacity,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// ```
    /// use rusty_lru::{Capacity, LruCache};
    ///
    /// let cache: LruCache<u32, String> = LruCache::new(100);
    /// assert_eq!(cache.capacity(), Capacity::Bounded(100));
    /// assert!(cache.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(Capacity::Bounded(capacity))
    }

    /// Creates a cache that never evicts on insert.
    pub fn unbounded() -> Self {
        Self::with_capacity(Capacity::Unbounded)
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        Self::with_prealloc(capacity, capacity.prealloc_hint().min(MAX_PREALLOC))
    }

    pub(crate) fn with_prealloc(capacity: Capacity, prealloc: usize) -> Self {
        Self {
            index: KeyIndex::with_capacity(prealloc),
            list: IntrusiveList::with_capacity(prealloc),
            capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Creates a cache from a signed host capacity; `None` means unbounded.
    ///
    /// Negative capacities are rejected and nothing is built.
    ///
    /// ```
    /// use rusty_lru::LruCache;
    ///
    /// assert!(LruCache::<u8, u8>::try_new(None).is_ok());
    /// assert!(LruCache::<u8, u8>::try_new(Some(0)).is_ok());
    /// assert!(LruCache::<u8, u8>::try_new(Some(-1)).is_err());
    /// ```
    pub fn try_new(capacity: Option<i64>) -> Result<Self, ConfigError> {
        Capacity::from_signed(capacity).map(Self::with_capacity)
    }

    /// Returns the value for `key` and marks it most recently used.
    ///
    /// ```
    /// use rusty_lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    ///
    /// assert_eq!(cache.get(&1), Some(&"one"));
    /// cache.insert(3, "three"); // evicts 2, not 1
    /// assert!(cache.contains(&1));
    /// assert!(!cache.contains(&2));
    /// ```
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let Some(id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Like [`get`](Self::get) but hands out a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let Some(id) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_front(id);
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Returns the value for `key` without touching recency order.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let value = self
            .index
            .get(key)
            .and_then(|id| self.list.get(id))
            .map(|entry| &entry.value);

        #[cfg(feature = "metrics")]
        if value.is_some() {
            (&self.metrics).record_peek_hit();
        }

        value
    }

    pub fn peek_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let id = self.index.get(key)?;
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains(key)
    }

    /// Inserts or updates `key`, returning the previous value on update.
    ///
    /// The entry becomes most recently used either way. A fresh key in a full
    /// cache evicts the least recently used entry first.
    ///
    /// ```
    /// use rusty_lru::LruCache;
    ///
    /// let mut cache = LruCache::new(2);
    /// assert_eq!(cache.insert("k", 1), None);
    /// assert_eq!(cache.insert("k", 2), Some(1));
    /// assert_eq!(cache.peek(&"k"), Some(&2));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            self.list.move_to_front(id);
            return self
                .list
                .get_mut(id)
                .map(|entry| std::mem::replace(&mut entry.value, value));
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if let Capacity::Bounded(limit) = self.capacity {
            if limit == 0 {
                // insert-then-evict collapses to dropping the pair
                #[cfg(feature = "metrics")]
                {
                    self.metrics.record_evict_call();
                    self.metrics.record_evicted_entry();
                }
                log::trace!("dropped insert into zero-capacity lru cache");
                return None;
            }
            if self.list.len() >= limit {
                self.evict_down_to(limit - 1);
            }
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);

        debug_assert_eq!(self.index.len(), self.list.len());
        None
    }

    /// Alias for [`insert`](Self::insert).
    #[inline]
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    /// Removes `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key`, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let id = self.index.remove(key)?;
        let entry = self.list.remove(id)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        debug_assert_eq!(self.index.len(), self.list.len());
        Some((entry.key, entry.value))
    }

    /// Removes and returns the least recently used pair.
    ///
    /// ```
    /// use rusty_lru::LruCache;
    ///
    /// let mut cache = LruCache::unbounded();
    /// cache.insert(0, 0);
    /// cache.insert(1, 1);
    /// cache.insert(2, 2);
    /// cache.get(&0);
    ///
    /// assert_eq!(cache.pop_lru(), Some((1, 1)));
    /// assert_eq!(cache.len(), 2);
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        debug_assert_eq!(self.index.len(), self.list.len());
        Some((entry.key, entry.value))
    }

    /// The pair [`pop_lru`](Self::pop_lru) would remove, without removing it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_call();

        let entry = self.list.back()?;

        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_found();

        Some((&entry.key, &entry.value))
    }

    /// The most recently used pair.
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.list.front().map(|entry| (&entry.key, &entry.value))
    }

    /// Marks `key` most recently used without reading it.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(id) = self.index.get(key) else {
            return false;
        };
        let moved = self.list.move_to_front(id);

        #[cfg(feature = "metrics")]
        if moved {
            self.metrics.record_touch_found();
        }

        moved
    }

    /// Position of `key` in recency order; 0 is most recently used. O(n).
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let target = self.index.get(key)?;
        for (rank, id) in self.list.iter_ids().enumerate() {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();

            if id == target {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();
                return Some(rank);
            }
        }
        None
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Bounds the cache at `capacity` entries, evicting the coldest entries
    /// until `len() <= capacity`.
    ///
    /// ```
    /// use rusty_lru::LruCache;
    ///
    /// let mut cache = LruCache::unbounded();
    /// for i in 0..10 {
    ///     cache.insert(i, i);
    /// }
    /// cache.resize(8);
    /// assert_eq!(cache.len(), 8);
    /// assert_eq!(cache.peek_lru(), Some((&2, &2)));
    /// ```
    pub fn resize(&mut self, capacity: usize) {
        self.set_capacity(Capacity::Bounded(capacity));
    }

    /// Replaces the capacity bound. `Capacity::Unbounded` never evicts.
    pub fn set_capacity(&mut self, capacity: Capacity) {
        #[cfg(feature = "metrics")]
        self.metrics.record_resize();

        let previous = self.capacity;
        self.capacity = capacity;

        let evicted = match capacity.limit() {
            Some(limit) if self.list.len() > limit => self.evict_down_to(limit),
            _ => 0,
        };

        log::debug!(
            "lru cache capacity {} -> {}, evicted {} entries",
            previous,
            capacity,
            evicted
        );
    }

    /// Resizes from a signed host capacity.
    ///
    /// A negative value is rejected with no change to the cache.
    pub fn try_resize(&mut self, capacity: i64) -> Result<(), ConfigError> {
        let capacity = Capacity::try_from(capacity)?;
        self.set_capacity(capacity);
        Ok(())
    }

    /// Drops every entry. The capacity is unchanged.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        let dropped = self.list.len();
        self.list.clear();
        self.index.clear();

        log::debug!("cleared lru cache ({} entries)", dropped);
    }

    /// Releases spare memory held by the index and the list.
    pub fn shrink_to_fit(&mut self) {
        self.index.shrink_to_fit();
        self.list.shrink_to_fit();
    }

    /// Iterates `(key, value)` pairs from most to least recently used.
    ///
    /// Iteration never changes recency order.
    ///
    /// ```
    /// use rusty_lru::LruCache;
    ///
    /// let mut cache = LruCache::new(3);
    /// cache.insert('a', 1);
    /// cache.insert('b', 2);
    /// cache.insert('c', 3);
    ///
    /// let keys: Vec<char> = cache.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, ['c', 'b', 'a']);
    ///
    /// let oldest_first: Vec<i32> = cache.values().rev().copied().collect();
    /// assert_eq!(oldest_first, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Verifies that the index and the recency list describe the same entries.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but list holds {} entries",
                self.index.len(),
                self.list.len()
            )));
        }

        if self.capacity.is_exceeded_by(self.len()) {
            return Err(InvariantError::new(format!(
                "{} entries exceed capacity {}",
                self.len(),
                self.capacity
            )));
        }

        let mut walked = 0usize;
        for (rank, id) in self.list.iter_ids().take(self.list.len() + 1).enumerate() {
            walked += 1;
            let entry = self.list.get(id).ok_or_else(|| {
                InvariantError::new(format!("list node at rank {} is not live", rank))
            })?;
            if self.index.get(&entry.key) != Some(id) {
                return Err(InvariantError::new(format!(
                    "index does not point at list node at rank {}",
                    rank
                )));
            }
        }

        if walked != self.list.len() {
            return Err(InvariantError::new(format!(
                "walked {} nodes but list reports {}",
                walked,
                self.list.len()
            )));
        }

        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.list.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("lru invariant violated: {}", err);
        }
    }

    /// Pops tail entries until `len() <= target`; returns how many went.
    fn evict_down_to(&mut self, target: usize) -> usize {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let mut evicted = 0;
        while self.list.len() > target {
            let Some(entry) = self.list.pop_back() else {
                break;
            };
            self.index.remove(&entry.key);
            evicted += 1;

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();
            log::trace!("evicted least recently used entry ({} left)", self.list.len());
        }

        debug_assert_eq!(self.index.len(), self.list.len());
        evicted
    }
}

#[cfg(feature = "metrics")]
impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_hits: self.metrics.peek_hits.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            resize_calls: self.metrics.resize_calls,
            clear_calls: self.metrics.clear_calls,
            cache_len: self.index.len(),
            capacity: self.capacity.limit(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V> CoreCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruCache::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCache::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> Capacity {
        self.capacity
    }

    fn clear(&mut self) {
        LruCache::clear(self);
    }
}

impl<K, V> MutableCache<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCache::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCache::pop_lru(self)
    }

    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCache::peek_lru(self)
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        LruCache::touch(self, key)
    }

    #[inline]
    fn recency_rank(&self, key: &K) -> Option<usize> {
        LruCache::recency_rank(self, key)
    }
}

// ---------------------------------------------------------------------------
// Std impls
// ---------------------------------------------------------------------------

impl<K, V> fmt::Debug for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// An unbounded cache.
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<K, V> Clone for LruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Clones entries and recency order. Metrics start from zero.
    fn clone(&self) -> Self {
        Self {
            index: self.index.clone(),
            list: self.list.clone(),
            capacity: self.capacity,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }
}

impl<K, V> Extend<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Builds an unbounded cache; the last pair yielded is most recently used.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut cache = Self::unbounded();
        cache.extend(iter);
        cache
    }
}

impl<'a, K, V> IntoIterator for &'a LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Consumes the cache, yielding pairs from most to least recently used.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self.list }
    }
}

// ---------------------------------------------------------------------------
// Iterators
// ---------------------------------------------------------------------------

/// Borrowing iterator over `(key, value)` in MRU → LRU order.
pub struct Iter<'a, K, V> {
    inner: intrusive_list::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

/// Owning iterator returned by `LruCache::into_iter`.
pub struct IntoIter<K, V> {
    list: IntrusiveList<Entry<K, V>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().map(|entry| (entry.key, entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back().map(|entry| (entry.key, entry.value))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// ---------------------------------------------------------------------------
// ConcurrentLruCache
// ---------------------------------------------------------------------------

/// Thread-safe LRU cache sharing one [`LruCache`] behind a `parking_lot::RwLock`.
///
/// Cloning the handle shares the cache. Values are returned by clone so no
/// borrow outlives the lock.
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V> {
    inner: Arc<RwLock<LruCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.read();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> Default for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::from(LruCache::unbounded())
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> From<LruCache<K, V>> for ConcurrentLruCache<K, V> {
    fn from(cache: LruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates a shared cache holding at most `capacity` entries.
    ///
    /// ```
    /// use rusty_lru::policy::lru::ConcurrentLruCache;
    ///
    /// let cache: ConcurrentLruCache<u32, String> = ConcurrentLruCache::new(100);
    /// let handle = cache.clone();
    /// std::thread::spawn(move || {
    ///     handle.insert(1, "one".to_string());
    /// })
    /// .join()
    /// .unwrap();
    /// assert_eq!(cache.get(&1), Some("one".to_string()));
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::from(LruCache::new(capacity))
    }

    pub fn unbounded() -> Self {
        Self::from(LruCache::unbounded())
    }

    pub fn with_capacity(capacity: Capacity) -> Self {
        Self::from(LruCache::with_capacity(capacity))
    }

    pub fn try_new(capacity: Option<i64>) -> Result<Self, ConfigError> {
        LruCache::try_new(capacity).map(Self::from)
    }

    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.write().insert(key, value)
    }

    /// Returns a clone of the value and marks it most recently used.
    ///
    /// Takes the write lock because it reorders.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.write().get(key).cloned()
    }

    /// Returns a clone of the value under the read lock.
    pub fn peek<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.read().peek(key).cloned()
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.write().remove(key)
    }

    pub fn touch<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.write().touch(key)
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.read().contains(key)
    }

    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.read().recency_rank(key)
    }

    pub fn pop_lru(&self) -> Option<(K, V)> {
        self.inner.write().pop_lru()
    }

    pub fn peek_lru(&self) -> Option<(K, V)> {
        self.inner
            .read()
            .peek_lru()
            .map(|(key, value)| (key.clone(), value.clone()))
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.inner.read().capacity()
    }

    pub fn resize(&self, capacity: usize) {
        self.inner.write().resize(capacity);
    }

    pub fn set_capacity(&self, capacity: Capacity) {
        self.inner.write().set_capacity(capacity);
    }

    pub fn try_resize(&self, capacity: i64) -> Result<(), ConfigError> {
        self.inner.write().try_resize(capacity)
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Runs `f` against the cache under a single read lock.
    ///
    /// Use it to iterate a consistent view; writers wait until `f` returns.
    ///
    /// ```
    /// use rusty_lru::policy::lru::ConcurrentLruCache;
    ///
    /// let cache = ConcurrentLruCache::new(4);
    /// cache.insert("a", 1);
    /// cache.insert("b", 2);
    /// let keys: Vec<&str> = cache.with_read(|c| c.keys().copied().collect());
    /// assert_eq!(keys, ["b", "a"]);
    /// ```
    pub fn with_read<R>(&self, f: impl FnOnce(&LruCache<K, V>) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.inner.read().metrics_snapshot()
    }
}

#[cfg(all(feature = "metrics", feature = "concurrency"))]
impl<K, V> MetricsSnapshotProvider<LruMetricsSnapshot> for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> LruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Send + Sync,
    V: Send + Sync,
{
}
