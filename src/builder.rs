//! Builder for configuring LRU caches.
//!
//! Collects the capacity bound and an optional preallocation size, then
//! builds either a single-threaded [`LruCache`] or, with the `concurrency`
//! feature, a shared [`ConcurrentLruCache`](crate::policy::lru::ConcurrentLruCache).
//!
//! ## Example
//!
//! ```rust
//! use rusty_lru::builder::LruCacheBuilder;
//!
//! let mut cache = LruCacheBuilder::new().capacity(100).build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::capacity::Capacity;
use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::lru::ConcurrentLruCache;
use crate::policy::lru::LruCache;

/// Builder for [`LruCache`] instances.
///
/// Defaults to an unbounded cache with no preallocation beyond what the
/// capacity suggests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LruCacheBuilder {
    capacity: Capacity,
    prealloc: Option<usize>,
}

impl LruCacheBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the cache at `capacity` entries.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Capacity::Bounded(capacity);
        self
    }

    /// Bounds the cache from a signed host capacity.
    ///
    /// ```
    /// use rusty_lru::builder::LruCacheBuilder;
    ///
    /// assert!(LruCacheBuilder::new().try_capacity(10).is_ok());
    /// assert!(LruCacheBuilder::new().try_capacity(-10).is_err());
    /// ```
    pub fn try_capacity(mut self, capacity: i64) -> Result<Self, ConfigError> {
        self.capacity = Capacity::try_from(capacity)?;
        Ok(self)
    }

    pub fn unbounded(mut self) -> Self {
        self.capacity = Capacity::Unbounded;
        self
    }

    /// Number of entries to allocate room for up front.
    ///
    /// Without this, bounded caches preallocate up to a small fixed limit and
    /// unbounded caches start empty.
    pub fn prealloc(mut self, entries: usize) -> Self {
        self.prealloc = Some(entries);
        self
    }

    pub fn build<K, V>(self) -> LruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        match self.prealloc {
            Some(entries) => LruCache::with_prealloc(self.capacity, entries),
            None => LruCache::with_capacity(self.capacity),
        }
    }

    #[cfg(feature = "concurrency")]
    pub fn build_concurrent<K, V>(self) -> ConcurrentLruCache<K, V>
    where
        K: Eq + Hash + Clone,
    {
        ConcurrentLruCache::from(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builder_is_unbounded() {
        let cache = LruCacheBuilder::new().build::<u64, u64>();
        assert_eq!(cache.capacity(), Capacity::Unbounded);
        assert!(cache.is_empty());
    }

    #[test]
    fn capacity_bounds_the_cache() {
        let mut cache = LruCacheBuilder::new().capacity(2).prealloc(2).build();
        cache.insert(1u8, "one");
        cache.insert(2u8, "two");
        cache.insert(3u8, "three");

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert_eq!(cache.capacity(), Capacity::Bounded(2));
    }

    #[test]
    fn later_setting_wins() {
        let builder = LruCacheBuilder::new().capacity(5).unbounded();
        assert_eq!(builder.build::<u8, u8>().capacity(), Capacity::Unbounded);

        let builder = LruCacheBuilder::new().unbounded().capacity(5);
        assert_eq!(builder.build::<u8, u8>().capacity(), Capacity::Bounded(5));
    }

    #[test]
    fn try_capacity_rejects_negative() {
        let err = LruCacheBuilder::new().try_capacity(-1).unwrap_err();
        assert!(err.message().contains("-1"));

        let cache = LruCacheBuilder::new()
            .try_capacity(0)
            .unwrap()
            .build::<u8, u8>();
        assert_eq!(cache.capacity(), Capacity::Bounded(0));
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn builds_concurrent_cache() {
        let cache = LruCacheBuilder::new()
            .capacity(4)
            .build_concurrent::<u32, String>();
        cache.insert(1, "one".to_string());
        assert_eq!(cache.get(&1), Some("one".to_string()));
        assert_eq!(cache.capacity(), Capacity::Bounded(4));
    }
}
