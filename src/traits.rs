//! # Cache Trait Hierarchy
//!
//! Generic cache interfaces implemented by [`LruCache`](crate::policy::lru::LruCache).
//! Code that only needs "a cache" can depend on the trait instead of the
//! concrete engine.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → Capacity                 │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          MutableCache<K, V>             │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K]) → Vec<Option<V>>    │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │          LruCacheTrait<K, V>            │
//!   │                                         │
//!   │  pop_lru() → Option<(K, V)>             │
//!   │  peek_lru() → Option<(&K, &V)>          │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → Option<usize>       │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Trait Summary
//!
//! | Trait             | Extends         | Purpose                              |
//! |-------------------|-----------------|--------------------------------------|
//! | `CoreCache`       | -               | Universal cache operations           |
//! | `MutableCache`    | `CoreCache`     | Adds arbitrary key removal           |
//! | `LruCacheTrait`   | `MutableCache`  | Recency-ordered eviction             |
//! | `ConcurrentCache` | `Send + Sync`   | Marker for thread-safe caches        |
//!
//! ## Thread Safety
//!
//! - `LruCache` is **NOT thread-safe**; it needs `&mut self` for every
//!   operation that reorders entries.
//! - `ConcurrentLruCache` (feature `concurrency`) wraps it in a
//!   `parking_lot::RwLock` and implements [`ConcurrentCache`].

use crate::capacity::Capacity;

/// Core cache operations that all caches support.
///
/// # Example
///
/// ```
/// use rusty_lru::traits::CoreCache;
/// use rusty_lru::LruCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(CoreCache::len(&cache), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity, the least recently used entry is evicted
    /// to make room for a new key. Updating an existing key never evicts.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key, marking it most recently used.
    ///
    /// Use [`contains`](Self::contains) to check existence without affecting
    /// eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the capacity bound of the cache.
    fn capacity(&self) -> Capacity;

    /// Removes all entries from the cache. The capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use rusty_lru::traits::{CoreCache, MutableCache};
/// use rusty_lru::LruCache;
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = LruCache::new(100);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
/// cache.insert(3, "three".to_string());
///
/// invalidate_keys(&mut cache, &[1, 3]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// assert!(!cache.contains(&3));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys.
    ///
    /// Returns a vector of `Option<V>` in the same order as the input keys.
    /// The default implementation loops over [`remove`](Self::remove).
    ///
    /// ```
    /// use rusty_lru::traits::MutableCache;
    /// use rusty_lru::LruCache;
    ///
    /// let mut cache = LruCache::new(10);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// cache.insert(3, "three");
    ///
    /// let removed = cache.remove_batch(&[1, 99, 3]);
    /// assert_eq!(removed, vec![Some("one"), None, Some("three")]);
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// LRU-specific operations.
///
/// # Example
///
/// ```
/// use rusty_lru::traits::LruCacheTrait;
/// use rusty_lru::LruCache;
///
/// let mut cache = LruCache::new(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
/// cache.insert(3, "third");
///
/// // Access key 1 to make it MRU
/// cache.get(&1);
///
/// // Key 2 is now LRU
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
///
/// // Touch without retrieving value
/// assert!(cache.touch(&2));  // Now key 3 is LRU
///
/// let (key, _) = cache.pop_lru().unwrap();
/// assert_eq!(key, 3);
/// ```
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least recently used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the LRU entry without removing it or changing any order.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks an entry as recently used without retrieving the value.
    ///
    /// Returns `true` if the key was found and touched, `false` otherwise.
    fn touch(&mut self, key: &K) -> bool;

    /// Gets the recency rank of a key (0 = most recent, higher = less recent).
    ///
    /// Returns `None` if the key is not found. O(n).
    fn recency_rank(&self, key: &K) -> Option<usize>;
}

/// Marker trait for caches that are safe to share between threads.
///
/// # Example
///
/// ```
/// use rusty_lru::traits::ConcurrentCache;
///
/// fn share<C: ConcurrentCache + Clone + 'static>(cache: &C) {
///     let handle = cache.clone();
///     std::thread::spawn(move || drop(handle)).join().unwrap();
/// }
/// ```
pub trait ConcurrentCache: Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::lru::LruCache;

    fn fill<C: CoreCache<u32, u32>>(cache: &mut C, n: u32) {
        for i in 0..n {
            cache.insert(i, i * 10);
        }
    }

    #[test]
    fn core_cache_insert_returns_previous_value() {
        let mut cache: LruCache<u32, u32> = LruCache::new(4);
        assert_eq!(CoreCache::insert(&mut cache, 1, 10), None);
        assert_eq!(CoreCache::insert(&mut cache, 1, 11), Some(10));
        assert_eq!(CoreCache::get(&mut cache, &1), Some(&11));
    }

    #[test]
    fn generic_fill_respects_capacity() {
        let mut cache: LruCache<u32, u32> = LruCache::new(3);
        fill(&mut cache, 10);
        assert_eq!(CoreCache::len(&cache), 3);
        assert_eq!(CoreCache::capacity(&cache), Capacity::Bounded(3));
        assert!(!CoreCache::is_empty(&cache));
        assert!(CoreCache::contains(&cache, &9));
        assert!(!CoreCache::contains(&cache, &0));
    }

    #[test]
    fn lru_trait_through_generic_bound() {
        fn evict_all<C: LruCacheTrait<u32, u32>>(cache: &mut C) -> Vec<u32> {
            std::iter::from_fn(|| cache.pop_lru().map(|(k, _)| k)).collect()
        }

        let mut cache: LruCache<u32, u32> = LruCache::unbounded();
        fill(&mut cache, 4);
        assert!(LruCacheTrait::touch(&mut cache, &0));
        assert_eq!(LruCacheTrait::recency_rank(&cache, &0), Some(0));
        assert_eq!(evict_all(&mut cache), vec![1, 2, 3, 0]);
        CoreCache::clear(&mut cache);
        assert!(CoreCache::is_empty(&cache));
    }
}
