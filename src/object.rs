//! # Host Object Keys
//!
//! Bindings that embed the cache in another runtime cannot rely on Rust's
//! `Hash`: the host computes a key's hash with its own method, and that call
//! can fail or return something that is not an integer. This module adapts
//! such keys to the engine.
//!
//! ```text
//!   host key K ──► K::object_hash() ──► Ok(Integer(h)) ──► HashedKey { h, K } ──► LruCache
//!                         │
//!                         ├──► Err(e)          ──► KeyError::HashFailure(e)
//!                         └──► Ok(Other(name)) ──► KeyError::HashTypeMismatch { found }
//! ```
//!
//! [`ObjectCache`] hashes every key before it touches the cache, so a failing
//! hash leaves the cache exactly as it was.
//!
//! ## Example
//!
//! ```
//! use rusty_lru::object::{NativeKey, ObjectCache};
//!
//! let mut cache = ObjectCache::new(Some(2)).unwrap();
//! cache.store(NativeKey("a"), 1).unwrap();
//! cache.store(NativeKey("b"), 2).unwrap();
//! cache.store(NativeKey("c"), 3).unwrap();
//!
//! assert_eq!(cache.has_key(&NativeKey("a")), Ok(false));
//! assert_eq!(cache.lru_pair(), Some((&NativeKey("b"), &2)));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

use rustc_hash::FxBuildHasher;

use crate::capacity::Capacity;
use crate::error::{ConfigError, KeyError};
use crate::policy::lru::LruCache;

/// Result of a host hash call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashValue {
    Integer(i64),
    /// The hash produced a non-integer; carries the host type name.
    Other(&'static str),
}

/// A key whose hash and equality come from the host.
pub trait ObjectKey {
    /// Error raised by the host hash function.
    type Error;

    fn object_hash(&self) -> Result<HashValue, Self::Error>;

    fn object_eql(&self, other: &Self) -> bool;
}

/// Adapts any `Hash + Eq` value to [`ObjectKey`]; hashing never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NativeKey<T>(pub T);

impl<T: Hash + Eq> ObjectKey for NativeKey<T> {
    type Error = Infallible;

    fn object_hash(&self) -> Result<HashValue, Infallible> {
        Ok(HashValue::Integer(FxBuildHasher.hash_one(&self.0) as i64))
    }

    fn object_eql(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// A host key paired with its precomputed integer hash.
///
/// Two `HashedKey`s are equal when their hashes match and the host says the
/// keys are `eql`.
#[derive(Clone)]
pub struct HashedKey<K> {
    hash: i64,
    key: K,
}

impl<K: ObjectKey> HashedKey<K> {
    /// Calls the host hash once and keeps the result.
    pub fn new(key: K) -> Result<Self, KeyError<K::Error>> {
        match key.object_hash().map_err(KeyError::HashFailure)? {
            HashValue::Integer(hash) => Ok(Self { hash, key }),
            HashValue::Other(found) => Err(KeyError::HashTypeMismatch { found }),
        }
    }
}

impl<K> HashedKey<K> {
    #[inline]
    pub fn hash_value(&self) -> i64 {
        self.hash
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K> Hash for HashedKey<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl<K: ObjectKey> PartialEq for HashedKey<K> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.key.object_eql(&other.key)
    }
}

impl<K: ObjectKey> Eq for HashedKey<K> {}

impl<K: fmt::Debug> fmt::Debug for HashedKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedKey")
            .field("hash", &self.hash)
            .field("key", &self.key)
            .finish()
    }
}

/// LRU cache keyed by host objects.
///
/// Keys are handles: lookups clone the key to pair it with its hash, so `K`
/// should be cheap to clone.
pub struct ObjectCache<K, V> {
    inner: LruCache<HashedKey<K>, V>,
}

impl<K, V> ObjectCache<K, V>
where
    K: ObjectKey + Clone,
{
    /// Creates a cache; `None` means unbounded. Negative capacities fail.
    pub fn new(capacity: Option<i64>) -> Result<Self, ConfigError> {
        Ok(Self {
            inner: LruCache::try_new(capacity)?,
        })
    }

    fn hashed(key: &K) -> Result<HashedKey<K>, KeyError<K::Error>> {
        HashedKey::new(key.clone())
    }

    /// Reads `key` and marks it most recently used.
    pub fn load(&mut self, key: &K) -> Result<Option<&V>, KeyError<K::Error>> {
        let key = Self::hashed(key)?;
        Ok(self.inner.get(&key))
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn store(&mut self, key: K, value: V) -> Result<Option<V>, KeyError<K::Error>> {
        let key = HashedKey::new(key)?;
        Ok(self.inner.insert(key, value))
    }

    pub fn delete(&mut self, key: &K) -> Result<Option<V>, KeyError<K::Error>> {
        let key = Self::hashed(key)?;
        Ok(self.inner.remove(&key))
    }

    pub fn peek(&self, key: &K) -> Result<Option<&V>, KeyError<K::Error>> {
        let key = Self::hashed(key)?;
        Ok(self.inner.peek(&key))
    }

    pub fn has_key(&self, key: &K) -> Result<bool, KeyError<K::Error>> {
        let key = Self::hashed(key)?;
        Ok(self.inner.contains(&key))
    }

    /// Removes and returns the least recently used pair.
    pub fn pop(&mut self) -> Option<(K, V)> {
        self.inner
            .pop_lru()
            .map(|(key, value)| (key.into_key(), value))
    }

    pub fn lru_pair(&self) -> Option<(&K, &V)> {
        self.inner.peek_lru().map(|(key, value)| (key.key(), value))
    }

    pub fn length(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn capacity(&self) -> Capacity {
        self.inner.capacity()
    }

    /// Changes the capacity; `None` removes the bound.
    ///
    /// A negative capacity is rejected and nothing is evicted.
    pub fn resize(&mut self, capacity: Option<i64>) -> Result<(), ConfigError> {
        let capacity = Capacity::from_signed(capacity)?;
        self.inner.set_capacity(capacity);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Pairs from most to least recently used.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.inner.iter().map(|(key, value)| (key.key(), value))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.inner.keys().map(HashedKey::key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.inner.values()
    }

    pub fn each_pair(&self, mut f: impl FnMut(&K, &V)) {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }

    pub fn each_key(&self, f: impl FnMut(&K)) {
        self.keys().for_each(f);
    }

    pub fn each_value(&self, f: impl FnMut(&V)) {
        self.values().for_each(f);
    }

    /// The underlying engine, for operations this surface does not expose.
    pub fn as_lru(&self) -> &LruCache<HashedKey<K>, V> {
        &self.inner
    }
}

impl<K, V> fmt::Debug for ObjectCache<K, V>
where
    K: ObjectKey + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectCache")
            .field("length", &self.length())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
