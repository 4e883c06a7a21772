//! rusty_lru: an O(1) least-recently-used cache engine.
//!
//! The engine keeps a key index and a recency-ordered list over one slot
//! arena, bounded by an optional [`Capacity`]. See [`policy::lru`] for the
//! layout and invariants.
//!
//! ```
//! use rusty_lru::LruCache;
//!
//! let mut cache = LruCache::new(2);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.get(&"a");
//! cache.insert("c", 3);
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.keys().copied().collect::<Vec<_>>(), ["c", "a"]);
//! ```
//!
//! ## Features
//!
//! - `concurrency` (default): `ConcurrentLruCache` behind `parking_lot::RwLock`.
//! - `metrics` (default): operation counters, snapshots and a Prometheus
//!   text exporter.

pub mod builder;
pub mod capacity;
pub mod ds;
pub mod error;
pub mod object;
pub mod policy;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
pub mod traits;

pub use crate::builder::LruCacheBuilder;
pub use crate::capacity::Capacity;
pub use crate::error::{ConfigError, InvariantError, KeyError};
pub use crate::object::{HashValue, HashedKey, NativeKey, ObjectCache, ObjectKey};
#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentLruCache;
pub use crate::policy::lru::LruCache;
