pub use crate::builder::LruCacheBuilder;
pub use crate::capacity::Capacity;
pub use crate::error::{ConfigError, InvariantError, KeyError};
pub use crate::object::{HashValue, HashedKey, NativeKey, ObjectCache, ObjectKey};
#[cfg(feature = "concurrency")]
pub use crate::policy::lru::ConcurrentLruCache;
pub use crate::policy::lru::LruCache;
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[cfg(feature = "concurrency")]
pub use crate::traits::ConcurrentCache;

#[cfg(feature = "metrics")]
pub use crate::metrics::exporter::PrometheusTextExporter;
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::LruMetricsSnapshot;
#[cfg(feature = "metrics")]
pub use crate::metrics::traits::{MetricsExporter, MetricsSnapshotProvider};
