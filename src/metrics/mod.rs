//! Optional operation counters for the LRU engine (feature `metrics`).
//!
//! [`LruMetrics`](metrics_impl::LruMetrics) lives inside each cache and is
//! bumped on every operation. Call `metrics_snapshot()` on the cache for a
//! point-in-time [`LruMetricsSnapshot`](snapshot::LruMetricsSnapshot) and hand
//! it to an exporter such as
//! [`PrometheusTextExporter`](exporter::PrometheusTextExporter).

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
