//! Prometheus metrics for the cache-aside layer.
//!
//! Counters are no-ops until a recorder is installed, so tests and
//! deployments without an exporter pay nothing for them.

use crate::keys::Namespace;
use metrics::{counter, describe_counter};

/// Metric names for the cache layer.
pub mod names {
    /// Reads answered from the cache.
    pub const CACHE_HITS_TOTAL: &str = "registrar_cache_hits_total";
    /// Reads that fell through to the backing store.
    pub const CACHE_MISSES_TOTAL: &str = "registrar_cache_misses_total";
    /// Entries discarded because they failed to decode.
    pub const CACHE_DECODE_FAILURES_TOTAL: &str = "registrar_cache_decode_failures_total";
    /// Store calls that failed or timed out.
    pub const CACHE_STORE_ERRORS_TOTAL: &str = "registrar_cache_store_errors_total";
    /// Keys deleted by write paths.
    pub const CACHE_INVALIDATIONS_TOTAL: &str = "registrar_cache_invalidations_total";
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::CACHE_HITS_TOTAL,
        "Total number of reads answered from the cache"
    );
    describe_counter!(
        names::CACHE_MISSES_TOTAL,
        "Total number of reads that fell through to the backing store"
    );
    describe_counter!(
        names::CACHE_DECODE_FAILURES_TOTAL,
        "Total number of cache entries discarded after failing to decode"
    );
    describe_counter!(
        names::CACHE_STORE_ERRORS_TOTAL,
        "Total number of failed or timed out cache store calls"
    );
    describe_counter!(
        names::CACHE_INVALIDATIONS_TOTAL,
        "Total number of cache keys invalidated by writes"
    );
}

/// Cache metrics recorder.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a cache hit.
    pub fn hit(namespace: Namespace) {
        counter!(names::CACHE_HITS_TOTAL, "namespace" => namespace.as_str()).increment(1);
    }

    /// Record a cache miss.
    pub fn miss(namespace: Namespace) {
        counter!(names::CACHE_MISSES_TOTAL, "namespace" => namespace.as_str()).increment(1);
    }

    /// Record an entry that failed to decode.
    pub fn decode_failure(namespace: Namespace) {
        counter!(
            names::CACHE_DECODE_FAILURES_TOTAL,
            "namespace" => namespace.as_str()
        )
        .increment(1);
    }

    /// Record a failed store call.
    pub fn store_error(operation: &'static str, kind: &'static str) {
        counter!(
            names::CACHE_STORE_ERRORS_TOTAL,
            "operation" => operation,
            "kind" => kind
        )
        .increment(1);
    }

    /// Record an invalidated key.
    pub fn invalidation(namespace: Namespace) {
        counter!(
            names::CACHE_INVALIDATIONS_TOTAL,
            "namespace" => namespace.as_str()
        )
        .increment(1);
    }
}
