//! Cache metrics recording.

use metrics::{counter, gauge, histogram};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Describes the cache metrics. Call once at startup.
pub fn register_cache_metrics() {
    metrics::describe_counter!("tessera_cache_hits_total", "Total number of cache hits");
    metrics::describe_counter!("tessera_cache_misses_total", "Total number of cache misses");
    metrics::describe_counter!(
        "tessera_cache_evictions_total",
        "Total number of cache evictions"
    );
    metrics::describe_counter!(
        "tessera_cache_invalidations_total",
        "Entries removed by explicit invalidation or sweep"
    );
    metrics::describe_counter!(
        "tessera_cache_producer_calls_total",
        "Producer invocations triggered by cache misses or refreshes"
    );
    metrics::describe_gauge!("tessera_cache_entries", "Current number of entries in cache");
    metrics::describe_histogram!(
        "tessera_cache_operation_seconds",
        "Time spent on cache operations"
    );
}

/// Records the outcome of one producer call.
pub fn record_producer_call(success: bool) {
    let outcome = if success { "ok" } else { "error" };
    counter!("tessera_cache_producer_calls_total", "outcome" => outcome).increment(1);
}

/// Per-store metrics recorder.
/// Keeps local atomic counters next to the global `metrics` ones.
#[derive(Debug, Clone, Default)]
pub struct CacheMetrics {
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    invalidated: Arc<AtomicU64>,
}

impl CacheMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        counter!("tessera_cache_hits_total").increment(1);
    }

    /// Records a cache miss
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
        counter!("tessera_cache_misses_total").increment(1);
    }

    /// Records an eviction
    pub fn record_eviction(&self, reason: &'static str) {
        counter!("tessera_cache_evictions_total", "reason" => reason).increment(1);
    }

    /// Entries removed by an invalidation of the given kind
    /// (`key`, `prefix`, `pattern`, `sweep`, `clear`).
    pub fn record_invalidation(&self, kind: &'static str, count: usize) {
        let count = count as u64;
        self.invalidated.fetch_add(count, Ordering::Relaxed);
        counter!("tessera_cache_invalidations_total", "kind" => kind).increment(count);
    }

    /// Updates the entries gauge
    pub fn update_entry_count(&self, count: u64) {
        gauge!("tessera_cache_entries").set(count as f64);
    }

    /// Records how long an operation took
    pub fn record_operation_duration(&self, operation: &'static str, duration: Duration) {
        histogram!("tessera_cache_operation_seconds", "operation" => operation)
            .record(duration.as_secs_f64());
    }

    /// Hit rate, for logging
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits() as f64;
        let total = hits + self.misses() as f64;
        if total == 0.0 { 0.0 } else { hits / total }
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Total entries removed by invalidations and sweeps.
    pub fn invalidated(&self) -> u64 {
        self.invalidated.load(Ordering::Relaxed)
    }
}
