//! In-memory store using Moka.

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use moka::notification::RemovalCause;
use moka::ops::compute::{CompResult, Op};
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use tessera_core::{CacheKey, Segment, Ttl};

use super::{CacheEntry, CacheStore, CachedValue, StoreState};
use crate::clock::{Clock, SystemClock};
use crate::config::CacheConfig;
use crate::error::StoreError;
use crate::invalidation::KeyMatcher;
use crate::metrics::CacheMetrics;

/// Per-entry expiry so moka reclaims memory on the entry's own TTL.
/// Session entries never expire on moka's side.
struct EntryExpiry;

impl Expiry<CacheKey, Arc<CacheEntry>> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &CacheKey,
        value: &Arc<CacheEntry>,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl.as_duration()
    }

    fn expire_after_update(
        &self,
        _key: &CacheKey,
        value: &Arc<CacheEntry>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl.as_duration()
    }
}

/// In-memory store backed by Moka.
///
/// Freshness is decided against the store's [`Clock`]; moka's own expiry
/// only reclaims memory and never makes a stale entry visible.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use tessera_cache::{CacheConfig, CacheStore, MemoryStore, Ttl};
/// use tessera_core::cache_key;
///
/// # #[tokio::main]
/// # async fn main() {
/// let store = MemoryStore::new(&CacheConfig::default());
/// let key = cache_key!["faqs", "list"];
///
/// store.set(key.clone(), Arc::new(vec!["q1"]), Ttl::LONG_1_DAY, 0).await.unwrap();
/// assert!(store.get(&key).await.is_some());
/// # }
/// ```
pub struct MemoryStore {
    inner: Cache<CacheKey, Arc<CacheEntry>>,
    clock: Arc<dyn Clock>,
    state: RwLock<StoreState>,
    metrics: CacheMetrics,
}

impl MemoryStore {
    /// Creates a store with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a store reading time from `clock`.
    pub fn with_clock(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let metrics = CacheMetrics::new();

        // Eviction listener feeds the metrics
        let eviction_metrics = metrics.clone();
        let inner = Cache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(EntryExpiry)
            .eviction_listener(move |_key, _value, cause| {
                let reason = match cause {
                    RemovalCause::Expired => "ttl",
                    RemovalCause::Size => "capacity",
                    RemovalCause::Explicit => "manual",
                    RemovalCause::Replaced => "replaced",
                };
                eviction_metrics.record_eviction(reason);
            })
            .build();

        let state = if config.enabled {
            StoreState::Ready
        } else {
            info!("Cache disabled by configuration, running pass-through");
            StoreState::Closed
        };

        Self {
            inner,
            clock,
            state: RwLock::new(state),
            metrics,
        }
    }

    /// Leaves the store in `Opening` until [`CacheStore::open`] is called.
    /// A disabled store stays closed.
    #[must_use]
    pub fn deferred(self) -> Self {
        {
            let mut state = self.state.write();
            if *state == StoreState::Ready {
                *state = StoreState::Opening;
            }
        }
        self
    }

    /// Metrics recorded by this store.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Removes every entry accepted by `predicate`.
    ///
    /// Iterates a snapshot; entries written while the removal runs may
    /// survive it.
    pub(crate) async fn remove_where<F>(&self, kind: &'static str, predicate: F) -> usize
    where
        F: Fn(&CacheKey, &CacheEntry) -> bool,
    {
        let start = Instant::now();

        let doomed: Vec<CacheKey> = self
            .inner
            .iter()
            .filter(|(key, entry)| predicate(key, entry))
            .map(|(key, _)| (*key).clone())
            .collect();

        let count = doomed.len();
        for key in doomed {
            self.inner.invalidate(&key).await;
        }
        self.inner.run_pending_tasks().await;

        self.metrics.record_invalidation(kind, count);
        self.metrics.record_operation_duration(kind, start.elapsed());
        self.update_entry_gauge();

        count
    }

    fn writable(&self) -> Result<(), StoreError> {
        match *self.state.read() {
            StoreState::Ready => Ok(()),
            StoreState::Opening => Err(StoreError::NotReady {
                store: self.name().to_string(),
            }),
            StoreState::Closed => Err(StoreError::Closed {
                store: self.name().to_string(),
            }),
        }
    }

    /// Refreshes the entry count gauge.
    fn update_entry_gauge(&self) {
        self.metrics.update_entry_count(self.inner.entry_count());
    }

    /// Flushes moka's pending maintenance.
    #[cfg(test)]
    pub(crate) async fn sync(&self) {
        self.inner.run_pending_tasks().await;
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn state(&self) -> StoreState {
        *self.state.read()
    }

    async fn open(&self) -> Result<(), StoreError> {
        let mut state = self.state.write();
        match *state {
            StoreState::Opening => {
                *state = StoreState::Ready;
                info!(store = "memory", "Cache store ready");
                Ok(())
            },
            StoreState::Ready => Ok(()),
            StoreState::Closed => Err(StoreError::Closed {
                store: "memory".to_string(),
            }),
        }
    }

    async fn close(&self) {
        *self.state.write() = StoreState::Closed;
        self.inner.invalidate_all();
        self.inner.run_pending_tasks().await;
        self.update_entry_gauge();
        info!(store = "memory", "Cache store closed");
    }

    async fn get(&self, key: &CacheKey) -> Option<Arc<CacheEntry>> {
        let start = Instant::now();

        if !self.is_ready() {
            self.metrics.record_miss();
            return None;
        }

        let now = self.clock.now_millis();
        let result = self
            .inner
            .get(key)
            .await
            .filter(|entry| entry.is_fresh(now));

        if result.is_some() {
            self.metrics.record_hit();
        } else {
            self.metrics.record_miss();
        }

        self.metrics.record_operation_duration("get", start.elapsed());

        result
    }

    async fn set(
        &self,
        key: CacheKey,
        value: CachedValue,
        ttl: Ttl,
        stamp: u64,
    ) -> Result<(), StoreError> {
        self.writable()?;

        let entry = CacheEntry {
            value,
            expires_at: ttl.expires_at(self.clock.now_millis()),
            ttl,
            stamp,
        };
        self.inner.insert(key, Arc::new(entry)).await;
        self.update_entry_gauge();

        Ok(())
    }

    async fn set_if_newer(
        &self,
        key: CacheKey,
        value: CachedValue,
        ttl: Ttl,
        stamp: u64,
    ) -> Result<bool, StoreError> {
        self.writable()?;

        let now = self.clock.now_millis();
        let entry = Arc::new(CacheEntry {
            value,
            expires_at: ttl.expires_at(now),
            ttl,
            stamp,
        });

        // Compare and write under moka's per-key lock
        let result = self
            .inner
            .entry(key)
            .and_compute_with(|existing| async move {
                let keep = existing.is_some_and(|current| {
                    let current = current.value();
                    current.stamp > stamp && current.is_fresh(now)
                });
                if keep { Op::Nop } else { Op::Put(entry) }
            })
            .await;

        match result {
            CompResult::Unchanged(current) => {
                debug!(
                    key = %current.key(),
                    stamp,
                    existing = current.value().stamp,
                    "Keeping newer cache entry"
                );
                Ok(false)
            },
            _ => {
                self.update_entry_gauge();
                Ok(true)
            },
        }
    }

    async fn delete(&self, key: &CacheKey) -> bool {
        let removed = self.inner.remove(key).await.is_some();
        self.metrics.record_invalidation("key", usize::from(removed));
        removed
    }

    async fn delete_if_stamp(&self, key: &CacheKey, stamp: u64) -> bool {
        let result = self
            .inner
            .entry(key.clone())
            .and_compute_with(|existing| async move {
                match existing {
                    Some(current) if current.value().stamp == stamp => Op::Remove,
                    _ => Op::Nop,
                }
            })
            .await;

        let removed = matches!(result, CompResult::Removed(_));
        if removed {
            self.metrics.record_invalidation("key", 1);
            self.update_entry_gauge();
        }
        removed
    }

    async fn delete_by_prefix(&self, prefix: &[Segment]) -> usize {
        let matcher = KeyMatcher::prefix(prefix);
        self.remove_where("prefix", |key, _| matcher.matches(key))
            .await
    }

    async fn delete_by_pattern(&self, pattern: &str) -> usize {
        match KeyMatcher::pattern(pattern) {
            Ok(matcher) => {
                self.remove_where("pattern", |key, _| matcher.matches(key))
                    .await
            },
            Err(e) => {
                warn!(pattern = %pattern, error = %e, "Invalid glob pattern");
                0
            },
        }
    }

    async fn sweep_expired(&self) -> usize {
        let now = self.clock.now_millis();
        self.remove_where("sweep", |_, entry| !entry.is_fresh(now))
            .await
    }

    async fn clear(&self) {
        let count = self.inner.entry_count();
        self.inner.invalidate_all();
        self.inner.run_pending_tasks().await;
        self.metrics
            .record_invalidation("clear", usize::try_from(count).unwrap_or(usize::MAX));
        self.update_entry_gauge();
    }

    fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use tessera_core::cache_key;

    fn store_with_clock() -> (MemoryStore, ManualClock) {
        let clock = ManualClock::new(1_000_000);
        let store = MemoryStore::with_clock(&CacheConfig::default(), Arc::new(clock.clone()));
        (store, clock)
    }

    fn value(n: u32) -> CachedValue {
        Arc::new(n)
    }

    fn read(entry: Option<Arc<CacheEntry>>) -> Option<u32> {
        entry.and_then(|e| e.value.downcast_ref::<u32>().copied())
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let (store, _clock) = store_with_clock();
        let key = cache_key!["faqs", "list"];

        store.set(key.clone(), value(7), Ttl::LONG_1_DAY, 0).await.unwrap();

        assert_eq!(read(store.get(&key).await), Some(7));
    }

    #[tokio::test]
    async fn test_miss_returns_none() {
        let (store, _clock) = store_with_clock();
        assert!(store.get(&cache_key!["nonexistent"]).await.is_none());
        assert_eq!(store.metrics().misses(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_a_miss() {
        let (store, clock) = store_with_clock();
        let key = cache_key!["tickets", "detail", "t-1"];

        store.set(key.clone(), value(1), Ttl::Seconds(1), 0).await.unwrap();
        assert!(store.get(&key).await.is_some());

        clock.advance(Duration::from_millis(999));
        assert!(store.get(&key).await.is_some());

        clock.advance(Duration::from_millis(1));
        assert!(store.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value_and_expiry() {
        let (store, clock) = store_with_clock();
        let key = cache_key!["users", "profile", "u-1"];

        store.set(key.clone(), value(1), Ttl::Seconds(1), 0).await.unwrap();
        clock.advance(Duration::from_millis(900));
        store.set(key.clone(), value(2), Ttl::Seconds(1), 0).await.unwrap();
        clock.advance(Duration::from_millis(900));

        assert_eq!(read(store.get(&key).await), Some(2));
    }

    #[tokio::test]
    async fn test_set_if_newer_keeps_newer_entry() {
        let (store, _clock) = store_with_clock();
        let key = cache_key!["admin", "analytics"];

        assert!(store.set_if_newer(key.clone(), value(2), Ttl::SESSION, 5).await.unwrap());
        assert!(!store.set_if_newer(key.clone(), value(1), Ttl::SESSION, 3).await.unwrap());
        assert_eq!(read(store.get(&key).await), Some(2));

        assert!(store.set_if_newer(key.clone(), value(3), Ttl::SESSION, 6).await.unwrap());
        assert_eq!(read(store.get(&key).await), Some(3));
    }

    #[tokio::test]
    async fn test_set_if_newer_replaces_stale_newer_entry() {
        let (store, clock) = store_with_clock();
        let key = cache_key!["admin", "analytics"];

        store.set(key.clone(), value(2), Ttl::Seconds(1), 9).await.unwrap();
        clock.advance(Duration::from_secs(2));

        assert!(store.set_if_newer(key.clone(), value(1), Ttl::Seconds(1), 3).await.unwrap());
        assert_eq!(read(store.get(&key).await), Some(1));
    }

    #[tokio::test]
    async fn test_delete_if_stamp_spares_other_writes() {
        let (store, _clock) = store_with_clock();
        let key = cache_key!["admin", "revisions", "e-1"];

        store.set(key.clone(), value(1), Ttl::SESSION, 4).await.unwrap();
        assert!(!store.delete_if_stamp(&key, 3).await);
        assert_eq!(read(store.get(&key).await), Some(1));

        assert!(store.delete_if_stamp(&key, 4).await);
        assert!(store.get(&key).await.is_none());
        assert!(!store.delete_if_stamp(&key, 4).await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_set_if_newer_keeps_highest_stamp() {
        let (store, _clock) = store_with_clock();
        let store = Arc::new(store);
        let key = cache_key!["faqs", "list"];

        let handles: Vec<_> = (1..=32u32)
            .map(|stamp| {
                let store = Arc::clone(&store);
                let key = key.clone();
                tokio::spawn(async move {
                    store
                        .set_if_newer(key, value(stamp), Ttl::SESSION, u64::from(stamp))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(read(store.get(&key).await), Some(32));
    }

    #[tokio::test]
    async fn test_delete_reports_existence() {
        let (store, _clock) = store_with_clock();
        let key = cache_key!["companies", "detail", "c-1"];

        store.set(key.clone(), value(1), Ttl::SESSION, 0).await.unwrap();

        assert!(store.delete(&key).await);
        assert!(!store.delete(&key).await);
        assert!(store.get(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_deferred_store_is_pass_through_until_open() {
        let store = MemoryStore::new(&CacheConfig::default()).deferred();
        let key = cache_key!["faqs", "list"];

        assert_eq!(store.state(), StoreState::Opening);
        let err = store.set(key.clone(), value(1), Ttl::SESSION, 0).await.unwrap_err();
        assert!(matches!(err, StoreError::NotReady { .. }));
        assert!(store.get(&key).await.is_none());

        store.open().await.unwrap();
        assert!(store.is_ready());
        store.set(key.clone(), value(1), Ttl::SESSION, 0).await.unwrap();
        assert!(store.get(&key).await.is_some());
    }

    #[tokio::test]
    async fn test_disabled_store_starts_closed() {
        let config = CacheConfig {
            enabled: false,
            ..Default::default()
        };
        let store = MemoryStore::new(&config).deferred();

        assert_eq!(store.state(), StoreState::Closed);
        assert!(store.open().await.is_err());
        let err = store
            .set(cache_key!["x"], value(1), Ttl::SESSION, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Closed { .. }));
    }

    #[tokio::test]
    async fn test_close_drops_entries() {
        let (store, _clock) = store_with_clock();
        let key = cache_key!["users", "profile", "current"];

        store.set(key.clone(), value(1), Ttl::SESSION, 0).await.unwrap();
        store.close().await;

        assert!(store.get(&key).await.is_none());
        assert_eq!(store.entry_count(), 0);
    }

    #[tokio::test]
    async fn test_clear_keeps_store_open() {
        let (store, _clock) = store_with_clock();

        for i in 0..5 {
            store
                .set(cache_key!["users", "list", i, 10], value(1), Ttl::SESSION, 0)
                .await
                .unwrap();
        }
        store.clear().await;
        store.sync().await;

        assert_eq!(store.entry_count(), 0);
        assert!(store.is_ready());
    }
}
