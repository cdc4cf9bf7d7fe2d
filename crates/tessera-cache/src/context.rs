//! Process-wide cache access point.
//!
//! [`CacheContext`] is built once at startup and cloned into every
//! consumer. It owns the store, coalesces concurrent fetches per key and
//! exposes invalidation to code that mutates data.

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use std::any::type_name;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

use tessera_core::{CacheKey, Ttl};

use crate::config::CacheConfig;
use crate::error::{FetchError, StoreError};
use crate::invalidation::{InvalidationResult, KeyMatcher};
use crate::metrics::record_producer_call;
use crate::store::{CacheStore, CachedValue, MemoryStore};

type SharedFetch = Shared<BoxFuture<'static, Result<CachedValue, FetchError>>>;

/// How [`CacheContext::fetch`] treats existing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// Serve a fresh cached value, otherwise join or start a fetch.
    Cached,
    /// Skip the cache lookup but join a fetch already in flight.
    Join,
    /// Always start a new producer call.
    Force,
}

struct InFlight {
    stamp: u64,
    future: SharedFetch,
}

/// A producer call that has not finished yet.
struct Running {
    key: CacheKey,
    /// Set when an invalidation covered `key` after the call started.
    invalidated: bool,
}

#[derive(Default)]
struct FetchTable {
    /// Latest fetch per key; later callers join it.
    joinable: HashMap<CacheKey, InFlight>,
    /// Every unfinished fetch by stamp, including ones a forced refresh
    /// replaced in `joinable`.
    running: HashMap<u64, Running>,
}

impl FetchTable {
    fn invalidate(&mut self, covers: impl Fn(&CacheKey) -> bool) {
        self.joinable.retain(|key, _| !covers(key));
        for run in self.running.values_mut() {
            if covers(&run.key) {
                run.invalidated = true;
            }
        }
    }

    fn is_invalidated(&self, stamp: u64) -> bool {
        self.running.get(&stamp).is_none_or(|run| run.invalidated)
    }

    fn finish(&mut self, key: &CacheKey, stamp: u64) {
        self.running.remove(&stamp);
        if self.joinable.get(key).is_some_and(|f| f.stamp == stamp) {
            self.joinable.remove(key);
        }
    }
}

/// Releases a fetch's bookkeeping when its task ends, panics included.
struct FetchGuard {
    ctx: CacheContext,
    key: CacheKey,
    stamp: u64,
}

impl Drop for FetchGuard {
    fn drop(&mut self) {
        self.ctx.inner.fetches.lock().finish(&self.key, self.stamp);
    }
}

struct ContextInner {
    store: Arc<dyn CacheStore>,
    default_ttl: Ttl,
    fetches: Mutex<FetchTable>,
    /// Last stamp handed out. Stamps order writes by fetch start.
    stamps: AtomicU64,
}

/// Shared handle to the cache.
///
/// Cloning is cheap; all clones address the same store.
///
/// # Examples
///
/// ```no_run
/// use tessera_cache::{CacheConfig, CacheContext};
/// use tessera_core::registry::admin;
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = CacheContext::in_memory(&CacheConfig::default());
///
/// // after a ticket mutation
/// let result = cache.invalidate_cache_keys(admin::TICKETS).await;
/// println!("Invalidated {} entries", result.count);
/// # }
/// ```
#[derive(Clone)]
pub struct CacheContext {
    inner: Arc<ContextInner>,
}

impl CacheContext {
    pub fn new(store: Arc<dyn CacheStore>, config: &CacheConfig) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                store,
                default_ttl: config.default_ttl(),
                fetches: Mutex::new(FetchTable::default()),
                stamps: AtomicU64::new(0),
            }),
        }
    }

    /// Context over a fresh [`MemoryStore`].
    pub fn in_memory(config: &CacheConfig) -> Self {
        Self::new(Arc::new(MemoryStore::new(config)), config)
    }

    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.inner.store
    }

    pub fn default_ttl(&self) -> Ttl {
        self.inner.default_ttl
    }

    /// Mirrors the store's readiness. While false every read is a miss.
    pub fn is_ready(&self) -> bool {
        self.inner.store.is_ready()
    }

    pub async fn open(&self) -> Result<(), StoreError> {
        self.inner.store.open().await
    }

    pub async fn close(&self) {
        self.inner.fetches.lock().invalidate(|_| true);
        self.inner.store.close().await;
    }

    /// Typed lookup. A value of another type is treated as a miss.
    pub async fn get<T>(&self, key: &CacheKey) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let entry = self.inner.store.get(key).await?;
        match downcast::<T>(key, entry.value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(key = %key, error = %e, "Ignoring cached value");
                None
            },
        }
    }

    /// Stores a value directly. Returns false when the store refused the
    /// write; the failure is logged and otherwise ignored.
    pub async fn set<T>(&self, key: CacheKey, value: T, ttl: Option<Ttl>) -> bool
    where
        T: Send + Sync + 'static,
    {
        let ttl = ttl.unwrap_or(self.inner.default_ttl);
        let stamp = self.next_stamp();

        match self.inner.store.set(key.clone(), Arc::new(value), ttl, stamp).await {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %key, error = %e, "Cache write failed, continuing without cache");
                false
            },
        }
    }

    /// Invalidates a single entry.
    pub async fn invalidate_key(&self, key: &CacheKey) -> bool {
        self.inner.fetches.lock().invalidate(|k| k == key);
        let removed = self.inner.store.delete(key).await;

        debug!(key = %key, removed, "Cache entry invalidated");
        removed
    }

    /// Invalidates every entry under the given prefix.
    ///
    /// Accepts registry prefixes (`admin::TICKETS`) as well as full keys.
    pub async fn invalidate_cache_keys(&self, prefix: impl Into<CacheKey>) -> InvalidationResult {
        let prefix = prefix.into();
        let matcher = KeyMatcher::prefix(prefix.segments());

        self.inner.fetches.lock().invalidate(|key| matcher.matches(key));
        let count = self.inner.store.delete_by_prefix(prefix.segments()).await;

        info!(prefix = %prefix, count, "Cache entries invalidated by prefix");
        InvalidationResult::new(count, prefix.to_string())
    }

    /// Invalidates entries whose serialized key matches a glob pattern.
    pub async fn invalidate_by_pattern(&self, pattern: &str) -> InvalidationResult {
        if let Ok(matcher) = KeyMatcher::pattern(pattern) {
            self.inner.fetches.lock().invalidate(|key| matcher.matches(key));
        }
        let count = self.inner.store.delete_by_pattern(pattern).await;

        info!(pattern = %pattern, count, "Cache entries invalidated by pattern");
        InvalidationResult::new(count, pattern)
    }

    /// Invalidates several patterns at once.
    pub async fn invalidate_by_patterns(&self, patterns: &[&str]) -> InvalidationResult {
        let mut total = InvalidationResult::default();
        for pattern in patterns {
            total.merge(self.invalidate_by_pattern(pattern).await);
        }
        total
    }

    /// Removes expired entries. Returns how many were removed.
    pub async fn cleanup_expired(&self) -> usize {
        let count = self.inner.store.sweep_expired().await;
        if count > 0 {
            info!(count, "Expired cache entries removed");
        }
        count
    }

    /// Drops every entry; the store stays open.
    pub async fn clear(&self) {
        self.inner.fetches.lock().invalidate(|_| true);
        self.inner.store.clear().await;
        info!("Cache cleared");
    }

    /// Returns the cached value or produces it with `producer`.
    ///
    /// At most one producer call per key runs at a time unless `mode` is
    /// [`FetchMode::Force`]. The producer runs on a spawned task: dropping
    /// the returned future does not cancel it, and its result still lands
    /// in the store.
    pub async fn fetch<T, F, Fut>(
        &self,
        key: &CacheKey,
        ttl: Option<Ttl>,
        mode: FetchMode,
        producer: F,
    ) -> Result<Arc<T>, FetchError>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        if mode == FetchMode::Cached {
            if let Some(value) = self.get::<T>(key).await {
                return Ok(value);
            }
        }

        let shared = self.join_or_start(key, ttl.unwrap_or(self.inner.default_ttl), mode, producer);
        let value = shared.await?;
        downcast::<T>(key, value)
    }

    fn join_or_start<T, F, Fut>(
        &self,
        key: &CacheKey,
        ttl: Ttl,
        mode: FetchMode,
        producer: F,
    ) -> SharedFetch
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let mut fetches = self.inner.fetches.lock();

        if mode != FetchMode::Force {
            if let Some(existing) = fetches.joinable.get(key) {
                debug!(key = %key, stamp = existing.stamp, "Joining in-flight fetch");
                return existing.future.clone();
            }
        }

        let stamp = self.next_stamp();
        let pending = producer();
        fetches.running.insert(
            stamp,
            Running {
                key: key.clone(),
                invalidated: false,
            },
        );

        let guard = FetchGuard {
            ctx: self.clone(),
            key: key.clone(),
            stamp,
        };

        let handle = tokio::spawn(async move {
            let outcome = pending.await;
            guard.ctx.complete(&guard.key, stamp, ttl, outcome).await
        });

        let key_str = key.to_string();
        let shared = async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => Err(FetchError::Aborted {
                    key: key_str,
                    reason: e.to_string(),
                }),
            }
        }
        .boxed()
        .shared();

        debug!(key = %key, stamp, "Starting fetch");
        fetches.joinable.insert(
            key.clone(),
            InFlight {
                stamp,
                future: shared.clone(),
            },
        );

        shared
    }

    async fn complete<T>(
        &self,
        key: &CacheKey,
        stamp: u64,
        ttl: Ttl,
        outcome: anyhow::Result<T>,
    ) -> Result<CachedValue, FetchError>
    where
        T: Send + Sync + 'static,
    {
        record_producer_call(outcome.is_ok());

        match outcome {
            Ok(value) => {
                let value: CachedValue = Arc::new(value);
                self.write_back(key, value.clone(), ttl, stamp).await;
                Ok(value)
            },
            Err(err) => {
                let message = format!("{err:#}");
                warn!(key = %key, error = %message, "Producer failed");
                Err(FetchError::producer(err))
            },
        }
    }

    async fn write_back(&self, key: &CacheKey, value: CachedValue, ttl: Ttl, stamp: u64) {
        if self.is_invalidated(stamp) {
            debug!(key = %key, stamp, "Fetch predates an invalidation, not caching result");
            return;
        }

        match self
            .inner
            .store
            .set_if_newer(key.clone(), value, ttl, stamp)
            .await
        {
            // An invalidation may have landed while the write was pending
            Ok(true) if self.is_invalidated(stamp) => {
                self.inner.store.delete_if_stamp(key, stamp).await;
                debug!(key = %key, stamp, "Invalidated during write, result dropped");
            },
            Ok(true) => debug!(key = %key, stamp, ttl = %ttl, "Cached fetch result"),
            Ok(false) => {},
            Err(e) => {
                warn!(key = %key, error = %e, "Cache write failed, continuing without cache");
            },
        }
    }

    fn is_invalidated(&self, stamp: u64) -> bool {
        self.inner.fetches.lock().is_invalidated(stamp)
    }

    fn next_stamp(&self) -> u64 {
        self.inner.stamps.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Number of fetches currently in flight.
    pub fn in_flight(&self) -> usize {
        self.inner.fetches.lock().joinable.len()
    }
}

fn downcast<T>(key: &CacheKey, value: CachedValue) -> Result<Arc<T>, FetchError>
where
    T: Send + Sync + 'static,
{
    value.downcast::<T>().map_err(|_| FetchError::TypeMismatch {
        key: key.to_string(),
        expected: type_name::<T>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::sync::atomic::AtomicU32;
    use std::time::Duration;
    use tessera_core::cache_key;
    use tessera_core::registry::admin;

    fn context() -> (CacheContext, ManualClock) {
        let clock = ManualClock::new(1_000_000);
        let config = CacheConfig::default();
        let store = MemoryStore::with_clock(&config, Arc::new(clock.clone()));
        (CacheContext::new(Arc::new(store), &config), clock)
    }

    #[tokio::test]
    async fn test_set_and_typed_get() {
        let (ctx, _clock) = context();
        let key = cache_key!["faqs", "list"];

        assert!(ctx.set(key.clone(), vec!["q1".to_string()], None).await);

        let value = ctx.get::<Vec<String>>(&key).await.unwrap();
        assert_eq!(value.as_slice(), ["q1".to_string()]);
    }

    #[tokio::test]
    async fn test_type_mismatch_is_a_miss() {
        let (ctx, _clock) = context();
        let key = cache_key!["faqs", "list"];

        ctx.set(key.clone(), 42u32, None).await;

        assert!(ctx.get::<String>(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_default_ttl_applies() {
        let (ctx, clock) = context();
        let key = cache_key!["users", "list", 1, 10];

        ctx.set(key.clone(), 1u8, None).await;
        clock.advance(Duration::from_secs(899));
        assert!(ctx.get::<u8>(&key).await.is_some());

        clock.advance(Duration::from_secs(1));
        assert!(ctx.get::<u8>(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_populates_cache() {
        let (ctx, _clock) = context();
        let key = cache_key!["myapp", "prod", "main"];
        let calls = Arc::new(AtomicU32::new(0));

        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            let value = ctx
                .fetch(&key, None, FetchMode::Cached, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, anyhow::Error>("payload".to_string())
                })
                .await
                .unwrap();
            assert_eq!(value.as_str(), "payload");
        }

        // Second call is served from cache
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_concurrent_fetches_are_coalesced() {
        let (ctx, _clock) = context();
        let key = cache_key!["admin", "tickets", 1, 10];
        let calls = Arc::new(AtomicU32::new(0));

        let mut handles = vec![];
        for _ in 0..50 {
            let ctx = ctx.clone();
            let key = key.clone();
            let calls = Arc::clone(&calls);
            handles.push(tokio::spawn(async move {
                ctx.fetch(&key, None, FetchMode::Cached, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    // Simulated backend latency
                    tokio::time::sleep(Duration::from_millis(20)).await;
                    Ok::<_, anyhow::Error>(7u32)
                })
                .await
            }));
        }

        for handle in handles {
            assert_eq!(*handle.await.unwrap().unwrap(), 7);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(ctx.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_producer_failure_is_not_cached() {
        let (ctx, _clock) = context();
        let key = cache_key!["payments", "subscription"];

        let err = ctx
            .fetch(&key, None, FetchMode::Cached, || async {
                Err::<u32, _>(anyhow::anyhow!("backend down"))
            })
            .await
            .unwrap_err();

        assert!(err.is_producer_failure());
        assert!(ctx.get::<u32>(&key).await.is_none());
        assert_eq!(ctx.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_fetch_started_before_invalidation_is_not_cached() {
        let (ctx, _clock) = context();
        let key = admin::tickets(1, 10).key;
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        let slow = {
            let ctx = ctx.clone();
            let key = key.clone();
            tokio::spawn(async move {
                ctx.fetch(&key, None, FetchMode::Cached, move || async move {
                    let _ = release_rx.await;
                    Ok::<_, anyhow::Error>("stale".to_string())
                })
                .await
            })
        };
        while ctx.in_flight() == 0 {
            tokio::task::yield_now().await;
        }

        ctx.invalidate_cache_keys(admin::TICKETS).await;
        release_tx.send(()).unwrap();

        // The caller still gets its result, but it is not cached
        assert_eq!(slow.await.unwrap().unwrap().as_str(), "stale");
        assert!(ctx.get::<String>(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_unrelated_invalidation_keeps_in_flight_result() {
        let (ctx, _clock) = context();
        let key = cache_key!["faqs", "list"];
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        let slow = {
            let ctx = ctx.clone();
            let key = key.clone();
            tokio::spawn(async move {
                ctx.fetch(&key, None, FetchMode::Cached, move || async move {
                    let _ = release_rx.await;
                    Ok::<_, anyhow::Error>(4u32)
                })
                .await
            })
        };
        while ctx.in_flight() == 0 {
            tokio::task::yield_now().await;
        }

        ctx.invalidate_cache_keys(admin::TICKETS).await;
        ctx.invalidate_by_pattern("users:*").await;
        release_tx.send(()).unwrap();

        assert_eq!(*slow.await.unwrap().unwrap(), 4);
        assert_eq!(ctx.get::<u32>(&key).await.as_deref(), Some(&4));
    }

    #[tokio::test]
    async fn test_invalidation_covers_fetch_replaced_by_refresh() {
        let (ctx, _clock) = context();
        let key = admin::analytics().key;
        let (first_tx, first_rx) = tokio::sync::oneshot::channel::<()>();
        let (second_tx, second_rx) = tokio::sync::oneshot::channel::<()>();

        let first = {
            let ctx = ctx.clone();
            let key = key.clone();
            tokio::spawn(async move {
                ctx.fetch(&key, None, FetchMode::Join, move || async move {
                    let _ = first_rx.await;
                    Ok::<_, anyhow::Error>(1u32)
                })
                .await
            })
        };
        while ctx.in_flight() == 0 {
            tokio::task::yield_now().await;
        }
        let second = {
            let ctx = ctx.clone();
            let key = key.clone();
            tokio::spawn(async move {
                ctx.fetch(&key, None, FetchMode::Force, move || async move {
                    let _ = second_rx.await;
                    Ok::<_, anyhow::Error>(2u32)
                })
                .await
            })
        };
        // Let the forced refresh start its producer
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }

        ctx.invalidate_key(&key).await;
        second_tx.send(()).unwrap();
        first_tx.send(()).unwrap();

        assert_eq!(*second.await.unwrap().unwrap(), 2);
        assert_eq!(*first.await.unwrap().unwrap(), 1);
        assert!(ctx.get::<u32>(&key).await.is_none());
    }

    #[tokio::test]
    async fn test_panicking_producer_releases_key() {
        let (ctx, _clock) = context();
        let key = cache_key!["faqs", "list"];
        let calls = Arc::new(AtomicU32::new(0));

        let attempt = |calls: Arc<AtomicU32>| {
            move || async move {
                if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                    panic!("producer exploded");
                }
                Ok::<_, anyhow::Error>(9u32)
            }
        };

        let err = ctx
            .fetch(&key, None, FetchMode::Join, attempt(Arc::clone(&calls)))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Aborted { .. }));
        assert_eq!(ctx.in_flight(), 0);

        let value = ctx
            .fetch(&key, None, FetchMode::Join, attempt(Arc::clone(&calls)))
            .await
            .unwrap();
        assert_eq!(*value, 9);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(ctx.get::<u32>(&key).await.as_deref(), Some(&9));
    }

    #[tokio::test]
    async fn test_slow_fetch_does_not_clobber_newer_refresh() {
        let (ctx, _clock) = context();
        let key = cache_key!["admin", "analytics"];
        let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

        let slow = {
            let ctx = ctx.clone();
            let key = key.clone();
            tokio::spawn(async move {
                ctx.fetch(&key, None, FetchMode::Cached, move || async move {
                    let _ = release_rx.await;
                    Ok::<_, anyhow::Error>(1u32)
                })
                .await
            })
        };
        while ctx.in_flight() == 0 {
            tokio::task::yield_now().await;
        }

        let fresh = ctx
            .fetch(&key, None, FetchMode::Force, || async { Ok::<_, anyhow::Error>(2u32) })
            .await
            .unwrap();
        assert_eq!(*fresh, 2);

        release_tx.send(()).unwrap();
        assert_eq!(*slow.await.unwrap().unwrap(), 1);

        assert_eq!(*ctx.get::<u32>(&key).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_dropped_caller_still_populates_cache() {
        let (ctx, _clock) = context();
        let key = cache_key!["companies", "list", 1, 25];

        let fut = ctx.fetch(&key, None, FetchMode::Cached, || async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<_, anyhow::Error>(3u32)
        });
        // Caller gives up before the producer finishes
        assert!(tokio::time::timeout(Duration::from_millis(1), fut).await.is_err());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(*ctx.get::<u32>(&key).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_not_ready_store_is_pass_through() {
        let config = CacheConfig::default();
        let store = MemoryStore::new(&config).deferred();
        let ctx = CacheContext::new(Arc::new(store), &config);
        let key = cache_key!["faqs", "list"];
        let calls = Arc::new(AtomicU32::new(0));

        assert!(!ctx.is_ready());
        assert!(!ctx.set(key.clone(), 1u32, None).await);

        for _ in 0..2 {
            let calls = Arc::clone(&calls);
            let value = ctx
                .fetch(&key, None, FetchMode::Cached, move || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok::<_, anyhow::Error>(5u32)
                })
                .await
                .unwrap();
            assert_eq!(*value, 5);
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        ctx.open().await.unwrap();
        assert!(ctx.is_ready());
    }

    #[tokio::test]
    async fn test_invalidate_by_patterns_sums_counts() {
        let (ctx, _clock) = context();
        for app in ["myapp", "otherapp"] {
            for profile in ["dev", "prod"] {
                ctx.set(cache_key![app, profile, "main"], (), None).await;
            }
        }

        let result = ctx
            .invalidate_by_patterns(&["myapp:*:*", "otherapp:prod:*"])
            .await;

        // myapp:dev, myapp:prod, otherapp:prod = 3 entries
        assert_eq!(result.count, 3);
        assert_eq!(result.patterns.len(), 2);
        assert!(ctx.get::<()>(&cache_key!["otherapp", "dev", "main"]).await.is_some());
    }

    #[tokio::test]
    async fn test_cleanup_expired_counts_removed() {
        let (ctx, clock) = context();

        ctx.set(cache_key!["a"], 1u8, Some(Ttl::Seconds(1))).await;
        ctx.set(cache_key!["b"], 1u8, Some(Ttl::Seconds(100))).await;
        ctx.set(cache_key!["c"], 1u8, Some(Ttl::SESSION)).await;
        clock.advance(Duration::from_secs(2));

        assert_eq!(ctx.cleanup_expired().await, 1);
        assert!(ctx.get::<u8>(&cache_key!["b"]).await.is_some());
        assert!(ctx.get::<u8>(&cache_key!["c"]).await.is_some());
    }
}
