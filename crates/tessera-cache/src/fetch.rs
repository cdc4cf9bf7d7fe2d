//! Async data with cache.
//!
//! [`AsyncData`] binds a cache key and a producer to observable
//! loading/data/error state. Consumers call [`AsyncData::load`] when they
//! start using a resource, [`AsyncData::refresh`] to bypass the cache, and
//! watch the state through [`AsyncData::state`] or [`AsyncData::subscribe`].
//!
//! Invalidating a key in the [`CacheContext`] does not touch handles that
//! already hold data for it; pair invalidation with `refresh()`.

use futures::FutureExt;
use futures::future::BoxFuture;
use parking_lot::RwLock;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::sync::watch;
use tracing::debug;

use tessera_core::{CacheKey, CacheKeyDescriptor, Ttl};

use crate::context::{CacheContext, FetchMode};
use crate::error::FetchError;

/// Type-erased producer returning a fresh value on every call.
pub type Producer<T> = Arc<dyn Fn() -> BoxFuture<'static, anyhow::Result<T>> + Send + Sync>;

/// Per-handle options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Overrides the registry TTL for this handle.
    pub ttl: Option<Ttl>,
    /// A disabled handle never calls its producer.
    pub enabled: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            ttl: None,
            enabled: true,
        }
    }
}

impl FetchOptions {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn ttl(mut self, ttl: Ttl) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Snapshot of a handle's state.
pub struct FetchState<T> {
    /// Last successfully loaded value. Never cleared by a failed fetch.
    pub data: Option<Arc<T>>,
    pub loading: bool,
    /// Error of the last completed fetch, cleared on success.
    pub error: Option<FetchError>,
}

impl<T> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            loading: self.loading,
            error: self.error.clone(),
        }
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for FetchState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchState")
            .field("data", &self.data)
            .field("loading", &self.loading)
            .field("error", &self.error)
            .finish()
    }
}

struct Binding<T> {
    key: CacheKey,
    ttl: Option<Ttl>,
    producer: Producer<T>,
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            ttl: self.ttl,
            producer: Arc::clone(&self.producer),
        }
    }
}

/// A cached resource bound to a producer.
///
/// # Examples
///
/// ```no_run
/// use tessera_cache::{AsyncData, CacheConfig, CacheContext, FetchOptions};
/// use tessera_core::registry::faqs;
///
/// # #[tokio::main]
/// # async fn main() {
/// let cache = CacheContext::in_memory(&CacheConfig::default());
/// let questions = AsyncData::new(
///     cache,
///     faqs::list(),
///     || async { Ok(vec!["How is my data used?".to_string()]) },
///     FetchOptions::default(),
/// );
///
/// questions.load().await;
/// if let Some(list) = questions.data() {
///     println!("{} questions", list.len());
/// }
/// # }
/// ```
pub struct AsyncData<T> {
    ctx: CacheContext,
    binding: RwLock<Binding<T>>,
    /// TTL from [`FetchOptions`]; wins over every descriptor's TTL.
    ttl_override: Option<Ttl>,
    enabled: AtomicBool,
    state: watch::Sender<FetchState<T>>,
    /// Last request ticket handed out.
    issued: AtomicU64,
    /// Highest ticket whose result reached the state.
    applied: AtomicU64,
}

impl<T> AsyncData<T>
where
    T: Send + Sync + 'static,
{
    /// Creates an idle handle; nothing is fetched until [`Self::load`].
    pub fn new<F, Fut>(
        ctx: CacheContext,
        descriptor: impl Into<CacheKeyDescriptor>,
        producer: F,
        options: FetchOptions,
    ) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let descriptor = descriptor.into();
        let (state, _) = watch::channel(FetchState::default());

        Self {
            ctx,
            binding: RwLock::new(Binding {
                key: descriptor.key,
                ttl: options.ttl.or(descriptor.ttl),
                producer: boxed_producer(producer),
            }),
            ttl_override: options.ttl,
            enabled: AtomicBool::new(options.enabled),
            state,
            issued: AtomicU64::new(0),
            applied: AtomicU64::new(0),
        }
    }

    /// Loads the resource: serves a fresh cached value if there is one,
    /// otherwise calls the producer. Does nothing while disabled.
    pub async fn load(&self) {
        if !self.is_enabled() {
            self.state.send_modify(|s| s.loading = false);
            return;
        }
        self.run(false).await;
    }

    /// Calls the producer regardless of the cache and writes the result
    /// back under the same key.
    pub async fn refresh(&self) {
        if !self.is_enabled() {
            return;
        }
        self.run(true).await;
    }

    /// Points the handle at another resource, dropping state that belongs
    /// to the previous key, and loads it.
    pub async fn rebind<F, Fut>(&self, descriptor: impl Into<CacheKeyDescriptor>, producer: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let descriptor = descriptor.into();
        {
            let mut binding = self.binding.write();
            binding.key = descriptor.key;
            binding.ttl = self.ttl_override.or(descriptor.ttl);
            binding.producer = boxed_producer(producer);
        }

        // Results of requests issued for the old key are discarded
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        self.applied.fetch_max(ticket, Ordering::SeqCst);
        self.state.send_replace(FetchState::default());

        self.load().await;
    }

    /// Enables or disables the handle. Enabling triggers a load.
    pub async fn set_enabled(&self, enabled: bool) {
        let was = self.enabled.swap(enabled, Ordering::SeqCst);
        if enabled && !was {
            self.load().await;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn key(&self) -> CacheKey {
        self.binding.read().key.clone()
    }

    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    pub fn data(&self) -> Option<Arc<T>> {
        self.state.borrow().data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error(&self) -> Option<FetchError> {
        self.state.borrow().error.clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<T>> {
        self.state.subscribe()
    }

    async fn run(&self, force: bool) {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let binding = self.binding.read().clone();

        if !force {
            if let Some(value) = self.ctx.get::<T>(&binding.key).await {
                debug!(key = %binding.key, "Serving cached data");
                self.apply(ticket, Ok(value));
                return;
            }
        }

        self.state.send_modify(|s| s.loading = true);

        let mode = if force { FetchMode::Force } else { FetchMode::Join };
        let producer = Arc::clone(&binding.producer);
        let result = self
            .ctx
            .fetch(&binding.key, binding.ttl, mode, move || producer())
            .await;

        self.apply(ticket, result);
    }

    fn apply(&self, ticket: u64, result: Result<Arc<T>, FetchError>) {
        let previous = self.applied.fetch_max(ticket, Ordering::SeqCst);
        if previous > ticket {
            debug!(ticket, applied = previous, "Discarding out-of-date result");
            return;
        }

        let still_pending = self.issued.load(Ordering::SeqCst) > ticket;
        self.state.send_modify(|s| {
            s.loading = still_pending;
            match result {
                Ok(value) => {
                    s.data = Some(value);
                    s.error = None;
                },
                Err(e) => s.error = Some(e),
            }
        });
    }
}

fn boxed_producer<T, F, Fut>(producer: F) -> Producer<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
{
    Arc::new(move || producer().boxed())
}
