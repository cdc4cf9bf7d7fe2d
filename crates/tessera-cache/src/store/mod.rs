//! Cache store abstraction.
//!
//! A store maps a [`CacheKey`] to a [`CacheEntry`] holding a type-erased
//! value and its absolute expiry. Stores never hand out stale data: an
//! expired entry behaves exactly like a missing one, even before a sweep
//! physically removes it.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use tessera_core::{CacheKey, Segment, Ttl};

use crate::error::StoreError;

/// Type-erased cached payload. Typed access goes through
/// [`CacheContext`](crate::CacheContext).
pub type CachedValue = Arc<dyn Any + Send + Sync>;

/// A stored value with its expiry metadata.
#[derive(Clone)]
pub struct CacheEntry {
    /// The cached payload.
    pub value: CachedValue,
    /// Absolute expiry in epoch milliseconds; `None` never expires.
    pub expires_at: Option<u64>,
    /// TTL the entry was written with.
    pub ttl: Ttl,
    /// Sequence number of the write; higher is newer.
    pub stamp: u64,
}

impl CacheEntry {
    /// Fresh while `now < expires_at`.
    pub fn is_fresh(&self, now_millis: u64) -> bool {
        self.expires_at.is_none_or(|at| now_millis < at)
    }
}

impl fmt::Debug for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("expires_at", &self.expires_at)
            .field("ttl", &self.ttl)
            .field("stamp", &self.stamp)
            .finish_non_exhaustive()
    }
}

/// Lifecycle of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Still initializing; behaves as disabled.
    Opening,
    /// Serving reads and writes.
    Ready,
    /// Closed or disabled; behaves as pass-through.
    Closed,
}

/// A process-local cache store.
///
/// Only `Ready` stores serve data. In any other state reads are misses and
/// writes fail with a [`StoreError`] that callers log and ignore.
///
/// # Implementors
///
/// - [`MemoryStore`] - moka-backed in-memory store
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Name used in logs and errors.
    fn name(&self) -> &str;

    fn state(&self) -> StoreState;

    fn is_ready(&self) -> bool {
        self.state() == StoreState::Ready
    }

    /// Completes initialization. Opening a ready store is a no-op.
    async fn open(&self) -> Result<(), StoreError>;

    /// Drops every entry and stops serving.
    async fn close(&self);

    /// Returns the entry only if present and fresh.
    async fn get(&self, key: &CacheKey) -> Option<Arc<CacheEntry>>;

    /// Stores or overwrites the entry at `key`.
    async fn set(
        &self,
        key: CacheKey,
        value: CachedValue,
        ttl: Ttl,
        stamp: u64,
    ) -> Result<(), StoreError>;

    /// Stores the entry unless a fresh entry with a higher stamp is already
    /// there. Returns whether the write happened.
    async fn set_if_newer(
        &self,
        key: CacheKey,
        value: CachedValue,
        ttl: Ttl,
        stamp: u64,
    ) -> Result<bool, StoreError>;

    /// Removes one entry. Returns whether it existed.
    async fn delete(&self, key: &CacheKey) -> bool;

    /// Removes the entry at `key` only if it was written with `stamp`.
    async fn delete_if_stamp(&self, key: &CacheKey, stamp: u64) -> bool;

    /// Removes every entry whose key starts with `prefix`.
    async fn delete_by_prefix(&self, prefix: &[Segment]) -> usize;

    /// Removes every entry whose serialized key matches the glob `pattern`.
    async fn delete_by_pattern(&self, pattern: &str) -> usize;

    /// Removes every entry with `now >= expires_at`.
    async fn sweep_expired(&self) -> usize;

    /// Removes everything, keeping the store open.
    async fn clear(&self);

    /// Approximate number of stored entries, stale ones included.
    fn entry_count(&self) -> u64;
}
