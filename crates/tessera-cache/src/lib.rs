//! Tessera Cache - keyed TTL cache with pattern invalidation.
//!
//! The crate is layered bottom-up:
//!
//! - [`store`]: the process-local key/value store (`CacheStore` trait and
//!   the moka-backed [`MemoryStore`]).
//! - [`invalidation`]: prefix, glob and expiry based bulk removal.
//! - [`context`]: the [`CacheContext`] handle passed to every consumer.
//! - [`fetch`]: [`AsyncData`], binding a key and a producer to observable
//!   loading/data/error state.
//! - [`sweep`]: periodic cleanup of expired entries.

pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod fetch;
pub mod invalidation;
pub mod metrics;
pub mod store;
pub mod sweep;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::CacheConfig;
pub use context::{CacheContext, FetchMode};
pub use error::{FetchError, StoreError};
pub use fetch::{AsyncData, FetchOptions, FetchState};
pub use invalidation::{InvalidationResult, KeyMatcher};
pub use store::{CacheEntry, CacheStore, CachedValue, MemoryStore, StoreState};
pub use sweep::{SweepHandle, SweepScheduler};

pub use tessera_core::{CacheKey, CacheKeyDescriptor, KeyPrefix, Segment, Ttl};
