//! Test helpers for tessera-dashboard.

#![allow(dead_code)]

use std::sync::Arc;

use tessera_cache::{CacheConfig, CacheContext, ManualClock, MemoryStore};
use tessera_dashboard::{Hooks, InMemoryBackend};

pub struct Harness {
    pub cache: CacheContext,
    pub clock: ManualClock,
    pub backend: Arc<InMemoryBackend>,
    pub hooks: Hooks,
}

/// Seeded backend behind a cache driven by a manual clock, signed in as
/// `u-1` of `team-1`.
pub fn harness() -> Harness {
    let clock = ManualClock::new(1_700_000_000_000);
    let config = CacheConfig::default();
    let store = MemoryStore::with_clock(&config, Arc::new(clock.clone()));
    let cache = CacheContext::new(Arc::new(store), &config);
    let backend = Arc::new(InMemoryBackend::seeded());
    let hooks = Hooks::new(cache.clone(), backend.clone(), "u-1", "team-1");

    Harness {
        cache,
        clock,
        backend,
        hooks,
    }
}
