//! Test helpers for tessera-cache.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use tessera_cache::{CacheConfig, CacheContext, ManualClock, MemoryStore};

/// Context backed by a store that reads time from a manual clock.
pub fn context_with_clock() -> (CacheContext, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    let config = CacheConfig::default();
    let store = MemoryStore::with_clock(&config, Arc::new(clock.clone()));
    (CacheContext::new(Arc::new(store), &config), clock)
}

/// Counts producer calls and can be switched into failing.
#[derive(Clone, Default)]
pub struct Backend {
    calls: Arc<AtomicU32>,
    failing: Arc<AtomicBool>,
}

impl Backend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns the call number, optionally after a delay.
    pub async fn fetch(&self, delay: Duration) -> anyhow::Result<u32> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            anyhow::bail!("backend unavailable (call {n})");
        }
        Ok(n)
    }
}
