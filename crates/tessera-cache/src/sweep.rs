//! Background sweep of expired entries.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::config::CacheConfig;
use crate::context::CacheContext;

/// Handle for a running sweeper. Dropping it stops the sweeper.
pub struct SweepHandle {
    shutdown_tx: watch::Sender<bool>,
    sweeps: Arc<AtomicU64>,
}

impl SweepHandle {
    /// Signals the sweeper to stop.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(true);
    }

    /// Number of completed sweeps.
    pub fn sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::Relaxed)
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Periodically calls [`CacheContext::cleanup_expired`].
///
/// Reads never depend on the sweeper; it only bounds how long stale
/// entries occupy memory.
pub struct SweepScheduler {
    ctx: CacheContext,
    period: Duration,
}

impl SweepScheduler {
    pub fn new(ctx: CacheContext, period: Duration) -> Self {
        Self { ctx, period }
    }

    /// Builds a scheduler from configuration. Returns `None` when the
    /// cache is disabled or the sweep interval is zero.
    pub fn from_config(ctx: CacheContext, config: &CacheConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }
        config.sweep_interval().map(|period| Self::new(ctx, period))
    }

    /// Starts the background task.
    pub fn start(self) -> SweepHandle {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let sweeps = Arc::new(AtomicU64::new(0));
        let handle = SweepHandle {
            shutdown_tx,
            sweeps: Arc::clone(&sweeps),
        };

        tokio::spawn(self.run(shutdown_rx, sweeps));

        handle
    }

    async fn run(self, mut shutdown_rx: watch::Receiver<bool>, sweeps: Arc<AtomicU64>) {
        let mut timer = interval(self.period);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // El primer tick es inmediato
        timer.tick().await;

        info!("Starting cache sweeper with interval {:?}", self.period);

        loop {
            tokio::select! {
                _ = timer.tick() => {
                    let removed = self.ctx.cleanup_expired().await;
                    sweeps.fetch_add(1, Ordering::Relaxed);
                    debug!(removed, "Sweep finished");
                }
                result = shutdown_rx.changed() => {
                    if result.is_err() || *shutdown_rx.borrow() {
                        info!("Cache sweeper shutting down");
                        break;
                    }
                }
            }
        }
    }
}
