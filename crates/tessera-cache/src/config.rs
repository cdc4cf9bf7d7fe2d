//! Cache configuration.

use serde::Deserialize;
use std::time::Duration;
use tessera_core::Ttl;

/// Cache configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// When `false` the store starts closed and every fetch is pass-through.
    pub enabled: bool,
    /// Default TTL in seconds (default: 900 = 15 minutes)
    pub ttl_seconds: u64,
    /// Maximum number of entries (default: 10000)
    pub max_capacity: u64,
    /// Interval between expired-entry sweeps; 0 disables sweeping.
    pub sweep_interval_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            ttl_seconds: 900,
            max_capacity: 10_000,
            sweep_interval_seconds: 60,
        }
    }
}

impl CacheConfig {
    /// TTL applied when neither the caller nor the registry picks one.
    pub fn default_ttl(&self) -> Ttl {
        Ttl::Seconds(self.ttl_seconds)
    }

    /// Sweep interval, `None` when periodic sweeping is disabled.
    pub fn sweep_interval(&self) -> Option<Duration> {
        (self.sweep_interval_seconds > 0).then(|| Duration::from_secs(self.sweep_interval_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CacheConfig::default();

        assert!(config.enabled);
        assert_eq!(config.default_ttl(), Ttl::DEFAULT_15_MIN);
        assert_eq!(config.max_capacity, 10_000);
        assert_eq!(config.sweep_interval(), Some(Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_interval_disables_sweep() {
        let config = CacheConfig {
            sweep_interval_seconds: 0,
            ..Default::default()
        };
        assert_eq!(config.sweep_interval(), None);
    }
}
