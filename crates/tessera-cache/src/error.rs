//! Error types for the cache layer.
//!
//! None of these are fatal to callers: a [`StoreError`] degrades the cache
//! to pass-through and a [`FetchError`] ends up in the `error` field of the
//! fetch state while previous data stays visible.

use std::sync::Arc;
use thiserror::Error;

/// The store refused a write.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store has not finished opening.
    #[error("cache store '{store}' is not ready")]
    NotReady { store: String },

    /// The store was closed or disabled by configuration.
    #[error("cache store '{store}' is closed")]
    Closed { store: String },
}

/// A fetch through the cache failed.
///
/// Cloneable so a single in-flight fetch can hand the same outcome to every
/// caller waiting on it.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// The producer returned an error.
    #[error("producer failed: {0:#}")]
    Producer(Arc<anyhow::Error>),

    /// The background fetch task panicked or was cancelled.
    #[error("fetch for '{key}' did not complete: {reason}")]
    Aborted { key: String, reason: String },

    /// A value cached under the key has a different type than requested.
    #[error("cached value for '{key}' is not a {expected}")]
    TypeMismatch { key: String, expected: &'static str },
}

impl FetchError {
    pub fn producer(err: anyhow::Error) -> Self {
        Self::Producer(Arc::new(err))
    }

    /// Returns true if the producer itself failed.
    pub fn is_producer_failure(&self) -> bool {
        matches!(self, Self::Producer(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_producer_error_display_includes_chain() {
        let err = anyhow::anyhow!("connection reset").context("loading tickets");
        let fetch = FetchError::producer(err);

        let msg = fetch.to_string();
        assert!(msg.contains("loading tickets"));
        assert!(msg.contains("connection reset"));
        assert!(fetch.is_producer_failure());
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotReady {
            store: "memory".into(),
        };
        assert_eq!(err.to_string(), "cache store 'memory' is not ready");
    }
}
