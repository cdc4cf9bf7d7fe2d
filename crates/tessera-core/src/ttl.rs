//! Time-to-live tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Lifetime of a cache entry.
///
/// Domains pick one of the named tiers; `Session` is a sentinel meaning the
/// entry does not expire for the lifetime of the process.
///
/// # Example
///
/// ```
/// use tessera_core::Ttl;
///
/// assert_eq!(Ttl::DEFAULT_15_MIN.as_secs(), Some(900));
/// assert_eq!(Ttl::SESSION.as_secs(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ttl {
    /// Expires after the given number of seconds.
    Seconds(u64),
    /// Never expires while the process lives.
    Session,
}

impl Ttl {
    pub const STANDARD_5_MIN: Ttl = Ttl::Seconds(300);
    pub const DEFAULT_15_MIN: Ttl = Ttl::Seconds(900);
    pub const IMPORTANT_1_HOUR: Ttl = Ttl::Seconds(3_600);
    pub const LONG_1_DAY: Ttl = Ttl::Seconds(86_400);
    pub const SESSION: Ttl = Ttl::Session;

    /// Seconds until expiry, `None` for session entries.
    pub fn as_secs(&self) -> Option<u64> {
        match self {
            Self::Seconds(secs) => Some(*secs),
            Self::Session => None,
        }
    }

    /// Duration until expiry, `None` for session entries.
    pub fn as_duration(&self) -> Option<Duration> {
        self.as_secs().map(Duration::from_secs)
    }

    /// Absolute expiry in epoch milliseconds for an entry written at
    /// `now_millis`. `None` means the entry never expires.
    pub fn expires_at(&self, now_millis: u64) -> Option<u64> {
        self.as_secs()
            .map(|secs| now_millis.saturating_add(secs.saturating_mul(1_000)))
    }

    /// Returns true for the session sentinel.
    pub fn is_session(&self) -> bool {
        matches!(self, Self::Session)
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        Self::Seconds(duration.as_secs())
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(secs) => write!(f, "{}s", secs),
            Self::Session => f.write_str("session"),
        }
    }
}
