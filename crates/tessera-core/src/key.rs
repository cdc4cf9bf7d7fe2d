//! Hierarchical cache keys.
//!
//! A [`CacheKey`] is an ordered list of [`Segment`]s. Order matters: the
//! first segment names the domain, the following ones narrow it down to a
//! sub-resource and finally to the parameters (id, page, limit) that
//! disambiguate a single cached slot.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::ttl::Ttl;

/// Delimiter used when a key is rendered as a string.
pub const KEY_DELIMITER: char = ':';

/// One primitive part of a [`CacheKey`].
///
/// Equality is variant aware: `Segment::from("1")` and `Segment::from(1)`
/// render identically but address different slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Numeric segment (pages, limits, numeric ids).
    Int(i64),
    /// Textual segment (domain names, string ids).
    Str(Cow<'static, str>),
}

impl Segment {
    /// Creates a segment from a static string without allocating.
    pub const fn from_static(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }

    /// Returns the textual value, if this is a string segment.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Int(_) => None,
        }
    }

    /// Returns the numeric value, if this is an integer segment.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Self::Str(Cow::Owned(s.to_owned()))
    }
}

impl From<&String> for Segment {
    fn from(s: &String) -> Self {
        Self::Str(Cow::Owned(s.clone()))
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl From<i64> for Segment {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Segment {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u32> for Segment {
    fn from(n: u32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<u64> for Segment {
    fn from(n: u64) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

/// Builds a [`CacheKey`] from a list of segment-convertible values.
///
/// # Examples
///
/// ```
/// use tessera_core::cache_key;
///
/// let key = cache_key!["admin", "tickets", 1, 10];
/// assert_eq!(key.to_string(), "admin:tickets:1:10");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($($segment:expr),* $(,)?) => {
        $crate::CacheKey::from_segments([$($crate::Segment::from($segment)),*])
    };
}

/// Ordered sequence of segments identifying one cached resource or
/// resource collection.
///
/// # Examples
///
/// ```
/// use tessera_core::{CacheKey, Segment};
///
/// let key = CacheKey::new().with("users").with("profile").with("u-42");
/// assert_eq!(key.to_string(), "users:profile:u-42");
/// assert!(key.starts_with(&[Segment::from("users")]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(Vec<Segment>);

impl CacheKey {
    /// Creates an empty key.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates a key from an ordered list of segments.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        Self(segments.into_iter().collect())
    }

    /// Appends a segment (builder style).
    #[must_use]
    pub fn with(mut self, segment: impl Into<Segment>) -> Self {
        self.0.push(segment.into());
        self
    }

    /// Returns the segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the key has no segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Structural prefix test, segment by segment.
    ///
    /// An empty prefix matches every key.
    pub fn starts_with(&self, prefix: &[Segment]) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", KEY_DELIMITER)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl From<Vec<Segment>> for CacheKey {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl AsRef<[Segment]> for CacheKey {
    fn as_ref(&self) -> &[Segment] {
        &self.0
    }
}

/// Static key prefix used to target a whole domain or resource family.
///
/// Prefixes are constants in the registry, so invalidating "all tickets"
/// never depends on building a throwaway parameterized key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPrefix(&'static [&'static str]);

impl KeyPrefix {
    /// Creates a prefix from its static parts.
    pub const fn new(parts: &'static [&'static str]) -> Self {
        Self(parts)
    }

    /// Returns the raw parts.
    pub fn parts(&self) -> &'static [&'static str] {
        self.0
    }

    /// Materializes the prefix as a key.
    pub fn to_key(&self) -> CacheKey {
        CacheKey::from_segments(self.0.iter().copied().map(Segment::from_static))
    }
}

impl From<KeyPrefix> for CacheKey {
    fn from(prefix: KeyPrefix) -> Self {
        prefix.to_key()
    }
}

impl fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_key())
    }
}

/// A key plus the default TTL the registry recommends for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeyDescriptor {
    /// The cache slot.
    pub key: CacheKey,
    /// Default time-to-live for the slot, if the domain defines one.
    pub ttl: Option<Ttl>,
}

impl CacheKeyDescriptor {
    /// Creates a descriptor with a TTL tier.
    pub fn new(key: CacheKey, ttl: Ttl) -> Self {
        Self { key, ttl: Some(ttl) }
    }

    /// Creates a descriptor that defers to the cache-wide default TTL.
    pub fn without_ttl(key: CacheKey) -> Self {
        Self { key, ttl: None }
    }
}

impl From<CacheKey> for CacheKeyDescriptor {
    fn from(key: CacheKey) -> Self {
        Self::without_ttl(key)
    }
}
