//! Cache invalidation with prefix and pattern matching support.

use glob::{Pattern, PatternError};
use tessera_core::{CacheKey, Segment};

/// Outcome of an invalidation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvalidationResult {
    /// Number of entries removed.
    pub count: usize,
    /// Prefixes or patterns applied.
    pub patterns: Vec<String>,
}

impl InvalidationResult {
    pub fn new(count: usize, pattern: impl Into<String>) -> Self {
        Self {
            count,
            patterns: vec![pattern.into()],
        }
    }

    /// Folds another result into this one.
    pub fn merge(&mut self, other: InvalidationResult) {
        self.count += other.count;
        self.patterns.extend(other.patterns);
    }
}

/// Selects the keys an invalidation applies to.
///
/// Prefix matching is structural and should be preferred. Pattern matching
/// runs a glob over the serialized key (`admin:tickets:1:10`):
/// - `*`: matches any sequence of characters
/// - `?`: matches a single character
#[derive(Debug, Clone)]
pub enum KeyMatcher {
    Prefix(Vec<Segment>),
    Pattern(Pattern),
}

impl KeyMatcher {
    pub fn prefix(segments: &[Segment]) -> Self {
        Self::Prefix(segments.to_vec())
    }

    /// Compiles a glob pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use tessera_cache::KeyMatcher;
    /// use tessera_core::cache_key;
    ///
    /// let matcher = KeyMatcher::pattern("async-data:user-profile*").unwrap();
    /// assert!(matcher.matches(&cache_key!["async-data", "user-profile", "current"]));
    /// assert!(!matcher.matches(&cache_key!["async-data", "companies"]));
    /// ```
    pub fn pattern(pattern: &str) -> Result<Self, PatternError> {
        Pattern::new(pattern).map(Self::Pattern)
    }

    pub fn matches(&self, key: &CacheKey) -> bool {
        match self {
            Self::Prefix(prefix) => key.starts_with(prefix),
            Self::Pattern(pattern) => pattern.matches(&key.to_string()),
        }
    }
}

impl std::fmt::Display for KeyMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Prefix(prefix) => {
                write!(f, "{}", CacheKey::from_segments(prefix.iter().cloned()))
            },
            Self::Pattern(pattern) => write!(f, "{}", pattern.as_str()),
        }
    }
}
