//! Knowledge base keys.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["knowledge-base"]);
pub const ARTICLES: KeyPrefix = KeyPrefix::new(&["knowledge-base", "articles"]);
pub const ARTICLE: KeyPrefix = KeyPrefix::new(&["knowledge-base", "article"]);
pub const SEARCH: KeyPrefix = KeyPrefix::new(&["knowledge-base", "search"]);

pub fn articles(category: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(ARTICLES.to_key().with(category), Ttl::IMPORTANT_1_HOUR)
}

pub fn article(id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(ARTICLE.to_key().with(id), Ttl::IMPORTANT_1_HOUR)
}

/// Search results are keyed by the raw query text.
pub fn search(query: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(SEARCH.to_key().with(query), Ttl::STANDARD_5_MIN)
}
