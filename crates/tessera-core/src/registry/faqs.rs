//! FAQ keys. FAQs change rarely, so they sit on the longest tier.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["faqs"]);
pub const LIST: KeyPrefix = KeyPrefix::new(&["faqs", "list"]);
pub const DETAIL: KeyPrefix = KeyPrefix::new(&["faqs", "detail"]);

pub fn list() -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(LIST.to_key(), Ttl::LONG_1_DAY)
}

pub fn by_category(category: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(LIST.to_key().with(category), Ttl::LONG_1_DAY)
}

pub fn detail(id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(DETAIL.to_key().with(id), Ttl::LONG_1_DAY)
}
