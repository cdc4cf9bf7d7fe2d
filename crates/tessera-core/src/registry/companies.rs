//! Company directory keys.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["companies"]);
pub const LIST: KeyPrefix = KeyPrefix::new(&["companies", "list"]);
pub const DETAIL: KeyPrefix = KeyPrefix::new(&["companies", "detail"]);

pub fn list(page: u32, limit: u32) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(LIST.to_key().with(page).with(limit), Ttl::DEFAULT_15_MIN)
}

pub fn detail(id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(DETAIL.to_key().with(id), Ttl::IMPORTANT_1_HOUR)
}
