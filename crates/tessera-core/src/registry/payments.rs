//! Billing keys.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["payments"]);
pub const HISTORY: KeyPrefix = KeyPrefix::new(&["payments", "history"]);
pub const SUBSCRIPTION: KeyPrefix = KeyPrefix::new(&["payments", "subscription"]);

pub fn history(page: u32, limit: u32) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(HISTORY.to_key().with(page).with(limit), Ttl::STANDARD_5_MIN)
}

pub fn subscription() -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(SUBSCRIPTION.to_key(), Ttl::DEFAULT_15_MIN)
}
