//! User keys.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["users"]);
pub const PROFILE: KeyPrefix = KeyPrefix::new(&["users", "profile"]);
pub const LIST: KeyPrefix = KeyPrefix::new(&["users", "list"]);

/// Segment naming the signed-in user's own profile.
pub const CURRENT: &str = "current";

/// The signed-in user's profile; kept for the whole session.
pub fn current_profile() -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(PROFILE.to_key().with(CURRENT), Ttl::SESSION)
}

pub fn profile(user_id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(PROFILE.to_key().with(user_id), Ttl::IMPORTANT_1_HOUR)
}

pub fn list(page: u32, limit: u32) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(LIST.to_key().with(page).with(limit), Ttl::DEFAULT_15_MIN)
}
