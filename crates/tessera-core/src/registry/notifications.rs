//! Notification keys, scoped per user.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["notifications"]);
pub const UNREAD: KeyPrefix = KeyPrefix::new(&["notifications", "unread"]);
pub const LIST: KeyPrefix = KeyPrefix::new(&["notifications", "list"]);

pub fn unread(user_id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(UNREAD.to_key().with(user_id), Ttl::STANDARD_5_MIN)
}

pub fn list(user_id: &str, page: u32, limit: u32) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(
        LIST.to_key().with(user_id).with(page).with(limit),
        Ttl::STANDARD_5_MIN,
    )
}
