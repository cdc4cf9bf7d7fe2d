//! Support ticket keys as seen by end users (the admin view lives in
//! [`super::admin`]).

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["tickets"]);
pub const LIST: KeyPrefix = KeyPrefix::new(&["tickets", "list"]);
pub const DETAIL: KeyPrefix = KeyPrefix::new(&["tickets", "detail"]);
pub const BY_USER: KeyPrefix = KeyPrefix::new(&["tickets", "user"]);

pub fn list(page: u32, limit: u32) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(LIST.to_key().with(page).with(limit), Ttl::STANDARD_5_MIN)
}

pub fn detail(id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(DETAIL.to_key().with(id), Ttl::STANDARD_5_MIN)
}

pub fn by_user(user_id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(BY_USER.to_key().with(user_id), Ttl::STANDARD_5_MIN)
}
