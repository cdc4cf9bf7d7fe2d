//! Team management keys.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["team"]);
pub const MEMBERS: KeyPrefix = KeyPrefix::new(&["team", "members"]);
pub const INVITATIONS: KeyPrefix = KeyPrefix::new(&["team", "invitations"]);

pub fn members(team_id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(MEMBERS.to_key().with(team_id), Ttl::DEFAULT_15_MIN)
}

pub fn invitations(team_id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(INVITATIONS.to_key().with(team_id), Ttl::STANDARD_5_MIN)
}
