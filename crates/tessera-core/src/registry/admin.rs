//! Admin dashboard keys: tickets, survey entries, revisions, analytics.

use crate::key::{CacheKeyDescriptor, KeyPrefix};
use crate::ttl::Ttl;

pub const ALL: KeyPrefix = KeyPrefix::new(&["admin"]);
pub const TICKETS: KeyPrefix = KeyPrefix::new(&["admin", "tickets"]);
pub const TICKET: KeyPrefix = KeyPrefix::new(&["admin", "ticket"]);
pub const ENTRIES: KeyPrefix = KeyPrefix::new(&["admin", "entries"]);
pub const REVISIONS: KeyPrefix = KeyPrefix::new(&["admin", "revisions"]);
pub const ANALYTICS: KeyPrefix = KeyPrefix::new(&["admin", "analytics"]);

/// Paginated ticket list.
pub fn tickets(page: u32, limit: u32) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(TICKETS.to_key().with(page).with(limit), Ttl::STANDARD_5_MIN)
}

/// A single ticket.
pub fn ticket(id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(TICKET.to_key().with(id), Ttl::STANDARD_5_MIN)
}

/// Paginated survey entries.
pub fn entries(page: u32, limit: u32) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(ENTRIES.to_key().with(page).with(limit), Ttl::DEFAULT_15_MIN)
}

/// Revision history of one entry.
pub fn revisions(entry_id: &str) -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(REVISIONS.to_key().with(entry_id), Ttl::DEFAULT_15_MIN)
}

/// Dashboard analytics summary.
pub fn analytics() -> CacheKeyDescriptor {
    CacheKeyDescriptor::new(ANALYTICS.to_key(), Ttl::IMPORTANT_1_HOUR)
}
