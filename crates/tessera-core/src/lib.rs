//! Tessera Core - Cache key model and registry
//!
//! This crate provides the pure, side-effect free half of the cache:
//! hierarchical keys, TTL tiers and the per-domain key registry.

pub mod key;
pub mod registry;
pub mod ttl;

pub use key::{CacheKey, CacheKeyDescriptor, KeyPrefix, Segment};
pub use registry::Domain;
pub use ttl::Ttl;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
