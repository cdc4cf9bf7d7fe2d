#![allow(dead_code)]
use tessera_core::{CacheKeyDescriptor, KeyPrefix};

/// Serialized form of a descriptor's key.
pub fn serialized(descriptor: &CacheKeyDescriptor) -> String {
    descriptor.key.to_string()
}

/// Asserts that a descriptor lives under the given prefix.
pub fn assert_under(descriptor: &CacheKeyDescriptor, prefix: KeyPrefix) {
    assert!(
        descriptor.key.starts_with(prefix.to_key().segments()),
        "{} is not under {}",
        descriptor.key,
        prefix
    );
}
