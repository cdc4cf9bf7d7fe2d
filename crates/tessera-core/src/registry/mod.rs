//! Cache key registry.
//!
//! Single source of truth mapping a semantic request ("ticket list, page 2,
//! limit 10") to a [`CacheKeyDescriptor`](crate::CacheKeyDescriptor). Each
//! domain lives in its own module and exposes:
//!
//! - `KeyPrefix` constants (`ALL`, and one per resource family) used to
//!   invalidate a whole group of cached variants, and
//! - pure constructor functions returning a key plus a default TTL tier.
//!
//! Nothing here validates parameters; a bogus id simply produces a key
//! that the producer will fail to resolve.
//!
//! # Example
//!
//! ```
//! use tessera_core::registry::admin;
//! use tessera_core::Ttl;
//!
//! let descriptor = admin::tickets(1, 10);
//! assert_eq!(descriptor.key.to_string(), "admin:tickets:1:10");
//! assert_eq!(descriptor.ttl, Some(Ttl::STANDARD_5_MIN));
//! assert!(descriptor.key.starts_with(admin::TICKETS.to_key().segments()));
//! ```

pub mod admin;
pub mod companies;
pub mod faqs;
pub mod knowledge_base;
pub mod notifications;
pub mod payments;
pub mod team;
pub mod tickets;
pub mod users;

use std::fmt;

use crate::key::KeyPrefix;

/// Data domains known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Users,
    Team,
    Tickets,
    Faqs,
    KnowledgeBase,
    Admin,
    Payments,
    Companies,
    Notifications,
}

impl Domain {
    /// Every domain, in registry order.
    pub const ALL: [Domain; 9] = [
        Domain::Users,
        Domain::Team,
        Domain::Tickets,
        Domain::Faqs,
        Domain::KnowledgeBase,
        Domain::Admin,
        Domain::Payments,
        Domain::Companies,
        Domain::Notifications,
    ];

    /// Root prefix covering every key of the domain.
    pub fn prefix(&self) -> KeyPrefix {
        match self {
            Self::Users => users::ALL,
            Self::Team => team::ALL,
            Self::Tickets => tickets::ALL,
            Self::Faqs => faqs::ALL,
            Self::KnowledgeBase => knowledge_base::ALL,
            Self::Admin => admin::ALL,
            Self::Payments => payments::ALL,
            Self::Companies => companies::ALL,
            Self::Notifications => notifications::ALL,
        }
    }

    /// Name of the domain, identical to its root segment.
    pub fn as_str(&self) -> &'static str {
        self.prefix().parts()[0]
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_domain_roots_are_unique() {
        let roots: HashSet<_> = Domain::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(roots.len(), Domain::ALL.len());
    }

    #[test]
    fn test_domain_prefix_is_single_segment() {
        for domain in Domain::ALL {
            assert_eq!(domain.prefix().parts().len(), 1, "{}", domain);
        }
    }

    #[test]
    fn test_domain_display() {
        assert_eq!(Domain::KnowledgeBase.to_string(), "knowledge-base");
    }
}
