//! Data-source traits.
//!
//! Each domain reads and writes through one trait. Production wires these
//! to the managed document database; tests and the demo binary use
//! [`InMemoryBackend`](crate::fixtures::InMemoryBackend).

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{
    Analytics, Article, Company, CompanyUpdate, Entry, Faq, Invitation, Notification, Page,
    Payment, ProfileUpdate, Revision, Role, Subscription, TeamMember, Ticket, TicketStatus,
    UserProfile,
};

/// Admin panel: survey entries, their revisions and the support queue.
#[async_trait]
pub trait AdminApi: Send + Sync {
    async fn list_tickets(&self, page: u32, limit: u32) -> Result<Page<Ticket>, ApiError>;

    async fn get_ticket(&self, id: &str) -> Result<Ticket, ApiError>;

    async fn list_entries(&self, page: u32, limit: u32) -> Result<Page<Entry>, ApiError>;

    async fn list_revisions(&self, entry_id: &str) -> Result<Vec<Revision>, ApiError>;

    async fn analytics(&self) -> Result<Analytics, ApiError>;

    async fn set_ticket_status(&self, id: &str, status: TicketStatus) -> Result<Ticket, ApiError>;

    /// Makes `revision_id` the active revision of the entry and archives
    /// the previous one in a single transaction.
    async fn swap_revision(&self, entry_id: &str, revision_id: &str) -> Result<Entry, ApiError>;
}

#[async_trait]
pub trait UserApi: Send + Sync {
    /// Profile of the signed-in user.
    async fn current_user(&self) -> Result<UserProfile, ApiError>;

    async fn get_user(&self, id: &str) -> Result<UserProfile, ApiError>;

    async fn list_users(&self, page: u32, limit: u32) -> Result<Page<UserProfile>, ApiError>;

    async fn update_profile(
        &self,
        id: &str,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ApiError>;
}

#[async_trait]
pub trait TeamApi: Send + Sync {
    async fn members(&self, team_id: &str) -> Result<Vec<TeamMember>, ApiError>;

    async fn invitations(&self, team_id: &str) -> Result<Vec<Invitation>, ApiError>;

    async fn invite(&self, team_id: &str, email: &str, role: Role) -> Result<Invitation, ApiError>;
}

#[async_trait]
pub trait PaymentApi: Send + Sync {
    async fn payment_history(&self, page: u32, limit: u32) -> Result<Page<Payment>, ApiError>;

    async fn subscription(&self) -> Result<Subscription, ApiError>;
}

#[async_trait]
pub trait CompanyApi: Send + Sync {
    async fn list_companies(&self, page: u32, limit: u32) -> Result<Page<Company>, ApiError>;

    async fn get_company(&self, id: &str) -> Result<Company, ApiError>;

    async fn update_company(&self, id: &str, update: CompanyUpdate) -> Result<Company, ApiError>;
}

#[async_trait]
pub trait NotificationApi: Send + Sync {
    async fn unread(&self, user_id: &str) -> Result<Vec<Notification>, ApiError>;

    /// Marks one notification read. Returns the remaining unread count,
    /// decremented atomically by the backend.
    async fn mark_read(&self, user_id: &str, id: &str) -> Result<u64, ApiError>;
}

/// FAQs and knowledge base articles.
#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn faqs(&self) -> Result<Vec<Faq>, ApiError>;

    async fn faq(&self, id: &str) -> Result<Faq, ApiError>;

    async fn articles(&self, category: &str) -> Result<Vec<Article>, ApiError>;

    async fn upsert_faq(&self, faq: Faq) -> Result<Faq, ApiError>;
}

/// Support tickets as seen by the user who opened them.
#[async_trait]
pub trait TicketApi: Send + Sync {
    async fn tickets_for_user(&self, user_id: &str) -> Result<Vec<Ticket>, ApiError>;

    async fn ticket(&self, id: &str) -> Result<Ticket, ApiError>;

    async fn open_ticket(&self, user_id: &str, subject: &str) -> Result<Ticket, ApiError>;
}
