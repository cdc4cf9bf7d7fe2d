//! Support tickets from the requester's side.

use std::sync::Arc;
use tracing::info;

use tessera_cache::{AsyncData, CacheContext, FetchOptions};
use tessera_core::registry::{admin, tickets};

use super::bind;
use crate::api::TicketApi;
use crate::error::ApiError;
use crate::models::Ticket;

pub struct TicketHooks {
    ctx: CacheContext,
    api: Arc<dyn TicketApi>,
    user_id: String,
}

impl TicketHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn TicketApi>, user_id: &str) -> Self {
        Self {
            ctx,
            api,
            user_id: user_id.to_string(),
        }
    }

    /// Tickets opened by the signed-in user.
    pub fn mine(&self) -> AsyncData<Vec<Ticket>> {
        let api = Arc::clone(&self.api);
        let user_id = self.user_id.clone();

        bind(
            &self.ctx,
            tickets::by_user(&self.user_id),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                let user_id = user_id.clone();
                async move { api.tickets_for_user(&user_id).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub fn ticket(&self, id: &str) -> AsyncData<Ticket> {
        let id = id.to_string();
        let api = Arc::clone(&self.api);

        bind(&self.ctx, tickets::detail(&id), FetchOptions::default(), move || {
            let api = Arc::clone(&api);
            let id = id.clone();
            async move { api.ticket(&id).await.map_err(anyhow::Error::from) }
        })
    }

    /// Opens a ticket. The requester's list and the admin queue go stale.
    pub async fn open_ticket(&self, subject: &str) -> Result<Ticket, ApiError> {
        let ticket = self.api.open_ticket(&self.user_id, subject).await?;

        let mut result = self
            .ctx
            .invalidate_cache_keys(tickets::by_user(&self.user_id).key)
            .await;
        result.merge(self.ctx.invalidate_cache_keys(admin::TICKETS).await);
        result.merge(self.ctx.invalidate_cache_keys(admin::ANALYTICS).await);

        info!(ticket = %ticket.id, invalidated = result.count, "Ticket opened");
        Ok(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::InMemoryBackend;
    use crate::models::{Page, TicketStatus};
    use tessera_cache::CacheConfig;

    #[tokio::test]
    async fn test_open_ticket_invalidates_requester_and_admin_views() {
        let backend = Arc::new(InMemoryBackend::seeded());
        let ctx = CacheContext::in_memory(&CacheConfig::default());
        let hooks = TicketHooks::new(ctx.clone(), backend.clone(), "u-2");
        ctx.set(admin::tickets(1, 10).key, Page::of(&[0u8], 1, 10), None)
            .await;

        let mine = hooks.mine();
        mine.load().await;
        let before = mine.data().unwrap().len();

        let ticket = hooks.open_ticket("Cannot submit step 3").await.unwrap();
        assert_eq!(ticket.status, TicketStatus::Open);
        assert!(ctx.get::<Page<u8>>(&admin::tickets(1, 10).key).await.is_none());

        mine.load().await;
        assert_eq!(mine.data().unwrap().len(), before + 1);
        assert_eq!(backend.calls("tickets_for_user"), 2);
    }
}
