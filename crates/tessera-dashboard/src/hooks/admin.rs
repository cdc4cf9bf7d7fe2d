//! Admin panel hooks.

use std::sync::Arc;
use tracing::info;

use tessera_cache::{AsyncData, CacheContext, FetchOptions, InvalidationResult};
use tessera_core::registry::{admin, tickets};

use super::bind;
use crate::api::AdminApi;
use crate::error::ApiError;
use crate::models::{Analytics, Entry, Page, Revision, Ticket, TicketStatus};

pub struct AdminHooks {
    ctx: CacheContext,
    api: Arc<dyn AdminApi>,
}

impl AdminHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn AdminApi>) -> Self {
        Self { ctx, api }
    }

    /// Paginated support queue.
    pub fn tickets(&self, page: u32, limit: u32) -> AsyncData<Page<Ticket>> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            admin::tickets(page, limit),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.list_tickets(page, limit).await.map_err(anyhow::Error::from) }
            },
        )
    }

    /// Disabled until an id is selected.
    pub fn ticket(&self, id: Option<&str>) -> AsyncData<Ticket> {
        let id = id.unwrap_or_default().to_string();
        let options = FetchOptions::default().enabled(!id.is_empty());
        let api = Arc::clone(&self.api);

        bind(&self.ctx, admin::ticket(&id), options, move || {
            let api = Arc::clone(&api);
            let id = id.clone();
            async move { api.get_ticket(&id).await.map_err(anyhow::Error::from) }
        })
    }

    pub fn entries(&self, page: u32, limit: u32) -> AsyncData<Page<Entry>> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            admin::entries(page, limit),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.list_entries(page, limit).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub fn entry_revisions(&self, entry_id: &str) -> AsyncData<Vec<Revision>> {
        let entry_id = entry_id.to_string();
        let api = Arc::clone(&self.api);

        bind(
            &self.ctx,
            admin::revisions(&entry_id),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                let entry_id = entry_id.clone();
                async move { api.list_revisions(&entry_id).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub fn analytics(&self) -> AsyncData<Analytics> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            admin::analytics(),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.analytics().await.map_err(anyhow::Error::from) }
            },
        )
    }

    /// Changes a ticket's status and drops every cached view of tickets.
    pub async fn update_ticket_status(
        &self,
        id: &str,
        status: TicketStatus,
    ) -> Result<Ticket, ApiError> {
        let ticket = self.api.set_ticket_status(id, status).await?;

        let mut result = self.ctx.invalidate_cache_keys(admin::TICKETS).await;
        result.merge(self.ctx.invalidate_cache_keys(admin::ticket(id).key).await);
        result.merge(self.ctx.invalidate_cache_keys(tickets::ALL).await);
        result.merge(self.ctx.invalidate_cache_keys(admin::ANALYTICS).await);

        info!(ticket = %id, ?status, invalidated = result.count, "Ticket status updated");
        Ok(ticket)
    }

    /// Activates a revision, archiving the current one.
    pub async fn swap_revision(
        &self,
        entry_id: &str,
        revision_id: &str,
    ) -> Result<Entry, ApiError> {
        let entry = self.api.swap_revision(entry_id, revision_id).await?;

        let mut result = self.ctx.invalidate_cache_keys(admin::ENTRIES).await;
        result.merge(
            self.ctx
                .invalidate_cache_keys(admin::revisions(entry_id).key)
                .await,
        );

        info!(
            entry = %entry_id,
            revision = %revision_id,
            invalidated = result.count,
            "Revision swapped"
        );
        Ok(entry)
    }

    /// Removes expired entries from the whole cache.
    pub async fn clear_expired_cache(&self) -> usize {
        self.ctx.cleanup_expired().await
    }

    /// Drops every cached admin view.
    pub async fn invalidate_all(&self) -> InvalidationResult {
        self.ctx.invalidate_cache_keys(admin::ALL).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::InMemoryBackend;
    use tessera_cache::CacheConfig;

    fn hooks() -> (AdminHooks, Arc<InMemoryBackend>, CacheContext) {
        let backend = Arc::new(InMemoryBackend::seeded());
        let ctx = CacheContext::in_memory(&CacheConfig::default());
        (AdminHooks::new(ctx.clone(), backend.clone()), backend, ctx)
    }

    #[tokio::test]
    async fn test_ticket_without_id_is_disabled() {
        let (hooks, backend, _ctx) = hooks();

        let ticket = hooks.ticket(None);
        ticket.load().await;

        assert!(ticket.data().is_none());
        assert!(!ticket.is_loading());
        assert_eq!(backend.calls("get_ticket"), 0);
    }

    #[tokio::test]
    async fn test_update_status_invalidates_ticket_views() {
        let (hooks, backend, ctx) = hooks();

        let list = hooks.tickets(1, 10);
        list.load().await;
        let detail = hooks.ticket(Some("t-1"));
        detail.load().await;
        hooks.analytics().load().await;

        hooks
            .update_ticket_status("t-1", TicketStatus::Resolved)
            .await
            .unwrap();

        assert!(ctx.get::<Page<Ticket>>(&admin::tickets(1, 10).key).await.is_none());
        assert!(ctx.get::<Ticket>(&admin::ticket("t-1").key).await.is_none());
        assert!(ctx.get::<Analytics>(&admin::analytics().key).await.is_none());

        detail.refresh().await;
        let ticket = detail.data().unwrap();
        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(backend.calls("get_ticket"), 2);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let (hooks, _backend, ctx) = hooks();
        hooks.tickets(1, 10).load().await;

        let err = hooks
            .update_ticket_status("t-404", TicketStatus::Closed)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound { .. }));
        assert!(ctx.get::<Page<Ticket>>(&admin::tickets(1, 10).key).await.is_some());
    }

    #[tokio::test]
    async fn test_swap_revision_invalidates_entries_and_revisions() {
        let (hooks, _backend, ctx) = hooks();
        hooks.entries(1, 10).load().await;
        hooks.entry_revisions("e-1").load().await;
        hooks.analytics().load().await;

        hooks.swap_revision("e-1", "r-3").await.unwrap();

        assert!(ctx.get::<Page<Entry>>(&admin::entries(1, 10).key).await.is_none());
        assert!(ctx.get::<Vec<Revision>>(&admin::revisions("e-1").key).await.is_none());
        assert!(ctx.get::<Analytics>(&admin::analytics().key).await.is_some());

        let revisions = hooks.entry_revisions("e-1");
        revisions.load().await;
        let active: Vec<_> = revisions
            .data()
            .unwrap()
            .iter()
            .filter(|r| !r.archived)
            .map(|r| r.id.clone())
            .collect();
        assert_eq!(active, vec!["r-3".to_string()]);
    }

    #[tokio::test]
    async fn test_swap_revision_handles_glob_characters_in_ids() {
        let (hooks, backend, ctx) = hooks();
        backend.insert_entry(
            Entry {
                id: "e-[1]".into(),
                title: "Bracketed id".into(),
                active_revision: "r-10".into(),
            },
            [
                Revision {
                    id: "r-10".into(),
                    entry_id: "e-[1]".into(),
                    body: "Current".into(),
                    archived: false,
                },
                Revision {
                    id: "r-11".into(),
                    entry_id: "e-[1]".into(),
                    body: "Rewrite".into(),
                    archived: true,
                },
            ],
        );
        hooks.entry_revisions("e-[1]").load().await;
        hooks.entry_revisions("e-1").load().await;

        let result = hooks.swap_revision("e-[1]", "r-11").await.unwrap();

        assert_eq!(result.active_revision, "r-11");
        assert!(ctx.get::<Vec<Revision>>(&admin::revisions("e-[1]").key).await.is_none());
        // Structural match: sibling entries keep their history
        assert!(ctx.get::<Vec<Revision>>(&admin::revisions("e-1").key).await.is_some());
    }
}
