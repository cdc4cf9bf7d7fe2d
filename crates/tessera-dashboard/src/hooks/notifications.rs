//! Notification hooks for the signed-in user.

use std::sync::Arc;
use tracing::debug;

use tessera_cache::{AsyncData, CacheContext, FetchOptions};
use tessera_core::registry::notifications;

use super::bind;
use crate::api::NotificationApi;
use crate::error::ApiError;
use crate::models::Notification;

pub struct NotificationHooks {
    ctx: CacheContext,
    api: Arc<dyn NotificationApi>,
    user_id: String,
}

impl NotificationHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn NotificationApi>, user_id: &str) -> Self {
        Self {
            ctx,
            api,
            user_id: user_id.to_string(),
        }
    }

    pub fn unread(&self) -> AsyncData<Vec<Notification>> {
        let api = Arc::clone(&self.api);
        let user_id = self.user_id.clone();

        bind(
            &self.ctx,
            notifications::unread(&self.user_id),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                let user_id = user_id.clone();
                async move { api.unread(&user_id).await.map_err(anyhow::Error::from) }
            },
        )
    }

    /// Marks a notification read and returns the remaining unread count.
    pub async fn mark_read(&self, id: &str) -> Result<u64, ApiError> {
        let remaining = self.api.mark_read(&self.user_id, id).await?;

        let mut result = self
            .ctx
            .invalidate_cache_keys(notifications::unread(&self.user_id).key)
            .await;
        result.merge(
            self.ctx
                .invalidate_cache_keys(notifications::LIST.to_key().with(self.user_id.as_str()))
                .await,
        );

        debug!(notification = %id, remaining, invalidated = result.count, "Notification read");
        Ok(remaining)
    }
}
