//! User profile hooks.

use std::sync::Arc;
use tracing::info;

use tessera_cache::{AsyncData, CacheContext, FetchOptions};
use tessera_core::registry::users;

use super::bind;
use crate::api::UserApi;
use crate::error::ApiError;
use crate::models::{Page, ProfileUpdate, UserProfile};

pub struct UserHooks {
    ctx: CacheContext,
    api: Arc<dyn UserApi>,
}

impl UserHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn UserApi>) -> Self {
        Self { ctx, api }
    }

    /// Signed-in user's profile. Cached for the session.
    pub fn current_profile(&self) -> AsyncData<UserProfile> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            users::current_profile(),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.current_user().await.map_err(anyhow::Error::from) }
            },
        )
    }

    /// Disabled until an id is selected.
    pub fn user(&self, id: Option<&str>) -> AsyncData<UserProfile> {
        let id = id.unwrap_or_default().to_string();
        let options = FetchOptions::default().enabled(!id.is_empty());
        let api = Arc::clone(&self.api);

        bind(&self.ctx, users::profile(&id), options, move || {
            let api = Arc::clone(&api);
            let id = id.clone();
            async move { api.get_user(&id).await.map_err(anyhow::Error::from) }
        })
    }

    pub fn users(&self, page: u32, limit: u32) -> AsyncData<Page<UserProfile>> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            users::list(page, limit),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.list_users(page, limit).await.map_err(anyhow::Error::from) }
            },
        )
    }

    /// Updates a profile. Both the per-id and the "current" profile entries
    /// are dropped, plus every cached user list.
    pub async fn update_profile(
        &self,
        user_id: &str,
        update: ProfileUpdate,
    ) -> Result<UserProfile, ApiError> {
        let profile = self.api.update_profile(user_id, update).await?;

        let mut result = self.ctx.invalidate_cache_keys(users::PROFILE).await;
        result.merge(self.ctx.invalidate_cache_keys(users::LIST).await);

        info!(user = %user_id, invalidated = result.count, "Profile updated");
        Ok(profile)
    }
}
