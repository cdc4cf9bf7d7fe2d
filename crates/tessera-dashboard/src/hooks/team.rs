//! Team hooks.

use std::sync::Arc;
use tracing::info;

use tessera_cache::{AsyncData, CacheContext, FetchOptions};
use tessera_core::registry::team;

use super::bind;
use crate::api::TeamApi;
use crate::error::ApiError;
use crate::models::{Invitation, Role, TeamMember};

/// Hooks for the signed-in user's team.
pub struct TeamHooks {
    ctx: CacheContext,
    api: Arc<dyn TeamApi>,
    team_id: String,
}

impl TeamHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn TeamApi>, team_id: &str) -> Self {
        Self {
            ctx,
            api,
            team_id: team_id.to_string(),
        }
    }

    pub fn members(&self) -> AsyncData<Vec<TeamMember>> {
        let api = Arc::clone(&self.api);
        let team_id = self.team_id.clone();

        bind(
            &self.ctx,
            team::members(&self.team_id),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                let team_id = team_id.clone();
                async move { api.members(&team_id).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub fn invitations(&self) -> AsyncData<Vec<Invitation>> {
        let api = Arc::clone(&self.api);
        let team_id = self.team_id.clone();

        bind(
            &self.ctx,
            team::invitations(&self.team_id),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                let team_id = team_id.clone();
                async move { api.invitations(&team_id).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub async fn invite_member(&self, email: &str, role: Role) -> Result<Invitation, ApiError> {
        let invitation = self.api.invite(&self.team_id, email, role).await?;

        let result = self
            .ctx
            .invalidate_cache_keys(team::invitations(&self.team_id).key)
            .await;

        info!(team = %self.team_id, invalidated = result.count, "Member invited");
        Ok(invitation)
    }
}
