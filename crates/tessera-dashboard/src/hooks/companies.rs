//! Company hooks.

use std::sync::Arc;
use tracing::info;

use tessera_cache::{AsyncData, CacheContext, FetchOptions};
use tessera_core::registry::companies;

use super::bind;
use crate::api::CompanyApi;
use crate::error::ApiError;
use crate::models::{Company, CompanyUpdate, Page};

pub struct CompanyHooks {
    ctx: CacheContext,
    api: Arc<dyn CompanyApi>,
}

impl CompanyHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn CompanyApi>) -> Self {
        Self { ctx, api }
    }

    pub fn companies(&self, page: u32, limit: u32) -> AsyncData<Page<Company>> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            companies::list(page, limit),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.list_companies(page, limit).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub fn company(&self, id: &str) -> AsyncData<Company> {
        let id = id.to_string();
        let api = Arc::clone(&self.api);

        bind(
            &self.ctx,
            companies::detail(&id),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                let id = id.clone();
                async move { api.get_company(&id).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub async fn update_company(
        &self,
        id: &str,
        update: CompanyUpdate,
    ) -> Result<Company, ApiError> {
        let company = self.api.update_company(id, update).await?;

        let mut result = self.ctx.invalidate_cache_keys(companies::LIST).await;
        result.merge(self.ctx.invalidate_cache_keys(companies::detail(id).key).await);

        info!(company = %id, invalidated = result.count, "Company updated");
        Ok(company)
    }
}
