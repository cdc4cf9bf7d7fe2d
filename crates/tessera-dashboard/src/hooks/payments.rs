//! Billing hooks. Read-only; payments are written by the billing provider.

use std::sync::Arc;

use tessera_cache::{AsyncData, CacheContext, FetchOptions, InvalidationResult};
use tessera_core::registry::payments;

use super::bind;
use crate::api::PaymentApi;
use crate::models::{Page, Payment, Subscription};

pub struct PaymentHooks {
    ctx: CacheContext,
    api: Arc<dyn PaymentApi>,
}

impl PaymentHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn PaymentApi>) -> Self {
        Self { ctx, api }
    }

    pub fn history(&self, page: u32, limit: u32) -> AsyncData<Page<Payment>> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            payments::history(page, limit),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.payment_history(page, limit).await.map_err(anyhow::Error::from) }
            },
        )
    }

    pub fn subscription(&self) -> AsyncData<Subscription> {
        let api = Arc::clone(&self.api);
        bind(
            &self.ctx,
            payments::subscription(),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                async move { api.subscription().await.map_err(anyhow::Error::from) }
            },
        )
    }

    /// Called after returning from checkout.
    pub async fn invalidate(&self) -> InvalidationResult {
        self.ctx.invalidate_cache_keys(payments::ALL).await
    }
}
