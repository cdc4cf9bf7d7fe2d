//! FAQ and knowledge base hooks.

use std::sync::Arc;
use tracing::info;

use tessera_cache::{AsyncData, CacheContext, FetchOptions};
use tessera_core::registry::{faqs, knowledge_base};

use super::bind;
use crate::api::ContentApi;
use crate::error::ApiError;
use crate::models::{Article, Faq};

pub struct ContentHooks {
    ctx: CacheContext,
    api: Arc<dyn ContentApi>,
}

impl ContentHooks {
    pub fn new(ctx: CacheContext, api: Arc<dyn ContentApi>) -> Self {
        Self { ctx, api }
    }

    pub fn faqs(&self) -> AsyncData<Vec<Faq>> {
        let api = Arc::clone(&self.api);
        bind(&self.ctx, faqs::list(), FetchOptions::default(), move || {
            let api = Arc::clone(&api);
            async move { api.faqs().await.map_err(anyhow::Error::from) }
        })
    }

    pub fn faq(&self, id: &str) -> AsyncData<Faq> {
        let id = id.to_string();
        let api = Arc::clone(&self.api);

        bind(&self.ctx, faqs::detail(&id), FetchOptions::default(), move || {
            let api = Arc::clone(&api);
            let id = id.clone();
            async move { api.faq(&id).await.map_err(anyhow::Error::from) }
        })
    }

    pub fn articles(&self, category: &str) -> AsyncData<Vec<Article>> {
        let category = category.to_string();
        let api = Arc::clone(&self.api);

        bind(
            &self.ctx,
            knowledge_base::articles(&category),
            FetchOptions::default(),
            move || {
                let api = Arc::clone(&api);
                let category = category.clone();
                async move { api.articles(&category).await.map_err(anyhow::Error::from) }
            },
        )
    }

    /// Creates or replaces a FAQ. Every cached FAQ view is dropped.
    pub async fn upsert_faq(&self, faq: Faq) -> Result<Faq, ApiError> {
        let saved = self.api.upsert_faq(faq).await?;
        let result = self.ctx.invalidate_cache_keys(faqs::ALL).await;

        info!(faq = %saved.id, invalidated = result.count, "FAQ saved");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::InMemoryBackend;
    use tessera_cache::CacheConfig;

    #[tokio::test]
    async fn test_upsert_faq_drops_faq_views_only() {
        let backend = Arc::new(InMemoryBackend::seeded());
        let ctx = CacheContext::in_memory(&CacheConfig::default());
        let hooks = ContentHooks::new(ctx.clone(), backend.clone());

        let list = hooks.faqs();
        list.load().await;
        hooks.faq("f-1").load().await;
        hooks.articles("privacy").load().await;

        hooks
            .upsert_faq(Faq {
                id: "f-3".into(),
                category: "billing".into(),
                question: "Can I pay yearly?".into(),
                answer: "Yes.".into(),
            })
            .await
            .unwrap();

        assert!(ctx.get::<Faq>(&faqs::detail("f-1").key).await.is_none());
        assert!(
            ctx.get::<Vec<Article>>(&knowledge_base::articles("privacy").key)
                .await
                .is_some()
        );

        list.refresh().await;
        assert_eq!(list.data().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let backend = Arc::new(InMemoryBackend::seeded());
        let ctx = CacheContext::in_memory(&CacheConfig::default());
        let hooks = ContentHooks::new(ctx, backend);

        let err = hooks
            .upsert_faq(Faq {
                id: "f-9".into(),
                category: "misc".into(),
                question: "  ".into(),
                answer: String::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidArgument(_)));
    }
}
