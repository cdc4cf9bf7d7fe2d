//! Domain data hooks.
//!
//! Every hooks struct holds the shared [`CacheContext`] and the data source
//! for its domain. Query methods return an idle [`AsyncData`] bound to the
//! registry key for the request; call `load()` to populate it. Mutation
//! methods write through the data source and then invalidate the keys the
//! write made stale.
//!
//! Invalidation removes entries but does not notify handles already holding
//! data. Callers pair a mutation with `refresh()` on the handles they show.

mod admin;
mod companies;
mod content;
mod notifications;
mod payments;
mod team;
mod tickets;
mod users;

pub use admin::AdminHooks;
pub use companies::CompanyHooks;
pub use content::ContentHooks;
pub use notifications::NotificationHooks;
pub use payments::PaymentHooks;
pub use team::TeamHooks;
pub use tickets::TicketHooks;
pub use users::UserHooks;

use std::future::Future;
use std::sync::Arc;

use tessera_cache::{AsyncData, CacheContext, FetchOptions};
use tessera_core::CacheKeyDescriptor;

use crate::api::{
    AdminApi, CompanyApi, ContentApi, NotificationApi, PaymentApi, TeamApi, TicketApi, UserApi,
};

/// Binds a registry descriptor and a producer to a new handle.
pub(crate) fn bind<T, F, Fut>(
    ctx: &CacheContext,
    descriptor: CacheKeyDescriptor,
    options: FetchOptions,
    producer: F,
) -> AsyncData<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
{
    AsyncData::new(ctx.clone(), descriptor, producer, options)
}

/// Every domain's hooks over one backend.
pub struct Hooks {
    pub admin: AdminHooks,
    pub users: UserHooks,
    pub team: TeamHooks,
    pub payments: PaymentHooks,
    pub companies: CompanyHooks,
    pub notifications: NotificationHooks,
    pub content: ContentHooks,
    pub tickets: TicketHooks,
}

impl Hooks {
    /// Wires every domain to `backend` for the signed-in `user_id` and
    /// their `team_id`.
    pub fn new<B>(ctx: CacheContext, backend: Arc<B>, user_id: &str, team_id: &str) -> Self
    where
        B: AdminApi
            + UserApi
            + TeamApi
            + PaymentApi
            + CompanyApi
            + NotificationApi
            + ContentApi
            + TicketApi
            + 'static,
    {
        Self {
            admin: AdminHooks::new(ctx.clone(), backend.clone()),
            users: UserHooks::new(ctx.clone(), backend.clone()),
            team: TeamHooks::new(ctx.clone(), backend.clone(), team_id),
            payments: PaymentHooks::new(ctx.clone(), backend.clone()),
            companies: CompanyHooks::new(ctx.clone(), backend.clone()),
            notifications: NotificationHooks::new(ctx.clone(), backend.clone(), user_id),
            content: ContentHooks::new(ctx.clone(), backend.clone()),
            tickets: TicketHooks::new(ctx, backend, user_id),
        }
    }
}
