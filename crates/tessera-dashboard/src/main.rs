//! Tessera Dashboard demo binary.
//!
//! Runs the admin ticket flow against the in-memory backend and prints the
//! resulting cache metrics.

use std::sync::Arc;

use tessera_cache::{CacheContext, SweepScheduler};
use tessera_dashboard::models::TicketStatus;
use tessera_dashboard::telemetry::{init_logging, init_metrics};
use tessera_dashboard::{Hooks, InMemoryBackend, Settings};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    init_logging(&settings.logging);
    let metrics = init_metrics()?;

    info!("Starting Tessera Dashboard v{}", env!("CARGO_PKG_VERSION"));
    info!(
        enabled = settings.cache.enabled,
        ttl_seconds = settings.cache.ttl_seconds,
        max_capacity = settings.cache.max_capacity,
        "Cache configured"
    );

    let cache = CacheContext::in_memory(&settings.cache);
    let _sweeper =
        SweepScheduler::from_config(cache.clone(), &settings.cache).map(SweepScheduler::start);

    let backend = Arc::new(InMemoryBackend::seeded());
    let hooks = Hooks::new(cache.clone(), backend.clone(), "u-1", "team-1");

    // First load: MISS, calls the backend
    let queue = hooks.admin.tickets(1, 10);
    queue.load().await;
    if let Some(page) = queue.data() {
        info!(tickets = page.items.len(), total = page.total, "Ticket queue loaded");
    }

    // Second consumer of the same key: HIT
    let sidebar = hooks.admin.tickets(1, 10);
    sidebar.load().await;

    let profile = hooks.users.current_profile();
    let analytics = hooks.admin.analytics();
    tokio::join!(profile.load(), analytics.load());

    hooks
        .admin
        .update_ticket_status("t-1", TicketStatus::Resolved)
        .await?;
    queue.refresh().await;

    if let Some(page) = queue.data() {
        if let Some(first) = page.items.first() {
            println!("{}", serde_json::to_string_pretty(first)?);
        }
    }
    if let Some(err) = analytics.error() {
        info!(error = %err, "Analytics unavailable");
    }

    info!(
        backend_calls = backend.total_calls(),
        list_tickets = backend.calls("list_tickets"),
        entries = cache.store().entry_count(),
        "Demo finished"
    );

    println!("{}", metrics.render());
    Ok(())
}
