//! Tessera Dashboard - cached domain data for the admin and team dashboards.
//!
//! Domain hooks ([`hooks`]) sit on top of the shared cache
//! ([`tessera_cache::CacheContext`]) and read through the data-source
//! traits in [`api`].

pub mod api;
pub mod error;
pub mod fixtures;
pub mod hooks;
pub mod models;
pub mod settings;
pub mod telemetry;

pub use error::ApiError;
pub use fixtures::InMemoryBackend;
pub use hooks::Hooks;
pub use settings::{LogFormat, LoggingSettings, Settings};
