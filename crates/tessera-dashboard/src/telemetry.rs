//! Logging and metrics initialization.

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::settings::{LogFormat, LoggingSettings};

/// Installs the global tracing subscriber. `RUST_LOG` overrides the
/// configured level.
pub fn init_logging(settings: &LoggingSettings) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    match settings.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json())
                .init();
        },
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true))
                .init();
        },
    }

    info!("Logging initialized with level: {}", settings.level);
}

/// Installs the Prometheus recorder and returns the handle used to render it.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new()
        .set_buckets(&[
            0.00001, // 10 microsegundos
            0.0001,  // 100 microsegundos
            0.001,   // 1 milisegundo
            0.01,    // 10 milisegundos
            0.1,     // 100 milisegundos
            1.0,     // 1 segundo
        ])?
        .install_recorder()?;

    tessera_cache::metrics::register_cache_metrics();
    info!("Metrics system initialized");
    Ok(handle)
}
