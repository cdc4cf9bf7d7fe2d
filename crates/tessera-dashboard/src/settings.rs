//! Application settings.
//!
//! Loaded from `config/default`, `config/local` (both optional) and
//! `TESSERA__*` environment variables, later sources winning:
//!
//! ```text
//! TESSERA__CACHE__ENABLED=false
//! TESSERA__CACHE__TTL_SECONDS=300
//! TESSERA__LOGGING__FORMAT=json
//! ```

use serde::Deserialize;
use tessera_cache::CacheConfig;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub cache: CacheConfig,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter when `RUST_LOG` is not set.
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::builder().build()?.try_deserialize()
    }

    fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("TESSERA")
                    .separator("__")
                    .try_parsing(true),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();

        assert!(settings.cache.enabled);
        assert_eq!(settings.cache.ttl_seconds, 900);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = parse(
            r#"
            [cache]
            enabled = false

            [logging]
            format = "json"
            "#,
        );

        assert!(!settings.cache.enabled);
        assert_eq!(settings.cache.max_capacity, 10_000);
        assert_eq!(settings.cache.sweep_interval_seconds, 60);
        assert_eq!(settings.logging.format, LogFormat::Json);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_empty_source_is_default() {
        let settings = parse("");
        assert!(settings.cache.enabled);
        assert_eq!(settings.cache.ttl_seconds, 900);
    }
}
