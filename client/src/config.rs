//! Configuration management for the marketplace client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with NYUMBA_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main client configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Backend API configuration
    pub api: ApiConfig,

    /// Placeholder media used when records or fetches come back empty
    pub media: MediaConfig,

    /// Filter-screen behavior
    pub filters: FilterConfig,

    /// Session persistence
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the marketplace REST backend
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MediaConfig {
    /// Pool of placeholder images, selected by list index modulo pool size
    pub placeholder_images: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FilterConfig {
    /// Debounce interval for live filter-count requests
    pub count_debounce_ms: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Path of the persisted token file
    pub token_path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment =
            std::env::var("NYUMBA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000/api")?
            .set_default("api.timeout_seconds", 30)?
            .set_default("media.placeholder_images", default_placeholder_images())?
            .set_default("filters.count_debounce_ms", 500)?
            .set_default("session.token_path", ".nyumba/session.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (NYUMBA_ prefix)
            .add_source(
                Environment::with_prefix("NYUMBA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api: ApiConfig {
                base_url: "http://localhost:8000/api".to_string(),
                timeout_seconds: 30,
            },
            media: MediaConfig {
                placeholder_images: default_placeholder_images(),
            },
            filters: FilterConfig {
                count_debounce_ms: 500,
            },
            session: SessionConfig {
                token_path: ".nyumba/session.json".to_string(),
            },
        }
    }
}

fn default_placeholder_images() -> Vec<String> {
    (1..=5)
        .map(|n| format!("assets/placeholders/property-{}.jpg", n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.filters.count_debounce_ms, 500);
        assert_eq!(config.media.placeholder_images.len(), 5);
        assert!(config.api.base_url.starts_with("http"));
    }
}
