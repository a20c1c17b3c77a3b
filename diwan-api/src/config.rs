use diwan_config::Config;
use diwan_config::shared::{DatabaseConfig, SentryConfig};
use serde::Deserialize;

/// Complete configuration for the diwan API service.
///
/// Contains all settings required to run the API including the content
/// database, server settings, and optional monitoring.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Content database settings.
    pub database: DatabaseConfig,
    /// Application server settings.
    pub application: ApplicationSettings,
    /// Optional Sentry configuration for error tracking.
    pub sentry: Option<SentryConfig>,
}

impl Config for ApiConfig {
    const LIST_PARSE_KEYS: &'static [&'static str] = &[];
}

/// HTTP server configuration settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationSettings {
    /// Host address the API listens on.
    pub host: String,
    /// Port number the API listens on.
    pub port: u16,
}
