//! Application configuration loaded from environment variables.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub scheduler_enabled: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// JWT and rate-limit settings are read by their services directly
    /// (`JWT_SECRET`, `JWT_EXPIRATION_HOURS`, `JWT_ISSUER`,
    /// `RATE_LIMIT_MAX_REQUESTS`, `RATE_LIMIT_WINDOW_SECS`).
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            scheduler_enabled: env::var("SCHEDULER_ENABLED")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
