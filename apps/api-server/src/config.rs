//! Application configuration loaded from environment variables.

use std::env;

use board_infra::database::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` when `DATABASE_URL` is unset; posts are then kept in memory.
    pub database: Option<DatabaseConfig>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let database = var("DATABASE_URL").map(|url| {
            let mut config = DatabaseConfig::new(url);
            if let Some(max) = var("DB_MAX_CONNECTIONS").and_then(|s| s.parse().ok()) {
                config.max_connections = max;
            }
            if let Some(min) = var("DB_MIN_CONNECTIONS").and_then(|s| s.parse().ok()) {
                config.min_connections = min;
            }
            config
        });

        let telemetry = TelemetryConfig {
            json_logs: var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
            service_name: var("SERVICE_NAME").unwrap_or_else(|| "board-api".to_string()),
        };

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            database,
            telemetry,
        }
    }
}
