use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub reports: ReportSettings,
    pub logging: LoggingSettings,
}

/// Connection settings for the marketplace database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// PostgreSQL connection string. `DATABASE_URL` takes precedence.
    pub url: String,
    pub max_connections: u32,
    /// How long a request waits for a pooled connection before failing.
    pub acquire_timeout_secs: u64,
}

impl DatabaseSettings {
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` as given. The host may be a name; it is resolved when the
    /// server binds, so commands that never listen do not depend on DNS.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// How many best-selling products each period contributes to a product
    /// comparison.
    pub top_products_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive, e.g. `info` or `database=debug,info`.
    /// `RUST_LOG` overrides it.
    pub level: String,
    /// When set, logs are also written to daily-rotated files in this directory.
    pub directory: Option<PathBuf>,
    pub file_prefix: String,
}

impl Config {
    /// Rejects settings that would make every request fail.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reports.top_products_limit == 0 {
            return Err(ConfigError::ValidationError(
                "reports.top_products_limit must be at least 1".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::ValidationError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
