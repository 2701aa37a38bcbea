use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Config, DatabaseSettings, LoggingSettings, ReportSettings, ServerSettings};

/// Prefix of environment variables that override file settings,
/// e.g. `AGRIMARKET__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "AGRIMARKET";

/// Loads the application configuration.
///
/// Sources, later ones winning: built-in defaults, the TOML file at `path`
/// (optional), `AGRIMARKET__*` environment variables, and finally
/// `DATABASE_URL`. A `.env` file in the working directory is read first.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    build_config(path, std::env::var("DATABASE_URL").ok())
}

fn build_config(path: &Path, database_url: Option<String>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("database.url", "")?
        .set_default("database.max_connections", 10_i64)?
        .set_default("database.acquire_timeout_secs", 5_i64)?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000_i64)?
        .set_default("reports.top_products_limit", 20_i64)?
        .set_default("logging.level", "info")?
        .set_default("logging.file_prefix", "agrimarket.log")?
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.build()?.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
