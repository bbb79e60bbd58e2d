//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod accounts;
pub mod database;
pub mod logging;
pub mod stats;
pub mod storage;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::accounts::{AccountsConfig, ProjectsConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::stats::{ActivityWindow, StatsConfig};
pub use self::storage::{LocalStorageConfig, StorageConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Content storage settings.
    #[serde(default)]
    #[validate(nested)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Aggregation and feed settings.
    #[serde(default)]
    #[validate(nested)]
    pub stats: StatsConfig,
    /// Default project settings.
    #[serde(default)]
    pub projects: ProjectsConfig,
    /// Account defaults applied at registration.
    #[serde(default)]
    pub accounts: AccountsConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default`, the `config/{env}` overlay, and environment
    /// variables prefixed with `TEAMHUB__` (double underscore separates
    /// nested keys, e.g. `TEAMHUB__STATS__WINDOW_DAYS=14`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration starting from an explicit base file.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("TEAMHUB")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        app.validate()?;
        Ok(app)
    }
}
