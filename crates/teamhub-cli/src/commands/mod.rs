//! CLI command definitions and dispatch.

pub mod bootstrap;
pub mod file;
pub mod migrate;
pub mod report;
pub mod user;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::output::OutputFormat;
use teamhub_core::config::AppConfig;
use teamhub_core::error::AppError;
use teamhub_database::{DatabasePool, EntityStore, PgEntityStore};
use teamhub_service::TeamHub;

/// TeamHub: team file sharing and contribution dashboard
#[derive(Debug, Parser)]
#[command(name = "teamhub", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded from `config/<env>.toml`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Apply migrations and create the default project
    Bootstrap,
    /// User management
    User(user::UserArgs),
    /// Files and version history
    File(file::FileArgs),
    /// Dashboard headline statistics
    Stats,
    /// Weighted contribution ranking
    Contributions,
    /// Per-day file and comment activity
    Activity(report::ActivityArgs),
    /// Most recent activity feed entries
    Feed(report::FeedArgs),
    /// Project members with their contribution figures
    Team(report::TeamArgs),
}

impl Cli {
    /// Load configuration for the selected environment.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config, &self.env)
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Bootstrap => bootstrap::execute(config, self.format).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::File(args) => file::execute(args, config, self.format).await,
            Commands::Stats => report::stats(config, self.format).await,
            Commands::Contributions => report::contributions(config, self.format).await,
            Commands::Activity(args) => report::activity(args, config, self.format).await,
            Commands::Feed(args) => report::feed(args, config, self.format).await,
            Commands::Team(args) => report::team(args, config, self.format).await,
        }
    }
}

/// Helper: connect to PostgreSQL and wire every service.
pub async fn connect_hub(config: AppConfig) -> Result<TeamHub, AppError> {
    let db = DatabasePool::connect(&config.database).await?;
    let store: Arc<dyn EntityStore> = Arc::new(PgEntityStore::new(&db));
    let content = teamhub_storage::build_content_store(&config.storage).await?;
    info!(provider = content.provider_type(), "Content store ready");
    TeamHub::bootstrap(store, content, config).await
}
