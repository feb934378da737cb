//! CLI subcommands.

pub mod generators;
pub mod migrate;
pub mod user;

use sqlx::PgPool;
use thiserror::Error;

use arukay_api::config::{ApiConfig, ConfigError};
use arukay_api::db;

/// Errors shared by the database-backed commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No database URL in the environment.
    #[error("Missing environment variable: ARUKAY_DATABASE_URL (or DATABASE_URL)")]
    MissingDatabaseUrl,

    /// Environment present but unparseable.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Load configuration and connect to the configured database.
async fn connect() -> Result<PgPool, CommandError> {
    let config = ApiConfig::from_env()?;
    let database_url = config
        .database_url
        .ok_or(CommandError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to database...");
    Ok(db::create_pool(&database_url).await?)
}
