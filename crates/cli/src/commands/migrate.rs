//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! arukay migrate
//! ```
//!
//! # Environment Variables
//!
//! - `ARUKAY_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! Migrations are embedded from `crates/api/migrations/`.

use thiserror::Error;

use arukay_api::db;

use super::CommandError;

/// Errors that can occur while migrating.
#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Connect(#[from] CommandError),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run() -> Result<(), MigrationError> {
    let pool = super::connect().await?;
    db::run_migrations(&pool).await?;
    Ok(())
}
