//! User storage.
//!
//! # Backends
//!
//! - [`PgUserStore`] - `PostgreSQL` table `users`, used whenever a database URL
//!   is configured
//! - [`InMemoryUserStore`] - process-local map for development and tests
//!
//! Both implement [`UserStore`] and enforce the same rules: ids are assigned
//! on insert, emails are unique, and listing is ordered by id.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/api/migrations/` and run via:
//! ```bash
//! cargo run -p arukay-cli -- migrate
//! ```
//! or on startup with `ARUKAY_AUTO_MIGRATE=true`.

pub mod memory;
pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use arukay_core::{Email, UserId};

use crate::models::{NewUser, User};

pub use memory::InMemoryUserStore;
pub use users::PgUserStore;

/// Embedded migrations for the `users` table.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Persistence for users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by exact email.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Store a new user, assigning its id and creation time.
    ///
    /// Returns `RepositoryError::Conflict` if the email is already taken.
    async fn insert(&self, new_user: &NewUser) -> Result<User, RepositoryError>;

    /// All users ordered by id.
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;

    /// Remove a user. Returns `false` if no such id existed.
    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply any pending migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the history is inconsistent.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
