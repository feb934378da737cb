//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! arukay user create -n "Ana" -e ana@example.com -b 2000-06-15
//! ```
//!
//! Goes through the same service as `POST /users`, so duplicate emails and
//! invalid names are rejected the same way.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use arukay_api::clock::SystemClock;
use arukay_api::db::PgUserStore;
use arukay_api::services::{CreateUser, UserError, UserService};
use arukay_core::UserId;

use super::CommandError;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserCommandError {
    #[error(transparent)]
    Connect(#[from] CommandError),

    #[error(transparent)]
    User(#[from] UserError),
}

/// Create a new user.
///
/// # Returns
///
/// The ID of the created user.
///
/// # Errors
///
/// Returns an error if the database is unreachable, the input is invalid, or
/// the email is already registered.
pub async fn create(
    name: String,
    email: String,
    birth_date: NaiveDate,
) -> Result<UserId, UserCommandError> {
    let pool = super::connect().await?;
    let service = UserService::new(Arc::new(PgUserStore::new(pool)), Arc::new(SystemClock));

    let created = service
        .create(CreateUser {
            name,
            email,
            birth_date,
        })
        .await?;

    tracing::info!(
        "User created successfully! ID: {}, Email: {}, Age: {}",
        created.user.id,
        created.user.email,
        created.age
    );

    Ok(created.user.id)
}
