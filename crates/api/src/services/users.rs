//! User management: create, list, delete.
//!
//! Every user handed back to a caller carries an age computed from the
//! service clock at that moment. Nothing derived is written to the store.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::instrument;

use arukay_core::{Email, EmailError, UserId, UserName, UserNameError, age_on};

use crate::clock::Clock;
use crate::db::{RepositoryError, UserStore};
use crate::models::{NewUser, User, UserWithAge};

/// Errors from user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// Another user already has this email.
    #[error("email already registered")]
    EmailTaken,

    /// No user with the given id.
    #[error("user {0} not found")]
    NotFound(UserId),

    /// The store holds no users at all.
    #[error("no users found")]
    NoUsers,

    #[error("invalid name: {0}")]
    InvalidName(#[from] UserNameError),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Unvalidated input for creating a user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

/// User operations over a store and a clock.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    clock: Arc<dyn Clock>,
}

impl UserService {
    /// Create a service backed by `store`, computing ages against `clock`.
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Validate and store a new user.
    ///
    /// The email is checked for uniqueness before anything is written; a
    /// racing insert that slips past the check is still reported as
    /// [`UserError::EmailTaken`].
    ///
    /// # Errors
    ///
    /// - [`UserError::InvalidName`] / [`UserError::InvalidEmail`] for bad input
    /// - [`UserError::EmailTaken`] if the email exists
    /// - [`UserError::Repository`] if the store fails
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: CreateUser) -> Result<UserWithAge, UserError> {
        let new_user = NewUser {
            name: UserName::parse(&input.name)?,
            email: Email::parse(input.email.trim())?,
            birth_date: input.birth_date,
        };

        if self.store.find_by_email(&new_user.email).await?.is_some() {
            tracing::info!("Rejected duplicate email");
            return Err(UserError::EmailTaken);
        }

        let user = self.store.insert(&new_user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => UserError::EmailTaken,
            other => UserError::Repository(other),
        })?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(self.with_age(user))
    }

    /// All users, each with a freshly computed age.
    ///
    /// # Errors
    ///
    /// - [`UserError::NoUsers`] if the store is empty
    /// - [`UserError::Repository`] if the store fails
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<UserWithAge>, UserError> {
        let users = self.store.list().await?;
        if users.is_empty() {
            return Err(UserError::NoUsers);
        }

        let today = self.clock.today();
        Ok(users
            .into_iter()
            .map(|user| {
                let age = age_on(user.birth_date, today);
                UserWithAge { user, age }
            })
            .collect())
    }

    /// Remove a user by id.
    ///
    /// # Errors
    ///
    /// - [`UserError::NotFound`] if no such user exists
    /// - [`UserError::Repository`] if the store fails
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<(), UserError> {
        if !self.store.delete(id).await? {
            return Err(UserError::NotFound(id));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Check that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns the store error if it is not.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        self.store.ping().await
    }

    fn with_age(&self, user: User) -> UserWithAge {
        let age = age_on(user.birth_date, self.clock.today());
        UserWithAge { user, age }
    }
}

impl std::fmt::Debug for UserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserService").finish_non_exhaustive()
    }
}
