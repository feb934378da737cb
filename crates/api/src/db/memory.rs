//! In-memory user store.
//!
//! Used when no database URL is configured and by the test suites. Contents
//! live for the lifetime of the process.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use arukay_core::{Email, UserId};

use super::{RepositoryError, UserStore};
use crate::models::{NewUser, User};

/// In-memory repository for users.
///
/// Ids start at 1 and are never reused, matching a `SERIAL` column.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    last_id: i32,
    users: BTreeMap<UserId, User>,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.state.read().await.users.len()
    }

    /// Whether the store holds no users.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.users.is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| &u.email == email).cloned())
    }

    async fn insert(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.email == new_user.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let next = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::DataCorruption("user id space exhausted".to_owned()))?;
        state.last_id = next;

        let user = User {
            id: UserId::new(next),
            name: new_user.name.clone(),
            email: new_user.email.clone(),
            birth_date: new_user.birth_date,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        Ok(state.users.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}
