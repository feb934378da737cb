//! User domain types.
//!
//! These types represent validated domain objects separate from database row types.

use chrono::{DateTime, NaiveDate, Utc};

use arukay_core::{Email, UserId, UserName};

/// A stored user (domain type).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: UserName,
    /// Email address, unique across users.
    pub email: Email,
    /// Calendar birth date.
    pub birth_date: NaiveDate,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// A validated user that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: UserName,
    pub email: Email,
    pub birth_date: NaiveDate,
}

/// A user as returned to callers, with the age computed at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserWithAge {
    pub user: User,
    pub age: i32,
}
