//! User route handlers.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use arukay_core::UserId;

use crate::error::{AppError, Result};
use crate::models::UserWithAge;
use crate::services::CreateUser;
use crate::state::AppState;

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`
    pub birth_date: NaiveDate,
}

/// A user as serialized to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    /// Whole years as of the request date.
    pub age: i32,
}

impl From<UserWithAge> for UserResponse {
    fn from(UserWithAge { user, age }: UserWithAge) -> Self {
        Self {
            id: user.id.as_i32(),
            name: user.name.as_str().to_owned(),
            email: user.email.into_inner(),
            birth_date: user.birth_date,
            created_at: user.created_at,
            age,
        }
    }
}

/// Create a user.
#[instrument(skip(state, payload))]
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let Json(body) = payload?;

    let created = state
        .users()
        .create(CreateUser {
            name: body.name,
            email: body.email,
            birth_date: body.birth_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List all users with their current ages.
#[instrument(skip(state))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UserResponse>>> {
    let users = state.users().list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Delete a user by id.
///
/// Any integer is accepted in the path; one outside the id range cannot name
/// a stored user and is reported as not found.
#[instrument(skip(state, id))]
pub async fn delete(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<StatusCode> {
    let Path(raw) = id?;
    let id = i32::try_from(raw).map_err(|_| AppError::NotFound("User not found".to_owned()))?;
    state.users().delete(UserId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
