//! Service banner and health checks.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::{APP_NAME, APP_VERSION};
use crate::state::AppState;

/// Body of `GET /`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Banner {
    pub message: String,
    pub version: String,
    pub cors_enabled: bool,
}

/// Service banner.
pub async fn index() -> Json<Banner> {
    Json(Banner {
        message: format!("{APP_NAME} is running"),
        version: APP_VERSION.to_owned(),
        cors_enabled: true,
    })
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the user store is not reachable.
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.users().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
