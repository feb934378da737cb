//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                           - Service banner
//! GET    /health                     - Liveness check
//! GET    /health/ready               - Readiness check (pings the user store)
//!
//! # Users
//! POST   /users                      - Create user (201, 409 duplicate, 422 invalid)
//! GET    /users                      - List users with ages (404 when empty)
//! DELETE /users/{id}                 - Delete user (204, 404 missing)
//!
//! # Sequences
//! GET    /normal_function?n=         - Eager run as JSON array
//! GET    /generator_function?n=      - Lazy run, count only
//! GET    /generator_function/stream?n= - Lazy run streamed line by line
//! ```

pub mod root;
pub mod sequences;
pub mod users;

use axum::{
    Router,
    body::Body,
    http::Request,
    routing::{delete, get},
};
use tower_http::trace::TraceLayer;

use crate::middleware::{build_cors_layer, request_id::request_id_from, request_id_middleware};
use crate::state::AppState;

/// Create the routes router (without middleware or state).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(root::health))
        .route("/health/ready", get(root::readiness))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", delete(users::delete))
        .route("/normal_function", get(sequences::normal_function))
        .route("/generator_function", get(sequences::generator_function))
        .route("/generator_function/stream", get(sequences::generator_stream))
}

/// Build the complete application: routes, middleware and state.
///
/// Layer order, outermost first: request id, CORS, tracing.
pub fn app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config().cors);

    routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = request_id_from(request.headers()).unwrap_or("-"),
            )
        }))
        .layer(cors)
        .layer(axum::middleware::from_fn(request_id_middleware))
}
