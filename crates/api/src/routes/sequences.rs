//! Eager and lazy sequence endpoints.
//!
//! `/normal_function` materializes the whole run before responding.
//! `/generator_function` pulls a lazy run to completion and reports how many
//! values it produced. `/generator_function/stream` forwards each value to the
//! client as it is produced, so memory stays flat regardless of `n`.

use std::convert::Infallible;

use axum::{
    Json,
    body::Body,
    extract::{Query, State, rejection::QueryRejection},
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use arukay_core::{eager_range, lazy_range};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Default `n` for the eager endpoint.
pub const DEFAULT_EAGER_COUNT: u64 = 1_000;

/// Default `n` for the lazy endpoints.
pub const DEFAULT_LAZY_COUNT: u64 = 1_000_000;

/// Query string accepted by the sequence endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct SequenceQuery {
    pub n: Option<u64>,
}

/// Summary returned by the lazy counting endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeneratorSummary {
    pub message: String,
    pub count: u64,
}

fn requested_count(
    state: &AppState,
    query: std::result::Result<Query<SequenceQuery>, QueryRejection>,
    default: u64,
) -> Result<u64> {
    let Query(query) = query?;
    let n = query.n.unwrap_or(default);
    let limit = state.config().sequence_limit;
    if n > limit {
        return Err(AppError::BadRequest(format!("n must be at most {limit}")));
    }
    Ok(n)
}

/// Eager run serialized as a JSON array.
#[instrument(skip(state, query))]
pub async fn normal_function(
    State(state): State<AppState>,
    query: std::result::Result<Query<SequenceQuery>, QueryRejection>,
) -> Result<Json<Vec<u64>>> {
    let n = requested_count(&state, query, DEFAULT_EAGER_COUNT)?;
    Ok(Json(eager_range(n)))
}

/// Lazy run consumed to completion; only the count is returned.
#[instrument(skip(state, query))]
pub async fn generator_function(
    State(state): State<AppState>,
    query: std::result::Result<Query<SequenceQuery>, QueryRejection>,
) -> Result<Json<GeneratorSummary>> {
    let n = requested_count(&state, query, DEFAULT_LAZY_COUNT)?;

    // Runs of ten million values take long enough to stall a worker thread.
    let count = tokio::task::spawn_blocking(move || {
        let produced: Vec<u64> = lazy_range(n).collect();
        u64::try_from(produced.len()).unwrap_or(u64::MAX)
    })
    .await
    .map_err(|e| AppError::Internal(format!("sequence task failed: {e}")))?;

    tracing::debug!(count, "Lazy run completed");
    Ok(Json(GeneratorSummary {
        message: "Generator completed".to_owned(),
        count,
    }))
}

/// Lazy run streamed as newline-delimited integers.
#[instrument(skip(state, query))]
pub async fn generator_stream(
    State(state): State<AppState>,
    query: std::result::Result<Query<SequenceQuery>, QueryRejection>,
) -> Result<Response> {
    let n = requested_count(&state, query, DEFAULT_LAZY_COUNT)?;

    let lines = lazy_range(n).map(|value| Ok::<_, Infallible>(format!("{value}\n")));
    let body = Body::from_stream(futures::stream::iter(lines));

    Ok(([(header::CONTENT_TYPE, "application/x-ndjson")], body).into_response())
}
