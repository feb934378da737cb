//! Request ID middleware for request tracing and correlation.
//!
//! Generates a UUID v4 for each request unless an upstream proxy already set
//! one. The id is written back onto the request so the trace span can pick it
//! up, tagged on the Sentry scope, and returned in the response headers.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware that ensures every request and response carries a request ID.
///
/// Installed outside CORS and tracing so short-circuited responses (preflights,
/// rejections) still get the header.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let (request_id, value) = match incoming_id(request.headers()) {
        Some(existing) => existing,
        None => {
            let id = Uuid::new_v4().to_string();
            // A hyphenated UUID is always a valid header value.
            let value = HeaderValue::from_str(&id).unwrap_or(HeaderValue::from_static("unknown"));
            (id, value)
        }
    };

    request
        .headers_mut()
        .insert(REQUEST_ID_HEADER, value.clone());

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;
    response.headers_mut().insert(REQUEST_ID_HEADER, value);
    response
}

/// Read the request id from headers, if present and printable.
#[must_use]
pub fn request_id_from(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|s| !s.is_empty())
}

fn incoming_id(headers: &HeaderMap) -> Option<(String, HeaderValue)> {
    let id = request_id_from(headers)?;
    let value = HeaderValue::from_str(id).ok()?;
    Some((id.to_owned(), value))
}
