//! HTTP middleware.
//!
//! - `cors` - cross-origin policy built from [`crate::config::CorsConfig`]
//! - `request_id` - per-request correlation id

pub mod cors;
pub mod request_id;

pub use cors::build_cors_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
