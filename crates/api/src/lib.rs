//! Arukay HTTP API.
//!
//! Create, list and delete users whose age is derived at read time, plus
//! endpoints contrasting eager and lazy sequence production.
//!
//! The binary in `main.rs` wires configuration, tracing and Sentry around
//! [`routes::app`]; tests build the same router over an in-memory store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use routes::app;
pub use state::AppState;
