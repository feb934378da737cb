//! Integration tests for Arukay.
//!
//! These run over real HTTP against a server started separately, so they are
//! `#[ignore]`d by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the API (in-memory store is fine)
//! cargo run -p arukay-api
//!
//! # Run integration tests
//! cargo test -p arukay-integration-tests -- --ignored
//! ```
//!
//! Set `ARUKAY_BASE_URL` to target a server other than `http://localhost:8000`.

use reqwest::Client;
use uuid::Uuid;

pub use arukay_api::routes::sequences::GeneratorSummary;
pub use arukay_api::routes::users::UserResponse;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("ARUKAY_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_owned())
}

/// Shared client and target for a test.
#[derive(Debug, Clone)]
pub struct TestContext {
    pub client: Client,
    pub base_url: String,
}

impl TestContext {
    /// Context for the configured server.
    #[must_use]
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: base_url(),
        }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// An email no other test run has used.
#[must_use]
pub fn unique_email() -> String {
    format!("it-{}@example.com", Uuid::new_v4().simple())
}
