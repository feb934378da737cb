//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ARUKAY_DATABASE_URL` - `PostgreSQL` connection string (falls back to
//!   `DATABASE_URL`; without either the in-memory store is used)
//! - `ARUKAY_HOST` - Bind address (default: 127.0.0.1)
//! - `ARUKAY_PORT` - Listen port (default: 8000)
//! - `ARUKAY_CORS_ORIGINS` - Comma-separated allowed origins (default: local dev servers)
//! - `ARUKAY_CORS_ALLOW_CREDENTIALS` - Allow credentialed requests (default: true)
//! - `ARUKAY_CORS_METHODS` - Comma-separated allowed methods
//! - `ARUKAY_CORS_HEADERS` - Comma-separated allowed request headers
//! - `ARUKAY_AUTO_MIGRATE` - Run migrations on startup (default: false)
//! - `ARUKAY_SEQUENCE_LIMIT` - Largest `n` accepted by sequence endpoints (default: 10000000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::{HeaderName, HeaderValue, Method};
use secrecy::SecretString;
use thiserror::Error;

/// Application name reported by the banner endpoint.
pub const APP_NAME: &str = "Arukay API";

/// Application version reported by the banner endpoint.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://127.0.0.1:5173",
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
    // Vite preview
    "http://localhost:4173",
    "http://127.0.0.1:4173",
];

const DEFAULT_CORS_METHODS: &[&str] = &["GET", "POST", "PUT", "DELETE", "OPTIONS", "PATCH"];

const DEFAULT_CORS_HEADERS: &[&str] = &[
    "Content-Type",
    "Authorization",
    "Accept",
    "Origin",
    "X-Requested-With",
    "Access-Control-Allow-Origin",
    "Access-Control-Allow-Headers",
    "Access-Control-Allow-Methods",
];

const DEFAULT_SEQUENCE_LIMIT: u64 = 10_000_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API application configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `PostgreSQL` connection URL (contains password)
    pub database_url: Option<SecretString>,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Cross-origin policy for the browser front end
    pub cors: CorsConfig,
    /// Run embedded migrations before serving
    pub auto_migrate: bool,
    /// Largest count accepted by the sequence endpoints
    pub sequence_limit: u64,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

/// Cross-origin resource sharing settings.
///
/// Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<String>,
    pub allowed_headers: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: to_owned_list(DEFAULT_CORS_ORIGINS),
            allowed_methods: to_owned_list(DEFAULT_CORS_METHODS),
            allowed_headers: to_owned_list(DEFAULT_CORS_HEADERS),
            allow_credentials: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
            cors: CorsConfig::default(),
            auto_migrate: false,
            sequence_limit: DEFAULT_SEQUENCE_LIMIT,
            sentry_dsn: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed,
    /// or if the CORS settings are contradictory.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`ApiConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let database_url = lookup("ARUKAY_DATABASE_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty())
            .map(SecretString::from);

        let host = parse_var(&lookup, "ARUKAY_HOST", defaults.host, |v| {
            v.parse::<IpAddr>().map_err(|e| e.to_string())
        })?;
        let port = parse_var(&lookup, "ARUKAY_PORT", defaults.port, |v| {
            v.parse::<u16>().map_err(|e| e.to_string())
        })?;
        let auto_migrate = parse_var(&lookup, "ARUKAY_AUTO_MIGRATE", false, parse_bool)?;
        let sequence_limit = parse_var(
            &lookup,
            "ARUKAY_SEQUENCE_LIMIT",
            defaults.sequence_limit,
            |v| v.parse::<u64>().map_err(|e| e.to_string()),
        )?;

        let cors = CorsConfig {
            allowed_origins: lookup("ARUKAY_CORS_ORIGINS")
                .map_or(defaults.cors.allowed_origins, |v| parse_list(&v)),
            allowed_methods: lookup("ARUKAY_CORS_METHODS")
                .map_or(defaults.cors.allowed_methods, |v| parse_list(&v)),
            allowed_headers: lookup("ARUKAY_CORS_HEADERS")
                .map_or(defaults.cors.allowed_headers, |v| parse_list(&v)),
            allow_credentials: parse_var(
                &lookup,
                "ARUKAY_CORS_ALLOW_CREDENTIALS",
                defaults.cors.allow_credentials,
                parse_bool,
            )?,
        };
        cors.validate()?;

        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.trim().is_empty());

        Ok(Self {
            database_url,
            host,
            port,
            cors,
            auto_migrate,
            sequence_limit,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CorsConfig {
    /// Reject settings a browser would refuse or that cannot be sent as headers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` naming the offending variable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let wildcard = self.allowed_origins.iter().any(|o| o == "*");
        if wildcard && self.allow_credentials {
            return Err(ConfigError::InvalidEnvVar(
                "ARUKAY_CORS_ORIGINS".to_owned(),
                "'*' cannot be combined with ARUKAY_CORS_ALLOW_CREDENTIALS=true".to_owned(),
            ));
        }

        if self.allow_credentials {
            for (key, values) in [
                ("ARUKAY_CORS_METHODS", &self.allowed_methods),
                ("ARUKAY_CORS_HEADERS", &self.allowed_headers),
            ] {
                if values.iter().any(|v| v == "*") {
                    return Err(ConfigError::InvalidEnvVar(
                        key.to_owned(),
                        "'*' cannot be combined with ARUKAY_CORS_ALLOW_CREDENTIALS=true".to_owned(),
                    ));
                }
            }
        }

        for origin in self.allowed_origins.iter().filter(|o| *o != "*") {
            HeaderValue::from_str(origin).map_err(|e| {
                ConfigError::InvalidEnvVar("ARUKAY_CORS_ORIGINS".to_owned(), format!("{origin}: {e}"))
            })?;
        }
        for method in self.allowed_methods.iter().filter(|m| *m != "*") {
            method.parse::<Method>().map_err(|e| {
                ConfigError::InvalidEnvVar("ARUKAY_CORS_METHODS".to_owned(), format!("{method}: {e}"))
            })?;
        }
        for header in self.allowed_headers.iter().filter(|h| *h != "*") {
            header.parse::<HeaderName>().map_err(|e| {
                ConfigError::InvalidEnvVar("ARUKAY_CORS_HEADERS".to_owned(), format!("{header}: {e}"))
            })?;
        }
        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable, keeping `default` when it is unset.
fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(value) => {
            parse(value.trim()).map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e))
        }
        None => Ok(default),
    }
}

/// Accepts the usual spellings of a boolean flag.
fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(format!("expected a boolean, got '{other}'")),
    }
}

/// Split a comma-separated list, dropping blank entries.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}
