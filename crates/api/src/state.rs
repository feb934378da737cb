//! Application state shared across handlers.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::ApiConfig;
use crate::db::UserStore;
use crate::services::UserService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; nothing inside is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    users: UserService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - API configuration
    /// * `store` - User persistence backend
    /// * `clock` - Source of "today" for derived ages
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<dyn UserStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                users: UserService::new(store, clock),
            }),
        }
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the user service.
    #[must_use]
    pub fn users(&self) -> &UserService {
        &self.inner.users
    }
}
