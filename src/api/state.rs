//! Application state - Dependency injection container.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::infra::{Database, UserStore};
use crate::services::{AuthService, Authenticator, TokenIssuer};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the concrete service stack from a database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let auth_service = Arc::new(Authenticator::new(
            users,
            TokenIssuer::new(config),
            Duration::from_secs(config.request_timeout_seconds),
        ));

        Self {
            auth_service,
            database,
        }
    }

    /// Create state with manually injected services.
    pub fn new(auth_service: Arc<dyn AuthService>, database: Arc<Database>) -> Self {
        Self {
            auth_service,
            database,
        }
    }
}
