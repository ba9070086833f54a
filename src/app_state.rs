//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::domain::UserRegistry;
use crate::service::PollService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Poll service for all poll business logic.
    pub poll_service: Arc<PollService>,
    /// Registry of known usernames.
    pub user_registry: Arc<UserRegistry>,
}

impl AppState {
    /// Builds a fresh state with an empty store and registry.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(crate::domain::PollStore::new());
        let user_registry = Arc::new(UserRegistry::new());
        let poll_service = Arc::new(PollService::new(store, Arc::clone(&user_registry)));
        Self {
            poll_service,
            user_registry,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
