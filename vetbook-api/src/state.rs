//! Shared application state for Axum routers.

use std::time::Instant;

use vetbook_storage::PlaybookStore;

/// Application-wide state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Playbook gateway over the configured blob store.
    pub store: PlaybookStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: PlaybookStore) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}
