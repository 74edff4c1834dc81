//! Shared application state.

use std::sync::Arc;

use markquest_progress::application::command_handlers::GameStore;

/// Application state shared across all request handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single game store for this process.
    pub game_store: Arc<GameStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(game_store: Arc<GameStore>) -> Self {
        Self { game_store }
    }
}
