//! Per-request provisioning of the game store.
//!
//! [`provide_game`] puts a [`GameHandle`] into each request it wraps.
//! Handlers take the handle as an extractor. A handler mounted outside the
//! provider layer fails with `DomainError::ProviderMissing` instead of
//! running against some default store.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::Extensions;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use markquest_core::error::DomainError;
use markquest_progress::application::command_handlers::GameStore;
use markquest_progress::domain::state::GameState;

use crate::error::ApiError;
use crate::state::AppState;

/// Read and dispatch capability for the game store.
#[derive(Debug, Clone)]
pub struct GameHandle(Arc<GameStore>);

impl GameHandle {
    /// Wraps a store.
    #[must_use]
    pub fn new(store: Arc<GameStore>) -> Self {
        Self(store)
    }

    /// Looks up the handle a provider placed in `extensions`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ProviderMissing` if no provider ran for this
    /// request.
    pub fn from_extensions(extensions: &Extensions) -> Result<Self, DomainError> {
        extensions.get::<Self>().cloned().ok_or_else(|| {
            DomainError::ProviderMissing(
                "game store requested outside of a game provider".to_owned(),
            )
        })
    }

    /// Snapshot of the current game state.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.0.state()
    }

    /// The underlying store, for dispatching.
    #[must_use]
    pub fn store(&self) -> &GameStore {
        &self.0
    }
}

impl<S> FromRequestParts<S> for GameHandle
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Self::from_extensions(&parts.extensions).map_err(ApiError::from)
    }
}

/// Middleware that provisions the game store to every request it wraps.
pub async fn provide_game(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    request
        .extensions_mut()
        .insert(GameHandle::new(Arc::clone(&state.game_store)));
    next.run(request).await
}
