//! Router assembly.

use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::provider::provide_game;
use crate::routes;
use crate::state::AppState;

/// Builds the full application router. Every route, the fallback included,
/// runs inside the game provider.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::views::router())
        .nest("/api/v1/game", routes::game::router())
        .fallback(routes::views::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), provide_game))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
