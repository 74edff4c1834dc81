//! Routes for the Navigation bounded context.
//!
//! Fixed paths share one handler that resolves the request path through the
//! route table. Stage and result views take their `id` from the decoded path
//! parameter.

use axum::extract::Path;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::get};
use tracing::{debug, instrument};

use markquest_navigation::application::view_models::ViewModel;
use markquest_navigation::domain::route::{Route, paths};

use crate::provider::GameHandle;
use crate::state::AppState;

/// GET on a fixed view path.
#[instrument(skip(game), fields(path = %uri.path()))]
async fn show_view(uri: Uri, game: GameHandle) -> Response {
    let route = Route::resolve(uri.path());
    let model = ViewModel::render(&route, &game.state());

    let status = if model.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    (status, Json(model)).into_response()
}

/// GET /stage/{id}
#[instrument(skip(game))]
async fn show_stage(Path(id): Path<String>, game: GameHandle) -> Json<ViewModel> {
    Json(ViewModel::render(&Route::Stage { id }, &game.state()))
}

/// GET /result/{id}
#[instrument(skip(game))]
async fn show_result(Path(id): Path<String>, game: GameHandle) -> Json<ViewModel> {
    Json(ViewModel::render(&Route::Result { id }, &game.state()))
}

/// Fallback for paths outside the route table.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ViewModel>) {
    debug!(path = %uri.path(), "no route matched");

    let model = ViewModel::NotFound {
        path: uri.path().to_owned(),
    };
    (StatusCode::NOT_FOUND, Json(model))
}

/// Returns the router for the view routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(paths::MAIN, get(show_view))
        .route(paths::STAGE, get(show_stage))
        .route(paths::RESULT, get(show_result))
        .route(paths::FINAL, get(show_view))
        .route(paths::HELP, get(show_view))
        .route(paths::SETTINGS, get(show_view))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use markquest_progress::application::command_handlers::{GameStore, new_game_store};
    use markquest_test_support::GameStateBuilder;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::app::build_router;

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body_bytes).unwrap())
    }

    #[tokio::test]
    async fn test_view_outside_provider_returns_500_provider_missing() {
        // Arrange
        let state = AppState::new(Arc::new(new_game_store()));
        let app = router().with_state(state);

        // Act
        let (status, json) = get_json(app, "/final").await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "provider_missing");
    }

    #[tokio::test]
    async fn test_stage_view_renders_store_state() {
        // Arrange
        let seeded = GameStateBuilder::new().stage(5).points(40).build();
        let state = AppState::new(Arc::new(GameStore::new(seeded)));
        let app = build_router(state);

        // Act
        let (status, json) = get_json(app, "/stage/5").await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["view"], "stage");
        assert_eq!(json["id"], "5");
        assert_eq!(json["stage_number"], 5);
        assert_eq!(json["current_stage"], 5);
        assert_eq!(json["points"], 40);
    }

    #[tokio::test]
    async fn test_stage_and_result_ids_are_percent_decoded() {
        // Arrange
        let state = AppState::new(Arc::new(new_game_store()));
        let app = build_router(state);

        // Act
        let (stage_status, stage) = get_json(app.clone(), "/stage/%ED%95%9C").await;
        let (result_status, result) = get_json(app, "/result/two%20words").await;

        // Assert
        assert_eq!(stage_status, StatusCode::OK);
        assert_eq!(stage["id"], "한");
        assert_eq!(stage["stage_number"], Value::Null);
        assert_eq!(result_status, StatusCode::OK);
        assert_eq!(result["id"], "two words");
    }

    #[tokio::test]
    async fn test_not_found_does_not_need_store() {
        let app = Router::new().fallback(not_found);

        let (status, json) = get_json(app, "/missing").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["view"], "not_found");
        assert_eq!(json["path"], "/missing");
    }
}
