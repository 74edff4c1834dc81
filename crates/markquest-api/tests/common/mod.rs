//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use markquest_progress::application::command_handlers::GameStore;
use markquest_progress::domain::state::GameState;
use serde_json::{Value, json};
use tower::ServiceExt;

use markquest_api::app::build_router;
use markquest_api::state::AppState;

/// Build the full app router around a fresh game. Uses the same router as
/// `main.rs`.
pub fn build_test_app() -> (Router, Arc<GameStore>) {
    build_test_app_with_state(GameState::default())
}

/// Build the full app router around a game seeded with `state`. The store is
/// returned so tests can inspect it across requests.
pub fn build_test_app_with_state(state: GameState) -> (Router, Arc<GameStore>) {
    let store = Arc::new(GameStore::new(state));
    let app = build_router(AppState::new(Arc::clone(&store)));
    (app, store)
}

/// Run `request` through `app` and decode the JSON response body.
async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

/// POST `body` as JSON to `uri`.
pub async fn post_json(app: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// GET `uri`.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

/// Dispatch one action through the HTTP surface.
pub async fn dispatch(app: Router, action_type: &str, payload: Value) -> (StatusCode, Value) {
    let body = json!({ "type": action_type, "payload": payload });
    post_json(app, "/api/v1/game/actions", &body).await
}
