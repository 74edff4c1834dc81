//! Routes for the Game Progress bounded context.

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use markquest_progress::application::command_handlers::{self, DispatchAction};
use markquest_progress::domain::actions::GameAction;
use markquest_progress::domain::state::GameState;

use crate::error::ApiError;
use crate::provider::GameHandle;
use crate::state::AppState;

/// Request body for POST /actions.
#[derive(Debug, Deserialize)]
pub struct DispatchActionRequest {
    /// Action tag, e.g. `NEXT_STAGE`. Anything other than a known tag
    /// string, including a missing tag, dispatches as an unknown action.
    #[serde(rename = "type", default)]
    pub action_type: Value,
    /// Action payload; absent for actions that take none.
    #[serde(default)]
    pub payload: Value,
}

impl DispatchActionRequest {
    /// The tag as text. Non-string tags are rendered as JSON.
    #[must_use]
    pub fn tag(&self) -> String {
        match &self.action_type {
            Value::String(tag) => tag.clone(),
            other => other.to_string(),
        }
    }
}

/// GET /state
async fn get_state(game: GameHandle) -> Json<GameState> {
    Json(game.state())
}

/// POST /actions
#[instrument(skip(game, request), fields(action_type = %request.tag()))]
async fn dispatch_action(
    game: GameHandle,
    Json(request): Json<DispatchActionRequest>,
) -> Result<Json<GameState>, ApiError> {
    let command = DispatchAction {
        correlation_id: Uuid::new_v4(),
        action: GameAction::from_parts(&request.tag(), &request.payload)?,
    };

    info!(correlation_id = %command.correlation_id, "handling dispatch_action command");

    let next = command_handlers::handle_dispatch(&command, game.store());

    Ok(Json(next))
}

/// Returns the router for the game context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/state", get(get_state))
        .route("/actions", post(dispatch_action))
}
