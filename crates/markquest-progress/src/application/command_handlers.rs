//! Command handlers for the Game Progress context.
//!
//! The game store is the single owner of the [`GameState`]; everything that
//! wants to change it goes through [`handle_dispatch`].

use markquest_core::action::Action;
use markquest_core::store::Store;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::actions::GameAction;
use crate::domain::reducer::GameReducer;
use crate::domain::state::GameState;

/// The store holding the process-wide game progress.
pub type GameStore = Store<GameReducer>;

/// Creates a game store seeded with a new game.
#[must_use]
pub fn new_game_store() -> GameStore {
    GameStore::new(GameState::default())
}

/// Command to dispatch one action against the game store.
#[derive(Debug, Clone)]
pub struct DispatchAction {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The action to apply.
    pub action: GameAction,
}

/// Handles the `DispatchAction` command: applies the action and returns the
/// resulting state. Transitions cannot fail.
#[instrument(
    skip(command, store),
    fields(
        correlation_id = %command.correlation_id,
        action_type = command.action.action_type(),
    )
)]
pub fn handle_dispatch(command: &DispatchAction, store: &GameStore) -> GameState {
    let next = store.dispatch(&command.action);

    if let GameAction::Unknown(tag) = &command.action {
        info!(tag = %tag, "ignoring unrecognized action");
    } else {
        info!(
            current_stage = next.current_stage,
            points = next.points,
            "game action applied"
        );
    }

    next
}
