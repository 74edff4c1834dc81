//! Transition function for the Game Progress context.

use markquest_core::reducer::Reducer;

use super::actions::GameAction;
use super::state::{FIRST_STAGE, GameState};

/// Reducer that applies [`GameAction`]s to a [`GameState`].
#[derive(Debug, Clone, Copy)]
pub struct GameReducer;

impl Reducer for GameReducer {
    type State = GameState;
    type Action = GameAction;

    fn reduce(state: &GameState, action: &GameAction) -> GameState {
        match action {
            // Not clamped at max_stage; the result and final views route
            // the player once the run is complete.
            GameAction::NextStage(points) => GameState {
                current_stage: state.current_stage.saturating_add(1),
                points: state.points.saturating_add(*points),
                ..state.clone()
            },
            GameAction::ResetGame => GameState {
                current_stage: FIRST_STAGE,
                points: 0,
                ..state.clone()
            },
            GameAction::ToggleSound => GameState {
                sound_enabled: !state.sound_enabled,
                ..state.clone()
            },
            GameAction::SetLanguage(language) => GameState {
                language: language.clone(),
                ..state.clone()
            },
            GameAction::Unknown(_) => state.clone(),
        }
    }
}
