//! Game state fixtures.

use markquest_progress::domain::state::GameState;

/// Builder for `GameState` values in arbitrary positions of a run. Starts
/// from the new-game defaults.
#[derive(Debug, Clone, Default)]
pub struct GameStateBuilder {
    state: GameState,
}

impl GameStateBuilder {
    /// Create a builder seeded with a new game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the active stage.
    #[must_use]
    pub fn stage(mut self, current_stage: u32) -> Self {
        self.state.current_stage = current_stage;
        self
    }

    /// Set the accumulated points.
    #[must_use]
    pub fn points(mut self, points: u32) -> Self {
        self.state.points = points;
        self
    }

    /// Set the sound flag.
    #[must_use]
    pub fn sound(mut self, sound_enabled: bool) -> Self {
        self.state.sound_enabled = sound_enabled;
        self
    }

    /// Set the locale tag.
    #[must_use]
    pub fn language(mut self, language: &str) -> Self {
        self.state.language = language.to_owned();
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> GameState {
        self.state
    }
}

/// A spread of states covering a new game, a run in progress, the last
/// stage, and a run advanced past the last stage.
#[must_use]
pub fn sample_states() -> Vec<GameState> {
    vec![
        GameStateBuilder::new().build(),
        GameStateBuilder::new()
            .stage(7)
            .points(130)
            .sound(false)
            .language("en")
            .build(),
        GameStateBuilder::new().stage(20).points(990).build(),
        GameStateBuilder::new()
            .stage(21)
            .points(1000)
            .language("ja")
            .build(),
    ]
}
