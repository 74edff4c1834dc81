//! Read-only view models, one per routed view.
//!
//! Views never mutate the game state. Each model is a projection of a
//! [`GameState`] snapshot plus whatever the route carried.

use markquest_progress::domain::state::GameState;
use serde::Serialize;

use crate::domain::route::Route;

/// Model handed to the client for rendering a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewModel {
    /// Landing page.
    Main {
        /// Index of the active stage.
        current_stage: u32,
        /// Accumulated score.
        points: u32,
        /// Fraction of the run reached, from `0.0` to `1.0`.
        progress: f64,
        /// Where the "continue" button leads.
        continue_href: String,
    },
    /// A stage screen.
    Stage {
        /// Raw `id` path segment.
        id: String,
        /// `id` parsed as a stage number, when it is one.
        stage_number: Option<u32>,
        /// Index of the active stage.
        current_stage: u32,
        /// Total stage count.
        max_stage: u32,
        /// Fraction of the run reached, from `0.0` to `1.0`.
        progress: f64,
        /// Accumulated score.
        points: u32,
        /// Whether sound effects play.
        sound_enabled: bool,
        /// UI locale tag.
        language: String,
    },
    /// Result screen shown after a stage.
    Result {
        /// Raw `id` path segment.
        id: String,
        /// `id` parsed as a stage number, when it is one.
        stage_number: Option<u32>,
        /// Accumulated score.
        points: u32,
        /// Index of the active stage.
        current_stage: u32,
        /// Total stage count.
        max_stage: u32,
        /// Where the "next" button leads.
        next_href: String,
    },
    /// End-of-game summary.
    Final {
        /// Final score.
        points: u32,
        /// Total stage count.
        max_stage: u32,
        /// Whether every stage was cleared.
        completed: bool,
    },
    /// How to play.
    Help {
        /// Total stage count.
        max_stage: u32,
    },
    /// Sound and language settings.
    Settings {
        /// Whether sound effects play.
        sound_enabled: bool,
        /// UI locale tag.
        language: String,
    },
    /// Path not in the route table.
    NotFound {
        /// The requested path.
        path: String,
    },
}

impl ViewModel {
    /// Builds the model for `route` from a state snapshot.
    #[must_use]
    pub fn render(route: &Route, state: &GameState) -> Self {
        match route {
            Route::Main => Self::Main {
                current_stage: state.current_stage,
                points: state.points,
                progress: state.progress(),
                continue_href: next_href(state),
            },
            Route::Stage { id } => Self::Stage {
                id: id.clone(),
                stage_number: id.parse().ok(),
                current_stage: state.current_stage,
                max_stage: state.max_stage,
                progress: state.progress(),
                points: state.points,
                sound_enabled: state.sound_enabled,
                language: state.language.clone(),
            },
            Route::Result { id } => Self::Result {
                id: id.clone(),
                stage_number: id.parse().ok(),
                points: state.points,
                current_stage: state.current_stage,
                max_stage: state.max_stage,
                next_href: next_href(state),
            },
            Route::Final => Self::Final {
                points: state.points,
                max_stage: state.max_stage,
                completed: state.is_complete(),
            },
            Route::Help => Self::Help {
                max_stage: state.max_stage,
            },
            Route::Settings => Self::Settings {
                sound_enabled: state.sound_enabled,
                language: state.language.clone(),
            },
            Route::NotFound { path } => Self::NotFound { path: path.clone() },
        }
    }

    /// Returns `true` for the not-found model.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// The active stage, or the final screen once the run is complete.
fn next_href(state: &GameState) -> String {
    if state.is_complete() {
        Route::Final.path()
    } else {
        Route::stage(state.current_stage).path()
    }
}
