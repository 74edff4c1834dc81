//! The game progress record.

use serde::{Deserialize, Serialize};

/// Total number of stages in a run.
pub const MAX_STAGE: u32 = 20;

/// The first stage of a run.
pub const FIRST_STAGE: u32 = 1;

/// Locale a new game starts in.
pub const DEFAULT_LANGUAGE: &str = "ko";

/// Progress of the current game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Index of the active stage, starting at 1.
    pub current_stage: u32,
    /// Accumulated score.
    pub points: u32,
    /// Whether sound effects play.
    pub sound_enabled: bool,
    /// UI locale tag, stored verbatim.
    pub language: String,
    /// Total stage count. Never changed by any action.
    pub max_stage: u32,
}

impl GameState {
    /// Returns `true` once the player has advanced past the last stage.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.current_stage > self.max_stage
    }

    /// Fraction of the run reached, `current_stage / max_stage`, capped at
    /// `1.0` once past the last stage.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.max_stage == 0 {
            return 1.0;
        }
        (f64::from(self.current_stage) / f64::from(self.max_stage)).min(1.0)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_stage: FIRST_STAGE,
            points: 0,
            sound_enabled: true,
            language: DEFAULT_LANGUAGE.to_owned(),
            max_stage: MAX_STAGE,
        }
    }
}
