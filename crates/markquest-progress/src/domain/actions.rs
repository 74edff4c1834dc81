//! Actions for the Game Progress context.

use markquest_core::action::Action;
use markquest_core::error::DomainError;
use serde_json::Value;

/// Tag for [`GameAction::NextStage`].
pub const NEXT_STAGE: &str = "NEXT_STAGE";

/// Tag for [`GameAction::ResetGame`].
pub const RESET_GAME: &str = "RESET_GAME";

/// Tag for [`GameAction::ToggleSound`].
pub const TOGGLE_SOUND: &str = "TOGGLE_SOUND";

/// Tag for [`GameAction::SetLanguage`].
pub const SET_LANGUAGE: &str = "SET_LANGUAGE";

/// A request to transition the game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameAction {
    /// Advance one stage and add the given points.
    NextStage(u32),
    /// Return to the first stage with zero points.
    ResetGame,
    /// Flip the sound flag.
    ToggleSound,
    /// Replace the UI locale.
    SetLanguage(String),
    /// Any tag not listed above. Leaves the state unchanged.
    Unknown(String),
}

impl GameAction {
    /// Builds an action from its wire tag and payload.
    ///
    /// Unrecognized tags become [`GameAction::Unknown`]. Payloads of actions
    /// that take none are ignored.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when a known tag carries a payload
    /// of the wrong shape.
    pub fn from_parts(tag: &str, payload: &Value) -> Result<Self, DomainError> {
        match tag {
            NEXT_STAGE => {
                let points = payload
                    .as_u64()
                    .and_then(|p| u32::try_from(p).ok())
                    .ok_or_else(|| {
                        DomainError::Validation(format!(
                            "{NEXT_STAGE} payload must be a non-negative integer, got {payload}"
                        ))
                    })?;
                Ok(Self::NextStage(points))
            }
            RESET_GAME => Ok(Self::ResetGame),
            TOGGLE_SOUND => Ok(Self::ToggleSound),
            SET_LANGUAGE => match payload {
                Value::String(language) => Ok(Self::SetLanguage(language.clone())),
                other => Err(DomainError::Validation(format!(
                    "{SET_LANGUAGE} payload must be a string, got {other}"
                ))),
            },
            other => Ok(Self::Unknown(other.to_owned())),
        }
    }
}

impl Action for GameAction {
    fn action_type(&self) -> &str {
        match self {
            Self::NextStage(_) => NEXT_STAGE,
            Self::ResetGame => RESET_GAME,
            Self::ToggleSound => TOGGLE_SOUND,
            Self::SetLanguage(_) => SET_LANGUAGE,
            Self::Unknown(tag) => tag,
        }
    }
}
