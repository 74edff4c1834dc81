//! Markquest — Game Progress bounded context.
//!
//! Responsible for the stage counter, accumulated points, and the player's
//! sound and language settings.

pub mod application;
pub mod domain;
