//! Markquest — Navigation bounded context.
//!
//! Maps URL paths to the game's views and projects the game state into a
//! read-only model for each view.

pub mod application;
pub mod domain;
