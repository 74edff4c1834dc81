//! Markquest Core — shared state-machine abstractions.
//!
//! This crate defines the traits and the generic store that the game
//! contexts build on. It contains no HTTP or game-specific code.

pub mod action;
pub mod error;
pub mod reducer;
pub mod store;
