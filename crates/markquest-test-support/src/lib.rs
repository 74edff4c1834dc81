//! Shared test fixtures and utilities for the Markquest game service.

mod state;

pub use state::{GameStateBuilder, sample_states};
