//! Domain model for the Game Progress context.

pub mod actions;
pub mod reducer;
pub mod state;
