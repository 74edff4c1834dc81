//! Markquest API — HTTP surface for the game service.
//!
//! The binary in `main.rs` and the integration tests both build their
//! router through [`app::build_router`].

pub mod app;
pub mod config;
pub mod error;
pub mod provider;
pub mod routes;
pub mod state;
pub mod telemetry;
