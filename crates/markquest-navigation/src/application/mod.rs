//! Application layer for the Navigation context.

pub mod view_models;
