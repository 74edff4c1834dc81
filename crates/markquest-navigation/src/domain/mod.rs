//! Domain model for the Navigation context.

pub mod route;
