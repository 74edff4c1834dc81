//! Application layer for the Game Progress context.

pub mod command_handlers;
