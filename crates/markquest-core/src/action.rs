//! Action abstractions.

/// Trait that all dispatchable actions implement.
pub trait Action: Send + Sync + std::fmt::Debug {
    /// The tag of this action (for logging/routing).
    fn action_type(&self) -> &str;
}
