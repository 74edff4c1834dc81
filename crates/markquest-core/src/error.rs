//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An action or request failed validation at the boundary.
    #[error("validation error: {0}")]
    Validation(String),

    /// The store capability was requested outside of a provider scope.
    #[error("provider missing: {0}")]
    ProviderMissing(String),
}
