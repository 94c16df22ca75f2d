//! Domain error types.

use thiserror::Error;

use crate::ids::FixtureId;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The fixture provider has no fixture with this identifier.
    #[error("fixture not found: {0}")]
    FixtureNotFound(FixtureId),

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// The external fixture provider failed to answer.
    #[error("provider error: {0}")]
    Provider(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
