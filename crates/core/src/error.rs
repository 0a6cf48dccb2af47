//! Domain error model.

use thiserror::Error;

/// Result type used across the domain and use-case layers.
pub type DomainResult<T> = Result<T, DomainError>;

/// Error returned by use cases and their collaborators.
///
/// `NotFound` and `Unauthorized` are the two conditions the HTTP layer
/// recognizes; their texts are part of the wire contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The storage collaborator has no entity for the given identifier.
    #[error("entity not found")]
    NotFound,

    /// The authorizer rejected the customer identity.
    #[error("customer unauthorized")]
    Unauthorized,

    /// A domain invariant was violated (e.g. a backwards status move).
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Any other failure; the text is surfaced verbatim.
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}
