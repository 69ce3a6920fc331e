//! Provider boundary error types.

use contactdb_types::ContactId;
use thiserror::Error;

/// Result type for provider calls.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors raised at the remote provider boundary.
///
/// No retry or timeout policy lives here; transient failures surface to the
/// caller as-is.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// A create collided with an existing record. Carries the existing
    /// contact's identifier so callers can recover by adopting it.
    #[error("contact already exists with id {existing}")]
    AlreadyExists { existing: ContactId },

    /// The addressed record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered, but with a failure.
    #[error("service error: {0}")]
    Service(String),
}

impl ProviderError {
    /// Returns the existing contact's id if this is a create conflict.
    pub fn existing_contact(&self) -> Option<&ContactId> {
        match self {
            ProviderError::AlreadyExists { existing } => Some(existing),
            _ => None,
        }
    }
}
