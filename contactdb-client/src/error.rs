//! Session error types.

use contactdb_provider::ProviderError;
use contactdb_types::DatabaseId;
use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised by the session layer.
///
/// Data outcomes are never modeled here: a search with zero or many matches,
/// or an operation invoked with no contact loaded, returns a value. Errors
/// are reserved for programmer mistakes (unknown field or group names) and
/// for provider failures.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The field schema could not be loaded; the session is unusable.
    #[error("failed to load field schema for database {database}: {source}")]
    SchemaLoad {
        database: DatabaseId,
        #[source]
        source: ProviderError,
    },

    /// No field of the database is flagged as primary key, so a
    /// single-argument find has nothing to search against.
    #[error("database {0} has no field flagged as primary key")]
    NoPrimaryKey(DatabaseId),

    /// A field name used in a strict position resolves to nothing.
    #[error("unknown contact field: {0}")]
    InvalidField(String),

    /// A group display name matches no group of the database.
    #[error("no group named {0:?}")]
    InvalidGroup(String),

    /// The provider acknowledged a create but returned no identifier.
    #[error("create response carried no contact id")]
    CreateIncomplete,

    /// Any other provider failure, propagated as-is.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
