//! Contact session layer for a remote contact database.
//!
//! Two pieces, the second built on the first:
//! - [`FieldCatalog`] — the immutable name ↔ provider-key translation table
//!   for one database, loaded once per session
//! - [`ContactSession`] — at most one "current" contact, with
//!   find/create/update/increment/join/leave/subscriptions operations that
//!   translate field names through the catalog, call the provider, and fold
//!   results back into local state
//!
//! Lookup misses and operations invoked with no contact loaded are values,
//! not errors; errors are reserved for unknown field/group names and
//! provider failures. See [`SessionError`].

mod catalog;
mod error;
mod session;

pub use catalog::{FieldCatalog, FieldLookup};
pub use error::{SessionError, SessionResult};
pub use session::{ContactRecord, ContactSession, ID_FIELD};
