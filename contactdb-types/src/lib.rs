//! Core type definitions for the contactdb client.
//!
//! This crate defines the provider-agnostic data shapes exchanged with a
//! remote contact database:
//! - Opaque provider-assigned identifiers (databases, contacts, groups, field keys)
//! - Field schema descriptors and field/value pairs
//! - Search, create, group, and subscription payloads
//!
//! Everything here is pure data. The provider boundary lives in
//! `contactdb-provider`; the session logic lives in `contactdb-client`.

mod contact;
mod fields;
mod group;
mod ids;

pub use contact::{ContactData, CreateReceipt, SearchPage};
pub use fields::{FieldDescriptor, FieldValue};
pub use group::{GroupInfo, GroupSubscription, SubscriptionStatus};
pub use ids::{ContactId, DatabaseId, FieldKey, GroupId};
