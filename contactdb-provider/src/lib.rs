//! Remote provider boundary for the contactdb client.
//!
//! Defines [`ContactProvider`], the capability set the session layer is
//! written against, so the core logic works with any backend (SOAP, REST,
//! in-memory fixture). The [`mock`] module ships a scriptable provider for
//! test suites.

mod error;
pub mod mock;

pub use error::{ProviderError, ProviderResult};

use async_trait::async_trait;
use contactdb_types::{
    ContactData, ContactId, CreateReceipt, DatabaseId, FieldDescriptor, FieldKey, GroupId,
    GroupInfo, GroupSubscription, SearchPage, SubscriptionStatus,
};

/// The remote contact database capability set.
///
/// Every method is one request/response round trip. Implementations own
/// transport and authentication; callers own sequencing (the session layer
/// never issues concurrent calls against one logical contact).
#[async_trait]
pub trait ContactProvider: Send + Sync {
    /// Lists the field schema of a database, in provider order. The full
    /// list is returned in one response; there is no pagination.
    async fn list_fields(&self, database: &DatabaseId) -> ProviderResult<Vec<FieldDescriptor>>;

    /// Searches contacts matching ALL given field-key/value pairs exactly.
    async fn search(
        &self,
        database: &DatabaseId,
        criteria: &[(FieldKey, String)],
    ) -> ProviderResult<SearchPage>;

    /// Fetches a single contact by identifier.
    async fn contact_by_id(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
    ) -> ProviderResult<ContactData>;

    /// Creates a contact. The provider deduplicates on `dedupe_field`; a
    /// collision is reported as [`ProviderError::AlreadyExists`] carrying
    /// the existing contact's identifier.
    async fn create_contact(
        &self,
        database: &DatabaseId,
        fields: &[(FieldKey, String)],
        dedupe_field: &str,
    ) -> ProviderResult<CreateReceipt>;

    /// Updates the given fields of a contact. `id_field` names the
    /// identifier attribute in the provider's update envelope.
    async fn update_contact(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        fields: &[(FieldKey, String)],
        id_field: &str,
    ) -> ProviderResult<()>;

    /// Lists every contact group of a database.
    async fn list_groups(&self, database: &DatabaseId) -> ProviderResult<Vec<GroupInfo>>;

    /// Adds a contact to a group.
    async fn add_to_group(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        group: &GroupId,
    ) -> ProviderResult<()>;

    /// Removes a contact from a group.
    async fn remove_from_group(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        group: &GroupId,
    ) -> ProviderResult<()>;

    /// Lists a contact's group subscriptions, filtered server-side to the
    /// given status.
    async fn list_subscriptions(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        status: SubscriptionStatus,
    ) -> ProviderResult<Vec<GroupSubscription>>;
}
