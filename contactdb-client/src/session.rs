//! Contact session — the single-contact cache and its remote protocol.

use crate::catalog::{FieldCatalog, FieldLookup};
use crate::error::{SessionError, SessionResult};
use contactdb_provider::{ContactProvider, ProviderError};
use contactdb_types::{ContactData, ContactId, DatabaseId, FieldKey, GroupId, SubscriptionStatus};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Reserved field token naming the contact identifier. Passing it to
/// [`ContactSession::find_by`] switches to a direct by-identifier fetch.
pub const ID_FIELD: &str = "_id";

/// Field the provider deduplicates on during create.
const CREATE_DEDUPE_FIELD: &str = "name";

/// Identifier attribute name in the provider's update envelope.
const UPDATE_ID_FIELD: &str = "id";

/// The currently loaded contact: its identifier plus values keyed by
/// logical field name.
///
/// The identifier is structural, so "a record exists" and "the record has an
/// id" are the same condition.
#[derive(Debug, Clone)]
pub struct ContactRecord {
    id: ContactId,
    values: HashMap<String, Option<String>>,
}

impl ContactRecord {
    fn from_data(data: ContactData) -> Self {
        let values = data
            .fields
            .into_iter()
            .map(|field| (field.name, field.value))
            .collect();
        Self {
            id: data.id,
            values,
        }
    }

    /// The contact's identifier.
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    /// Reads a field by logical name. Absent fields and null values both
    /// read as `None`; the reserved `_id` token reads the identifier.
    pub fn get(&self, field: &str) -> Option<&str> {
        if field == ID_FIELD {
            return Some(self.id.as_str());
        }
        self.values.get(field).and_then(|value| value.as_deref())
    }

    /// Iterates the record's field/value pairs.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }

    fn set(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_string(), Some(value.to_string()));
    }

    fn set_id(&mut self, id: ContactId) {
        self.id = id;
    }
}

/// A session against one contact database, holding at most one "current"
/// contact.
///
/// All mutating operations take `&mut self`, so a session cannot be used
/// concurrently; one provider handle may back any number of sessions.
pub struct ContactSession {
    provider: Arc<dyn ContactProvider>,
    database: DatabaseId,
    catalog: FieldCatalog,
    current: Option<ContactRecord>,
}

impl fmt::Debug for ContactSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactSession")
            .field("database", &self.database)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

impl ContactSession {
    /// Opens a session against `database`, loading its field catalog.
    ///
    /// Fails with [`SessionError::SchemaLoad`] if the schema fetch fails;
    /// the session is unusable without one.
    pub async fn open(
        provider: Arc<dyn ContactProvider>,
        database: DatabaseId,
    ) -> SessionResult<Self> {
        let catalog = FieldCatalog::load(provider.as_ref(), &database).await?;
        Ok(Self {
            provider,
            database,
            catalog,
            current: None,
        })
    }

    /// The database this session operates on.
    pub fn database(&self) -> &DatabaseId {
        &self.database
    }

    /// The session's field catalog.
    pub fn catalog(&self) -> &FieldCatalog {
        &self.catalog
    }

    /// True iff a contact is currently loaded.
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    /// The currently loaded contact, if any.
    pub fn contact(&self) -> Option<&ContactRecord> {
        self.current.as_ref()
    }

    /// The current contact's identifier, if one is loaded.
    pub fn id(&self) -> Option<&ContactId> {
        self.current.as_ref().map(ContactRecord::id)
    }

    /// Reads a field of the current contact by logical name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.current.as_ref().and_then(|record| record.get(field))
    }

    /// Searches `value` against the primary key field and loads the match,
    /// if there is exactly one.
    ///
    /// Zero or several matches leave the session with no contact loaded, a
    /// normal outcome observable via [`valid`](Self::valid).
    pub async fn find(&mut self, value: &str) -> SessionResult<&mut Self> {
        let key = self.catalog.primary_key()?.clone();
        self.search_and_adopt(key, value).await?;
        Ok(self)
    }

    /// Searches `value` against a named field and loads the match, if there
    /// is exactly one.
    ///
    /// `field` may be a logical name, an already-translated provider key, or
    /// the reserved [`ID_FIELD`] token, which switches to a direct
    /// by-identifier fetch adopted unconditionally. An unresolvable field
    /// fails with [`SessionError::InvalidField`].
    pub async fn find_by(&mut self, field: &str, value: &str) -> SessionResult<&mut Self> {
        if field == ID_FIELD {
            self.fetch_by_id(&ContactId::from(value)).await?;
            return Ok(self);
        }
        let key = match self.catalog.resolve(field) {
            FieldLookup::Logical(key) => key.clone(),
            FieldLookup::RawKey => FieldKey::from(field),
            FieldLookup::Unknown => return Err(SessionError::InvalidField(field.to_string())),
        };
        self.search_and_adopt(key, value).await?;
        Ok(self)
    }

    /// Creates a contact from `values` and loads it as current.
    ///
    /// Unrecognized field names are silently dropped. A dedupe collision at
    /// the provider is recovered by adopting the existing contact; a create
    /// response without an identifier fails with
    /// [`SessionError::CreateIncomplete`]. Either way the session finishes
    /// with a direct fetch of the resulting identifier.
    pub async fn create(&mut self, values: &HashMap<String, String>) -> SessionResult<&mut Self> {
        let fields = self.filter_fields(values);
        let created = self
            .provider
            .create_contact(&self.database, &fields, CREATE_DEDUPE_FIELD)
            .await;
        let id = match created {
            Ok(receipt) => receipt.id.ok_or(SessionError::CreateIncomplete)?,
            Err(ProviderError::AlreadyExists { existing }) => {
                debug!(database = %self.database, contact = %existing, "create hit existing contact");
                existing
            }
            Err(err) => return Err(err.into()),
        };
        self.fetch_by_id(&id).await?;
        Ok(self)
    }

    /// Updates the current contact remotely and merges the change into the
    /// local record without re-fetching.
    ///
    /// Returns `Ok(false)` without any remote call when no contact is
    /// loaded. Unrecognized field names are silently dropped. An input key
    /// literally named `id` is additionally mirrored into the record's
    /// identifier.
    pub async fn update(&mut self, fields: &HashMap<String, String>) -> SessionResult<bool> {
        let Some(id) = self.id().cloned() else {
            debug!(database = %self.database, "update with no contact loaded");
            return Ok(false);
        };

        let translated = self.filter_fields(fields);
        self.provider
            .update_contact(&self.database, &id, &translated, UPDATE_ID_FIELD)
            .await?;

        if let Some(record) = self.current.as_mut() {
            for (name, value) in fields {
                if self.catalog.translate(name).is_some() {
                    record.set(name, value);
                }
            }
            if let Some(id) = fields.get(UPDATE_ID_FIELD) {
                record.set_id(ContactId::from(id.as_str()));
            }
        }
        Ok(true)
    }

    /// Adds one to an integer-valued field of the current contact.
    ///
    /// The current value is read from the local record; absent or
    /// non-numeric values count as zero. Read-modify-write, not an atomic
    /// remote increment.
    pub async fn increment(&mut self, field: &str) -> SessionResult<bool> {
        self.adjust(field, 1).await
    }

    /// Subtracts one from an integer-valued field of the current contact.
    pub async fn decrement(&mut self, field: &str) -> SessionResult<bool> {
        self.adjust(field, -1).await
    }

    /// Adds the current contact to the group with this exact display name.
    ///
    /// Returns `Ok(false)` without any remote call when no contact is
    /// loaded; fails with [`SessionError::InvalidGroup`] when no group
    /// matches.
    pub async fn join(&mut self, group: &str) -> SessionResult<bool> {
        let Some(id) = self.id().cloned() else {
            return Ok(false);
        };
        let group = self.resolve_group(group).await?;
        self.provider
            .add_to_group(&self.database, &id, &group)
            .await?;
        Ok(true)
    }

    /// Adds the current contact to a group addressed by identifier.
    pub async fn join_by_id(&mut self, group: &GroupId) -> SessionResult<bool> {
        let Some(id) = self.id().cloned() else {
            return Ok(false);
        };
        self.provider
            .add_to_group(&self.database, &id, group)
            .await?;
        Ok(true)
    }

    /// Removes the current contact from the group with this exact display
    /// name. Same outcomes as [`join`](Self::join).
    pub async fn leave(&mut self, group: &str) -> SessionResult<bool> {
        let Some(id) = self.id().cloned() else {
            return Ok(false);
        };
        let group = self.resolve_group(group).await?;
        self.provider
            .remove_from_group(&self.database, &id, &group)
            .await?;
        Ok(true)
    }

    /// Removes the current contact from a group addressed by identifier.
    pub async fn leave_by_id(&mut self, group: &GroupId) -> SessionResult<bool> {
        let Some(id) = self.id().cloned() else {
            return Ok(false);
        };
        self.provider
            .remove_from_group(&self.database, &id, group)
            .await?;
        Ok(true)
    }

    /// Lists the groups the current contact is actively subscribed to, as a
    /// group-id → display-label map.
    ///
    /// Returns `Ok(None)` without any remote call when no contact is
    /// loaded; an empty map means "loaded, but subscribed to nothing".
    pub async fn subscriptions(&self) -> SessionResult<Option<HashMap<GroupId, String>>> {
        let Some(record) = self.current.as_ref() else {
            return Ok(None);
        };
        let subscriptions = self
            .provider
            .list_subscriptions(&self.database, record.id(), SubscriptionStatus::Active)
            .await?;
        Ok(Some(
            subscriptions
                .into_iter()
                .map(|sub| (sub.group_id, sub.label))
                .collect(),
        ))
    }

    async fn adjust(&mut self, field: &str, delta: i64) -> SessionResult<bool> {
        let current: i64 = self
            .get(field)
            .and_then(|value| value.parse().ok())
            .unwrap_or(0);
        let fields = HashMap::from([(field.to_string(), (current + delta).to_string())]);
        self.update(&fields).await
    }

    /// Direct by-identifier fetch; the result is adopted unconditionally
    /// and a failed fetch propagates.
    async fn fetch_by_id(&mut self, id: &ContactId) -> SessionResult<()> {
        self.current = None;
        let data = self.provider.contact_by_id(&self.database, id).await?;
        self.current = Some(ContactRecord::from_data(data));
        Ok(())
    }

    async fn search_and_adopt(&mut self, key: FieldKey, value: &str) -> SessionResult<()> {
        // Cleared up front, so a missed search never leaves a stale contact.
        self.current = None;
        let criteria = [(key, value.to_string())];
        let page = self.provider.search(&self.database, &criteria).await?;
        if page.total_items == 1 {
            if let Some(data) = page.contacts.into_iter().next() {
                self.current = Some(ContactRecord::from_data(data));
            }
        } else {
            debug!(
                database = %self.database,
                matches = page.total_items,
                "search did not narrow to one contact"
            );
        }
        Ok(())
    }

    fn filter_fields(&self, values: &HashMap<String, String>) -> Vec<(FieldKey, String)> {
        let mut fields = Vec::with_capacity(values.len());
        for (name, value) in values {
            match self.catalog.translate(name) {
                Some(key) => fields.push((key, value.clone())),
                None => debug!(field = %name, "dropping unrecognized field"),
            }
        }
        fields
    }

    async fn resolve_group(&self, name: &str) -> SessionResult<GroupId> {
        let groups = self.provider.list_groups(&self.database).await?;
        // Exact match, first match wins if names collide.
        groups
            .into_iter()
            .find(|group| group.name == name)
            .map(|group| group.id)
            .ok_or_else(|| SessionError::InvalidGroup(name.to_string()))
    }
}
