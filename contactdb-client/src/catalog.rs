//! Field catalog — the name ↔ provider-key translation table.

use crate::error::{SessionError, SessionResult};
use contactdb_provider::ContactProvider;
use contactdb_types::{DatabaseId, FieldKey};
use std::collections::HashMap;
use tracing::debug;

/// Result of looking a field reference up in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLookup<'a> {
    /// The reference is a known logical field name; here is its key.
    Logical(&'a FieldKey),
    /// The reference is not a logical name but is already one of the
    /// database's provider keys.
    RawKey,
    /// The reference matches neither a name nor a key.
    Unknown,
}

/// The field schema of one database, indexed for name→key translation.
///
/// Loaded once at session construction and immutable afterwards. If the
/// remote schema changes, a new session must be constructed.
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    database: DatabaseId,
    fields: HashMap<String, FieldKey>,
    primary: Option<FieldKey>,
}

impl FieldCatalog {
    /// Fetches and indexes the field schema of `database`.
    ///
    /// Descriptors are taken in provider order: the first one flagged
    /// primary becomes the primary key; a duplicated name keeps the later
    /// key. A failed fetch is fatal and is not retried.
    pub async fn load(
        provider: &dyn ContactProvider,
        database: &DatabaseId,
    ) -> SessionResult<Self> {
        let descriptors =
            provider
                .list_fields(database)
                .await
                .map_err(|source| SessionError::SchemaLoad {
                    database: database.clone(),
                    source,
                })?;

        let mut fields = HashMap::with_capacity(descriptors.len());
        let mut primary = None;
        for descriptor in descriptors {
            if descriptor.primary && primary.is_none() {
                primary = Some(descriptor.key.clone());
            }
            fields.insert(descriptor.name, descriptor.key);
        }

        debug!(
            database = %database,
            fields = fields.len(),
            has_primary = primary.is_some(),
            "field catalog loaded"
        );
        Ok(Self {
            database: database.clone(),
            fields,
            primary,
        })
    }

    /// The database this catalog was loaded for.
    pub fn database(&self) -> &DatabaseId {
        &self.database
    }

    /// The provider key of the primary key field.
    pub fn primary_key(&self) -> SessionResult<&FieldKey> {
        self.primary
            .as_ref()
            .ok_or_else(|| SessionError::NoPrimaryKey(self.database.clone()))
    }

    /// Classifies a field reference: logical name, raw provider key, or
    /// unknown.
    pub fn resolve(&self, field: &str) -> FieldLookup<'_> {
        if let Some(key) = self.fields.get(field) {
            return FieldLookup::Logical(key);
        }
        // Not a name; it may already be a provider key.
        if self.fields.values().any(|key| key.as_str() == field) {
            return FieldLookup::RawKey;
        }
        FieldLookup::Unknown
    }

    /// Translates a field reference to a provider key, or `None` if it is
    /// unknown. This is the filtering primitive behind create and update.
    pub fn translate(&self, field: &str) -> Option<FieldKey> {
        match self.resolve(field) {
            FieldLookup::Logical(key) => Some(key.clone()),
            FieldLookup::RawKey => Some(FieldKey::from(field)),
            FieldLookup::Unknown => None,
        }
    }

    /// Number of fields in the catalog.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the catalog holds no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `name` is a known logical field name.
    pub fn contains_name(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates the logical field names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
