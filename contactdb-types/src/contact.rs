use crate::fields::FieldValue;
use crate::ids::ContactId;
use serde::{Deserialize, Serialize};

/// A contact as returned by the provider: its identifier plus the
/// field/value pairs of the database it lives in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactData {
    pub id: ContactId,
    pub fields: Vec<FieldValue>,
}

impl ContactData {
    pub fn new(id: impl Into<ContactId>, fields: Vec<FieldValue>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// One page of search results. Lookups in this client only ever act on a
/// page that contains exactly one match; `total_items` counts matches across
/// the whole result set, not just this page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPage {
    pub total_items: usize,
    pub contacts: Vec<ContactData>,
}

impl SearchPage {
    /// A page with no matches.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A page holding exactly one match.
    pub fn single(contact: ContactData) -> Self {
        Self {
            total_items: 1,
            contacts: vec![contact],
        }
    }
}

/// Result of a create call. Providers are expected to return the new
/// contact's identifier, but a malformed response can omit it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
}

impl CreateReceipt {
    pub fn new(id: impl Into<ContactId>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}
