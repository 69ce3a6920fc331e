use crate::ids::FieldKey;
use serde::{Deserialize, Serialize};

/// One field of a database schema as reported by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Human-readable field name callers address the field by.
    pub name: String,
    /// The provider's internal key for the field.
    pub key: FieldKey,
    /// Whether the provider flags this field as the database's primary key.
    #[serde(default)]
    pub primary: bool,
}

impl FieldDescriptor {
    /// Creates a non-primary field descriptor.
    pub fn new(name: impl Into<String>, key: impl Into<FieldKey>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            primary: false,
        }
    }

    /// Creates a field descriptor flagged as primary key.
    pub fn primary(name: impl Into<String>, key: impl Into<FieldKey>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            primary: true,
        }
    }
}

/// A single field of a returned contact. The value is nullable on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldValue {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldValue {
    /// Creates a field with a present value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a field whose value is absent.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}
