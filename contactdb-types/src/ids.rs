//! Identifier types used throughout the contactdb client.
//!
//! Every identifier is an opaque string assigned by the remote provider; the
//! newtypes exist so the compiler keeps databases, contacts, groups, and
//! field keys from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! provider_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a provider-assigned identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

provider_id! {
    /// Identifies a contact database (one field schema, one contact pool).
    DatabaseId
}

provider_id! {
    /// Identifies a single contact within a database.
    ContactId
}

provider_id! {
    /// Identifies a contact group within a database.
    GroupId
}

provider_id! {
    /// The provider's internal key for a database field. Distinct from the
    /// field's human-readable name, which is what callers use.
    FieldKey
}
