use crate::ids::GroupId;
use serde::{Deserialize, Serialize};

/// A contact group as listed by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupInfo {
    pub id: GroupId,
    pub name: String,
}

impl GroupInfo {
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One group subscription of a contact, as returned by the provider's
/// subscription listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupSubscription {
    pub group_id: GroupId,
    pub label: String,
}

impl GroupSubscription {
    pub fn new(group_id: impl Into<GroupId>, label: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            label: label.into(),
        }
    }
}

/// Server-side filter for subscription listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Pending,
    Unsubscribed,
}
