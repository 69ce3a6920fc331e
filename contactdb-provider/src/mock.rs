//! A scriptable in-memory provider for tests.
//!
//! Test suites load it with a field schema, contacts, queued search pages,
//! and scripted create outcomes, then assert against the recorded
//! [`ProviderCall`] log — including that a call was NOT made.

use crate::{ProviderError, ProviderResult};
use async_trait::async_trait;
use contactdb_types::{
    ContactData, ContactId, CreateReceipt, DatabaseId, FieldDescriptor, FieldKey, GroupId,
    GroupInfo, GroupSubscription, SearchPage, SubscriptionStatus,
};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// One provider invocation, with the arguments it was given.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    ListFields {
        database: DatabaseId,
    },
    Search {
        database: DatabaseId,
        criteria: Vec<(FieldKey, String)>,
    },
    ContactById {
        database: DatabaseId,
        contact: ContactId,
    },
    CreateContact {
        database: DatabaseId,
        fields: Vec<(FieldKey, String)>,
        dedupe_field: String,
    },
    UpdateContact {
        database: DatabaseId,
        contact: ContactId,
        fields: Vec<(FieldKey, String)>,
        id_field: String,
    },
    ListGroups {
        database: DatabaseId,
    },
    AddToGroup {
        database: DatabaseId,
        contact: ContactId,
        group: GroupId,
    },
    RemoveFromGroup {
        database: DatabaseId,
        contact: ContactId,
        group: GroupId,
    },
    ListSubscriptions {
        database: DatabaseId,
        contact: ContactId,
        status: SubscriptionStatus,
    },
}

/// Scripted outcome for the next create call.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// The provider returns a fresh identifier.
    Created(ContactId),
    /// The provider reports a dedupe collision with an existing contact.
    Conflict(ContactId),
    /// The provider answers successfully but omits the identifier.
    MissingId,
}

#[derive(Default)]
struct MockState {
    fields: Vec<FieldDescriptor>,
    schema_error: Option<String>,
    contacts: HashMap<ContactId, ContactData>,
    search_pages: VecDeque<SearchPage>,
    create_outcomes: VecDeque<CreateOutcome>,
    groups: Vec<GroupInfo>,
    subscriptions: Vec<GroupSubscription>,
    calls: Vec<ProviderCall>,
}

/// A scriptable [`ContactProvider`](crate::ContactProvider) fixture.
#[derive(Default)]
pub struct MockProvider {
    state: Mutex<MockState>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field schema returned by `list_fields`.
    pub fn set_fields(&self, fields: Vec<FieldDescriptor>) {
        self.state.lock().unwrap().fields = fields;
    }

    /// Makes `list_fields` fail with a service error.
    pub fn fail_schema(&self, message: impl Into<String>) {
        self.state.lock().unwrap().schema_error = Some(message.into());
    }

    /// Registers a contact retrievable via `contact_by_id`.
    pub fn insert_contact(&self, contact: ContactData) {
        self.state
            .lock()
            .unwrap()
            .contacts
            .insert(contact.id.clone(), contact);
    }

    /// Queues the page returned by the next `search` call. An empty queue
    /// yields a page with no matches.
    pub fn queue_search(&self, page: SearchPage) {
        self.state.lock().unwrap().search_pages.push_back(page);
    }

    /// Queues the outcome of the next `create_contact` call.
    pub fn script_create(&self, outcome: CreateOutcome) {
        self.state.lock().unwrap().create_outcomes.push_back(outcome);
    }

    /// Adds a group to the `list_groups` listing, in insertion order.
    pub fn add_group(&self, group: GroupInfo) {
        self.state.lock().unwrap().groups.push(group);
    }

    /// Adds a subscription to the `list_subscriptions` listing.
    pub fn add_subscription(&self, subscription: GroupSubscription) {
        self.state.lock().unwrap().subscriptions.push(subscription);
    }

    /// Returns a snapshot of every call made so far, in order.
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.state.lock().unwrap().calls.clone()
    }

    fn record(&self, call: ProviderCall) {
        self.state.lock().unwrap().calls.push(call);
    }
}

#[async_trait]
impl crate::ContactProvider for MockProvider {
    async fn list_fields(&self, database: &DatabaseId) -> ProviderResult<Vec<FieldDescriptor>> {
        self.record(ProviderCall::ListFields {
            database: database.clone(),
        });
        let state = self.state.lock().unwrap();
        if let Some(message) = &state.schema_error {
            return Err(ProviderError::Service(message.clone()));
        }
        Ok(state.fields.clone())
    }

    async fn search(
        &self,
        database: &DatabaseId,
        criteria: &[(FieldKey, String)],
    ) -> ProviderResult<SearchPage> {
        self.record(ProviderCall::Search {
            database: database.clone(),
            criteria: criteria.to_vec(),
        });
        let mut state = self.state.lock().unwrap();
        Ok(state.search_pages.pop_front().unwrap_or_default())
    }

    async fn contact_by_id(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
    ) -> ProviderResult<ContactData> {
        self.record(ProviderCall::ContactById {
            database: database.clone(),
            contact: contact.clone(),
        });
        let state = self.state.lock().unwrap();
        state
            .contacts
            .get(contact)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(format!("contact {contact}")))
    }

    async fn create_contact(
        &self,
        database: &DatabaseId,
        fields: &[(FieldKey, String)],
        dedupe_field: &str,
    ) -> ProviderResult<CreateReceipt> {
        self.record(ProviderCall::CreateContact {
            database: database.clone(),
            fields: fields.to_vec(),
            dedupe_field: dedupe_field.to_string(),
        });
        let mut state = self.state.lock().unwrap();
        match state.create_outcomes.pop_front() {
            Some(CreateOutcome::Created(id)) => Ok(CreateReceipt::new(id)),
            Some(CreateOutcome::Conflict(existing)) => {
                Err(ProviderError::AlreadyExists { existing })
            }
            Some(CreateOutcome::MissingId) => Ok(CreateReceipt::default()),
            None => Err(ProviderError::Service("no scripted create outcome".into())),
        }
    }

    async fn update_contact(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        fields: &[(FieldKey, String)],
        id_field: &str,
    ) -> ProviderResult<()> {
        self.record(ProviderCall::UpdateContact {
            database: database.clone(),
            contact: contact.clone(),
            fields: fields.to_vec(),
            id_field: id_field.to_string(),
        });
        Ok(())
    }

    async fn list_groups(&self, database: &DatabaseId) -> ProviderResult<Vec<GroupInfo>> {
        self.record(ProviderCall::ListGroups {
            database: database.clone(),
        });
        Ok(self.state.lock().unwrap().groups.clone())
    }

    async fn add_to_group(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        group: &GroupId,
    ) -> ProviderResult<()> {
        self.record(ProviderCall::AddToGroup {
            database: database.clone(),
            contact: contact.clone(),
            group: group.clone(),
        });
        Ok(())
    }

    async fn remove_from_group(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        group: &GroupId,
    ) -> ProviderResult<()> {
        self.record(ProviderCall::RemoveFromGroup {
            database: database.clone(),
            contact: contact.clone(),
            group: group.clone(),
        });
        Ok(())
    }

    async fn list_subscriptions(
        &self,
        database: &DatabaseId,
        contact: &ContactId,
        status: SubscriptionStatus,
    ) -> ProviderResult<Vec<GroupSubscription>> {
        self.record(ProviderCall::ListSubscriptions {
            database: database.clone(),
            contact: contact.clone(),
            status,
        });
        Ok(self.state.lock().unwrap().subscriptions.clone())
    }
}
