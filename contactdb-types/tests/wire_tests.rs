use contactdb_types::{
    ContactData, CreateReceipt, FieldDescriptor, FieldValue, GroupSubscription, SearchPage,
    SubscriptionStatus,
};

// ── FieldDescriptor ───────────────────────────────────────────────

#[test]
fn descriptor_constructors() {
    let plain = FieldDescriptor::new("email", "f1");
    assert!(!plain.primary);
    let pk = FieldDescriptor::primary("email", "f1");
    assert!(pk.primary);
    assert_eq!(pk.name, "email");
    assert_eq!(pk.key.as_str(), "f1");
}

#[test]
fn descriptor_primary_defaults_to_false_on_the_wire() {
    let json = r#"{"name":"email","key":"f1"}"#;
    let parsed: FieldDescriptor = serde_json::from_str(json).unwrap();
    assert!(!parsed.primary);
}

// ── FieldValue ────────────────────────────────────────────────────

#[test]
fn field_value_absent_value_deserializes() {
    let json = r#"{"name":"age"}"#;
    let parsed: FieldValue = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, FieldValue::empty("age"));
}

#[test]
fn field_value_present_value() {
    let fv = FieldValue::new("age", "30");
    assert_eq!(fv.value.as_deref(), Some("30"));
}

// ── SearchPage / CreateReceipt ────────────────────────────────────

#[test]
fn search_page_empty() {
    let page = SearchPage::empty();
    assert_eq!(page.total_items, 0);
    assert!(page.contacts.is_empty());
}

#[test]
fn search_page_single() {
    let page = SearchPage::single(ContactData::new("C1", vec![FieldValue::new("email", "a@b")]));
    assert_eq!(page.total_items, 1);
    assert_eq!(page.contacts[0].id.as_str(), "C1");
}

#[test]
fn create_receipt_may_omit_id() {
    let parsed: CreateReceipt = serde_json::from_str("{}").unwrap();
    assert!(parsed.id.is_none());
    assert!(CreateReceipt::new("C9").id.is_some());
}

// ── SubscriptionStatus ────────────────────────────────────────────

#[test]
fn subscription_status_snake_case() {
    assert_eq!(
        serde_json::to_string(&SubscriptionStatus::Active).unwrap(),
        "\"active\""
    );
    let parsed: SubscriptionStatus = serde_json::from_str("\"unsubscribed\"").unwrap();
    assert_eq!(parsed, SubscriptionStatus::Unsubscribed);
}

#[test]
fn group_subscription_fields() {
    let sub = GroupSubscription::new("g1", "Newsletter");
    assert_eq!(sub.group_id.as_str(), "g1");
    assert_eq!(sub.label, "Newsletter");
}
