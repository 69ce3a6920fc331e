use contactdb_types::{ContactId, DatabaseId, FieldKey, GroupId};
use std::collections::HashSet;

// ── ContactId ─────────────────────────────────────────────────────

#[test]
fn contact_id_new_and_as_str() {
    let id = ContactId::new("C1");
    assert_eq!(id.as_str(), "C1");
}

#[test]
fn contact_id_display() {
    let id = ContactId::new("C42");
    assert_eq!(id.to_string(), "C42");
}

#[test]
fn contact_id_from_str_and_string() {
    let a = ContactId::from("C1");
    let b = ContactId::from("C1".to_string());
    assert_eq!(a, b);
}

#[test]
fn contact_id_hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(ContactId::new("C1"));
    set.insert(ContactId::new("C1"));
    assert_eq!(set.len(), 1);
}

#[test]
fn contact_id_serde_is_transparent() {
    let id = ContactId::new("C1");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"C1\"");
    let parsed: ContactId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

// ── Remaining identifier newtypes ─────────────────────────────────

#[test]
fn database_id_roundtrip() {
    let id = DatabaseId::new("db_main");
    assert_eq!(id.as_str(), "db_main");
    assert_eq!(id.to_string(), "db_main");
}

#[test]
fn group_id_roundtrip() {
    let id = GroupId::new("g7");
    let json = serde_json::to_string(&id).unwrap();
    let parsed: GroupId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn field_key_as_ref() {
    let key = FieldKey::new("f1");
    let s: &str = key.as_ref();
    assert_eq!(s, "f1");
}

#[test]
fn ids_of_different_kinds_are_distinct_types() {
    // Compile-time property really, but make sure equal strings still
    // compare equal within one kind.
    assert_eq!(FieldKey::new("x"), FieldKey::from("x"));
    assert_ne!(GroupId::new("x"), GroupId::new("y"));
}
