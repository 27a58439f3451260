//! Tests for strongly-typed identifiers

use core_kernel::{EntityKey, FamilyId, IndividualId, TreeId};
use uuid::Uuid;

#[test]
fn test_display_roundtrip() {
    let id = IndividualId::new();
    let parsed: IndividualId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_prefixes_differ_per_type() {
    assert_eq!(IndividualId::prefix(), "INDI");
    assert_eq!(FamilyId::prefix(), "FAM");
    assert_eq!(TreeId::prefix(), "TREE");
}

#[test]
fn test_serde_is_transparent() {
    let uuid = Uuid::new_v4();
    let id = IndividualId::from_uuid(uuid);
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{uuid}\""));

    let back: IndividualId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

#[test]
fn test_nil_state() {
    assert!(TreeId::nil().is_nil());
    assert!(TreeId::default().is_nil());
    assert!(!TreeId::generate().is_nil());
}

#[test]
fn test_generated_keys_are_unique() {
    let a = IndividualId::generate();
    let b = IndividualId::generate();
    assert_ne!(a, b);
}

#[test]
fn test_invalid_string_is_rejected() {
    let result: Result<IndividualId, _> = "not-a-uuid".parse();
    assert!(result.is_err());
}
