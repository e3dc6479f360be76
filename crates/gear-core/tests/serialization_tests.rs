//! Serialization tests for gear-core types.

use gear_core::Plan;
use pretty_assertions::assert_eq;

#[test]
fn test_plan_serializes_as_label() {
    assert_eq!(serde_json::to_string(&Plan::Monthly).unwrap(), "\"monthly\"");
    assert_eq!(
        serde_json::to_string(&Plan::Lifetime).unwrap(),
        "\"lifetime\""
    );
}

#[test]
fn test_plan_deserializes_from_label() {
    let plan: Plan = serde_json::from_str("\"lifetime\"").expect("deserialize");
    assert_eq!(plan, Plan::Lifetime);

    assert!(serde_json::from_str::<Plan>("\"L\"").is_err());
}

#[test]
fn test_optional_plan_serializes_as_null() {
    let none: Option<Plan> = None;
    assert_eq!(serde_json::to_string(&none).unwrap(), "null");
}

#[test]
fn test_serde_error_converts() {
    let err = serde_json::from_str::<Plan>("42").unwrap_err();
    let err: gear_core::Error = err.into();
    assert!(matches!(err, gear_core::Error::Serialization(_)));
}
