//! Parse-boundary tests: the reference union and the dual view shape.

use validator::parse;
use validator::parse::types::{Reference, State, StateType, ViewValue};

#[test]
fn parses_example_workflow() {
    let json = include_str!("fixtures/example_workflow.json");
    let workflow = parse::parse(json).expect("Should parse");

    let attrs = workflow.attributes.as_ref().unwrap();
    assert_eq!(attrs.states.len(), 4);
    assert_eq!(attrs.shared_transitions.len(), 1);
    assert_eq!(attrs.functions.len(), 1);
    assert!(attrs.start_transition.is_some());
}

#[test]
fn reference_union_discriminates_on_ref_field() {
    let unresolved: Reference = serde_json::from_str(r#"{"ref": "tasks/init"}"#).unwrap();
    assert!(matches!(unresolved, Reference::Unresolved { .. }));

    let explicit: Reference = serde_json::from_str(
        r#"{"key": "init", "domain": "hr", "flow": "onboarding", "version": "1.0.0"}"#,
    )
    .unwrap();
    assert!(matches!(explicit, Reference::Explicit(_)));
}

#[test]
fn partial_explicit_reference_still_parses() {
    // Missing coordinates default to empty; the validator reports them.
    let reference: Reference = serde_json::from_str(r#"{"key": "init"}"#).unwrap();
    let Reference::Explicit(explicit) = reference else {
        panic!("expected explicit shape");
    };
    assert_eq!(explicit.key, "init");
    assert_eq!(explicit.domain, "");
}

#[test]
fn view_accepts_both_shapes() {
    let flat: ViewValue = serde_json::from_str(r#"{"ref": "views/form"}"#).unwrap();
    assert!(matches!(flat, ViewValue::Flat(_)));
    assert!(matches!(flat.reference(), Reference::Unresolved { .. }));

    let wrapped: ViewValue = serde_json::from_str(
        r#"{
            "view": {"key": "form", "domain": "hr", "flow": "onboarding", "version": "1.0.0"},
            "loadData": ["case"]
        }"#,
    )
    .unwrap();
    assert!(matches!(wrapped, ViewValue::Wrapped(_)));
    assert!(matches!(wrapped.reference(), Reference::Explicit(_)));
}

#[test]
fn state_type_zero_survives_the_boundary() {
    let state: State = serde_json::from_str(r#"{"key": "s1", "stateType": 0}"#).unwrap();
    assert_eq!(state.state_type, Some(StateType::Code(0)));
}

#[test]
fn state_type_null_is_absent() {
    let state: State = serde_json::from_str(r#"{"key": "s1", "stateType": null}"#).unwrap();
    assert!(state.state_type.is_none());
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = parse::parse("{ not json").unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse workflow JSON"));
}
