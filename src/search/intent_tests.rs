//! Tests for input normalization

use super::*;
use proptest::prelude::*;

#[test]
fn test_typed_text_is_trimmed() {
    let mut event = UiEvent::typed("  react-dom ");
    assert_eq!(normalize(&mut event), Some(Intent::Type("react-dom".to_string())));
}

#[test]
fn test_whitespace_only_becomes_empty_query() {
    let mut event = UiEvent::typed("   ");
    assert_eq!(normalize(&mut event), Some(Intent::Type(String::new())));
}

#[test]
fn test_navigation_change_produces_no_intent() {
    let mut event = UiEvent::navigated("lodash");
    assert_eq!(normalize(&mut event), None);
    assert!(event.is_propagation_stopped());
}

#[test]
fn test_selection_carries_suggestion_id() {
    let mut event = UiEvent::selected(SuggestionId::new("@scope/pkg"));
    assert_eq!(
        normalize(&mut event),
        Some(Intent::Select(SuggestionId::new("@scope/pkg")))
    );
}

#[test]
fn test_clear_and_blur() {
    assert_eq!(normalize(&mut UiEvent::cleared()), Some(Intent::Clear));
    assert_eq!(normalize(&mut UiEvent::blurred()), Some(Intent::Blur));
}

#[test]
fn test_only_type_is_debounced() {
    assert!(Intent::Type("a".to_string()).is_debounced());
    assert!(!Intent::Select(SuggestionId::new("a")).is_debounced());
    assert!(!Intent::Clear.is_debounced());
    assert!(!Intent::Blur.is_debounced());
}

fn any_event() -> impl Strategy<Value = UiEvent> {
    prop_oneof![
        "[ a-z]{0,12}".prop_map(UiEvent::typed),
        "[a-z]{0,12}".prop_map(UiEvent::navigated),
        "[a-z]{1,12}".prop_map(|id| UiEvent::selected(SuggestionId::new(id))),
        Just(UiEvent::cleared()),
        Just(UiEvent::blurred()),
    ]
}

// Feature: input-normalizer, Property: events never propagate past the normalizer
// For any raw event, normalizing it stops its propagation, whether or not an
// intent is produced.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_normalize_always_stops_propagation(mut event in any_event()) {
        prop_assert!(!event.is_propagation_stopped());
        let _ = normalize(&mut event);
        prop_assert!(event.is_propagation_stopped());
    }

    #[test]
    fn prop_typed_query_has_no_surrounding_whitespace(text in "[ a-z]{0,20}") {
        let mut event = UiEvent::typed(text);
        match normalize(&mut event) {
            Some(Intent::Type(query)) => prop_assert_eq!(query.trim(), query.as_str()),
            other => prop_assert!(false, "unexpected intent {:?}", other),
        }
    }
}
