//! Property-based tests for the message scorer and test-case validator.

use std::collections::BTreeSet;

use gppcheck_core::compliance::{check_message, validate_test_case};
use gppcheck_core::model::{
    ElementMap, IeType, IeValue, InformationElement, Message, Presence, TestCase,
};
use proptest::prelude::*;

fn arb_element() -> impl Strategy<Value = InformationElement> {
    (any::<bool>(), any::<bool>(), any::<bool>(), 0i64..100).prop_map(
        |(typed, with_presence, with_reference, value)| {
            let mut element = InformationElement::integer(value);
            if !typed {
                element.ie_type = None;
            }
            if !with_presence {
                element.presence = None;
            }
            if with_reference {
                element = element.with_reference("TS 38.331 6.3.2");
            }
            element
        },
    )
}

fn arb_elements() -> impl Strategy<Value = Vec<(String, InformationElement)>> {
    prop::collection::btree_map("[a-z][a-zA-Z-]{0,11}", arb_element(), 0..12)
        .prop_map(|map| map.into_iter().collect())
}

fn arb_message() -> impl Strategy<Value = Message> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        arb_elements(),
    )
        .prop_map(|(with_reference, with_release, with_map, elements)| {
            build_message(with_reference, with_release, with_map, elements)
        })
}

fn build_message(
    with_reference: bool,
    with_release: bool,
    with_map: bool,
    elements: Vec<(String, InformationElement)>,
) -> Message {
    let mut message = Message::new("Test", "Test Message");
    if with_reference {
        message = message.with_standard_reference("TS 38.331 6.2.2");
    }
    if with_release {
        message = message.with_release_version("Release 17");
    }
    if with_map {
        message.information_elements = Some(elements.into_iter().collect::<ElementMap>());
    }
    message
}

/// Unclamped score computed straight from the penalty table.
fn raw_score(message: &Message) -> i32 {
    let mut score = 100;
    if message.standard_reference().is_none() {
        score -= 20;
    }
    if !message.has_elements() {
        score -= 30;
    }
    if message.release_version().is_none() {
        score -= 5;
    }
    for (_, element) in message.elements() {
        if element.ie_type.is_none() {
            score -= 10;
        }
        if element.presence.is_none() {
            score -= 5;
        }
        if element.reference().is_none() {
            score -= 2;
        }
    }
    score
}

proptest! {
    #[test]
    fn scoring_is_deterministic(message in arb_message()) {
        prop_assert_eq!(check_message(&message), check_message(&message));
    }

    #[test]
    fn scoring_ignores_insertion_order(
        with_reference in any::<bool>(),
        with_release in any::<bool>(),
        elements in arb_elements(),
    ) {
        let forward = build_message(with_reference, with_release, true, elements.clone());
        let mut reversed_elements = elements;
        reversed_elements.reverse();
        let reversed = build_message(with_reference, with_release, true, reversed_elements);

        let a = check_message(&forward);
        let b = check_message(&reversed);
        prop_assert_eq!(a.compliance_score, b.compliance_score);
        prop_assert_eq!(
            a.errors.iter().collect::<BTreeSet<_>>(),
            b.errors.iter().collect::<BTreeSet<_>>()
        );
        prop_assert_eq!(
            a.warnings.iter().collect::<BTreeSet<_>>(),
            b.warnings.iter().collect::<BTreeSet<_>>()
        );
    }

    #[test]
    fn score_matches_penalty_table_and_clamps_at_zero(message in arb_message()) {
        let verdict = check_message(&message);
        let expected = raw_score(&message).max(0) as u32;
        prop_assert_eq!(verdict.compliance_score, expected);
        prop_assert!(verdict.compliance_score <= 100);
    }

    #[test]
    fn compliance_gate_requires_no_errors_and_threshold(message in arb_message()) {
        let verdict = check_message(&message);
        let gate = verdict.errors.is_empty() && raw_score(&message) >= 80;
        prop_assert_eq!(verdict.is_compliant, gate);
        if !verdict.errors.is_empty() || verdict.compliance_score < 80 {
            prop_assert!(!verdict.is_compliant);
        }
    }

    #[test]
    fn validator_applies_flat_message_penalty(
        with_reference in any::<bool>(),
        with_release in any::<bool>(),
        messages in prop::collection::vec(arb_message(), 0..6),
    ) {
        let mut case = TestCase {
            expected_messages: messages,
            ..TestCase::default()
        };
        if with_reference {
            case.standard_reference = Some("TS 38.331 5.3.3".to_string());
        }
        if with_release {
            case.release_version = Some("Release 17".to_string());
        }

        let failing = case
            .expected_messages
            .iter()
            .filter(|message| !check_message(message).is_compliant)
            .count() as i32;
        let mut raw = 100 - 10 * failing;
        if !with_reference {
            raw -= 20;
        }
        if !with_release {
            raw -= 15;
        }

        let verdict = validate_test_case(&case);
        prop_assert_eq!(verdict.compliance_score, raw.max(0) as u32);
        prop_assert_eq!(verdict.is_compliant, verdict.errors.is_empty() && raw >= 80);
        let case_errors = usize::from(!with_reference) + usize::from(!with_release);
        prop_assert_eq!(verdict.errors.len(), failing as usize + case_errors);
    }
}

#[test]
fn many_bare_elements_clamp_to_zero() {
    let mut bare = InformationElement::integer(0);
    bare.ie_type = None;
    bare.presence = None;
    let elements = (0..10).map(|i| (format!("ie{i}"), bare.clone())).collect();
    let message = build_message(true, true, true, elements);
    let verdict = check_message(&message);
    assert_eq!(verdict.compliance_score, 0);
    assert_eq!(verdict.errors.len(), 20);
    assert!(!verdict.is_compliant);
}

#[test]
fn typed_constructors_never_trip_type_or_presence_rules() {
    let element =
        InformationElement::new(IeType::Boolean, IeValue::Boolean(true)).expect("shape matches");
    assert_eq!(element.presence, Some(Presence::Mandatory));
    let message = build_message(true, true, true, vec![("flag".to_string(), element)]);
    let verdict = check_message(&message);
    assert_eq!(verdict.compliance_score, 98);
    assert!(verdict.is_compliant);
}
