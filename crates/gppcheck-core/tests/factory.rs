use gppcheck_core::compliance::{check_message, inspect_message, validate_test_case};
use gppcheck_core::factory::{
    Catalog, Document, EstablishmentCause, RegistrationParams, RegistrationType,
    RrcSetupRequestParams, UeIdentity, registration_request_with, rrc_setup_request,
    rrc_setup_request_with,
};
use gppcheck_core::model::{Message, TestCase};

fn all_messages() -> Vec<Message> {
    let mut messages = Vec::new();
    for entry in Catalog::ALL {
        match entry.document().expect("canonical example builds") {
            Document::Message(message) => messages.push(message),
            Document::TestCase(case) => {
                messages.extend(case.expected_messages);
                messages.extend(case.test_steps.into_iter().map(|step| step.message));
            }
        }
    }
    messages
}

fn all_cases() -> Vec<TestCase> {
    Catalog::ALL
        .into_iter()
        .filter_map(|entry| match entry.document() {
            Ok(Document::TestCase(case)) => Some(case),
            _ => None,
        })
        .collect()
}

#[test]
fn every_canonical_message_satisfies_element_invariants() {
    for message in all_messages() {
        assert!(message.has_elements(), "{}", message.message_name);
        assert!(message.standard_reference().is_some(), "{}", message.message_name);
        for (name, element) in message.elements() {
            assert!(element.ie_type.is_some(), "{} / {name}", message.message_name);
            assert!(element.presence.is_some(), "{} / {name}", message.message_name);
            assert!(element.reference().is_some(), "{} / {name}", message.message_name);
        }
    }
}

#[test]
fn every_canonical_message_scores_full_marks_without_findings() {
    for message in all_messages() {
        let verdict = check_message(&message);
        assert!(verdict.is_compliant, "{}", message.message_name);
        assert_eq!(verdict.compliance_score, 100, "{}", message.message_name);
        assert!(verdict.warnings.is_empty(), "{}", message.message_name);
        assert_eq!(inspect_message(&message), vec![], "{}", message.message_name);
    }
}

#[test]
fn rrc_setup_request_is_a_single_sequence() {
    let message = rrc_setup_request();
    let names: Vec<&String> = message.elements().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["rrcSetupRequest"]);
    let verdict = check_message(&message);
    assert!(verdict.errors.is_empty());
    assert!(verdict.warnings.is_empty());
}

#[test]
fn canonical_cases_have_consistent_timelines() {
    let cases = all_cases();
    assert_eq!(cases.len(), 2);
    for case in cases {
        assert!(case.timeline_issues().is_empty(), "{}", case.id);
        for (index, step) in case.test_steps.iter().enumerate() {
            assert_eq!(step.step_order as usize, index + 1);
            assert!(step.max_response_time_ms >= step.expected_response_time_ms);
        }
        let verdict = validate_test_case(&case);
        assert!(verdict.is_compliant, "{}", case.id);
        assert!(verdict.errors.is_empty(), "{}", case.id);
    }
}

#[test]
fn parameterized_builders_stay_compliant() {
    for cause in EstablishmentCause::ALL {
        let params = RrcSetupRequestParams {
            ue_identity: UeIdentity::Ng5gSTmsiPart1(42),
            establishment_cause: cause,
        };
        let message = rrc_setup_request_with(&params);
        assert_eq!(check_message(&message).compliance_score, 100);
        assert!(inspect_message(&message).is_empty(), "{}", cause.as_str());
    }

    for registration_type in RegistrationType::ALL {
        let params = RegistrationParams {
            registration_type,
            ..RegistrationParams::default()
        };
        let message = registration_request_with(&params);
        assert_eq!(check_message(&message).compliance_score, 100);
        assert!(inspect_message(&message).is_empty(), "{}", registration_type.as_str());
    }
}

#[test]
fn canonical_documents_survive_json_round_trip_through_the_scorer() {
    for message in all_messages() {
        let json = serde_json::to_string(&message).expect("encode");
        let decoded: Message = serde_json::from_str(&json).expect("decode");
        assert_eq!(check_message(&decoded), check_message(&message));
        assert_eq!(decoded, message);
    }
}
