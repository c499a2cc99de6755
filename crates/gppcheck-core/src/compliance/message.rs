use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FULL_SCORE, settle};
use crate::model::{InformationElement, Message};

pub const STANDARD_REFERENCE_PENALTY: i32 = 20;
pub const INFORMATION_ELEMENTS_PENALTY: i32 = 30;
pub const RELEASE_VERSION_PENALTY: i32 = 5;
pub const IE_TYPE_PENALTY: i32 = 10;
pub const IE_PRESENCE_PENALTY: i32 = 5;
pub const IE_REFERENCE_PENALTY: i32 = 2;

/// Compliance verdict for a single message.
///
/// # Examples
/// ```
/// use gppcheck_core::compliance::check_message;
/// use gppcheck_core::model::Message;
///
/// let verdict = check_message(&Message::default());
/// assert_eq!(verdict.compliance_score, 45);
/// assert!(!verdict.is_compliant);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageVerdict {
    pub is_compliant: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub compliance_score: u32,
}

/// Scores a message for structural completeness.
///
/// Message-level checks run first (standard reference, IE mapping, release
/// version), then each IE in mapping order.
pub fn check_message(message: &Message) -> MessageVerdict {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut score = FULL_SCORE;

    if message.standard_reference().is_none() {
        errors.push("Missing standard reference".to_string());
        score -= STANDARD_REFERENCE_PENALTY;
    }
    if !message.has_elements() {
        errors.push("Missing Information Elements structure".to_string());
        score -= INFORMATION_ELEMENTS_PENALTY;
    }
    if message.release_version().is_none() {
        warnings.push("Missing 3GPP release version".to_string());
        score -= RELEASE_VERSION_PENALTY;
    }
    for (name, element) in message.elements() {
        score -= element_gaps(name, element, &mut errors, &mut warnings);
    }

    let (is_compliant, compliance_score) = settle(&errors, score);
    debug!(
        message_type = %message.message_type,
        score = compliance_score,
        errors = errors.len(),
        warnings = warnings.len(),
        "scored message"
    );
    MessageVerdict {
        is_compliant,
        errors,
        warnings,
        compliance_score,
    }
}

/// Records the per-IE findings and returns the total penalty.
pub(super) fn element_gaps(
    name: &str,
    element: &InformationElement,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> i32 {
    let mut penalty = 0;
    if element.ie_type.is_none() {
        errors.push(format!("IE {name} missing ASN.1 type"));
        penalty += IE_TYPE_PENALTY;
    }
    if element.presence.is_none() {
        errors.push(format!("IE {name} missing presence indication"));
        penalty += IE_PRESENCE_PENALTY;
    }
    if element.reference().is_none() {
        warnings.push(format!("IE {name} missing standard reference"));
        penalty += IE_REFERENCE_PENALTY;
    }
    penalty
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{IeValue, Presence};

    fn complete() -> Message {
        Message::new("RRCSetupRequest", "RRC Setup Request")
            .with_standard_reference("TS 38.331 6.2.2")
            .with_release_version("Release 17")
    }

    fn bare_element() -> InformationElement {
        InformationElement {
            ie_type: None,
            value: Some(IeValue::Integer(1)),
            size: None,
            range: None,
            criticality: None,
            presence: None,
            reference: None,
            validation: None,
        }
    }

    #[test]
    fn empty_message_scores_45() {
        let verdict = check_message(&Message::default());
        assert_eq!(
            verdict.errors,
            vec![
                "Missing standard reference".to_string(),
                "Missing Information Elements structure".to_string(),
            ]
        );
        assert_eq!(verdict.warnings, vec!["Missing 3GPP release version".to_string()]);
        assert_eq!(verdict.compliance_score, 45);
        assert!(!verdict.is_compliant);
    }

    #[test]
    fn warnings_alone_keep_message_compliant() {
        let mut message = complete().with_element(
            "ie",
            InformationElement::integer(3).with_reference("TS 38.331 6.3.2"),
        );
        message.release_version = None;
        let verdict = check_message(&message);
        assert!(verdict.errors.is_empty());
        assert_eq!(verdict.compliance_score, 95);
        assert!(verdict.is_compliant);
    }

    #[test]
    fn missing_type_is_an_error_even_above_threshold() {
        let mut element = bare_element();
        element.presence = Some(Presence::Mandatory);
        let verdict = check_message(&complete().with_element("ue-Identity", element));
        assert_eq!(verdict.errors, vec!["IE ue-Identity missing ASN.1 type".to_string()]);
        assert_eq!(
            verdict.warnings,
            vec!["IE ue-Identity missing standard reference".to_string()]
        );
        assert_eq!(verdict.compliance_score, 88);
        assert!(!verdict.is_compliant);
    }

    #[test]
    fn missing_type_and_reference_on_message_drops_to_70() {
        let mut element = bare_element();
        element.presence = Some(Presence::Optional);
        element.reference = Some("TS 38.331 6.3.2".to_string());
        let mut message = complete().with_element("cause", element);
        message.standard_reference = None;
        let verdict = check_message(&message);
        assert_eq!(verdict.compliance_score, 70);
        assert_eq!(verdict.errors.len(), 2);
        assert!(!verdict.is_compliant);
    }

    #[test]
    fn penalties_accumulate_below_zero_before_clamping() {
        let mut message = Message::default();
        for index in 0..5 {
            message = message.with_element(format!("ie{index}"), bare_element());
        }
        // 100 - 20 - 5 - 5 * (10 + 5 + 2) = -10
        let verdict = check_message(&message);
        assert_eq!(verdict.compliance_score, 0);
        assert_eq!(verdict.errors.len(), 1 + 10);
        assert_eq!(verdict.warnings.len(), 1 + 5);
    }

    #[test]
    fn empty_element_mapping_counts_as_missing() {
        let mut message = complete();
        message.information_elements = Some(Default::default());
        let verdict = check_message(&message);
        assert_eq!(
            verdict.errors,
            vec!["Missing Information Elements structure".to_string()]
        );
        assert_eq!(verdict.compliance_score, 70);
    }

    #[test]
    fn verdict_uses_camel_case_wire_names() {
        let value = serde_json::to_value(check_message(&Message::default())).expect("encode");
        assert_eq!(value["isCompliant"], false);
        assert_eq!(value["complianceScore"], 45);
    }

    #[test]
    fn blank_type_and_presence_are_scored_as_missing() {
        let raw = r#"{
            "standardReference": "TS 38.331 6.2.2",
            "releaseVersion": "Release 17",
            "informationElements": {
                "a": {"type": "", "value": 1, "presence": "mandatory", "reference": "TS 38.331 6.3.2"},
                "b": {"type": "INTEGER", "value": 2, "presence": "", "reference": "TS 38.331 6.3.2"}
            }
        }"#;
        let message: Message = serde_json::from_str(raw).expect("decode");
        let verdict = check_message(&message);
        assert_eq!(
            verdict.errors,
            vec![
                "IE a missing ASN.1 type".to_string(),
                "IE b missing presence indication".to_string(),
            ]
        );
        assert!(verdict.warnings.is_empty());
        assert_eq!(verdict.compliance_score, 85);
        assert!(!verdict.is_compliant);
    }
}
