use serde::{Deserialize, Serialize};
use tracing::debug;

use super::message::check_message;
use super::{FULL_SCORE, settle};
use crate::model::{ComplianceLevel, TestCase};

pub const CASE_STANDARD_REFERENCE_PENALTY: i32 = 20;
pub const CASE_RELEASE_VERSION_PENALTY: i32 = 15;
/// Flat penalty per non-compliant expected message, whatever its own score.
pub const NON_COMPLIANT_MESSAGE_PENALTY: i32 = 10;
/// Below this many steps a coverage recommendation is issued.
pub const MIN_RECOMMENDED_STEPS: usize = 3;

/// Compliance verdict for a whole test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCaseVerdict {
    pub is_compliant: bool,
    pub compliance_score: u32,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Validates a test case: case-level references, then every expected message.
///
/// Recommendations never affect the score.
///
/// # Examples
/// ```
/// use gppcheck_core::compliance::validate_test_case;
/// use gppcheck_core::model::TestCase;
///
/// let verdict = validate_test_case(&TestCase::default());
/// assert_eq!(verdict.compliance_score, 65);
/// assert_eq!(verdict.recommendations.len(), 2);
/// ```
pub fn validate_test_case(case: &TestCase) -> TestCaseVerdict {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut recommendations = Vec::new();
    let mut score = FULL_SCORE;

    if case.standard_reference().is_none() {
        errors.push("Missing standard reference".to_string());
        score -= CASE_STANDARD_REFERENCE_PENALTY;
    }
    if case.release_version().is_none() {
        errors.push("Missing 3GPP release version".to_string());
        score -= CASE_RELEASE_VERSION_PENALTY;
    }

    for message in &case.expected_messages {
        let verdict = check_message(message);
        if !verdict.is_compliant {
            errors.push(format!(
                "Message {}: {}",
                message.message_name,
                verdict.errors.join(", ")
            ));
            score -= NON_COMPLIANT_MESSAGE_PENALTY;
        }
        warnings.extend(
            verdict
                .warnings
                .iter()
                .map(|warning| format!("{}: {}", message.message_name, warning)),
        );
    }

    if case.compliance_level != Some(ComplianceLevel::FullyCompliant) {
        recommendations.push("Consider upgrading to FULLY_COMPLIANT level".to_string());
    }
    if case.test_steps.len() < MIN_RECOMMENDED_STEPS {
        recommendations.push("Add more test steps for comprehensive coverage".to_string());
    }

    let (is_compliant, compliance_score) = settle(&errors, score);
    debug!(
        test_case = %case.id,
        score = compliance_score,
        messages = case.expected_messages.len(),
        errors = errors.len(),
        "validated test case"
    );
    TestCaseVerdict {
        is_compliant,
        compliance_score,
        errors,
        warnings,
        recommendations,
    }
}
