//! Structural compliance checks.
//!
//! - `message`: scores one message against the IE presence rules.
//! - `test_case`: aggregates message verdicts into a test-case verdict.
//! - `element`: score-neutral inspection of IE values, ranges and nesting.
//! - `range`: parsing of free-text IE / parameter ranges.
//!
//! Checks never fail: every finding becomes an error or warning string, and
//! every element and message is evaluated regardless of earlier findings.
//! Penalties are additive; the score is clamped at zero only after all
//! penalties are applied.

mod element;
mod message;
mod range;
mod test_case;

pub use element::{ElementFinding, Severity, annotate_message, inspect_message};
pub use message::{
    IE_PRESENCE_PENALTY, IE_REFERENCE_PENALTY, IE_TYPE_PENALTY, INFORMATION_ELEMENTS_PENALTY,
    MessageVerdict, RELEASE_VERSION_PENALTY, STANDARD_REFERENCE_PENALTY, check_message,
};
pub use range::RangeSpec;
pub use test_case::{
    CASE_RELEASE_VERSION_PENALTY, CASE_STANDARD_REFERENCE_PENALTY, MIN_RECOMMENDED_STEPS,
    NON_COMPLIANT_MESSAGE_PENALTY, TestCaseVerdict, validate_test_case,
};

/// Starting score of every check.
pub const FULL_SCORE: i32 = 100;
/// Minimum (unclamped) score for a compliant verdict.
pub const COMPLIANCE_THRESHOLD: i32 = 80;

/// Applies the compliance gate, then clamps the score at zero.
fn settle(errors: &[String], score: i32) -> (bool, u32) {
    let is_compliant = errors.is_empty() && score >= COMPLIANCE_THRESHOLD;
    (is_compliant, score.max(0) as u32)
}

#[cfg(test)]
mod tests {
    use super::settle;

    #[test]
    fn settle_requires_no_errors_and_threshold() {
        assert_eq!(settle(&[], 80), (true, 80));
        assert_eq!(settle(&[], 79), (false, 79));
        assert_eq!(settle(&["e".to_string()], 95), (false, 95));
    }

    #[test]
    fn settle_clamps_negative_scores() {
        assert_eq!(settle(&["e".to_string()], -15), (false, 0));
    }
}
