use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::TestCategory;
use super::error::ModelError;
use super::layer::Layer;
use super::message::Message;
use super::non_empty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Ul,
    Dl,
}

/// Self-declared compliance tier of a test case. Never derived by a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceLevel {
    FullyCompliant,
    MostlyCompliant,
    BasicCompliant,
}

/// One step of a procedure flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestStep {
    pub step_id: String,
    pub step_order: u32,
    pub timestamp_ms: u64,
    pub direction: Direction,
    pub layer: Layer,
    pub protocol: String,
    pub message: Message,
    pub expected_response_time_ms: u64,
    pub max_response_time_ms: u64,
    #[serde(default)]
    pub success_criteria: Vec<String>,
    #[serde(default)]
    pub failure_criteria: Vec<String>,
}

impl TestStep {
    /// Creates a step at t=0 with an empty response window; the order is
    /// assigned by [`TestCaseBuilder::step`].
    pub fn new(
        step_id: impl Into<String>,
        direction: Direction,
        layer: Layer,
        protocol: impl Into<String>,
        message: Message,
    ) -> Self {
        Self {
            step_id: step_id.into(),
            step_order: 0,
            timestamp_ms: 0,
            direction,
            layer,
            protocol: protocol.into(),
            message,
            expected_response_time_ms: 0,
            max_response_time_ms: 0,
            success_criteria: Vec::new(),
            failure_criteria: Vec::new(),
        }
    }

    pub fn at(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    pub fn response_window(mut self, expected_ms: u64, max_ms: u64) -> Self {
        self.expected_response_time_ms = expected_ms;
        self.max_response_time_ms = max_ms;
        self
    }

    pub fn success_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.success_criteria = criteria.into_iter().map(Into::into).collect();
        self
    }

    pub fn failure_criteria<I, S>(mut self, criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.failure_criteria = criteria.into_iter().map(Into::into).collect();
        self
    }
}

/// Inconsistency in the ordering or timing of test steps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineIssue {
    #[error("step {step_id}: stepOrder {actual} does not match position {expected}")]
    OrderMismatch {
        step_id: String,
        expected: u32,
        actual: u32,
    },
    #[error("step {step_id}: timestamp {timestamp_ms}ms is before previous step at {previous_ms}ms")]
    TimestampRegression {
        step_id: String,
        previous_ms: u64,
        timestamp_ms: u64,
    },
    #[error("step {step_id}: max response time {max_ms}ms is below expected {expected_ms}ms")]
    ResponseWindow {
        step_id: String,
        expected_ms: u64,
        max_ms: u64,
    },
}

/// Aggregate test case: expected messages in procedure order plus steps.
///
/// # Examples
/// ```
/// use gppcheck_core::model::{ComplianceLevel, TestCase};
///
/// let case = TestCase::builder("TC_001", "Empty flow")
///     .standard_reference("TS 38.331 5.3.3")
///     .release_version("Release 17")
///     .compliance_level(ComplianceLevel::BasicCompliant)
///     .build()
///     .expect("valid test case");
/// assert!(case.test_steps.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub protocol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_version: Option<String>,
    #[serde(default)]
    pub expected_messages: Vec<Message>,
    #[serde(default)]
    pub expected_outcome: String,
    #[serde(default)]
    pub test_steps: Vec<TestStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_level: Option<ComplianceLevel>,
}

impl TestCase {
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> TestCaseBuilder {
        TestCaseBuilder {
            case: TestCase {
                id: id.into(),
                name: name.into(),
                ..TestCase::default()
            },
        }
    }

    pub fn standard_reference(&self) -> Option<&str> {
        non_empty(&self.standard_reference)
    }

    pub fn release_version(&self) -> Option<&str> {
        non_empty(&self.release_version)
    }

    pub fn category_group(&self) -> TestCategory {
        TestCategory::from_label(&self.category)
    }

    /// Lists step ordering and timing problems without rejecting the case.
    pub fn timeline_issues(&self) -> Vec<TimelineIssue> {
        let mut issues = Vec::new();
        let mut previous_ms: Option<u64> = None;

        for (index, step) in self.test_steps.iter().enumerate() {
            let expected = index as u32 + 1;
            if step.step_order != expected {
                issues.push(TimelineIssue::OrderMismatch {
                    step_id: step.step_id.clone(),
                    expected,
                    actual: step.step_order,
                });
            }
            if let Some(previous) = previous_ms {
                if step.timestamp_ms < previous {
                    issues.push(TimelineIssue::TimestampRegression {
                        step_id: step.step_id.clone(),
                        previous_ms: previous,
                        timestamp_ms: step.timestamp_ms,
                    });
                }
            }
            if step.max_response_time_ms < step.expected_response_time_ms {
                issues.push(TimelineIssue::ResponseWindow {
                    step_id: step.step_id.clone(),
                    expected_ms: step.expected_response_time_ms,
                    max_ms: step.max_response_time_ms,
                });
            }
            previous_ms = Some(step.timestamp_ms);
        }

        issues
    }
}

/// Smart constructor for [`TestCase`].
///
/// Steps receive their `stepOrder` from their position. `build` rejects
/// incomplete messages and inconsistent timelines.
#[derive(Debug, Clone)]
pub struct TestCaseBuilder {
    case: TestCase,
}

impl TestCaseBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.case.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.case.category = category.into();
        self
    }

    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.case.protocol = protocol.into();
        self
    }

    pub fn standard_reference(mut self, reference: impl Into<String>) -> Self {
        self.case.standard_reference = Some(reference.into());
        self
    }

    pub fn release_version(mut self, release: impl Into<String>) -> Self {
        self.case.release_version = Some(release.into());
        self
    }

    pub fn compliance_level(mut self, level: ComplianceLevel) -> Self {
        self.case.compliance_level = Some(level);
        self
    }

    pub fn expected_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.case.expected_outcome = outcome.into();
        self
    }

    pub fn expected_message(mut self, message: Message) -> Self {
        self.case.expected_messages.push(message);
        self
    }

    pub fn step(mut self, mut step: TestStep) -> Self {
        step.step_order = self.case.test_steps.len() as u32 + 1;
        self.case.test_steps.push(step);
        self
    }

    pub fn build(self) -> Result<TestCase, ModelError> {
        let case = self.case;
        for message in &case.expected_messages {
            message.require_complete()?;
        }
        for step in &case.test_steps {
            step.message.require_complete()?;
        }
        if let Some(issue) = case.timeline_issues().into_iter().next() {
            return Err(issue.into());
        }
        Ok(case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InformationElement;

    fn message(name: &str) -> Message {
        Message::new(name, name)
            .with_standard_reference("TS 38.331 6.2.2")
            .with_release_version("Release 17")
            .with_element(
                "ie",
                InformationElement::integer(1).with_reference("TS 38.331 6.3.2"),
            )
    }

    fn step(id: &str, at: u64) -> TestStep {
        TestStep::new(id, Direction::Ul, Layer::Rrc, "5G_NR", message(id))
            .at(at)
            .response_window(10, 20)
    }

    #[test]
    fn builder_assigns_step_order_from_position() {
        let case = TestCase::builder("TC", "flow")
            .step(step("a", 0))
            .step(step("b", 5))
            .step(step("c", 5))
            .build()
            .expect("valid");
        let orders: Vec<u32> = case.test_steps.iter().map(|s| s.step_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert!(case.timeline_issues().is_empty());
    }

    #[test]
    fn builder_rejects_timestamp_regression() {
        let err = TestCase::builder("TC", "flow")
            .step(step("a", 10))
            .step(step("b", 5))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::Timeline(TimelineIssue::TimestampRegression {
                step_id: "b".to_string(),
                previous_ms: 10,
                timestamp_ms: 5,
            })
        );
    }

    #[test]
    fn builder_rejects_inverted_response_window() {
        let err = TestCase::builder("TC", "flow")
            .step(step("a", 0).response_window(50, 10))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("max response time 10ms"));
    }

    #[test]
    fn builder_rejects_incomplete_expected_message() {
        let err = TestCase::builder("TC", "flow")
            .expected_message(Message::new("X", "Bare"))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::EmptyMessage {
                message: "Bare".to_string()
            }
        );
    }

    #[test]
    fn timeline_issues_report_decoded_order_mismatch() {
        let mut case = TestCase::default();
        let mut first = step("a", 0);
        first.step_order = 2;
        case.test_steps.push(first);
        let issues = case.timeline_issues();
        assert_eq!(
            issues,
            vec![TimelineIssue::OrderMismatch {
                step_id: "a".to_string(),
                expected: 1,
                actual: 2,
            }]
        );
    }

    #[test]
    fn category_group_falls_back_to_other() {
        let case = TestCase::builder("TC", "flow")
            .category("5G_NR")
            .build()
            .expect("valid");
        assert_eq!(case.category_group(), TestCategory::Other);
    }

    #[test]
    fn compliance_level_wire_names() {
        let value = serde_json::to_value(ComplianceLevel::MostlyCompliant).expect("encode");
        assert_eq!(value, "MOSTLY_COMPLIANT");
        let direction: Direction = serde_json::from_str("\"DL\"").expect("decode");
        assert_eq!(direction, Direction::Dl);
    }
}
