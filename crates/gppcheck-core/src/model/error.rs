use thiserror::Error;

use super::ie::IeType;
use super::test_case::TimelineIssue;

/// Errors returned by the smart constructors and [`super::TestCaseBuilder`].
///
/// # Examples
/// ```
/// use gppcheck_core::model::{IeType, IeValue, InformationElement};
///
/// let err = InformationElement::new(IeType::Integer, IeValue::Boolean(true)).unwrap_err();
/// assert!(err.to_string().contains("INTEGER"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("{ie_type} value must be {expected}, got {actual}")]
    ValueMismatch {
        ie_type: IeType,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("CHOICE value must select exactly one alternative, got {count}")]
    ChoiceArity { count: usize },
    #[error("message {message} has no information elements")]
    EmptyMessage { message: String },
    #[error("IE {ie} in message {message} is missing {field}")]
    IncompleteElement {
        message: String,
        ie: String,
        field: &'static str,
    },
    #[error(transparent)]
    Timeline(#[from] TimelineIssue),
}
