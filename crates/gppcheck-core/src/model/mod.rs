//! Canonical shapes of 3GPP protocol messages and test cases.
//!
//! The model is the shared vocabulary between the message factory and the
//! compliance checks. Every type is a plain value: constructed once, never
//! mutated by the checks, and JSON-serializable with camelCase field names.
//!
//! Fields whose absence is itself a compliance finding (standard reference,
//! release version, IE type/presence/reference, ...) are `Option`s so that
//! incomplete documents decode and can be scored. Smart constructors and
//! [`TestCaseBuilder`] always populate them.

mod category;
mod error;
mod ie;
mod layer;
mod message;
mod test_case;

pub use category::TestCategory;
pub use error::ModelError;
pub use ie::{Criticality, IeSize, IeType, IeValidation, IeValue, InformationElement, Presence};
pub use layer::{Layer, LayerParameter, ParamValue};
pub use message::{ElementMap, Message, ParameterMap};
pub use test_case::{
    ComplianceLevel, Direction, TestCase, TestCaseBuilder, TestStep, TimelineIssue,
};

/// Treats empty strings the same as missing ones.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::non_empty;

    #[test]
    fn non_empty_filters_blank_strings() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("TS 38.331".to_string())), Some("TS 38.331"));
    }
}
