use serde::{Deserialize, Serialize};

use super::message::element_gaps;
use super::range::RangeSpec;
use crate::model::{
    IeType, IeValidation, IeValue, InformationElement, LayerParameter, Message, ParamValue,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Score-neutral finding about one IE, nested member or layer parameter.
///
/// `path` joins member names with `.` and list positions with `[i]`,
/// starting at the top-level IE name (`rrcSetup.criticalExtensions`).
/// Layer parameters use `layerParameters.<name>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementFinding {
    pub path: String,
    pub severity: Severity,
    pub message: String,
}

/// Walks every element of `message`, nested members and list items included.
///
/// Checks value shape against declared type, CHOICE arity, integer and
/// enumeration ranges, layer parameter ranges, and the type of nested
/// members. Top-level type/presence/reference gaps are left to
/// [`super::check_message`].
///
/// # Examples
/// ```
/// use gppcheck_core::compliance::{Severity, inspect_message};
/// use gppcheck_core::model::{InformationElement, Message};
///
/// let message = Message::new("PRACH", "PRACH Preamble")
///     .with_element("preamble-Id", InformationElement::integer(64).with_range("0..63"));
/// let findings = inspect_message(&message);
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].severity, Severity::Warning);
/// ```
pub fn inspect_message(message: &Message) -> Vec<ElementFinding> {
    let mut findings = Vec::new();
    for (name, element) in message.elements() {
        inspect_element(name, element, true, &mut findings);
    }
    for (name, parameter) in message.parameters() {
        inspect_parameter(&format!("layerParameters.{name}"), parameter, &mut findings);
    }
    findings
}

/// Returns a copy of `message` whose top-level IEs carry a `validation`
/// record: the scorer's per-IE rules plus inspector findings under that IE.
pub fn annotate_message(message: &Message) -> Message {
    let findings = inspect_message(message);
    let mut annotated = message.clone();

    if let Some(elements) = annotated.information_elements.as_mut() {
        for (name, element) in elements.iter_mut() {
            let mut errors = Vec::new();
            let mut warnings = Vec::new();
            element_gaps(name, element, &mut errors, &mut warnings);

            for finding in findings.iter().filter(|finding| is_under(&finding.path, name)) {
                let text = if finding.path == *name {
                    finding.message.clone()
                } else {
                    format!("{}: {}", finding.path, finding.message)
                };
                match finding.severity {
                    Severity::Error => errors.push(text),
                    Severity::Warning => warnings.push(text),
                }
            }

            element.validation = Some(IeValidation {
                valid: errors.is_empty(),
                errors,
                warnings,
            });
        }
    }

    annotated
}

fn is_under(path: &str, name: &str) -> bool {
    match path.strip_prefix(name) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}

fn inspect_element(
    path: &str,
    element: &InformationElement,
    top_level: bool,
    findings: &mut Vec<ElementFinding>,
) {
    if !top_level && element.ie_type.is_none() {
        push(findings, path, Severity::Error, "missing ASN.1 type".to_string());
    }

    if let (Some(ie_type), Some(value)) = (element.ie_type, element.value.as_ref()) {
        match ie_type.check_value(value) {
            Ok(()) => check_range(path, ie_type, value, element.range(), findings),
            Err(err) => push(findings, path, Severity::Error, err.to_string()),
        }
    }

    if let Some(value) = element.value.as_ref() {
        inspect_nested(path, value, findings);
    }
}

fn inspect_nested(path: &str, value: &IeValue, findings: &mut Vec<ElementFinding>) {
    match value {
        IeValue::Members(members) => {
            for (name, member) in members {
                inspect_element(&format!("{path}.{name}"), member, false, findings);
            }
        }
        IeValue::List(items) => {
            for (index, item) in items.iter().enumerate() {
                inspect_nested(&format!("{path}[{index}]"), item, findings);
            }
        }
        IeValue::Boolean(_) | IeValue::Integer(_) | IeValue::Text(_) => {}
    }
}

fn check_range(
    path: &str,
    ie_type: IeType,
    value: &IeValue,
    range: Option<&str>,
    findings: &mut Vec<ElementFinding>,
) {
    let Some(range) = range else {
        return;
    };
    let spec = RangeSpec::parse(range);
    match (ie_type, value) {
        (IeType::Integer, IeValue::Integer(number)) => {
            if spec.admits_number(*number as f64) == Some(false) {
                push(
                    findings,
                    path,
                    Severity::Warning,
                    format!("value {number} outside range {range}"),
                );
            }
        }
        (IeType::Enumerated, IeValue::Text(label)) => {
            if spec.admits_label(label) == Some(false) {
                push(
                    findings,
                    path,
                    Severity::Warning,
                    format!("value {label} not in enumeration"),
                );
            }
        }
        _ => {}
    }
}

fn inspect_parameter(path: &str, parameter: &LayerParameter, findings: &mut Vec<ElementFinding>) {
    let spec = RangeSpec::parse(&parameter.range);
    let outside = match &parameter.value {
        ParamValue::Number(number) => spec.admits_number(*number) == Some(false),
        ParamValue::Text(label) => spec.admits_label(label) == Some(false),
    };
    if outside {
        let shown = match &parameter.value {
            ParamValue::Number(number) => number.to_string(),
            ParamValue::Text(label) => label.clone(),
        };
        push(
            findings,
            path,
            Severity::Warning,
            format!("value {shown} outside range {}", parameter.range),
        );
    }
}

fn push(findings: &mut Vec<ElementFinding>, path: &str, severity: Severity, message: String) {
    findings.push(ElementFinding {
        path: path.to_string(),
        severity,
        message,
    });
}
