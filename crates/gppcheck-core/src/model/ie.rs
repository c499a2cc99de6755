use std::collections::BTreeMap;
use std::fmt;

use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ModelError;
use super::non_empty;

/// ASN.1-like kind of an information element.
///
/// Wire names use underscores (`BIT_STRING`); the spaced spelling used by
/// ASN.1 text (`BIT STRING`) is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IeType {
    Sequence,
    Choice,
    Integer,
    #[serde(alias = "BIT STRING")]
    BitString,
    #[serde(alias = "OCTET STRING")]
    OctetString,
    Enumerated,
    Boolean,
    #[serde(alias = "SEQUENCE OF")]
    SequenceOf,
}

impl IeType {
    pub fn as_str(self) -> &'static str {
        match self {
            IeType::Sequence => "SEQUENCE",
            IeType::Choice => "CHOICE",
            IeType::Integer => "INTEGER",
            IeType::BitString => "BIT_STRING",
            IeType::OctetString => "OCTET_STRING",
            IeType::Enumerated => "ENUMERATED",
            IeType::Boolean => "BOOLEAN",
            IeType::SequenceOf => "SEQUENCE_OF",
        }
    }

    /// Value shape this type requires (see [`IeValue::shape`]).
    pub fn expected_shape(self) -> &'static str {
        match self {
            IeType::Sequence | IeType::Choice => "members",
            IeType::Integer => "integer",
            IeType::Boolean => "boolean",
            IeType::BitString | IeType::OctetString | IeType::Enumerated => "text",
            IeType::SequenceOf => "list",
        }
    }

    /// Checks that `value` has the shape this type requires.
    ///
    /// A CHOICE carries its selected alternative as a single member.
    pub fn check_value(self, value: &IeValue) -> Result<(), ModelError> {
        if value.shape() != self.expected_shape() {
            return Err(ModelError::ValueMismatch {
                ie_type: self,
                expected: self.expected_shape(),
                actual: value.shape(),
            });
        }
        if let (IeType::Choice, IeValue::Members(members)) = (self, value) {
            if members.len() != 1 {
                return Err(ModelError::ChoiceArity {
                    count: members.len(),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for IeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Mandatory,
    Optional,
    Conditional,
}

/// Signalling criticality. Carried for documentation only; no check reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    Reject,
    Ignore,
    Notify,
}

/// Bit length or symbolic size descriptor (`"1..maxNrofSRBs"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IeSize {
    Bits(u32),
    Symbolic(String),
}

/// Decoded IE value.
///
/// `Members` holds the named components of a SEQUENCE, or the single
/// selected alternative of a CHOICE. Anything that is not a scalar, a list or
/// a mapping of well-formed IEs fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IeValue {
    Boolean(bool),
    Integer(i64),
    Text(String),
    List(Vec<IeValue>),
    Members(BTreeMap<String, InformationElement>),
}

impl IeValue {
    pub fn shape(&self) -> &'static str {
        match self {
            IeValue::Boolean(_) => "boolean",
            IeValue::Integer(_) => "integer",
            IeValue::Text(_) => "text",
            IeValue::List(_) => "list",
            IeValue::Members(_) => "members",
        }
    }

    pub fn members<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, InformationElement)>,
        K: Into<String>,
    {
        IeValue::Members(
            members
                .into_iter()
                .map(|(name, element)| (name.into(), element))
                .collect(),
        )
    }
}

/// Result of a per-element check, attached to an IE after the fact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IeValidation {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// A named, typed field of a 3GPP message.
///
/// # Examples
/// ```
/// use gppcheck_core::model::{Criticality, InformationElement, IeType};
///
/// let ie = InformationElement::integer(1)
///     .with_range("0..3")
///     .with_criticality(Criticality::Reject)
///     .with_reference("TS 38.331 6.3.2");
/// assert_eq!(ie.ie_type, Some(IeType::Integer));
/// assert_eq!(ie.reference(), Some("TS 38.331 6.3.2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InformationElement {
    #[serde(
        rename = "type",
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub ie_type: Option<IeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<IeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<IeSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<Criticality>,
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub presence: Option<Presence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<IeValidation>,
}

impl InformationElement {
    /// Builds a mandatory element after checking the value against the type.
    pub fn new(ie_type: IeType, value: IeValue) -> Result<Self, ModelError> {
        ie_type.check_value(&value)?;
        Ok(Self::typed(ie_type, value))
    }

    fn typed(ie_type: IeType, value: IeValue) -> Self {
        Self {
            ie_type: Some(ie_type),
            value: Some(value),
            size: None,
            range: None,
            criticality: None,
            presence: Some(Presence::Mandatory),
            reference: None,
            validation: None,
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(IeType::Integer, IeValue::Integer(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::typed(IeType::Boolean, IeValue::Boolean(value))
    }

    pub fn enumerated(value: impl Into<String>) -> Self {
        Self::typed(IeType::Enumerated, IeValue::Text(value.into()))
    }

    pub fn bit_string(value: impl Into<String>, bits: u32) -> Self {
        Self::typed(IeType::BitString, IeValue::Text(value.into())).with_size(IeSize::Bits(bits))
    }

    pub fn octet_string(value: impl Into<String>) -> Self {
        Self::typed(IeType::OctetString, IeValue::Text(value.into()))
    }

    pub fn sequence<I, K>(members: I) -> Self
    where
        I: IntoIterator<Item = (K, InformationElement)>,
        K: Into<String>,
    {
        Self::typed(IeType::Sequence, IeValue::members(members))
    }

    pub fn choice(alternative: impl Into<String>, element: InformationElement) -> Self {
        Self::typed(IeType::Choice, IeValue::members([(alternative, element)]))
    }

    pub fn sequence_of(items: Vec<IeValue>) -> Self {
        Self::typed(IeType::SequenceOf, IeValue::List(items))
    }

    pub fn with_size(mut self, size: IeSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    pub fn with_criticality(mut self, criticality: Criticality) -> Self {
        self.criticality = Some(criticality);
        self
    }

    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = Some(presence);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn reference(&self) -> Option<&str> {
        non_empty(&self.reference)
    }

    pub fn range(&self) -> Option<&str> {
        non_empty(&self.range)
    }
}

/// Reads an optional keyword field, treating `""` like a missing one.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) if !text.is_empty() => T::deserialize(text.into_deserializer()).map(Some),
        _ => Ok(None),
    }
}
