use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::ModelError;
use super::ie::InformationElement;
use super::layer::LayerParameter;
use super::non_empty;

/// IE name to element, iterated in name order.
pub type ElementMap = BTreeMap<String, InformationElement>;
/// Parameter name to layer parameter.
pub type ParameterMap = BTreeMap<String, LayerParameter>;

/// A 3GPP protocol message instance.
///
/// # Examples
/// ```
/// use gppcheck_core::model::{InformationElement, Message};
///
/// let message = Message::new("RRCSetupRequest", "RRC Setup Request")
///     .with_standard_reference("TS 38.331 6.2.2")
///     .with_release_version("Release 17")
///     .with_element("spare", InformationElement::bit_string("0", 1));
/// assert!(message.has_elements());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(default)]
    pub message_type: String,
    #[serde(default)]
    pub message_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub information_elements: Option<ElementMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_parameters: Option<ParameterMap>,
}

impl Message {
    pub fn new(message_type: impl Into<String>, message_name: impl Into<String>) -> Self {
        Self {
            message_type: message_type.into(),
            message_name: message_name.into(),
            ..Self::default()
        }
    }

    pub fn with_standard_reference(mut self, reference: impl Into<String>) -> Self {
        self.standard_reference = Some(reference.into());
        self
    }

    pub fn with_release_version(mut self, release: impl Into<String>) -> Self {
        self.release_version = Some(release.into());
        self
    }

    pub fn with_element(mut self, name: impl Into<String>, element: InformationElement) -> Self {
        self.information_elements
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), element);
        self
    }

    pub fn with_layer_parameters(mut self, parameters: ParameterMap) -> Self {
        self.layer_parameters
            .get_or_insert_with(BTreeMap::new)
            .extend(parameters);
        self
    }

    pub fn standard_reference(&self) -> Option<&str> {
        non_empty(&self.standard_reference)
    }

    pub fn release_version(&self) -> Option<&str> {
        non_empty(&self.release_version)
    }

    /// True when the IE mapping is present and holds at least one element.
    pub fn has_elements(&self) -> bool {
        self.information_elements
            .as_ref()
            .is_some_and(|elements| !elements.is_empty())
    }

    pub fn elements(&self) -> impl Iterator<Item = (&String, &InformationElement)> {
        self.information_elements.iter().flatten()
    }

    pub fn parameters(&self) -> impl Iterator<Item = (&String, &LayerParameter)> {
        self.layer_parameters.iter().flatten()
    }

    /// Rejects messages whose IE mapping is empty or whose top-level
    /// elements lack type, presence or reference.
    pub(crate) fn require_complete(&self) -> Result<(), ModelError> {
        if !self.has_elements() {
            return Err(ModelError::EmptyMessage {
                message: self.message_name.clone(),
            });
        }
        for (name, element) in self.elements() {
            let missing = if element.ie_type.is_none() {
                Some("type")
            } else if element.presence.is_none() {
                Some("presence")
            } else if element.reference().is_none() {
                Some("reference")
            } else {
                None
            };
            if let Some(field) = missing {
                return Err(ModelError::IncompleteElement {
                    message: self.message_name.clone(),
                    ie: name.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_decodes_with_everything_absent() {
        let message: Message = serde_json::from_str("{}").expect("decode");
        assert_eq!(message.standard_reference(), None);
        assert_eq!(message.release_version(), None);
        assert!(!message.has_elements());
        assert_eq!(message.elements().count(), 0);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let message = Message::new("RRCSetup", "RRC Setup")
            .with_standard_reference("TS 38.331 6.2.2")
            .with_element(
                "rrcSetup",
                InformationElement::sequence(Vec::<(String, InformationElement)>::new()),
            );
        let value = serde_json::to_value(&message).expect("encode");
        assert_eq!(value["messageType"], "RRCSetup");
        assert_eq!(value["standardReference"], "TS 38.331 6.2.2");
        assert!(value["informationElements"]["rrcSetup"].is_object());
        assert!(value.get("releaseVersion").is_none());
        assert!(value.get("layerParameters").is_none());
    }

    #[test]
    fn require_complete_names_first_missing_field() {
        let message = Message::new("X", "Example")
            .with_element("a", InformationElement::integer(1).with_reference("TS 1"))
            .with_element("b", InformationElement::integer(2));
        let err = message.require_complete().unwrap_err();
        assert_eq!(
            err,
            ModelError::IncompleteElement {
                message: "Example".to_string(),
                ie: "b".to_string(),
                field: "reference",
            }
        );

        let empty = Message::new("Y", "Empty");
        assert_eq!(
            empty.require_complete().unwrap_err(),
            ModelError::EmptyMessage {
                message: "Empty".to_string()
            }
        );
    }
}
