use crate::model::{InformationElement, Layer, LayerParameter, Message, ParameterMap};

use super::RELEASE_17;

const TS_24_501_MESSAGE: &str = "TS 24.501 8.2.6";
const REGISTRATION_TYPE_REF: &str = "TS 24.501 9.11.3.7";
const KSI_REF: &str = "TS 24.501 9.11.3.32";
const KSI_RANGE: &str = "0..7";
/// Extended protocol discriminator of 5GMM messages.
const EPD_5GMM: i64 = 0x7E;
const PLAIN_NAS: i64 = 0;
const REGISTRATION_REQUEST_TYPE: i64 = 0x41;

/// 5GS registration type (TS 24.501 9.11.3.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegistrationType {
    #[default]
    InitialRegistration,
    MobilityRegistrationUpdating,
    PeriodicRegistrationUpdating,
    EmergencyRegistration,
}

impl RegistrationType {
    pub const ALL: [RegistrationType; 4] = [
        RegistrationType::InitialRegistration,
        RegistrationType::MobilityRegistrationUpdating,
        RegistrationType::PeriodicRegistrationUpdating,
        RegistrationType::EmergencyRegistration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegistrationType::InitialRegistration => "initial-registration",
            RegistrationType::MobilityRegistrationUpdating => "mobility-registration-updating",
            RegistrationType::PeriodicRegistrationUpdating => "periodic-registration-updating",
            RegistrationType::EmergencyRegistration => "emergency-registration",
        }
    }

    fn range() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Subscription concealed identifier with the null protection scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suci {
    pub mcc: String,
    pub mnc: String,
    pub routing_indicator: String,
    pub msin: String,
}

impl Default for Suci {
    fn default() -> Self {
        Self {
            mcc: "001".to_string(),
            mnc: "01".to_string(),
            routing_indicator: "0000".to_string(),
            msin: "0123456789".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationParams {
    pub registration_type: RegistrationType,
    /// NAS key set identifier; 7 means no key is available.
    pub ksi: u8,
    pub suci: Suci,
}

impl Default for RegistrationParams {
    fn default() -> Self {
        Self {
            registration_type: RegistrationType::default(),
            ksi: 7,
            suci: Suci::default(),
        }
    }
}

/// Plain 5GMM Registration Request for an initial registration with no
/// key available.
pub fn registration_request() -> Message {
    registration_request_with(&RegistrationParams::default())
}

pub fn registration_request_with(params: &RegistrationParams) -> Message {
    let header = |value: i64, range: &str, reference: &str| {
        InformationElement::integer(value)
            .with_range(range)
            .with_reference(reference)
    };

    let registration_type = InformationElement::sequence([
        (
            "for",
            InformationElement::enumerated(params.registration_type.as_str())
                .with_range(RegistrationType::range()),
        ),
        (
            "ksi",
            InformationElement::integer(i64::from(params.ksi)).with_range(KSI_RANGE),
        ),
    ])
    .with_reference(REGISTRATION_TYPE_REF);

    let suci = &params.suci;
    let mobile_identity = InformationElement::choice(
        "suci",
        InformationElement::sequence([
            ("supiFormat", InformationElement::enumerated("imsi")),
            ("mcc", InformationElement::octet_string(suci.mcc.as_str())),
            ("mnc", InformationElement::octet_string(suci.mnc.as_str())),
            (
                "routingIndicator",
                InformationElement::octet_string(suci.routing_indicator.as_str()),
            ),
            ("protectionScheme", InformationElement::enumerated("null-scheme")),
            ("msin", InformationElement::octet_string(suci.msin.as_str())),
        ]),
    )
    .with_reference("TS 24.501 9.11.3.4");

    let mut parameters = ParameterMap::new();
    parameters.insert(
        "registrationType".to_string(),
        LayerParameter::new(
            Layer::Nas,
            params.registration_type.as_str(),
            RegistrationType::range(),
            REGISTRATION_TYPE_REF,
        ),
    );
    parameters.insert(
        "keySetIdentifier".to_string(),
        LayerParameter::new(Layer::Nas, i64::from(params.ksi), KSI_RANGE, KSI_REF),
    );

    Message::new("RegistrationRequest", "Registration Request")
        .with_standard_reference(TS_24_501_MESSAGE)
        .with_release_version(RELEASE_17)
        .with_element(
            "extendedProtocolDiscriminator",
            header(EPD_5GMM, "0..255", "TS 24.007 11.2.3.1.1"),
        )
        .with_element(
            "securityHeaderType",
            header(PLAIN_NAS, "0..15", "TS 24.007 11.2.3.1.2"),
        )
        .with_element(
            "messageType",
            header(REGISTRATION_REQUEST_TYPE, "0..255", "TS 24.501 9.7"),
        )
        .with_element("5gsRegistrationType", registration_type)
        .with_element("5gsMobileIdentity", mobile_identity)
        .with_layer_parameters(parameters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{check_message, inspect_message};
    use crate::model::ParamValue;

    #[test]
    fn canonical_registration_request_is_clean() {
        let message = registration_request();
        let verdict = check_message(&message);
        assert!(verdict.is_compliant);
        assert_eq!(verdict.compliance_score, 100);
        assert!(inspect_message(&message).is_empty());
        assert_eq!(message.elements().count(), 5);
    }

    #[test]
    fn header_values_match_5gmm_registration() {
        let value = serde_json::to_value(registration_request()).expect("encode");
        let elements = &value["informationElements"];
        assert_eq!(elements["extendedProtocolDiscriminator"]["value"], 126);
        assert_eq!(elements["messageType"]["value"], 65);
        assert_eq!(
            elements["5gsMobileIdentity"]["value"]["suci"]["value"]["msin"]["value"],
            "0123456789"
        );
    }

    #[test]
    fn params_flow_into_elements_and_layer_parameters() {
        let params = RegistrationParams {
            registration_type: RegistrationType::PeriodicRegistrationUpdating,
            ksi: 3,
            ..RegistrationParams::default()
        };
        let message = registration_request_with(&params);
        let parameters = message.layer_parameters.as_ref().expect("parameters");
        assert_eq!(
            parameters["registrationType"].value,
            ParamValue::Text("periodic-registration-updating".to_string())
        );
        assert_eq!(parameters["keySetIdentifier"].value, ParamValue::Number(3.0));
        assert_eq!(parameters["keySetIdentifier"].layer, Layer::Nas);
    }

    #[test]
    fn out_of_range_ksi_is_flagged() {
        let params = RegistrationParams {
            ksi: 9,
            ..RegistrationParams::default()
        };
        let paths: Vec<String> = inspect_message(&registration_request_with(&params))
            .into_iter()
            .map(|finding| finding.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "5gsRegistrationType.ksi".to_string(),
                "layerParameters.keySetIdentifier".to_string(),
            ]
        );
    }
}
