use crate::model::{Criticality, IeValue, InformationElement, Message};

use super::RELEASE_17;

const TS_38_331_MESSAGES: &str = "TS 38.331 6.2.2";
const TS_38_331_IES: &str = "TS 38.331 6.3.2";
const UE_IDENTITY_BITS: u32 = 39;
const RRC_TRANSACTION_RANGE: &str = "0..3";

/// Establishment cause carried by RRC Setup Request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EstablishmentCause {
    Emergency,
    HighPriorityAccess,
    MtAccess,
    MoSignalling,
    #[default]
    MoData,
    MoVoiceCall,
    MoVideoCall,
    MoSms,
}

impl EstablishmentCause {
    pub const ALL: [EstablishmentCause; 8] = [
        EstablishmentCause::Emergency,
        EstablishmentCause::HighPriorityAccess,
        EstablishmentCause::MtAccess,
        EstablishmentCause::MoSignalling,
        EstablishmentCause::MoData,
        EstablishmentCause::MoVoiceCall,
        EstablishmentCause::MoVideoCall,
        EstablishmentCause::MoSms,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EstablishmentCause::Emergency => "emergency",
            EstablishmentCause::HighPriorityAccess => "highPriorityAccess",
            EstablishmentCause::MtAccess => "mt-Access",
            EstablishmentCause::MoSignalling => "mo-Signalling",
            EstablishmentCause::MoData => "mo-Data",
            EstablishmentCause::MoVoiceCall => "mo-VoiceCall",
            EstablishmentCause::MoVideoCall => "mo-VideoCall",
            EstablishmentCause::MoSms => "mo-SMS",
        }
    }

    fn range() -> String {
        Self::ALL
            .iter()
            .map(|cause| cause.as_str())
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// Initial UE identity (39-bit value in both alternatives).
///
/// Only the low 39 bits are encoded; wider values are truncated to fit the
/// BIT STRING (SIZE (39)), so `0xFF_FFFF_FFFF` encodes as `0x7FFFFFFFFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UeIdentity {
    Ng5gSTmsiPart1(u64),
    RandomValue(u64),
}

impl Default for UeIdentity {
    fn default() -> Self {
        UeIdentity::RandomValue(0x12_3456_78AB)
    }
}

impl UeIdentity {
    fn alternative(self) -> &'static str {
        match self {
            UeIdentity::Ng5gSTmsiPart1(_) => "ng-5G-S-TMSI-Part1",
            UeIdentity::RandomValue(_) => "randomValue",
        }
    }

    fn bits(self) -> String {
        let mask = (1u64 << UE_IDENTITY_BITS) - 1;
        let value = match self {
            UeIdentity::Ng5gSTmsiPart1(value) | UeIdentity::RandomValue(value) => value,
        };
        format!("0x{:010X}", value & mask)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RrcSetupRequestParams {
    pub ue_identity: UeIdentity,
    pub establishment_cause: EstablishmentCause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RrcSetupParams {
    pub transaction_id: u8,
}

impl Default for RrcSetupParams {
    fn default() -> Self {
        Self { transaction_id: 1 }
    }
}

/// RRC Setup Request (TS 38.331 6.2.2) with a random UE identity and
/// `mo-Data` cause.
///
/// # Examples
/// ```
/// use gppcheck_core::compliance::check_message;
/// use gppcheck_core::factory::rrc_setup_request;
///
/// let verdict = check_message(&rrc_setup_request());
/// assert_eq!(verdict.compliance_score, 100);
/// assert!(verdict.is_compliant);
/// ```
pub fn rrc_setup_request() -> Message {
    rrc_setup_request_with(&RrcSetupRequestParams::default())
}

pub fn rrc_setup_request_with(params: &RrcSetupRequestParams) -> Message {
    let identity = params.ue_identity;
    let ue_identity = InformationElement::choice(
        identity.alternative(),
        InformationElement::bit_string(identity.bits(), UE_IDENTITY_BITS)
            .with_reference(TS_38_331_IES),
    )
    .with_criticality(Criticality::Reject)
    .with_reference(TS_38_331_MESSAGES);

    let cause = InformationElement::enumerated(params.establishment_cause.as_str())
        .with_range(EstablishmentCause::range())
        .with_criticality(Criticality::Reject)
        .with_reference(TS_38_331_MESSAGES);

    let spare = InformationElement::bit_string("0", 1).with_reference(TS_38_331_MESSAGES);

    Message::new("RRCSetupRequest", "RRC Setup Request")
        .with_standard_reference(TS_38_331_MESSAGES)
        .with_release_version(RELEASE_17)
        .with_element(
            "rrcSetupRequest",
            InformationElement::sequence([
                ("ue-Identity", ue_identity),
                ("establishmentCause", cause),
                ("spare", spare),
            ])
            .with_reference(TS_38_331_MESSAGES),
        )
}

/// RRC Setup carrying SRB1 with an AM RLC configuration.
pub fn rrc_setup() -> Message {
    rrc_setup_with(&RrcSetupParams::default())
}

pub fn rrc_setup_with(params: &RrcSetupParams) -> Message {
    let ul_am = InformationElement::sequence([
        ("t-PollRetransmit", InformationElement::enumerated("ms45")),
        ("pollPDU", InformationElement::enumerated("p64")),
        ("pollByte", InformationElement::enumerated("kB500")),
    ]);
    let dl_am = InformationElement::sequence([
        ("t-Reassembly", InformationElement::enumerated("ms35")),
        ("t-StatusProhibit", InformationElement::enumerated("ms0")),
    ]);
    let rlc_config = InformationElement::choice(
        "am",
        InformationElement::sequence([("ul-AM-RLC", ul_am), ("dl-AM-RLC", dl_am)]),
    );
    let srb1 = IeValue::members([
        (
            "srb-Identity",
            InformationElement::integer(1).with_range("1..3"),
        ),
        ("rlc-Config", rlc_config),
    ]);
    let radio_bearer_config = InformationElement::sequence([(
        "srb-ToAddModList",
        InformationElement::sequence_of(vec![srb1]).with_reference(TS_38_331_IES),
    )])
    .with_reference(TS_38_331_IES);

    Message::new("RRCSetup", "RRC Setup")
        .with_standard_reference(TS_38_331_MESSAGES)
        .with_release_version(RELEASE_17)
        .with_element(
            "rrcSetup",
            InformationElement::sequence([
                ("rrc-TransactionIdentifier", transaction_identifier(params.transaction_id)),
                (
                    "criticalExtensions",
                    InformationElement::choice(
                        "rrcSetup",
                        InformationElement::sequence([("radioBearerConfig", radio_bearer_config)]),
                    )
                    .with_reference(TS_38_331_MESSAGES),
                ),
            ])
            .with_reference(TS_38_331_MESSAGES),
        )
}

/// RRC Setup Complete piggybacking the NAS registration payload.
pub fn rrc_setup_complete() -> Message {
    let complete = InformationElement::sequence([
        (
            "selectedPLMN-Identity",
            InformationElement::integer(1).with_range("1..12"),
        ),
        (
            "dedicatedNAS-Message",
            InformationElement::octet_string("NAS_REGISTRATION_REQUEST_PAYLOAD"),
        ),
    ]);

    Message::new("RRCSetupComplete", "RRC Setup Complete")
        .with_standard_reference(TS_38_331_MESSAGES)
        .with_release_version(RELEASE_17)
        .with_element(
            "rrcSetupComplete",
            InformationElement::sequence([
                (
                    "rrc-TransactionIdentifier",
                    transaction_identifier(RrcSetupParams::default().transaction_id),
                ),
                (
                    "criticalExtensions",
                    InformationElement::choice("rrcSetupComplete", complete)
                        .with_reference(TS_38_331_MESSAGES),
                ),
            ])
            .with_reference(TS_38_331_MESSAGES),
        )
}

fn transaction_identifier(id: u8) -> InformationElement {
    InformationElement::integer(i64::from(id))
        .with_range(RRC_TRANSACTION_RANGE)
        .with_criticality(Criticality::Reject)
        .with_reference(TS_38_331_IES)
}
