use crate::model::{InformationElement, Layer, LayerParameter, Message, ParameterMap};

use super::RELEASE_17;

const TS_38_211_PREAMBLE: &str = "TS 38.211 6.3.3.1";
const TS_38_211_RESOURCES: &str = "TS 38.211 6.3.3.2";
const TS_38_213_RAR: &str = "TS 38.213 8.2";

/// Canonical SS measurements and PRACH power (TS 38.215, TS 38.213).
pub fn phy_layer_parameters() -> ParameterMap {
    let measurement = |value: i64, unit: &str, range: &str, resolution: f64, reference: &str| {
        LayerParameter::new(Layer::Phy, value, range, reference)
            .with_unit(unit)
            .with_resolution(resolution)
    };

    ParameterMap::from([
        (
            "SS-RSRP".to_string(),
            measurement(-85, "dBm", "(-156, -31)", 1.0, "TS 38.215 5.1.1"),
        ),
        (
            "SS-RSRQ".to_string(),
            measurement(-10, "dB", "(-43, 20)", 0.5, "TS 38.215 5.1.2"),
        ),
        (
            "SS-SINR".to_string(),
            measurement(15, "dB", "(-23, 40)", 0.5, "TS 38.215 5.1.3"),
        ),
        (
            "PRACH-Preamble-Power".to_string(),
            measurement(23, "dBm", "(-50, 33)", 1.0, "TS 38.213 7.3"),
        ),
    ])
}

/// PRACH preamble with the PHY measurements attached.
pub fn prach_preamble() -> Message {
    Message::new("PRACH_Preamble", "PRACH Preamble")
        .with_standard_reference(TS_38_211_PREAMBLE)
        .with_release_version(RELEASE_17)
        .with_element("preamble-Id", preamble_id())
        .with_element(
            "prach-RootSequenceIndex",
            InformationElement::integer(129)
                .with_range("0..837")
                .with_reference(TS_38_211_PREAMBLE),
        )
        .with_layer_parameters(phy_layer_parameters())
}

/// PRACH transmission as sent on the first step of initial access: the
/// preamble plus its configuration index and frequency start.
pub(super) fn prach_transmission() -> Message {
    Message::new("PRACH_Preamble", "PRACH Preamble Transmission")
        .with_standard_reference(TS_38_211_PREAMBLE)
        .with_release_version(RELEASE_17)
        .with_element("preamble-Id", preamble_id())
        .with_element(
            "prach-ConfigurationIndex",
            InformationElement::integer(0)
                .with_range("0..255")
                .with_reference(TS_38_211_RESOURCES),
        )
        .with_element(
            "prach-FrequencyStart",
            InformationElement::integer(0)
                .with_range("0..274")
                .with_reference(TS_38_211_RESOURCES),
        )
}

pub fn random_access_response() -> Message {
    let ul_grant = InformationElement::sequence([
        ("frequencyHopping", InformationElement::boolean(false)),
        ("mcs", InformationElement::integer(0).with_range("0..15")),
        ("tpc", InformationElement::integer(0).with_range("0..7")),
        ("csi-Request", InformationElement::boolean(false)),
    ]);

    Message::new("RandomAccessResponse", "Random Access Response")
        .with_standard_reference(TS_38_213_RAR)
        .with_release_version(RELEASE_17)
        .with_element(
            "ra-RNTI",
            InformationElement::integer(1234)
                .with_range("1..65519")
                .with_reference(TS_38_213_RAR),
        )
        .with_element(
            "timingAdvance",
            InformationElement::integer(500)
                .with_range("0..3846")
                .with_reference(TS_38_213_RAR),
        )
        .with_element("ul-Grant", ul_grant.with_reference(TS_38_213_RAR))
}

fn preamble_id() -> InformationElement {
    InformationElement::integer(23)
        .with_range("0..63")
        .with_reference(TS_38_211_PREAMBLE)
}
