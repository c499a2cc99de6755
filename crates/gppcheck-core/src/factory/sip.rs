use crate::model::{IeValue, InformationElement, Message};

use super::RELEASE_17;

const CALLEE_URI: &str = "sip:+1234567890@ims.operator.com";

/// SIP INVITE for a VoLTE call (RFC 3261 17.1.1, TS 24.229 5.1.1), one IE
/// per header.
pub fn sip_invite() -> Message {
    let text = InformationElement::octet_string;
    let header = |element: InformationElement, reference: &str| element.with_reference(reference);

    Message::new("SIP_INVITE", "SIP INVITE for VoLTE Call")
        .with_standard_reference("RFC 3261 Section 17.1.1, TS 24.229 5.1.1")
        .with_release_version(RELEASE_17)
        .with_element(
            "request-Line",
            header(
                InformationElement::sequence([
                    ("method", text("INVITE")),
                    ("request-URI", text(CALLEE_URI)),
                ]),
                "RFC 3261 Section 25",
            ),
        )
        .with_element(
            "via",
            header(
                InformationElement::sequence_of(vec![IeValue::Text(
                    "SIP/2.0/UDP 192.168.1.100:5060;branch=z9hG4bK776asdhds".to_string(),
                )]),
                "RFC 3261 Section 20.42",
            ),
        )
        .with_element(
            "from",
            header(
                InformationElement::sequence([
                    ("displayName", text("Alice User")),
                    ("uri", text("sip:alice@ims.operator.com")),
                    ("tag", text("from-tag-12345")),
                ]),
                "RFC 3261 Section 20.20",
            ),
        )
        .with_element(
            "to",
            header(
                InformationElement::sequence([
                    ("displayName", text("Bob User")),
                    ("uri", text(CALLEE_URI)),
                ]),
                "RFC 3261 Section 20.39",
            ),
        )
        .with_element(
            "call-ID",
            header(text("call-id-12345@192.168.1.100"), "RFC 3261 Section 20.8"),
        )
        .with_element(
            "cseq",
            header(
                InformationElement::sequence([
                    ("sequence", InformationElement::integer(1)),
                    ("method", text("INVITE")),
                ]),
                "RFC 3261 Section 20.16",
            ),
        )
        .with_element(
            "contact",
            header(
                InformationElement::sequence([("uri", text("sip:alice@192.168.1.100:5060"))]),
                "RFC 3261 Section 20.10",
            ),
        )
        .with_element(
            "content-Type",
            header(text("application/sdp"), "RFC 3261 Section 20.15"),
        )
        .with_element(
            "p-Access-Network-Info",
            header(
                text("3GPP-E-UTRAN-FDD;utran-cell-id-3gpp=234151234567890"),
                "TS 24.229 7.2A.4",
            ),
        )
        .with_element(
            "p-Charging-Vector",
            header(
                InformationElement::sequence([
                    ("icid", text("icid-value-12345")),
                    ("orig-ioi", text("operator.com")),
                ]),
                "TS 24.229 7.2.3",
            ),
        )
}

/// Single-header INVITE sent on the first step of call setup.
pub(super) fn sip_invite_request() -> Message {
    Message::new("SIP_INVITE", "SIP INVITE")
        .with_standard_reference("RFC 3261, TS 24.229")
        .with_release_version(RELEASE_17)
        .with_element(
            "method",
            InformationElement::octet_string("INVITE").with_reference("RFC 3261"),
        )
}
