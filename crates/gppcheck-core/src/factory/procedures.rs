use crate::model::{ComplianceLevel, Direction, Layer, ModelError, TestCase, TestStep};

use super::nas::registration_request;
use super::phy::{prach_preamble, prach_transmission, random_access_response};
use super::rrc::{rrc_setup, rrc_setup_complete, rrc_setup_request};
use super::sip::{sip_invite, sip_invite_request};
use super::RELEASE_17;

const NR: &str = "5G_NR";
const VOLTE: &str = "VoLTE";

/// 5G NR initial access: PRACH, RAR, RRC connection setup and NAS
/// registration, six steps.
pub fn nr_initial_access() -> Result<TestCase, ModelError> {
    let setup_request = rrc_setup_request();
    let setup = rrc_setup();
    let registration = registration_request();

    TestCase::builder(
        "3GPP_5G_NR_INITIAL_ACCESS_001",
        "5G NR Initial Access with RRC Setup",
    )
    .description(
        "Complete 5G NR initial access procedure including PRACH, RRC Setup, and NAS Registration",
    )
    .category(NR)
    .protocol(NR)
    .standard_reference("TS 38.300 4.2.2, TS 38.331 5.3.3, TS 24.501 5.5.1")
    .release_version(RELEASE_17)
    .compliance_level(ComplianceLevel::FullyCompliant)
    .expected_outcome(
        "UE successfully completes initial access and establishes RRC connection with proper 3GPP signaling",
    )
    .expected_message(prach_preamble())
    .expected_message(setup_request.clone())
    .expected_message(setup.clone())
    .expected_message(registration.clone())
    .step(
        TestStep::new("step_1_prach", Direction::Ul, Layer::Phy, NR, prach_transmission())
            .at(0)
            .response_window(5, 10)
            .success_criteria([
                "PRACH preamble transmitted with correct power",
                "Preamble ID within valid range (0-63)",
                "PRACH configuration matches cell broadcast",
            ])
            .failure_criteria([
                "Invalid preamble ID",
                "Power exceeds maximum allowed",
                "PRACH configuration mismatch",
            ]),
    )
    .step(
        TestStep::new("step_2_rar", Direction::Dl, Layer::Phy, NR, random_access_response())
            .at(5)
            .response_window(100, 500)
            .success_criteria([
                "RAR received within response window",
                "RA-RNTI matches transmitted preamble",
                "Timing advance within valid range",
            ])
            .failure_criteria([
                "RAR not received within window",
                "Invalid RA-RNTI",
                "Timing advance out of range",
            ]),
    )
    .step(
        TestStep::new("step_3_rrc_setup_request", Direction::Ul, Layer::Rrc, NR, setup_request)
            .at(105)
            .response_window(50, 200)
            .success_criteria([
                "RRC Setup Request with valid UE identity",
                "Establishment cause correctly set",
                "Message format compliant with TS 38.331",
            ])
            .failure_criteria([
                "Invalid UE identity format",
                "Missing mandatory IEs",
                "ASN.1 encoding errors",
            ]),
    )
    .step(
        TestStep::new("step_4_rrc_setup", Direction::Dl, Layer::Rrc, NR, setup)
            .at(155)
            .response_window(100, 500)
            .success_criteria([
                "RRC Setup with proper radio resource configuration",
                "SRB1 configuration present",
                "Transaction identifier matches request",
            ])
            .failure_criteria([
                "Missing radio resource configuration",
                "Invalid SRB configuration",
                "Transaction identifier mismatch",
            ]),
    )
    .step(
        TestStep::new(
            "step_5_rrc_setup_complete",
            Direction::Ul,
            Layer::Rrc,
            NR,
            rrc_setup_complete(),
        )
        .at(255)
        .response_window(50, 200)
        .success_criteria([
            "RRC Setup Complete with NAS message",
            "Selected PLMN identity valid",
            "Transaction identifier matches setup",
        ])
        .failure_criteria([
            "Missing NAS message",
            "Invalid PLMN identity",
            "Transaction identifier mismatch",
        ]),
    )
    .step(
        TestStep::new("step_6_nas_registration", Direction::Ul, Layer::Nas, NR, registration)
            .at(305)
            .response_window(100, 1000)
            .success_criteria([
                "NAS Registration Request with valid 5G-GUTI/SUCI",
                "Registration type correctly set",
                "Security header properly formatted",
            ])
            .failure_criteria([
                "Invalid mobile identity format",
                "Missing mandatory IEs",
                "Security header errors",
            ]),
    )
    .build()
}

/// VoLTE call setup over IMS: a single SIP INVITE step.
pub fn volte_call_setup() -> Result<TestCase, ModelError> {
    TestCase::builder("3GPP_VOLTE_CALL_SETUP_001", "VoLTE Call Setup with IMS Signaling")
        .description(
            "Complete VoLTE call setup procedure with proper SIP/IMS signaling and QoS establishment",
        )
        .category(VOLTE)
        .protocol(VOLTE)
        .standard_reference("TS 24.229 5.1.1, TS 23.228 5.2, RFC 3261")
        .release_version(RELEASE_17)
        .compliance_level(ComplianceLevel::FullyCompliant)
        .expected_outcome(
            "Successful VoLTE call establishment with proper IMS registration and QoS setup",
        )
        .expected_message(sip_invite())
        .step(
            TestStep::new("step_1_sip_invite", Direction::Ul, Layer::Nas, VOLTE, sip_invite_request())
                .at(0)
                .response_window(100, 2000)
                .success_criteria([
                    "SIP INVITE with proper VoLTE headers",
                    "SDP contains AMR-WB codec",
                    "P-Access-Network-Info present",
                ])
                .failure_criteria([
                    "Missing mandatory SIP headers",
                    "Invalid SDP format",
                    "Missing IMS-specific headers",
                ]),
        )
        .build()
}
