use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Message, ModelError, TestCase};

use super::{
    nr_initial_access, prach_preamble, random_access_response, registration_request, rrc_setup,
    rrc_setup_complete, rrc_setup_request, sip_invite, volte_call_setup,
};

/// Which document shape an example (or an input file) holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Message,
    TestCase,
}

impl DocumentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKind::Message => "message",
            DocumentKind::TestCase => "testCase",
        }
    }
}

/// A canonical example document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    Message(Message),
    TestCase(TestCase),
}

impl Document {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Document::Message(_) => DocumentKind::Message,
            Document::TestCase(_) => DocumentKind::TestCase,
        }
    }
}

/// Every canonical example the factory can build, by name.
///
/// # Examples
/// ```
/// use gppcheck_core::factory::Catalog;
///
/// let entry = Catalog::from_name("rrc-setup-request").expect("known example");
/// assert_eq!(entry.name(), "rrc-setup-request");
/// assert!(Catalog::from_name("rrc-reconfiguration").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    RrcSetupRequest,
    RrcSetup,
    RrcSetupComplete,
    RegistrationRequest,
    PrachPreamble,
    RandomAccessResponse,
    SipInvite,
    NrInitialAccess,
    VolteCallSetup,
}

impl Catalog {
    pub const ALL: [Catalog; 9] = [
        Catalog::RrcSetupRequest,
        Catalog::RrcSetup,
        Catalog::RrcSetupComplete,
        Catalog::RegistrationRequest,
        Catalog::PrachPreamble,
        Catalog::RandomAccessResponse,
        Catalog::SipInvite,
        Catalog::NrInitialAccess,
        Catalog::VolteCallSetup,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(name))
    }

    pub fn name(self) -> &'static str {
        match self {
            Catalog::RrcSetupRequest => "rrc-setup-request",
            Catalog::RrcSetup => "rrc-setup",
            Catalog::RrcSetupComplete => "rrc-setup-complete",
            Catalog::RegistrationRequest => "registration-request",
            Catalog::PrachPreamble => "prach-preamble",
            Catalog::RandomAccessResponse => "random-access-response",
            Catalog::SipInvite => "sip-invite",
            Catalog::NrInitialAccess => "nr-initial-access",
            Catalog::VolteCallSetup => "volte-call-setup",
        }
    }

    pub fn kind(self) -> DocumentKind {
        match self {
            Catalog::NrInitialAccess | Catalog::VolteCallSetup => DocumentKind::TestCase,
            _ => DocumentKind::Message,
        }
    }

    pub fn document(self) -> Result<Document, ModelError> {
        let document = match self {
            Catalog::RrcSetupRequest => Document::Message(rrc_setup_request()),
            Catalog::RrcSetup => Document::Message(rrc_setup()),
            Catalog::RrcSetupComplete => Document::Message(rrc_setup_complete()),
            Catalog::RegistrationRequest => Document::Message(registration_request()),
            Catalog::PrachPreamble => Document::Message(prach_preamble()),
            Catalog::RandomAccessResponse => Document::Message(random_access_response()),
            Catalog::SipInvite => Document::Message(sip_invite()),
            Catalog::NrInitialAccess => Document::TestCase(nr_initial_access()?),
            Catalog::VolteCallSetup => Document::TestCase(volte_call_setup()?),
        };
        Ok(document)
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for entry in Catalog::ALL {
            assert_eq!(Catalog::from_name(entry.name()), Some(entry));
        }
        assert_eq!(Catalog::from_name(" RRC-Setup "), Some(Catalog::RrcSetup));
    }

    #[test]
    fn document_kind_matches_declared_kind() {
        for entry in Catalog::ALL {
            let document = entry.document().expect("canonical example builds");
            assert_eq!(document.kind(), entry.kind(), "{entry}");
        }
    }

    #[test]
    fn documents_serialize_without_wrapper() {
        let document = Catalog::SipInvite.document().expect("builds");
        let value = serde_json::to_value(&document).expect("encode");
        assert_eq!(value["messageType"], "SIP_INVITE");
    }
}
