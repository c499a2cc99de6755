//! Canonical 3GPP messages and procedure test cases.
//!
//! Every constructor is pure and returns values whose top-level IEs carry a
//! type, a presence and a standard reference. Zero-argument constructors
//! build the canonical example; the `*_with` variants take the UE-specific
//! inputs (identity, establishment cause, registration type, ...).
//!
//! Test cases go through [`crate::model::TestCaseBuilder`], so they are
//! returned as `Result`s even though the canonical data always builds.

mod catalog;
mod nas;
mod phy;
mod procedures;
mod rrc;
mod sip;

pub use catalog::{Catalog, Document, DocumentKind};
pub use nas::{
    RegistrationParams, RegistrationType, Suci, registration_request, registration_request_with,
};
pub use phy::{phy_layer_parameters, prach_preamble, random_access_response};
pub use procedures::{nr_initial_access, volte_call_setup};
pub use rrc::{
    EstablishmentCause, RrcSetupParams, RrcSetupRequestParams, UeIdentity, rrc_setup,
    rrc_setup_complete, rrc_setup_request, rrc_setup_request_with, rrc_setup_with,
};
pub use sip::sip_invite;

/// Release every canonical example is written against.
pub const RELEASE_17: &str = "Release 17";
