//! gppcheck core library: 3GPP message compliance model and checks.
//!
//! The crate is split into three public layers and two private ones:
//! - `model`: messages, information elements, layer parameters and test
//!   cases as plain serde values;
//! - `factory`: canonical messages and procedure test cases (RRC, NAS, PHY,
//!   SIP), all compliant by construction;
//! - `compliance`: the exact-arithmetic message scorer, the test-case
//!   validator and the score-neutral element inspector;
//! - `source` (I/O) and `analysis` (report assembly), re-exported below.
//!
//! Invariants:
//! - Checks are pure and deterministic; findings never surface as `Err`.
//! - Reports list messages and steps in document order, IEs in name order.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use gppcheck_core::analyze_message_file;
//!
//! let report = analyze_message_file(Path::new("rrc_setup_request.json"))?;
//! println!("score: {}", report.verdict.compliance_score);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

pub mod compliance;
pub mod factory;
pub mod model;

mod analysis;
mod source;

pub use analysis::{
    AnalysisError, analyze_message_file, analyze_message_source, analyze_test_case_file,
    analyze_test_case_source,
};
pub use source::{DocumentSource, JsonBufferSource, JsonFileSource, SourceError};

use compliance::{ElementFinding, MessageVerdict, TestCaseVerdict};
use factory::DocumentKind;
use model::{Direction, Layer, TestCategory};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Timestamp used by the library; callers stamp the real generation time.
pub const DEFAULT_GENERATED_AT: &str = "1970-01-01T00:00:00Z";

/// Compliance report for one input document.
///
/// # Examples
/// ```
/// use gppcheck_core::factory::DocumentKind;
/// use gppcheck_core::make_stub_report;
///
/// let report = make_stub_report(DocumentKind::Message, "message.json", 123);
/// assert_eq!(report.report_version, gppcheck_core::REPORT_VERSION);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    /// RFC3339 timestamp representing the report generation time.
    pub generated_at: String,
    pub input: InputInfo,
    /// Shape the input was decoded as.
    pub document: DocumentKind,
    pub subject: SubjectInfo,
    pub verdict: Verdict,
    /// Per-message verdicts and element findings, in document order.
    pub messages: Vec<MessageReport>,
    /// Per-step message verdicts (test cases only).
    pub steps: Vec<StepReport>,
    /// Step ordering and timing problems (test cases only).
    pub timeline_issues: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path (or label) as provided to the analyzer.
    pub path: String,
    pub bytes: u64,
}

/// What the document claims to be.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_version: Option<String>,
}

/// Top-level verdict: the scorer result for a message document, the
/// validator result for a test case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_compliant: bool,
    pub compliance_score: u32,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl From<MessageVerdict> for Verdict {
    fn from(verdict: MessageVerdict) -> Self {
        Self {
            is_compliant: verdict.is_compliant,
            compliance_score: verdict.compliance_score,
            errors: verdict.errors,
            warnings: verdict.warnings,
            recommendations: Vec::new(),
        }
    }
}

impl From<TestCaseVerdict> for Verdict {
    fn from(verdict: TestCaseVerdict) -> Self {
        Self {
            is_compliant: verdict.is_compliant,
            compliance_score: verdict.compliance_score,
            errors: verdict.errors,
            warnings: verdict.warnings,
            recommendations: verdict.recommendations,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageReport {
    /// Position in the document (0 for a standalone message).
    pub index: usize,
    pub message_type: String,
    pub message_name: String,
    pub verdict: MessageVerdict,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<ElementFinding>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub step_id: String,
    pub step_order: u32,
    pub timestamp_ms: u64,
    pub direction: Direction,
    pub layer: Layer,
    pub message_name: String,
    pub verdict: MessageVerdict,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<ElementFinding>,
}

/// Category group of a test case with its display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub label: TestCategory,
    pub name: String,
}

impl From<TestCategory> for CategoryInfo {
    fn from(label: TestCategory) -> Self {
        Self {
            label,
            name: label.name().to_string(),
        }
    }
}

/// Build a stub report with base fields filled and empty aggregates.
///
/// # Examples
/// ```
/// use gppcheck_core::factory::DocumentKind;
/// use gppcheck_core::make_stub_report;
///
/// let report = make_stub_report(DocumentKind::TestCase, "case.json", 10);
/// assert!(report.messages.is_empty());
/// assert!(!report.verdict.is_compliant);
/// ```
pub fn make_stub_report(document: DocumentKind, input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "gppcheck".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        generated_at: DEFAULT_GENERATED_AT.to_string(),
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        document,
        subject: SubjectInfo::default(),
        verdict: Verdict::default(),
        messages: vec![],
        steps: vec![],
        timeline_issues: vec![],
        category: None,
    }
}
