use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::compliance::{check_message, inspect_message, validate_test_case};
use crate::factory::DocumentKind;
use crate::model::{Message, TestCase};
use crate::source::{DocumentSource, JsonFileSource, SourceError};
use crate::{CategoryInfo, MessageReport, Report, StepReport, SubjectInfo, make_stub_report};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

pub fn analyze_message_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = open_regular_file(path)?;
    analyze_message_source(source)
}

pub fn analyze_test_case_file(path: &Path) -> Result<Report, AnalysisError> {
    let source = open_regular_file(path)?;
    analyze_test_case_source(source)
}

pub fn analyze_message_source<S: DocumentSource>(source: S) -> Result<Report, AnalysisError> {
    let message: Message = source.decode()?;
    let verdict = check_message(&message);
    info!(
        input = source.label(),
        score = verdict.compliance_score,
        compliant = verdict.is_compliant,
        "analyzed message"
    );

    let mut report = make_stub_report(
        DocumentKind::Message,
        source.label(),
        source.bytes().len() as u64,
    );
    report.subject = SubjectInfo {
        id: None,
        name: message.message_name.clone(),
        standard_reference: message.standard_reference().map(str::to_string),
        release_version: message.release_version().map(str::to_string),
    };
    report.verdict = verdict.into();
    report.messages = vec![message_report(0, &message)];
    Ok(report)
}

pub fn analyze_test_case_source<S: DocumentSource>(source: S) -> Result<Report, AnalysisError> {
    let case: TestCase = source.decode()?;
    let verdict = validate_test_case(&case);
    info!(
        input = source.label(),
        score = verdict.compliance_score,
        compliant = verdict.is_compliant,
        steps = case.test_steps.len(),
        "analyzed test case"
    );

    let mut report = make_stub_report(
        DocumentKind::TestCase,
        source.label(),
        source.bytes().len() as u64,
    );
    report.subject = SubjectInfo {
        id: Some(case.id.clone()).filter(|id| !id.is_empty()),
        name: case.name.clone(),
        standard_reference: case.standard_reference().map(str::to_string),
        release_version: case.release_version().map(str::to_string),
    };
    report.verdict = verdict.into();
    report.messages = case
        .expected_messages
        .iter()
        .enumerate()
        .map(|(index, message)| message_report(index, message))
        .collect();
    report.steps = case
        .test_steps
        .iter()
        .map(|step| StepReport {
            step_id: step.step_id.clone(),
            step_order: step.step_order,
            timestamp_ms: step.timestamp_ms,
            direction: step.direction,
            layer: step.layer,
            message_name: step.message.message_name.clone(),
            verdict: check_message(&step.message),
            findings: inspect_message(&step.message),
        })
        .collect();
    report.timeline_issues = case
        .timeline_issues()
        .iter()
        .map(|issue| {
            warn!(input = source.label(), %issue, "timeline issue");
            issue.to_string()
        })
        .collect();
    report.category = Some(CategoryInfo::from(case.category_group()));
    Ok(report)
}

fn open_regular_file(path: &Path) -> Result<JsonFileSource, AnalysisError> {
    if !path.metadata()?.is_file() {
        return Err(AnalysisError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", path.display()),
        )));
    }
    Ok(JsonFileSource::open(path)?)
}

fn message_report(index: usize, message: &Message) -> MessageReport {
    MessageReport {
        index,
        message_type: message.message_type.clone(),
        message_name: message.message_name.clone(),
        verdict: check_message(message),
        findings: inspect_message(message),
    }
}
