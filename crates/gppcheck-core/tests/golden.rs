use std::fs;
use std::path::{Path, PathBuf};

use gppcheck_core::{Report, analyze_message_file, analyze_test_case_file};

fn golden_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_expected_report(dir: &str) -> Report {
    let expected_path = golden_dir(dir).join("expected_report.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn compare(dir: &str, mut actual: Report) {
    let expected = load_expected_report(dir);
    actual.generated_at = expected.generated_at.clone();
    actual.input.path = expected.input.path.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

fn run_golden_message(dir: &str) {
    let input = golden_dir(dir).join("input.json");
    compare(dir, analyze_message_file(&input).expect("analyze message"));
}

fn run_golden_test_case(dir: &str) {
    let input = golden_dir(dir).join("input.json");
    compare(dir, analyze_test_case_file(&input).expect("analyze test case"));
}

#[test]
fn golden_message_empty() {
    run_golden_message("tests/golden/message_empty");
}

#[test]
fn golden_message_missing_type() {
    run_golden_message("tests/golden/message_missing_type");
}

#[test]
fn golden_message_blank_keywords() {
    run_golden_message("tests/golden/message_blank_keywords");
}

#[test]
fn golden_message_rrc_setup_request() {
    run_golden_message("tests/golden/message_rrc_setup_request");
}

#[test]
fn golden_message_out_of_range() {
    run_golden_message("tests/golden/message_out_of_range");
}

#[test]
fn golden_testcase_empty() {
    run_golden_test_case("tests/golden/testcase_empty");
}

#[test]
fn golden_testcase_handover() {
    run_golden_test_case("tests/golden/testcase_handover");
}

#[test]
fn golden_message_missing_type_scores_88() {
    let report = load_expected_report("tests/golden/message_missing_type");
    assert_eq!(report.verdict.compliance_score, 88);
    assert!(!report.verdict.is_compliant);
    assert_eq!(report.verdict.errors.len(), 1);
    assert_eq!(report.verdict.warnings.len(), 1);
}

#[test]
fn golden_message_out_of_range_has_findings_but_stays_compliant() {
    let report = load_expected_report("tests/golden/message_out_of_range");
    assert!(report.verdict.is_compliant);
    assert_eq!(report.messages[0].findings.len(), 3);
}

#[test]
fn golden_testcase_handover_has_timeline_issues() {
    let report = load_expected_report("tests/golden/testcase_handover");
    assert_eq!(report.verdict.compliance_score, 90);
    assert_eq!(report.timeline_issues.len(), 2);
    assert_eq!(report.steps.len(), 2);
}

#[test]
fn golden_message_blank_keywords_score_as_missing() {
    let report = load_expected_report("tests/golden/message_blank_keywords");
    assert_eq!(report.verdict.compliance_score, 85);
    assert_eq!(report.verdict.errors.len(), 2);
    assert!(report.verdict.warnings.is_empty());
}
