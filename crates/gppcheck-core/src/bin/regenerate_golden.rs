use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gppcheck_core::{Report, analyze_message_file, analyze_test_case_file};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.json");
        if !input.exists() {
            continue;
        }
        let output = path.join("expected_report.json");
        regenerate_one(&input, &output)?;
    }

    Ok(())
}

/// Case directories named `testcase_*` hold test cases; the rest hold messages.
fn analyze(input: &Path) -> Result<Report, String> {
    let is_test_case = input
        .parent()
        .and_then(Path::file_name)
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with("testcase_"));
    let result = if is_test_case {
        analyze_test_case_file(input)
    } else {
        analyze_message_file(input)
    };
    result.map_err(|err| format!("analysis failed for {}: {}", input.display(), err))
}

fn regenerate_one(input: &Path, output: &Path) -> Result<(), String> {
    let report = analyze(input)?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json + "\n")
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
