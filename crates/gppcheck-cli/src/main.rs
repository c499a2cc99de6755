use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glob::glob;
use gppcheck_core::factory::{Catalog, DocumentKind};
use gppcheck_core::{DEFAULT_GENERATED_AT, JsonBufferSource, Report};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

mod telemetry;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("GPPCHECK_BUILD_COMMIT_FULL"),
    " (",
    env!("GPPCHECK_BUILD_COMMIT"),
    ")\nbuilt: ",
    env!("GPPCHECK_BUILD_DATE"),
);

const EXAMPLES: &str = "Examples:\n  gppcheck message check rrc_setup_request.json -o report.json\n  gppcheck testcase validate initial_access.json --stdout --pretty\n  gppcheck catalog show nr-initial-access --pretty";

/// Label used for documents read from standard input.
const STDIN_LABEL: &str = "<stdin>";

#[derive(Parser, Debug)]
#[command(name = "gppcheck")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Structural 3GPP compliance checks for protocol messages and test cases.",
    long_about = None,
    after_help = EXAMPLES
)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Operations on single message documents.
    Message {
        #[command(subcommand)]
        command: CheckCommands,
    },
    /// Operations on test case documents.
    Testcase {
        #[command(subcommand)]
        command: CheckCommands,
    },
    /// Canonical example documents.
    Catalog {
        #[command(subcommand)]
        command: CatalogCommands,
    },
}

#[derive(Subcommand, Debug)]
enum CheckCommands {
    /// Score a JSON document and generate a versioned JSON report.
    #[command(alias = "validate")]
    #[command(after_help = EXAMPLES)]
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Path to a .json file (glob patterns allowed), or `-` for stdin
    input: PathBuf,

    /// Output report path (JSON)
    #[arg(short = 'o', long, required_unless_present = "stdout")]
    report: Option<PathBuf>,

    /// Write JSON report to stdout
    #[arg(long, conflicts_with = "report")]
    stdout: bool,

    /// Pretty-print JSON output
    #[arg(long, conflicts_with = "compact")]
    pretty: bool,

    /// Compact JSON output (default)
    #[arg(long)]
    compact: bool,

    /// Suppress non-error output
    #[arg(long)]
    quiet: bool,

    /// Exit with a non-zero code if the document is not compliant
    #[arg(long)]
    strict: bool,

    /// List errors, warnings and findings after the check
    #[arg(long)]
    list_violations: bool,
}

#[derive(Subcommand, Debug)]
enum CatalogCommands {
    /// List the names of every canonical example.
    List,
    /// Print a canonical example as JSON.
    Show {
        /// Example name (see `gppcheck catalog list`)
        name: String,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json, telemetry::level_for(cli.verbose));

    let result = match cli.command {
        Commands::Message {
            command: CheckCommands::Check(args),
        } => cmd_check(DocumentKind::Message, args),
        Commands::Testcase {
            command: CheckCommands::Check(args),
        } => cmd_check(DocumentKind::TestCase, args),
        Commands::Catalog { command } => match command {
            CatalogCommands::List => cmd_catalog_list(),
            CatalogCommands::Show { name, pretty } => cmd_catalog_show(&name, pretty),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_check(kind: DocumentKind, args: CheckArgs) -> Result<(), CliError> {
    let CheckArgs {
        input,
        report,
        stdout,
        pretty,
        compact,
        quiet,
        strict,
        list_violations,
    } = args;

    let mut rep = if is_stdin(&input) {
        analyze_stdin(kind)?
    } else {
        let resolved_input = locate_input(&input)?;
        if let Some(report_path) = report.as_ref() {
            ensure_distinct_output(&resolved_input, report_path)?;
        }
        analyze_file(kind, &resolved_input)?
    };
    rep.generated_at = now_rfc3339();

    let json = serialize_report(&rep, pretty, compact)?;

    let Some(report) = report.filter(|_| !stdout) else {
        print!("{}", json);
        if list_violations && !quiet {
            print_violations(&rep);
        }
        return finish(&rep, strict);
    };

    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if list_violations && !quiet {
        print_violations(&rep);
    }
    if !quiet {
        eprintln!(
            "OK: score {} ({}) -> {}",
            rep.verdict.compliance_score,
            if rep.verdict.is_compliant {
                "compliant"
            } else {
                "not compliant"
            },
            report.display()
        );
    }
    finish(&rep, strict)
}

fn finish(rep: &Report, strict: bool) -> Result<(), CliError> {
    if strict && has_violations(rep) {
        return Err(CliError::new(
            "compliance violations detected",
            Some("use --list-violations to inspect".to_string()),
        ));
    }
    Ok(())
}

fn analyze_file(kind: DocumentKind, input: &Path) -> Result<Report, CliError> {
    debug!(input = %input.display(), kind = kind.as_str(), "checking document");
    let result = match kind {
        DocumentKind::Message => gppcheck_core::analyze_message_file(input),
        DocumentKind::TestCase => gppcheck_core::analyze_test_case_file(input),
    };
    result
        .with_context(|| format!("{} check failed", kind_label(kind)))
        .map_err(|err| {
            CliError::new(
                format!("{err:#}"),
                Some(format!("expected a JSON {} document", kind_label(kind))),
            )
        })
}

fn analyze_stdin(kind: DocumentKind) -> Result<Report, CliError> {
    let mut bytes = Vec::new();
    io::stdin()
        .read_to_end(&mut bytes)
        .context("Failed to read standard input")?;
    let source = JsonBufferSource::new(STDIN_LABEL, bytes);
    let result = match kind {
        DocumentKind::Message => gppcheck_core::analyze_message_source(source),
        DocumentKind::TestCase => gppcheck_core::analyze_test_case_source(source),
    };
    result
        .with_context(|| format!("{} check failed", kind_label(kind)))
        .map_err(|err| {
            CliError::new(
                format!("{err:#}"),
                Some(format!("expected a JSON {} document", kind_label(kind))),
            )
        })
}

fn kind_label(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Message => "message",
        DocumentKind::TestCase => "test case",
    }
}

fn cmd_catalog_list() -> Result<(), CliError> {
    for entry in Catalog::ALL {
        println!("{}\t{}", entry.name(), entry.kind().as_str());
    }
    Ok(())
}

fn cmd_catalog_show(name: &str, pretty: bool) -> Result<(), CliError> {
    let entry = Catalog::from_name(name).ok_or_else(|| {
        CliError::new(
            format!("unknown example '{}'", name),
            Some("run `gppcheck catalog list` for available names".to_string()),
        )
    })?;
    let document = entry
        .document()
        .with_context(|| format!("Failed to build example '{}'", entry))?;
    let json = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
    .context("JSON serialization failed")?;
    println!("{}", json);
    Ok(())
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| DEFAULT_GENERATED_AT.to_string())
}

fn serialize_report(rep: &Report, pretty: bool, compact: bool) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn has_violations(rep: &Report) -> bool {
    !rep.verdict.is_compliant
}

fn print_violations(rep: &Report) {
    eprintln!("Compliance violations:");
    for error in &rep.verdict.errors {
        eprintln!("  error: {}", error);
    }
    for warning in &rep.verdict.warnings {
        eprintln!("  warning: {}", warning);
    }
    for message in &rep.messages {
        for finding in &message.findings {
            eprintln!(
                "  finding: [{}] {} {}: {}",
                message.index,
                finding_severity(finding),
                finding.path,
                finding.message
            );
        }
    }
    for step in &rep.steps {
        for finding in &step.findings {
            eprintln!(
                "  finding: [{}] {} {}: {}",
                step.step_id,
                finding_severity(finding),
                finding.path,
                finding.message
            );
        }
    }
    for issue in &rep.timeline_issues {
        eprintln!("  timeline: {}", issue);
    }
}

fn finding_severity(finding: &gppcheck_core::compliance::ElementFinding) -> &'static str {
    match finding.severity {
        gppcheck_core::compliance::Severity::Error => "error",
        gppcheck_core::compliance::Severity::Warning => "warning",
    }
}

fn is_stdin(input: &Path) -> bool {
    input.as_os_str() == "-"
}

const INPUT_HINT: &str = "use a .json file, or `-` for stdin";

/// Rejects a report path naming the input file. A report directory that
/// does not exist yet cannot hold the input, so it is accepted here and
/// created on write.
fn ensure_distinct_output(input: &Path, report: &Path) -> Result<(), CliError> {
    let Some(file_name) = report.file_name() else {
        return Err(CliError::new(
            format!("invalid report path: {}", report.display()),
            Some("name a file, e.g. `-o report.json`".to_string()),
        ));
    };
    let dir = match report.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Ok(dir) = fs::canonicalize(dir) else {
        return Ok(());
    };
    let input = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    if dir.join(file_name) == input {
        return Err(CliError::new(
            format!("report path must differ from input: {}", report.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

/// Resolves `input` to a single existing `.json` file, expanding it first
/// when it is a glob pattern.
fn locate_input(input: &Path) -> Result<PathBuf, CliError> {
    let path = match input.to_str().filter(|text| text.contains(['*', '?', '['])) {
        Some(pattern) => single_match(pattern)?,
        None => input.to_path_buf(),
    };

    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() => {}
        Ok(_) => {
            return Err(CliError::new(
                format!("input is not a file: {}", path.display()),
                Some(INPUT_HINT.to_string()),
            ));
        }
        Err(_) => {
            return Err(CliError::new(
                format!("input file not found: {}", path.display()),
                Some(INPUT_HINT.to_string()),
            ));
        }
    }

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(CliError::new(
            format!("unsupported input format '{}'", path.display()),
            Some("expected a .json file".to_string()),
        ));
    }
    Ok(path)
}

fn single_match(pattern: &str) -> Result<PathBuf, CliError> {
    let invalid = |detail: String| {
        CliError::new(
            format!("invalid input pattern '{pattern}'"),
            Some(format!("pattern error: {detail}")),
        )
    };

    let mut matches = Vec::new();
    for entry in glob(pattern).map_err(|err| invalid(err.msg.to_string()))? {
        let path = entry.map_err(|err| invalid(err.to_string()))?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{pattern}'"),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let shown = matches
                .iter()
                .take(3)
                .map(|path| path.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!("multiple files match pattern '{pattern}' ({count} matches): {shown}{more}"),
                Some("pass a single document, or run once per file".to_string()),
            ))
        }
    }
}
