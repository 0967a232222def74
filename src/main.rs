use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use care_signal::config::AppConfig;
use care_signal::error::AppError;
use care_signal::telemetry;
use care_signal::workflows::audit::{
    write_audit_csv, AuditDecision, AuditPolicy, AuditSelector, CaseAuditContext, GuidelineTable,
    RollingHashSampler, Sampler,
};
use care_signal::workflows::disclosure::{
    attorney_visible_note, client_facing_message, DisclosureClassifier, DisclosureSelection,
    RiskFlag, TriggerTables,
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "care-signal",
    about = "Classify intake disclosures and select cases for supervisor priority review",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a disclosure selection (JSON) into risk flags
    Classify(ClassifyArgs),
    /// Evaluate one case audit context (JSON) for priority review
    Audit(AuditArgs),
    /// Evaluate a JSON array of case contexts and write an audit CSV
    Export(ExportArgs),
    /// Print the deterministic sample value for an identifier
    Sample(SampleArgs),
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    /// Path to the selection JSON, or `-` for stdin
    #[arg(long)]
    input: PathBuf,
    /// Optional replacement vocabulary JSON
    #[arg(long)]
    vocabulary: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct AuditArgs {
    /// Path to the case context JSON, or `-` for stdin
    #[arg(long)]
    input: PathBuf,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Optional guideline table JSON (injury type -> weeks)
    #[arg(long)]
    guidelines: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Path to a JSON array of case contexts, or `-` for stdin
    #[arg(long)]
    input: PathBuf,
    /// Destination CSV file
    #[arg(long)]
    output: PathBuf,
    /// Evaluation date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
    /// Optional guideline table JSON (injury type -> weeks)
    #[arg(long)]
    guidelines: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// Case or client identifier
    #[arg(long)]
    id: String,
}

#[derive(Debug, Serialize)]
struct ClassifyReport {
    flags: Vec<RiskFlag>,
    unrecognized_items: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    client_message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attorney_note: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct AuditReport {
    today: NaiveDate,
    summary: String,
    decision: AuditDecision,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    let policy = config.audit.policy();
    debug!(
        environment = ?config.environment,
        sample_rate = policy.random_sample_rate(),
        sample_buckets = policy.sample_buckets(),
        "care-signal configured"
    );

    match cli.command {
        Command::Classify(args) => {
            let tables = match &args.vocabulary {
                Some(path) => TriggerTables::from_reader(open(path)?)?,
                None => TriggerTables::standard(),
            };
            let selection: DisclosureSelection = serde_json::from_reader(open(&args.input)?)?;
            print_json(&classify_report(&DisclosureClassifier::new(tables), &selection))
        }
        Command::Audit(args) => {
            let selector = selector(policy, args.guidelines.as_deref())?;
            let context: CaseAuditContext = serde_json::from_reader(open(&args.input)?)?;
            let today = args.today.unwrap_or_else(|| Local::now().date_naive());
            print_json(&audit_report(&selector, &context, today))
        }
        Command::Export(args) => {
            let selector = selector(policy, args.guidelines.as_deref())?;
            let contexts: Vec<CaseAuditContext> = serde_json::from_reader(open(&args.input)?)?;
            let today = args.today.unwrap_or_else(|| Local::now().date_naive());
            let output = BufWriter::new(File::create(&args.output)?);
            let written = export_decisions(&selector, &contexts, today, output)?;
            info!(written, output = %args.output.display(), %today, "audit export written");
            Ok(())
        }
        Command::Sample(args) => {
            let sampler = RollingHashSampler::new(policy.sample_buckets());
            println!("{:.3}", sampler.sample(&args.id));
            Ok(())
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn open(path: &Path) -> Result<Box<dyn Read>, AppError> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

fn selector(
    policy: AuditPolicy,
    guidelines: Option<&Path>,
) -> Result<AuditSelector, AppError> {
    let table = match guidelines {
        Some(path) => GuidelineTable::from_reader(open(path)?)?,
        None => GuidelineTable::illustrative(),
    };
    Ok(AuditSelector::new(policy, table))
}

fn classify_report(
    classifier: &DisclosureClassifier,
    selection: &DisclosureSelection,
) -> ClassifyReport {
    let classification = classifier.classify_detailed(selection);
    ClassifyReport {
        client_message: client_facing_message(&classification.flags),
        attorney_note: attorney_visible_note(&classification.flags),
        unrecognized_items: classification.unrecognized.len(),
        flags: classification.flags,
    }
}

fn audit_report(
    selector: &AuditSelector,
    context: &CaseAuditContext,
    today: NaiveDate,
) -> AuditReport {
    let decision = selector.select(context, today);
    AuditReport {
        today,
        summary: decision.summary(),
        decision,
    }
}

fn export_decisions<W: Write>(
    selector: &AuditSelector,
    contexts: &[CaseAuditContext],
    today: NaiveDate,
    output: W,
) -> Result<usize, AppError> {
    let decisions: Vec<AuditDecision> = contexts
        .iter()
        .map(|context| selector.select(context, today))
        .collect();
    let rows = contexts
        .iter()
        .map(|context| context.case_or_client_id.as_str())
        .zip(decisions.iter());

    Ok(write_audit_csv(output, rows)?)
}
