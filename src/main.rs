//! Debrief - Deployment outcome reporter
//!
//! CLI entry point: reads the outcome JSON produced by the deployment
//! engine and prints a human-readable report for the run.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;

use debrief::config::ReportConfig;
use debrief::log::{JsonlLogger, ReportRecord};
use debrief::outcome::{DeploymentResult, ReportContext};
use debrief::report::{status_line, substitute_docs_link, AnsiStyle, CompletionRenderer};

/// Deployment outcome reporter
///
/// Renders the final outcome of a deployment run (success, validation or
/// reconciliation failure, cancellation, execution failure) as terminal
/// text, and keeps a JSONL history of rendered reports.
#[derive(Parser, Debug)]
#[command(name = "debrief", version, about)]
struct Cli {
    /// Path to the outcome JSON file produced by the deployment engine
    #[arg(long)]
    outcome: PathBuf,

    /// Module display name used in report headers
    #[arg(long)]
    module: String,

    /// Path to the debrief.toml configuration file
    #[arg(long, default_value = "debrief.toml")]
    config: PathBuf,

    /// Directory for log files (.debrief by default)
    #[arg(long, default_value = ".debrief")]
    log_dir: PathBuf,

    /// Disable ANSI styling in the report
    #[arg(long)]
    no_color: bool,
}

/// Load and parse an outcome JSON file.
fn load_outcome(path: &Path) -> Result<DeploymentResult> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read outcome file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse outcome file: {}", path.display()))
}

/// Apply the configured docs URL to a rendered report, if any.
fn apply_docs_link(report: String, docs_url: Option<&str>) -> String {
    match docs_url {
        Some(url) => substitute_docs_link(&report, url),
        None => report,
    }
}

/// Build a `ReportRecord` for the JSONL history log.
fn build_record(result: &DeploymentResult, ctx: &ReportContext) -> ReportRecord {
    ReportRecord {
        timestamp: chrono::Utc::now(),
        module_name: ctx.module_name.clone(),
        kind: result.kind(),
        summary: status_line(result, ctx),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.module.trim().is_empty() {
        bail!("Module name cannot be empty");
    }

    let config = ReportConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from '{}'", cli.config.display()))?;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    let result = load_outcome(&cli.outcome)?;
    let ctx = ReportContext::new(&cli.module);

    let renderer = CompletionRenderer::new(AnsiStyle);
    let report = apply_docs_link(renderer.render(&result, &ctx), config.docs_url.as_deref());

    // Report to stdout, status line to stderr so piped output stays clean
    println!("{report}");
    eprintln!("{}", status_line(&result, &ctx));

    let logger = JsonlLogger::new(&cli.log_dir).context("Failed to initialize JSONL logger")?;
    logger
        .append(&build_record(&result, &ctx))
        .context("Failed to write to JSONL log")?;

    if result.is_success() {
        Ok(())
    } else {
        std::process::exit(1);
    }
}
