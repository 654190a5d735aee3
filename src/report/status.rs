//! One-line status summaries
//!
//! Condensed counterparts to the full completion report, used for the
//! stderr status line and the JSONL history record.

use indexmap::IndexMap;

use crate::outcome::{DeploymentResult, ReportContext};
use crate::report::format::pluralize;

/// Summarize an outcome as a single `[ <module> ] ...` line.
#[must_use]
pub fn status_line(result: &DeploymentResult, ctx: &ReportContext) -> String {
    let summary = match result {
        DeploymentResult::Success { contracts } => {
            format!("deployed {}", pluralize(contracts.len(), "contract"))
        }
        DeploymentResult::ValidationFailure { errors } => {
            error_counts("validation error", errors)
        }
        DeploymentResult::ReconciliationFailure { errors } => {
            error_counts("reconciliation error", errors)
        }
        DeploymentResult::PreviousRunFailure { errors } => format!(
            "cancelled, {} blocked by a previous run",
            pluralize(errors.len(), "future")
        ),
        DeploymentResult::ExecutionFailure {
            timed_out,
            held,
            failed,
            ..
        } => {
            let mut parts = Vec::new();
            if !timed_out.is_empty() {
                parts.push(format!("{} timed out", timed_out.len()));
            }
            if !failed.is_empty() {
                parts.push(format!("{} failed", failed.len()));
            }
            if !held.is_empty() {
                parts.push(format!("{} held", held.len()));
            }

            if parts.is_empty() {
                "failed".to_string()
            } else {
                parts.join(", ")
            }
        }
    };

    format!("[ {} ] {summary}", ctx.module_name)
}

fn error_counts(noun: &str, errors: &IndexMap<String, Vec<String>>) -> String {
    let total: usize = errors.values().map(Vec::len).sum();
    format!(
        "{} across {}",
        pluralize(total, noun),
        pluralize(errors.len(), "future")
    )
}
