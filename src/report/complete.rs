//! Deployment completion reports
//!
//! Renders the final outcome of a deployment run as a terminal report.
//! One template per outcome kind, selected by an exhaustive match; mapping
//! and bucket order comes straight from the outcome value.

use indexmap::IndexMap;

use crate::outcome::{
    DeployedContract, DeploymentResult, FailedExecution, HeldExecution, ReportContext,
    TimedOutExecution,
};
use crate::report::format::{address_line, bullet_list};
use crate::report::style::TextStyle;

/// Placeholder emitted for documentation links.
///
/// The CLI layer swaps in the real URL via [`substitute_docs_link`]; the
/// renderer never knows the destination.
pub const DOCS_LINK_PLACEHOLDER: &str = "<LINK>";

/// Renders deployment completion reports with the given text decoration.
pub struct CompletionRenderer<S> {
    style: S,
}

impl<S: TextStyle> CompletionRenderer<S> {
    /// Create a renderer using `style` for emphasis.
    #[must_use]
    pub const fn new(style: S) -> Self {
        Self { style }
    }

    /// Render the completion report for an outcome.
    ///
    /// Every template starts with a blank line followed by a
    /// `[ <module> ] <status>` header. Identical inputs yield byte-identical
    /// output.
    #[must_use]
    pub fn render(&self, result: &DeploymentResult, ctx: &ReportContext) -> String {
        match result {
            DeploymentResult::Success { contracts } => self.success(contracts, ctx),
            DeploymentResult::ValidationFailure { errors } => {
                future_errors_section("validation failed", errors, ctx)
            }
            DeploymentResult::ReconciliationFailure { errors } => {
                future_errors_section("reconciliation failed", errors, ctx)
            }
            DeploymentResult::PreviousRunFailure { errors } => self.previous_run(errors, ctx),
            DeploymentResult::ExecutionFailure {
                timed_out,
                held,
                failed,
                ..
            } => execution_section(timed_out, failed, held, ctx),
        }
    }

    fn success(
        &self,
        contracts: &IndexMap<String, DeployedContract>,
        ctx: &ReportContext,
    ) -> String {
        let body = if contracts.is_empty() {
            self.style.italic("No contracts were deployed")
        } else {
            contracts
                .values()
                .map(|contract| address_line(&contract.id, &contract.address))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "\n[ {} ] successfully deployed 🚀\n\n{}\n\n{body}",
            ctx.module_name,
            self.style.bold("Deployed Addresses"),
        )
    }

    /// Only the future ids are listed; the per-future reasons carried by the
    /// outcome are not part of this template.
    fn previous_run(&self, errors: &IndexMap<String, Vec<String>>, ctx: &ReportContext) -> String {
        format!(
            "\n[ {} ] deployment cancelled ⛔\n\n\
             These futures failed or timed out on a previous run:\n{}\n\n\
             Use the {} task to reset them.\n\
             Check out the docs to learn more: {DOCS_LINK_PLACEHOLDER}",
            ctx.module_name,
            bullet_list(errors.keys()),
            self.style.italic("wipe"),
        )
    }
}

/// Shared by validation and reconciliation failures, which differ only in
/// the header phrase.
fn future_errors_section(
    phrase: &str,
    errors: &IndexMap<String, Vec<String>>,
    ctx: &ReportContext,
) -> String {
    let blocks = errors
        .iter()
        .map(|(future_id, messages)| format!("{future_id} errors:\n{}", bullet_list(messages)))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("\n[ {} ] {phrase} ⛔\n\n{blocks}", ctx.module_name)
}

/// Subsection order is fixed: timed-out, failures, held. Empty buckets are
/// omitted entirely, header included.
fn execution_section(
    timed_out: &[TimedOutExecution],
    failed: &[FailedExecution],
    held: &[HeldExecution],
    ctx: &ReportContext,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !timed_out.is_empty() {
        sections.push(format!(
            "Transaction remains unconfirmed after fee bump:\n{}\n\n\
             Consider increasing the fee in your config.\n\
             Check out the docs to learn more: {DOCS_LINK_PLACEHOLDER}",
            bullet_list(timed_out.iter().map(|entry| entry.future_id.as_str())),
        ));
    }

    if !failed.is_empty() {
        sections.push(format!(
            "Failures:\n{}",
            bullet_list(failed.iter().map(|entry| format!(
                "{}/{}: {}",
                entry.future_id, entry.network_interaction_id, entry.error
            ))),
        ));
    }

    if !held.is_empty() {
        sections.push(format!(
            "Held:\n{}",
            bullet_list(held.iter().map(|entry| format!(
                "{}/{}: {}",
                entry.future_id, entry.held_id, entry.reason
            ))),
        ));
    }

    format!(
        "\n[ {} ] failed ⛔\n\n{}",
        ctx.module_name,
        sections.join("\n\n")
    )
}

/// Replace the documentation link placeholder with a concrete URL.
#[must_use]
pub fn substitute_docs_link(report: &str, url: &str) -> String {
    report.replace(DOCS_LINK_PLACEHOLDER, url)
}
