//! Debrief - Deployment outcome reporter
//!
//! Debrief turns the final outcome of a multi-step deployment run into a
//! human-readable terminal report. The deployment engine computes the
//! outcome; this crate classifies and formats it.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod log;
pub mod outcome;
pub mod report;

#[cfg(test)]
pub mod testutil;

// Re-export commonly used types
pub use config::ReportConfig;
pub use log::{JsonlLogger, ReportRecord};
pub use outcome::{DeploymentResult, ReportContext, ResultKind};
pub use report::{
    status_line, substitute_docs_link, AnsiStyle, CompletionRenderer, PlainStyle, TextStyle,
    DOCS_LINK_PLACEHOLDER,
};
