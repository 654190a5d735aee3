//! Logging and observability
//!
//! This module provides JSONL logging of rendered report history.

pub mod jsonl;

pub use jsonl::{JsonlLogger, ReportRecord};
