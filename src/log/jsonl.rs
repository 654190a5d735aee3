//! JSONL (JSON Lines) history of rendered reports
//!
//! Provides append-only logging of report records to `<log_dir>/log.jsonl`,
//! one JSON object per line.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use crate::outcome::ResultKind;

/// A single rendered report, as recorded in the history log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRecord {
    /// ISO 8601 timestamp of when the report was rendered
    pub timestamp: DateTime<Utc>,
    /// Display name of the deployed module
    pub module_name: String,
    /// Outcome kind the report was rendered for
    pub kind: ResultKind,
    /// One-line status summary of the outcome
    pub summary: String,
}

/// Append-only JSONL logger for report history
pub struct JsonlLogger {
    log_path: PathBuf,
}

impl JsonlLogger {
    /// Create a logger writing to `<log_dir>/log.jsonl`, creating the
    /// directory if needed.
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        Ok(Self {
            log_path: log_dir.join("log.jsonl"),
        })
    }

    /// Append a report record to the log.
    pub fn append(&self, record: &ReportRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open log file: {}", self.log_path.display()))?;

        let json =
            serde_json::to_string(record).context("Failed to serialize report record to JSON")?;

        writeln!(file, "{json}").context("Failed to write to log file")?;

        Ok(())
    }

    /// Read all report records from the log, in chronological order.
    ///
    /// A missing log file yields an empty vector.
    pub fn read_all(&self) -> Result<Vec<ReportRecord>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.log_path)
            .with_context(|| format!("Failed to read log file: {}", self.log_path.display()))?;

        let mut records = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let record: ReportRecord = serde_json::from_str(line)
                .with_context(|| format!("Failed to parse line {} as JSON", line_num + 1))?;

            records.push(record);
        }

        Ok(records)
    }

    /// Get the path to the log file.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_record(module_name: &str, kind: ResultKind, summary: &str) -> ReportRecord {
        ReportRecord {
            timestamp: Utc::now(),
            module_name: module_name.to_string(),
            kind,
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_new_logger_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join(".debrief");

        let logger = JsonlLogger::new(&log_dir).unwrap();

        assert!(log_dir.exists());
        assert_eq!(logger.log_path(), log_dir.join("log.jsonl"));
    }

    #[test]
    fn test_append_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let logger = JsonlLogger::new(temp_dir.path()).unwrap();

        let record = make_record(
            "MyModule",
            ResultKind::Success,
            "[ MyModule ] deployed 2 contracts",
        );
        logger.append(&record).unwrap();

        assert!(logger.log_path().exists());
    }

    #[test]
    fn test_append_then_read_all_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let logger = JsonlLogger::new(temp_dir.path()).unwrap();

        logger
            .append(&make_record(
                "MyModule",
                ResultKind::ValidationFailure,
                "[ MyModule ] 3 validation errors across 2 futures",
            ))
            .unwrap();
        logger
            .append(&make_record(
                "OtherModule",
                ResultKind::Success,
                "[ OtherModule ] deployed 1 contract",
            ))
            .unwrap();

        let records = logger.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].module_name, "MyModule");
        assert_eq!(records[0].kind, ResultKind::ValidationFailure);
        assert_eq!(records[1].module_name, "OtherModule");
        assert_eq!(records[1].kind, ResultKind::Success);
    }

    #[test]
    fn test_read_all_missing_log_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = JsonlLogger::new(temp_dir.path()).unwrap();

        let records = logger.read_all().unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_read_all_rejects_corrupt_line() {
        let temp_dir = TempDir::new().unwrap();
        let logger = JsonlLogger::new(temp_dir.path()).unwrap();

        fs::write(logger.log_path(), "{not json}\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(
            err.to_string().contains("line 1"),
            "Expected line number in error, got: {err}"
        );
    }
}
