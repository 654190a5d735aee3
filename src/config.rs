//! Report configuration parser
//!
//! Parses `debrief.toml` into the display settings applied by the CLI
//! layer: the documentation URL and whether reports are styled.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Display configuration loaded from `debrief.toml`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportConfig {
    /// Documentation URL substituted for the report's link placeholder.
    /// When unset, the placeholder is printed verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
    /// Whether reports use ANSI styling (default: true)
    #[serde(default = "default_color")]
    pub color: bool,
}

const fn default_color() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            docs_url: None,
            color: true,
        }
    }
}

impl ReportConfig {
    /// Load configuration from a path, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse configuration content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse debrief.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if let Some(url) = &self.docs_url {
            if url.trim().is_empty() {
                bail!("Invalid docs_url: URL cannot be empty");
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                bail!("Invalid docs_url '{url}': expected an http(s) URL");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = ReportConfig::parse(
            r#"
docs_url = "https://example.org/docs/deploy"
color = false
"#,
        )
        .unwrap();

        assert_eq!(
            config.docs_url.as_deref(),
            Some("https://example.org/docs/deploy")
        );
        assert!(!config.color);
    }

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config = ReportConfig::parse("").unwrap();
        assert_eq!(config, ReportConfig::default());
        assert!(config.color);
        assert!(config.docs_url.is_none());
    }

    #[test]
    fn test_reject_empty_docs_url() {
        let err = ReportConfig::parse(r#"docs_url = """#).unwrap_err();
        assert!(
            err.to_string().contains("Invalid docs_url"),
            "Expected 'Invalid docs_url' error, got: {err}"
        );
    }

    #[test]
    fn test_reject_non_http_docs_url() {
        let err = ReportConfig::parse(r#"docs_url = "ftp://example.org/docs""#).unwrap_err();
        assert!(
            err.to_string().contains("expected an http(s) URL"),
            "Expected URL scheme error, got: {err}"
        );
    }

    #[test]
    fn test_reject_invalid_toml() {
        let err = ReportConfig::parse("not valid toml {{{").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = ReportConfig::load_or_default("/nonexistent/debrief.toml").unwrap();
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("debrief.toml");
        std::fs::write(&config_path, "docs_url = \"https://example.org/docs\"\n").unwrap();

        let config = ReportConfig::load_or_default(&config_path).unwrap();
        assert_eq!(config.docs_url.as_deref(), Some("https://example.org/docs"));
    }

    #[test]
    fn test_load_or_default_propagates_parse_errors() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("debrief.toml");
        std::fs::write(&config_path, "docs_url = 42\n").unwrap();

        assert!(ReportConfig::load_or_default(&config_path).is_err());
    }
}
