//! Run configuration: artifact paths and validation thresholds.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::error::Result;
use crate::pipeline::validate::DEFAULT_MIN_CONTENT_LENGTH;

/// Configuration for a complete pipeline execution. Values may come from a
/// TOML file; command-line flags override whatever was loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Input JSON file holding the raw scraped records.
    pub input_file: String,
    /// Destination for the cleaned dataset.
    pub output_file: String,
    /// Destination for the plain-text quality report.
    pub report_file: String,
    /// Minimum content length in characters for the content rule.
    pub min_content_length: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_file: "sample_data.json".to_string(),
            output_file: "cleaned_output.json".to_string(),
            report_file: "quality_report.txt".to_string(),
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a TOML file. Missing keys fall back to the
    /// defaults above.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.input_file, "sample_data.json");
        assert_eq!(config.output_file, "cleaned_output.json");
        assert_eq!(config.report_file, "quality_report.txt");
        assert_eq!(config.min_content_length, 50);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "input_file = \"scraped.json\"").expect("write");
        writeln!(file, "min_content_length = 80").expect("write");

        let config = PipelineConfig::from_file(file.path()).expect("load config");
        assert_eq!(config.input_file, "scraped.json");
        assert_eq!(config.min_content_length, 80);
        assert_eq!(config.output_file, "cleaned_output.json");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(PipelineConfig::from_file("no/such/config.toml").is_err());
    }
}
