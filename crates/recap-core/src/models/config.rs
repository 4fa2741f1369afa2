//! Configuration structures for the receipt pipeline.
//!
//! Extraction rules are deliberately not configurable: adapting to a new
//! receipt layout means editing the rule table, not passing configuration.
//! What is configurable is the document boundary and the output artifact.

use serde::{Deserialize, Serialize};

/// Main configuration for the recap pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecapConfig {
    /// PDF boundary configuration.
    pub pdf: PdfConfig,

    /// Output artifact configuration.
    pub output: OutputConfig,
}

/// PDF text-extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum embedded-text length below which a PDF is reported as likely
    /// scanned (fields will default).
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 20 }
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print the JSON artifact.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl RecapConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> crate::error::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
