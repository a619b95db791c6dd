//! YAML Configuration File Support for sheetmatch
//!
//! This module loads a whole matching run's settings (normalization, threshold,
//! input parsing and output layout) from a single YAML file. Command-line flags
//! override whatever the file sets.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # sheetmatch configuration
//! version: "1.0"
//! name: "customers vs invoices"
//!
//! canonical:
//!   version: 1
//!   decomposition: compatibility
//!
//! matcher:
//!   threshold: 85
//!
//! input:
//!   delimiter: ";"
//!
//! output:
//!   format: csv
//!   query_header: "source_value"
//!   matched_header: "best_match"
//!   score_header: "similarity_score"
//! ```

use std::fs;
use std::path::Path;

use canonical::NormalizeConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for one matching run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SheetmatchConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Normalization applied to both columns
    #[serde(default)]
    pub canonical: NormalizeConfig,

    /// Threshold for reported matches
    #[serde(default)]
    pub matcher: MatcherYamlConfig,

    /// How input tables are parsed
    #[serde(default)]
    pub input: InputYamlConfig,

    /// Export layout
    #[serde(default)]
    pub output: OutputYamlConfig,
}

impl SheetmatchConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SheetmatchConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.match_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.input.validate()?;
        self.output.validate()?;

        Ok(())
    }

    /// The matcher settings this file describes.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            threshold: self.matcher.threshold,
            normalize: self.canonical.clone(),
        }
    }
}

impl Default for SheetmatchConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: NormalizeConfig::default(),
            matcher: MatcherYamlConfig::default(),
            input: InputYamlConfig::default(),
            output: OutputYamlConfig::default(),
        }
    }
}

/// Matcher YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatcherYamlConfig {
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl Default for MatcherYamlConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Input table YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputYamlConfig {
    /// Single-byte field delimiter
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

impl InputYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !self.delimiter.is_ascii() {
            return Err(ConfigLoadError::Validation(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// The delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> u8 {
        // Validated ASCII, so the cast keeps the value.
        self.delimiter as u8
    }
}

impl Default for InputYamlConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
        }
    }
}

/// Export format for match results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

/// Output YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputYamlConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_query_header")]
    pub query_header: String,

    #[serde(default = "default_matched_header")]
    pub matched_header: String,

    #[serde(default = "default_score_header")]
    pub score_header: String,
}

impl OutputYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        let headers = [&self.query_header, &self.matched_header, &self.score_header];
        if headers.iter().any(|h| h.trim().is_empty()) {
            return Err(ConfigLoadError::Validation(
                "output headers must not be empty".into(),
            ));
        }
        if self.query_header == self.matched_header
            || self.query_header == self.score_header
            || self.matched_header == self.score_header
        {
            return Err(ConfigLoadError::Validation(
                "output headers must be distinct".into(),
            ));
        }
        Ok(())
    }
}

impl Default for OutputYamlConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            query_header: default_query_header(),
            matched_header: default_matched_header(),
            score_header: default_score_header(),
        }
    }
}

fn default_threshold() -> u8 {
    MatchConfig::default().threshold
}
fn default_delimiter() -> char {
    ','
}
fn default_query_header() -> String {
    "source_value".to_string()
}
fn default_matched_header() -> String {
    "best_match".to_string()
}
fn default_score_header() -> String {
    "similarity_score".to_string()
}
