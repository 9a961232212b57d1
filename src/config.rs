//! Analysis, generation and output configuration.
//!
//! Settings can be loaded from a TOML file with one section per concern;
//! missing sections fall back to their defaults. Command-line flags are
//! applied on top by the binary.

use crate::generation::KeyVariant;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parameters of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Outcomes strictly below this value form streaks.
    pub threshold: f64,
    /// Number of longest streaks to rank.
    pub top_n: usize,
    /// Shortest streak length listed in the frequency table.
    pub min_reported_length: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            threshold: 2.0,
            top_n: 100,
            min_reported_length: 3,
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with the given threshold and top-N size.
    pub fn new(threshold: f64, top_n: usize) -> Self {
        Self {
            threshold,
            top_n,
            ..Default::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.threshold.is_finite() || self.threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

/// Parameters for regenerating outcomes from a seed chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of outcomes to generate.
    pub count: usize,
    /// Key material to draw against.
    pub key_variant: KeyVariant,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10_000,
            key_variant: KeyVariant::Default,
        }
    }
}

impl GeneratorConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidSampleCount);
        }
        Ok(())
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving generated histories; also searched for the most
    /// recent history when no input file is given.
    pub directory: PathBuf,
    /// Save generated histories as CSV.
    pub save_history: bool,
    /// Header label of the value column.
    pub value_label: String,
    /// Append the full outcome history to text reports.
    pub include_history: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("crashLogs"),
            save_history: true,
            value_label: crate::source::DEFAULT_VALUE_LABEL.to_string(),
            include_history: false,
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid threshold {0} (must be finite and positive)")]
    InvalidThreshold(f64),
    #[error("invalid sample count (must be at least 1)")]
    InvalidSampleCount,
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// `[analysis]` section.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// `[generator]` section.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// `[output]` section.
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.analysis.validate()?;
        config.generator.validate()?;
        Ok(config)
    }
}
