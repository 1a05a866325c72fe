//! Configuration module

use crate::error::{CliError, CliResult};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
///
/// Every section and field is optional in the TOML file.
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Record sink configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Progress bar configuration
    #[serde(default)]
    pub progress: ProgressConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> CliResult<Self> {
        let config: CliConfig =
            toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config.output.validate()?;
        Ok(config)
    }
}

/// Largest accepted record sink buffer (KB)
pub const MAX_BUFFER_KB: usize = 1024 * 1024;

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Buffer capacity for the record sink (KB)
    pub buffer_kb: usize,

    /// Flush after every record instead of when the buffer fills
    pub flush_each_record: bool,
}

impl OutputConfig {
    /// Sink buffer capacity in bytes
    pub fn buffer_bytes(&self) -> usize {
        self.buffer_kb.saturating_mul(1024)
    }

    fn validate(&self) -> Result<(), CliError> {
        if self.buffer_kb == 0 && !self.flush_each_record {
            return Err(CliError::ConfigError(
                "output.buffer_kb must be greater than 0".to_string(),
            ));
        }
        if self.buffer_kb > MAX_BUFFER_KB {
            return Err(CliError::ConfigError(format!(
                "output.buffer_kb must be at most {MAX_BUFFER_KB}, got {}",
                self.buffer_kb
            )));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            buffer_kb: 64,
            flush_each_record: false,
        }
    }
}

/// Logging-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when neither RUST_LOG nor -v is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Progress-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    /// Show a progress bar on stderr (hidden anyway when stderr is not a terminal)
    pub enabled: bool,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
