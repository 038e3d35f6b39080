//! Configuration for fluent-guard.
//!
//! Selects the sink that collects reported messages and controls whether
//! failed assumptions are logged, without code changes.
//!
//! # Examples
//!
//! ```
//! use fluent_guard_config::{GuardConfig, SinkKind};
//!
//! let config = GuardConfig::from_toml_str(r#"
//!     [report]
//!     sink = "memory"
//!     capacity = 64
//!
//!     [assumes]
//!     show_assert = false
//! "#).unwrap();
//!
//! assert_eq!(config.report.sink, SinkKind::Memory);
//! assert_eq!(config.report.capacity, Some(64));
//! assert!(!config.assumes.show_assert);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use fluent_guard_config::GuardConfig;
//!
//! let config = GuardConfig::load("guard.toml").unwrap_or_default();
//! assert!(config.assumes.show_assert);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level guard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GuardConfig {
    /// Where reported messages go.
    #[serde(default)]
    pub report: ReportConfig,

    /// Behaviour of failed assumptions.
    #[serde(default)]
    pub assumes: AssumesConfig,
}

impl GuardConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.report.validate()
    }

    /// Sets the report sink.
    pub fn with_sink(mut self, sink: SinkKind) -> Self {
        self.report.sink = sink;
        self
    }

    /// Bounds the number of messages a memory sink retains.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.report.capacity = Some(capacity);
        self
    }

    /// Sets the minimum level of the tracing sink.
    pub fn with_level(mut self, level: ReportLevel) -> Self {
        self.report.level = level;
        self
    }

    /// Enables or disables error logging of failed assumptions.
    pub fn with_show_assert(mut self, show_assert: bool) -> Self {
        self.assumes.show_assert = show_assert;
        self
    }
}

/// Report sink configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportConfig {
    /// Sink implementation.
    #[serde(default)]
    pub sink: SinkKind,

    /// Maximum retained messages for the memory sink. Unbounded when absent.
    #[serde(default)]
    pub capacity: Option<usize>,

    /// Minimum level emitted by the tracing sink.
    #[serde(default)]
    pub level: ReportLevel,
}

impl ReportConfig {
    /// Rejects a zero capacity.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == Some(0) {
            return Err(ConfigError::Invalid(
                "report.capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Report sink implementations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Keep messages in memory for later inspection.
    #[default]
    Memory,

    /// Emit messages as tracing events.
    Tracing,

    /// Drop messages.
    Discard,
}

/// Minimum level for the tracing sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

/// Assumption configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AssumesConfig {
    /// Log failed assumptions at error level before they are returned.
    #[serde(default = "default_show_assert")]
    pub show_assert: bool,
}

fn default_show_assert() -> bool {
    true
}

impl Default for AssumesConfig {
    fn default() -> Self {
        Self {
            show_assert: default_show_assert(),
        }
    }
}
