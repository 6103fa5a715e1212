//! Configuration types for stylint.
//!
//! A configuration file carries per-rule overrides:
//!
//! ```toml
//! preset = "recommended"
//!
//! [rules.quotes]
//! enabled = true
//! severity = "error"
//! style = "single"
//! ```
//!
//! Overrides are merged with rule defaults by the
//! [resolver](crate::resolver); unknown rule ids and invalid option
//! values fail at resolution time, before any file is linted.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration as deserialized from a config file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to start from (e.g., "recommended", "strict", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Per-rule overrides, keyed by rule id.
    #[serde(default)]
    pub rules: HashMap<String, RuleOverride>,
}

impl Config {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Builder-style insertion of a rule override. Mostly for tests.
    #[must_use]
    pub fn with_rule(mut self, id: impl Into<String>, rule: RuleOverride) -> Self {
        self.rules.insert(id.into(), rule);
        self
    }
}

/// Overrides for one rule.
///
/// Absent fields fall back to the rule's defaults; `options` merges
/// key-by-key rather than replacing the default map wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleOverride {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Rule-specific option overrides as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleOverride {
    /// Creates an empty override.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enabled flag.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets the severity override.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Sets one option override.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Configuration errors, surfaced before any file is linted.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading a config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in a config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// An override names a rule id that is not registered.
    #[error("unknown rule '{id}' in configuration")]
    UnknownRule {
        /// The unregistered rule id.
        id: String,
    },

    /// An override carries an option the rule's schema rejects.
    #[error("invalid option '{key}' for rule '{rule}': {message}")]
    InvalidOption {
        /// Rule whose schema rejected the option.
        rule: String,
        /// Offending option key.
        key: String,
        /// Description of the mismatch.
        message: String,
    },
}
