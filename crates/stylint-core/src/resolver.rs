//! Configuration resolution: defaults merged with user overrides.

use crate::config::{Config, ConfigError};
use crate::registry::RuleRegistry;
use crate::rule::{Rule, RuleOptions};
use crate::types::Severity;
use std::collections::BTreeMap;

/// Final settings for one rule after resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSettings {
    /// Whether the rule runs.
    pub enabled: bool,
    /// Severity stamped onto the rule's violations.
    pub severity: Severity,
    /// Merged option values.
    pub options: RuleOptions,
}

/// The final, merged set of active rules and their settings for one lint
/// run.
///
/// Contains an entry for every registered rule. Built once per
/// invocation, immutable after resolution, exclusively owned by one run.
#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    entries: BTreeMap<String, RuleSettings>,
}

impl ResolvedConfig {
    /// Settings for a rule, if it was registered at resolution time.
    #[must_use]
    pub fn settings(&self, id: &str) -> Option<&RuleSettings> {
        self.entries.get(id)
    }

    /// Returns `true` if the rule is present and enabled.
    #[must_use]
    pub fn is_enabled(&self, id: &str) -> bool {
        self.entries.get(id).is_some_and(|s| s.enabled)
    }

    /// Iterates over (rule id, settings) in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RuleSettings)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries (one per registered rule).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no rules were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Merges rule defaults with configuration overrides.
///
/// For every registered rule the result starts from the rule's declared
/// defaults; overrides then take precedence field-by-field, and the
/// options map merges key-by-key rather than wholesale. Resolution is
/// total and deterministic: the same registry and config always produce
/// the same [`ResolvedConfig`].
///
/// # Errors
///
/// Fails fast, before any lint work:
/// - [`ConfigError::UnknownRule`] when an override names an id that is
///   not registered.
/// - [`ConfigError::InvalidOption`] when an override carries an option
///   key absent from the rule's schema, or a value the schema rejects.
pub fn resolve(registry: &RuleRegistry, config: &Config) -> Result<ResolvedConfig, ConfigError> {
    // Validate override ids up front so a typo fails even when the rest
    // of the file is fine.
    for id in config.rules.keys() {
        if !registry.contains(id) {
            return Err(ConfigError::UnknownRule { id: id.clone() });
        }
    }

    let mut entries = BTreeMap::new();
    for rule in registry.iter() {
        let mut settings = RuleSettings {
            enabled: true,
            severity: rule.default_severity(),
            options: rule.default_options(),
        };

        if let Some(over) = config.rules.get(rule.id()) {
            if let Some(enabled) = over.enabled {
                settings.enabled = enabled;
            }
            if let Some(severity) = over.severity {
                settings.severity = severity;
            }
            merge_options(rule, &mut settings.options, &over.options)?;
        }

        tracing::debug!(
            rule = rule.id(),
            enabled = settings.enabled,
            severity = %settings.severity,
            "resolved rule settings"
        );
        entries.insert(rule.id().to_string(), settings);
    }

    Ok(ResolvedConfig { entries })
}

/// Validates and merges option overrides into `options`, key-by-key.
fn merge_options(
    rule: &dyn Rule,
    options: &mut RuleOptions,
    overrides: &std::collections::HashMap<String, toml::Value>,
) -> Result<(), ConfigError> {
    // Deterministic application order regardless of HashMap iteration.
    let mut keys: Vec<&String> = overrides.keys().collect();
    keys.sort();

    for key in keys {
        let value = &overrides[key];
        let spec = rule
            .options_schema()
            .iter()
            .find(|s| s.key == key.as_str())
            .ok_or_else(|| ConfigError::InvalidOption {
                rule: rule.id().to_string(),
                key: key.clone(),
                message: "no such option".to_string(),
            })?;
        spec.validate(value).map_err(|message| ConfigError::InvalidOption {
            rule: rule.id().to_string(),
            key: key.clone(),
            message,
        })?;
        options.set(key.clone(), value.clone());
    }
    Ok(())
}
