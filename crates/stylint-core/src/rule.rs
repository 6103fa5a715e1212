//! The rule trait and per-rule option handling.

use crate::context::{FileContext, FileMeta};
use crate::types::{Severity, Violation};
use std::collections::BTreeMap;

/// Declared kind and bounds of a single rule option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// Boolean flag.
    Bool,
    /// Integer within an inclusive range.
    Int {
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },
    /// Free-form string.
    Str,
    /// String restricted to a fixed set of values.
    Choice(&'static [&'static str]),
}

/// Schema entry for one rule option, validated at configuration
/// resolution time rather than during lint execution.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    /// Option key as it appears in configuration.
    pub key: &'static str,
    /// Accepted kind and bounds.
    pub kind: OptionKind,
}

impl OptionSpec {
    /// Validates a configured value against this spec.
    ///
    /// # Errors
    ///
    /// Returns a description of the mismatch when the value has the wrong
    /// kind or falls outside the declared bounds.
    pub fn validate(&self, value: &toml::Value) -> Result<(), String> {
        match self.kind {
            OptionKind::Bool => {
                if value.as_bool().is_none() {
                    return Err(format!("expected a boolean, got {value}"));
                }
            }
            OptionKind::Int { min, max } => match value.as_integer() {
                Some(n) if n >= min && n <= max => {}
                Some(n) => {
                    return Err(format!("value {n} is outside the range {min}..={max}"));
                }
                None => return Err(format!("expected an integer, got {value}")),
            },
            OptionKind::Str => {
                if value.as_str().is_none() {
                    return Err(format!("expected a string, got {value}"));
                }
            }
            OptionKind::Choice(choices) => match value.as_str() {
                Some(s) if choices.contains(&s) => {}
                Some(s) => {
                    return Err(format!(
                        "unexpected value \"{s}\", expected one of: {}",
                        choices.join(", ")
                    ));
                }
                None => return Err(format!("expected a string, got {value}")),
            },
        }
        Ok(())
    }
}

/// Resolved option values for one rule.
///
/// Keys are ordered so iteration (and therefore resolution output) is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOptions {
    values: BTreeMap<String, toml::Value>,
}

impl RuleOptions {
    /// Creates an empty option set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option value, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<toml::Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<toml::Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Raw value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values
            .get(key)
            .and_then(toml::Value::as_bool)
            .unwrap_or(default)
    }

    /// Gets an integer option with a default value.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.values
            .get(key)
            .and_then(toml::Value::as_integer)
            .unwrap_or(default)
    }

    /// Gets a string option with a default value.
    #[must_use]
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.values
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or(default)
    }

    /// Iterates over (key, value) pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &toml::Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A style lint rule evaluated over a token sequence.
///
/// Rules are stateless across files and side-effect free with respect to
/// shared state: two rules evaluating the same file concurrently must
/// produce identical results regardless of order.
///
/// # Example
///
/// ```ignore
/// use stylint_core::{FileContext, Rule, RuleOptions, Severity, Violation};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn id(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "SL099" }
///
///     fn check(&self, ctx: &FileContext, _options: &RuleOptions) -> Vec<Violation> {
///         ctx.tokens
///             .iter()
///             .filter(|t| t.kind == TokenKind::Whitespace && t.text.contains('\t'))
///             .map(|t| Violation::new(self.code(), self.id(), Severity::Warning, t.span, "Tab found"))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the unique kebab-case id of this rule (e.g., "quotes").
    fn id(&self) -> &'static str;

    /// Returns the rule code (e.g., "SL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Returns the option schema for this rule.
    ///
    /// Overrides are validated against this schema when configuration is
    /// resolved; rules without options keep the empty default.
    fn options_schema(&self) -> &'static [OptionSpec] {
        &[]
    }

    /// Returns the default option values for this rule.
    fn default_options(&self) -> RuleOptions {
        RuleOptions::new()
    }

    /// Whether this rule applies to the given file.
    fn applies_to(&self, meta: &FileMeta) -> bool {
        meta.is_javascript()
    }

    /// Checks one file and returns any violations found.
    ///
    /// `options` carries the resolved option values for this rule; rules
    /// may trust them to satisfy [`options_schema`](Self::options_schema).
    fn check(&self, ctx: &FileContext, options: &RuleOptions) -> Vec<Violation>;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::token::TokenKind;

    struct TestRule;

    impl Rule for TestRule {
        fn id(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext, _options: &RuleOptions) -> Vec<Violation> {
            ctx.tokens
                .iter()
                .filter(|t| t.kind == TokenKind::Identifier)
                .map(|t| {
                    Violation::new(
                        self.code(),
                        self.id(),
                        self.default_severity(),
                        t.span,
                        "identifier found",
                    )
                })
                .collect()
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.id(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert!(rule.options_schema().is_empty());
        assert!(rule.applies_to(&FileMeta::new("a.js")));
        assert!(!rule.applies_to(&FileMeta::new("a.css")));
    }

    #[test]
    fn rule_check_runs_over_tokens() {
        let meta = FileMeta::new("a.js");
        let source = "foo bar";
        let tokens = tokenize(source);
        let ctx = FileContext::new(&meta, source, &tokens);
        let violations = TestRule.check(&ctx, &RuleOptions::new());
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn option_spec_bool() {
        let spec = OptionSpec {
            key: "flag",
            kind: OptionKind::Bool,
        };
        assert!(spec.validate(&toml::Value::Boolean(true)).is_ok());
        assert!(spec.validate(&toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn option_spec_int_range() {
        let spec = OptionSpec {
            key: "width",
            kind: OptionKind::Int { min: 1, max: 8 },
        };
        assert!(spec.validate(&toml::Value::Integer(4)).is_ok());
        assert!(spec.validate(&toml::Value::Integer(0)).is_err());
        assert!(spec.validate(&toml::Value::Integer(9)).is_err());
        assert!(spec.validate(&toml::Value::String("4".into())).is_err());
    }

    #[test]
    fn option_spec_choice() {
        let spec = OptionSpec {
            key: "style",
            kind: OptionKind::Choice(&["single", "double"]),
        };
        assert!(spec.validate(&toml::Value::String("single".into())).is_ok());
        assert!(spec.validate(&toml::Value::String("backtick".into())).is_err());
        assert!(spec.validate(&toml::Value::Boolean(true)).is_err());
    }

    #[test]
    fn options_typed_getters() {
        let options = RuleOptions::new()
            .with("style", "single")
            .with("width", 4i64)
            .with("strict", true);
        assert_eq!(options.get_str("style", "double"), "single");
        assert_eq!(options.get_int("width", 2), 4);
        assert!(options.get_bool("strict", false));
        assert_eq!(options.get_str("missing", "fallback"), "fallback");
    }

    #[test]
    fn options_iterate_in_key_order() {
        let options = RuleOptions::new().with("b", 1i64).with("a", 2i64);
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
