//! # stylint-rules
//!
//! Built-in style rules for stylint.
//!
//! ## Available Rules
//!
//! | Code | Id | Description |
//! |------|------|-------------|
//! | SL001 | `quotes` | Enforces a consistent string quote style |
//! | SL002 | `brace-style` | Requires opening braces on the same line as their construct |
//! | SL003 | `no-trailing-comma` | Forbids trailing commas before `]` and `}` |
//! | SL004 | `semi` | Requires statement-terminating semicolons |
//! | SL005 | `identifier-case` | Enforces camelCase bindings and PascalCase constructors |
//! | SL006 | `no-trailing-space` | Forbids trailing whitespace at line ends |
//! | SL007 | `syntax-anomaly` | Reports unrecognized character sequences |
//!
//! ## Usage
//!
//! ```ignore
//! use stylint_core::{Linter, resolve, Config};
//! use stylint_rules::registry_for;
//!
//! let registry = registry_for(Preset::Recommended)?;
//! let config = resolve(&registry, &Config::default())?;
//! let report = Linter::new(&registry).lint(source, &meta, &config);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod brace_style;
mod identifier_case;
mod no_trailing_comma;
mod no_trailing_space;
mod presets;
mod quotes;
mod semi;
mod syntax_anomaly;

pub use brace_style::BraceStyle;
pub use identifier_case::IdentifierCase;
pub use no_trailing_comma::NoTrailingComma;
pub use no_trailing_space::NoTrailingSpace;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
pub use quotes::{Quotes, QuoteStyle};
pub use semi::Semi;
pub use syntax_anomaly::SyntaxAnomaly;

/// Re-export core types for convenience.
pub use stylint_core::{Rule, RuleRegistry, Severity, Violation};

use stylint_core::RegistryError;

/// Builds a registry containing the rules of the given preset.
///
/// # Errors
///
/// Returns [`RegistryError::Duplicate`] if the preset contains two rules
/// with the same id. The built-in presets never do.
pub fn registry_for(preset: Preset) -> Result<RuleRegistry, RegistryError> {
    RuleRegistry::from_rules(preset.rules())
}

/// Builds the default registry with all built-in rules.
///
/// # Errors
///
/// Returns [`RegistryError::Duplicate`] if two rules share an id.
pub fn default_registry() -> Result<RuleRegistry, RegistryError> {
    RuleRegistry::from_rules(all_rules())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_builds() {
        let registry = default_registry().unwrap();
        assert_eq!(registry.len(), 7);
        assert!(registry.contains("quotes"));
        assert!(registry.contains("semi"));
    }

    #[test]
    fn registry_iterates_in_id_order() {
        let registry = default_registry().unwrap();
        let ids: Vec<&str> = registry.iter().map(Rule::id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
