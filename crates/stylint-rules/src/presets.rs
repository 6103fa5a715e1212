//! Rule presets for common configurations.

use crate::{
    BraceStyle, IdentifierCase, NoTrailingComma, NoTrailingSpace, Quotes, Semi, SyntaxAnomaly,
};
use stylint_core::{RuleBox, Severity};

/// Preset configurations for stylint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// All rules with sensible defaults.
    Recommended,
    /// All rules, with the style rules escalated to errors.
    Strict,
    /// Minimal set for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "strict" => Ok(Self::Strict),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!(
                "unknown preset '{other}', expected one of: recommended, strict, minimal"
            )),
        }
    }
}

/// Returns the recommended set of rules: every built-in rule with its
/// default settings.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(Quotes::new()),
        Box::new(BraceStyle::new()),
        Box::new(NoTrailingComma::new()),
        Box::new(Semi::new()),
        Box::new(IdentifierCase::new()),
        Box::new(NoTrailingSpace::new()),
        Box::new(SyntaxAnomaly::new()),
    ]
}

/// Returns the strict set of rules.
///
/// Same rules as recommended, with `quotes`, `semi`, and
/// `identifier-case` escalated to error severity and underscore prefixes
/// disallowed.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(Quotes::new().severity(Severity::Error)),
        Box::new(BraceStyle::new()),
        Box::new(NoTrailingComma::new()),
        Box::new(Semi::new().severity(Severity::Error)),
        Box::new(
            IdentifierCase::new()
                .severity(Severity::Error)
                .allow_leading_underscore(false),
        ),
        Box::new(NoTrailingSpace::new()),
        Box::new(SyntaxAnomaly::new()),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption: quote style plus the anomaly reporter.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(Quotes::new()), Box::new(SyntaxAnomaly::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylint_core::Rule;

    #[test]
    fn preset_rules_are_non_empty() {
        assert_eq!(Preset::Recommended.rules().len(), 7);
        assert_eq!(Preset::Strict.rules().len(), 7);
        assert_eq!(Preset::Minimal.rules().len(), 2);
    }

    #[test]
    fn preset_parsing() {
        assert_eq!("strict".parse::<Preset>(), Ok(Preset::Strict));
        assert!("fancy".parse::<Preset>().is_err());
    }

    #[test]
    fn strict_escalates_semi() {
        let strict = strict_rules();
        let semi = strict.iter().find(|r| r.id() == "semi").unwrap();
        assert_eq!(semi.default_severity(), Severity::Error);
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<&str> = all_rules().iter().map(|r| r.id()).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
