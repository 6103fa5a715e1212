//! Rule to forbid trailing commas in array and object literals.
//!
//! # Rationale
//!
//! A comma immediately before `]` or `}` adds nothing and trips older
//! consumers. The fix simply deletes it.

use stylint_core::utils::next_significant;
use stylint_core::{FileContext, Fix, Rule, RuleOptions, Severity, Violation};

/// Rule code for no-trailing-comma.
pub const CODE: &str = "SL003";

/// Rule id for no-trailing-comma.
pub const NAME: &str = "no-trailing-comma";

/// Flags a comma token immediately preceding a closing bracket or brace.
#[derive(Debug, Clone)]
pub struct NoTrailingComma {
    severity: Severity,
}

impl Default for NoTrailingComma {
    fn default() -> Self {
        Self::new()
    }
}

impl NoTrailingComma {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoTrailingComma {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids trailing commas before ] and }"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, _options: &RuleOptions) -> Vec<Violation> {
        let tokens = ctx.tokens;
        let mut violations = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if !token.is_punct(",") {
                continue;
            }
            let Some(n) = next_significant(tokens, i) else {
                continue;
            };
            if !(tokens[n].is_punct("]") || tokens[n].is_punct("}")) {
                continue;
            }
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    token.span,
                    "Unexpected trailing comma",
                )
                .with_fix(Fix::delete(token.span)),
            );
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylint_core::lexer::tokenize;
    use stylint_core::FileMeta;

    fn check_source(source: &str) -> Vec<Violation> {
        let meta = FileMeta::new("test.js");
        let tokens = tokenize(source);
        let ctx = FileContext::new(&meta, source, &tokens);
        NoTrailingComma::new().check(&ctx, &RuleOptions::new())
    }

    #[test]
    fn flags_trailing_comma_in_array() {
        let violations = check_source("var heroes = ['Batman', 'Superman',];");
        assert_eq!(violations.len(), 1);
        // The comma right before the closing bracket.
        assert_eq!(violations[0].span.start_col, 35);
        assert!(violations[0].fixable());
    }

    #[test]
    fn fix_removes_the_comma() {
        let source = "var heroes = ['Batman', 'Superman',];";
        let violations = check_source(source);
        let fix = violations[0].fix.as_ref().unwrap();
        let mut out = String::new();
        out.push_str(&source[..fix.start]);
        out.push_str(&fix.text);
        out.push_str(&source[fix.start + fix.len..]);
        assert_eq!(out, "var heroes = ['Batman', 'Superman'];");
    }

    #[test]
    fn accepts_array_without_trailing_comma() {
        assert!(check_source("var heroes = ['Batman', 'Superman'];").is_empty());
    }

    #[test]
    fn flags_trailing_comma_in_object() {
        let violations = check_source("var hero = {\n  name: 'Batman',\n};");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].span.start_line, 2);
    }

    #[test]
    fn trivia_between_comma_and_bracket_still_flags() {
        let violations = check_source("var xs = [1, 2, /* last */ ];");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn separating_commas_are_fine() {
        assert!(check_source("f(a, b, c);").is_empty());
    }
}
