//! Rule to forbid whitespace at the end of a line.
//!
//! # Configuration
//!
//! - `skip_blank_lines`: ignore lines consisting only of whitespace
//!   (default: false)

use stylint_core::{
    FileContext, Fix, OptionKind, OptionSpec, Rule, RuleOptions, Severity, TokenKind, Violation,
};

/// Rule code for no-trailing-space.
pub const CODE: &str = "SL006";

/// Rule id for no-trailing-space.
pub const NAME: &str = "no-trailing-space";

const SCHEMA: &[OptionSpec] = &[OptionSpec {
    key: "skip_blank_lines",
    kind: OptionKind::Bool,
}];

/// Flags whitespace runs immediately before a line terminator.
#[derive(Debug, Clone)]
pub struct NoTrailingSpace {
    skip_blank_lines: bool,
    severity: Severity,
}

impl Default for NoTrailingSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl NoTrailingSpace {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            skip_blank_lines: false,
            severity: Severity::Warning,
        }
    }

    /// Sets whether blank lines are exempt.
    #[must_use]
    pub fn skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoTrailingSpace {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids trailing whitespace at line ends"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options_schema(&self) -> &'static [OptionSpec] {
        SCHEMA
    }

    fn default_options(&self) -> RuleOptions {
        RuleOptions::new().with("skip_blank_lines", self.skip_blank_lines)
    }

    fn check(&self, ctx: &FileContext, options: &RuleOptions) -> Vec<Violation> {
        let skip_blank = options.get_bool("skip_blank_lines", self.skip_blank_lines);
        let tokens = ctx.tokens;
        let mut violations = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if token.kind != TokenKind::Whitespace {
                continue;
            }
            let at_line_end = tokens
                .get(i + 1)
                .is_some_and(|t| matches!(t.kind, TokenKind::Newline | TokenKind::Eof));
            if !at_line_end {
                continue;
            }
            if skip_blank {
                let blank = i == 0 || tokens[i - 1].kind == TokenKind::Newline;
                if blank {
                    continue;
                }
            }
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    token.span,
                    "Trailing whitespace",
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

    fn check_with(source: &str, options: &RuleOptions) -> Vec<Violation> {
        let meta = FileMeta::new("test.js");
        let tokens = tokenize(source);
        let ctx = FileContext::new(&meta, source, &tokens);
        NoTrailingSpace::new().check(&ctx, options)
    }

    fn check_source(source: &str) -> Vec<Violation> {
        check_with(source, &NoTrailingSpace::new().default_options())
    }

    #[test]
    fn flags_spaces_before_newline() {
        let violations = check_source("var a = 1;  \nvar b = 2;\n");
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].span.start_col, 11);
        assert!(violations[0].fixable());
    }

    #[test]
    fn flags_tabs_at_end_of_input() {
        let violations = check_source("var a = 1;\t");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn clean_lines_pass() {
        assert!(check_source("var a = 1;\nvar b = 2;\n").is_empty());
    }

    #[test]
    fn blank_line_whitespace_flagged_by_default() {
        let violations = check_source("var a = 1;\n   \nvar b = 2;\n");
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn blank_lines_exempt_when_configured() {
        let options = RuleOptions::new().with("skip_blank_lines", true);
        assert!(check_with("var a = 1;\n   \nvar b = 2;\n", &options).is_empty());
        // Trailing whitespace after code is still flagged.
        assert_eq!(check_with("var a = 1; \n", &options).len(), 1);
    }

    #[test]
    fn interior_whitespace_is_fine() {
        assert!(check_source("var a  =  1;\n").is_empty());
    }
}
