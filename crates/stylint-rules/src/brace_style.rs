//! Rule to keep opening braces on the same line as their construct.
//!
//! # Rationale
//!
//! The one-true-brace style puts `{` at the end of the line that opens
//! the block. A brace pushed to its own line after `)` or a block keyword
//! (`else`, `do`, `try`, `finally`) is flagged.

use stylint_core::utils::{has_comment_between, has_newline_between, prev_significant};
use stylint_core::{FileContext, Fix, Rule, RuleOptions, Severity, Violation};

/// Rule code for brace-style.
pub const CODE: &str = "SL002";

/// Rule id for brace-style.
pub const NAME: &str = "brace-style";

/// Keywords a block brace should share a line with.
const BLOCK_KEYWORDS: &[&str] = &["do", "else", "finally", "try"];

/// Flags opening braces placed on their own line.
#[derive(Debug, Clone)]
pub struct BraceStyle {
    severity: Severity,
}

impl Default for BraceStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl BraceStyle {
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

impl Rule for BraceStyle {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires opening braces on the same line as their construct"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, _options: &RuleOptions) -> Vec<Violation> {
        let tokens = ctx.tokens;
        let mut violations = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if !token.is_punct("{") {
                continue;
            }
            let Some(p) = prev_significant(tokens, i) else {
                continue;
            };
            if !has_newline_between(tokens, p, i) {
                continue;
            }

            let prev = &tokens[p];
            let attaches =
                prev.is_punct(")") || BLOCK_KEYWORDS.iter().any(|k| prev.is_keyword(k));
            if !attaches {
                continue;
            }

            let mut violation = Violation::new(
                CODE,
                NAME,
                self.severity,
                token.span,
                "Opening brace should be on the same line as its statement",
            );
            // Joining the lines would drop an intervening comment, so the
            // fix is only offered when the gap is pure whitespace.
            if !has_comment_between(tokens, p, i) {
                let gap_start = prev.span.end_offset();
                violation = violation.with_fix(Fix::replace(
                    gap_start,
                    token.span.offset - gap_start,
                    " ",
                ));
            }
            violations.push(violation);
        }
        violations
    }
}
