//! Rule surfacing unrecognized character runs.
//!
//! The tokenizer never fails: bytes it cannot classify become `Unknown`
//! tokens so the engine always completes. This rule is the reporting
//! channel that turns those tokens into violations.

use stylint_core::{FileContext, Rule, RuleOptions, Severity, TokenKind, Violation};

/// Rule code for syntax-anomaly.
pub const CODE: &str = "SL007";

/// Rule id for syntax-anomaly.
pub const NAME: &str = "syntax-anomaly";

/// Longest excerpt of the offending run included in the message.
const EXCERPT_CHARS: usize = 20;

/// Reports character sequences the tokenizer could not classify.
#[derive(Debug, Clone)]
pub struct SyntaxAnomaly {
    severity: Severity,
}

impl Default for SyntaxAnomaly {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxAnomaly {
    /// Creates the rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for SyntaxAnomaly {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Reports unrecognized character sequences"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, _options: &RuleOptions) -> Vec<Violation> {
        ctx.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Unknown)
            .map(|t| {
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    t.span,
                    format!("Unrecognized character sequence '{}'", excerpt(&t.text)),
                )
            })
            .collect()
    }
}

fn excerpt(text: &str) -> String {
    if text.chars().count() <= EXCERPT_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(EXCERPT_CHARS).collect();
    format!("{head}...")
}
