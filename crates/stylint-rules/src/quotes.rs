//! Rule to enforce a consistent string quote style.
//!
//! # Rationale
//!
//! Mixing `'...'` and `"..."` literals in one codebase is noise. This rule
//! flags literals whose quote character differs from the configured style.
//! Template literals are exempt: backticks carry interpolation semantics
//! and cannot be rewritten blindly.
//!
//! # Configuration
//!
//! - `style`: `"single"` or `"double"` (default: `"single"`)

use stylint_core::{
    FileContext, Fix, OptionKind, OptionSpec, Quote, Rule, RuleOptions, Severity, TokenKind,
    Violation,
};

/// Rule code for quotes.
pub const CODE: &str = "SL001";

/// Rule id for quotes.
pub const NAME: &str = "quotes";

const SCHEMA: &[OptionSpec] = &[OptionSpec {
    key: "style",
    kind: OptionKind::Choice(&["single", "double"]),
}];

/// Preferred quote character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Prefer `'...'`.
    Single,
    /// Prefer `"..."`.
    Double,
}

impl QuoteStyle {
    fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Single => "singlequote",
            Self::Double => "doublequote",
        }
    }

    fn quote(self) -> Quote {
        match self {
            Self::Single => Quote::Single,
            Self::Double => Quote::Double,
        }
    }

    fn char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Enforces a single quote style for string literals.
#[derive(Debug, Clone)]
pub struct Quotes {
    style: QuoteStyle,
    severity: Severity,
}

impl Default for Quotes {
    fn default() -> Self {
        Self::new()
    }
}

impl Quotes {
    /// Creates the rule preferring single quotes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            style: QuoteStyle::Single,
            severity: Severity::Warning,
        }
    }

    /// Sets the preferred quote style.
    #[must_use]
    pub fn style(mut self, style: QuoteStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for Quotes {
    fn id(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces a consistent string quote style"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn options_schema(&self) -> &'static [OptionSpec] {
        SCHEMA
    }

    fn default_options(&self) -> RuleOptions {
        RuleOptions::new().with("style", self.style.as_str())
    }

    fn check(&self, ctx: &FileContext, options: &RuleOptions) -> Vec<Violation> {
        let style = if options.get_str("style", self.style.as_str()) == "double" {
            QuoteStyle::Double
        } else {
            QuoteStyle::Single
        };

        let mut violations = Vec::new();
        for token in ctx.tokens {
            let TokenKind::StringLiteral { quote, terminated } = token.kind else {
                continue;
            };
            if quote == Quote::Backtick || quote == style.quote() {
                continue;
            }

            let mut violation = Violation::new(
                CODE,
                NAME,
                self.severity,
                token.span,
                format!("Strings must use {}", style.label()),
            );
            if terminated {
                violation = violation.with_fix(Fix::replace(
                    token.span.offset,
                    token.span.len,
                    requote(&token.text, style.char()),
                ));
            }
            violations.push(violation);
        }
        violations
    }
}

/// Rewrites a terminated string literal to use `target` as its delimiter,
/// escaping inner occurrences of the new quote and dropping now-redundant
/// escapes of the old one.
fn requote(text: &str, target: char) -> String {
    // A terminated literal is at least two bytes and its delimiters are
    // single-byte quote characters.
    let old = text.chars().next().unwrap_or('"');
    let inner = &text[1..text.len() - 1];

    let mut out = String::with_capacity(text.len());
    out.push(target);
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(e) if e == old => out.push(e),
                Some(e) => {
                    out.push('\\');
                    out.push(e);
                }
                None => out.push('\\'),
            }
        } else if c == target {
            out.push('\\');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out.push(target);
    out
}
