//! Core types for lint violations and per-file results.

use crate::token::Span;
use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A textual replacement over a byte range of the original source.
///
/// `len == 0` denotes a pure insertion at `start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    /// Byte offset where the replacement begins.
    pub start: usize,
    /// Number of bytes replaced.
    pub len: usize,
    /// Replacement text.
    pub text: String,
}

impl Fix {
    /// Creates a replacement for the given byte range.
    #[must_use]
    pub fn replace(start: usize, len: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            len,
            text: text.into(),
        }
    }

    /// Creates an insertion at the given byte offset.
    #[must_use]
    pub fn insert(start: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            len: 0,
            text: text.into(),
        }
    }

    /// Creates a deletion of the given span.
    #[must_use]
    pub fn delete(span: Span) -> Self {
        Self {
            start: span.offset,
            len: span.len,
            text: String::new(),
        }
    }

    /// Byte offset just past the replaced range.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// A lint violation found during evaluation.
///
/// Immutable once produced by a rule; the engine owns the collected set
/// for the lifetime of one lint run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "SL001").
    pub code: String,
    /// Rule id (e.g., "quotes").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Position range of the offending text.
    pub span: Span,
    /// Human-readable message.
    pub message: String,
    /// Optional automatic fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Violation {
    /// Creates a new violation without a fix.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            span,
            message: message.into(),
            fix: None,
        }
    }

    /// Attaches an automatic fix to this violation.
    #[must_use]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Whether this violation carries an automatic fix.
    #[must_use]
    pub fn fixable(&self) -> bool {
        self.fix.is_some()
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        let mut output = format!(
            "{} {} at {}:{}\n",
            self.code, self.rule, self.span.start_line, self.span.start_col,
        );
        output.push_str(&format!("  {}: {}", self.severity, self.message));
        if self.fixable() {
            output.push_str("\n  = note: automatically fixable");
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {} [{}] {}",
            self.span.start_line, self.span.start_col, self.severity, self.code, self.message
        )
    }
}

/// Converts a [`Violation`] to a miette diagnostic for rich terminal display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
    #[source_code]
    source_code: Option<NamedSource<String>>,
}

impl ViolationDiagnostic {
    /// Attaches the source text so the renderer can show a snippet.
    #[must_use]
    pub fn with_source(mut self, name: impl AsRef<str>, source: impl Into<String>) -> Self {
        self.source_code = Some(NamedSource::new(name, source.into()));
        self
    }
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.fix.as_ref().map(|_| "this violation is automatically fixable".to_string()),
            span: SourceSpan::from((v.span.offset, v.span.len)),
            label_message: v.rule.clone(),
            source_code: None,
        }
    }
}

/// Result of linting one file.
///
/// Violations are ordered by (start line, start column, rule id). When a
/// fix pass ran, `fixed_source` holds the corrected text and violations
/// whose fixes were applied are no longer present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileReport {
    /// Path of the linted file, as supplied by the caller.
    pub path: PathBuf,
    /// Remaining violations, position-sorted.
    pub violations: Vec<Violation>,
    /// Corrected source text, present only when a fix pass ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_source: Option<String>,
    /// Number of fixes applied during the fix pass.
    pub fixes_applied: usize,
    /// Number of fixes skipped because they overlapped an applied fix.
    pub fixes_skipped: usize,
}

impl FileReport {
    /// Creates an empty report for the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if there are any error-severity violations.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Counts violations by severity as (errors, warnings).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        (errors, self.violations.len() - errors)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Returns violations that carry an automatic fix.
    #[must_use]
    pub fn fixable(&self) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.fixable()).collect()
    }
}
