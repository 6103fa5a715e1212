//! The linter engine: orchestrates tokenization, rule evaluation, and the
//! optional fix pass.

use crate::context::{FileContext, FileMeta};
use crate::lexer::tokenize;
use crate::registry::RuleRegistry;
use crate::resolver::ResolvedConfig;
use crate::token::Span;
use crate::types::{FileReport, Fix, Severity, Violation};

use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::{debug, warn};

/// The linter engine for one registry.
///
/// Holds the registry by shared reference; the registry is immutable
/// after population, so any number of engines and lint runs may read it
/// concurrently without locking.
#[derive(Debug, Clone, Copy)]
pub struct Linter<'r> {
    registry: &'r RuleRegistry,
}

impl<'r> Linter<'r> {
    /// Creates an engine over the given registry.
    #[must_use]
    pub fn new(registry: &'r RuleRegistry) -> Self {
        Self { registry }
    }

    /// Lints one file and returns its report.
    ///
    /// Never fails: tokenization is total, and a rule that panics is
    /// converted into a synthetic violation attributed to that rule while
    /// evaluation continues with the remaining rules.
    #[must_use]
    pub fn lint(&self, source: &str, meta: &FileMeta, config: &ResolvedConfig) -> FileReport {
        self.run(source, meta, config, false)
    }

    /// Lints one file and applies fixes in a single pass.
    ///
    /// Fixes are applied left-to-right over non-overlapping ranges; a fix
    /// that would overlap an already-applied one is skipped and its
    /// violation retained unfixed. One pass only: the corrected text is
    /// not re-linted.
    #[must_use]
    pub fn lint_and_fix(
        &self,
        source: &str,
        meta: &FileMeta,
        config: &ResolvedConfig,
    ) -> FileReport {
        self.run(source, meta, config, true)
    }

    fn run(&self, source: &str, meta: &FileMeta, config: &ResolvedConfig, fix: bool) -> FileReport {
        let tokens = tokenize(source);
        let ctx = FileContext::new(meta, source, &tokens);
        let mut violations = Vec::new();

        for rule in self.registry.iter() {
            let Some(settings) = config.settings(rule.id()) else {
                debug!(rule = rule.id(), "rule has no resolved settings, skipping");
                continue;
            };
            if !settings.enabled {
                debug!(rule = rule.id(), "skipping disabled rule");
                continue;
            }
            if !rule.applies_to(meta) {
                debug!(rule = rule.id(), path = %meta.path.display(), "rule does not apply");
                continue;
            }

            match catch_unwind(AssertUnwindSafe(|| rule.check(&ctx, &settings.options))) {
                Ok(mut found) => {
                    for v in &mut found {
                        v.severity = settings.severity;
                    }
                    violations.extend(found);
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    warn!(rule = rule.id(), message, "rule panicked, continuing");
                    violations.push(Violation::new(
                        rule.code(),
                        rule.id(),
                        Severity::Error,
                        Span::zero(),
                        format!("rule '{}' failed during evaluation: {message}", rule.id()),
                    ));
                }
            }
        }

        violations.sort_by(|a, b| {
            a.span
                .start_line
                .cmp(&b.span.start_line)
                .then(a.span.start_col.cmp(&b.span.start_col))
                .then(a.rule.cmp(&b.rule))
        });

        let mut report = FileReport::new(meta.path.clone());
        if fix {
            let (remaining, fixed, applied, skipped) = apply_fixes(source, violations);
            report.violations = remaining;
            report.fixed_source = Some(fixed);
            report.fixes_applied = applied;
            report.fixes_skipped = skipped;
        } else {
            report.violations = violations;
        }

        debug!(
            path = %meta.path.display(),
            violations = report.violations.len(),
            "lint complete"
        );
        report
    }
}

/// Applies fixes in a single left-to-right pass over non-overlapping
/// ranges.
///
/// The original token sequence and source are never mutated; the
/// corrected text is rebuilt into a fresh string. Violations whose fix
/// was applied are removed from the returned set; skipped ones are
/// retained unfixed.
fn apply_fixes(
    source: &str,
    violations: Vec<Violation>,
) -> (Vec<Violation>, String, usize, usize) {
    let mut fixes: Vec<(usize, Fix)> = violations
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.fix.clone().map(|f| (i, f)))
        .collect();
    fixes.sort_by_key(|(_, f)| (f.start, f.end()));

    let mut fixed = String::with_capacity(source.len());
    let mut cursor = 0usize;
    let mut applied_flags = vec![false; violations.len()];
    let mut applied = 0usize;
    let mut skipped = 0usize;

    for (i, f) in fixes {
        let overlaps = f.start < cursor;
        let out_of_bounds = f.end() > source.len() || !source.is_char_boundary(f.start);
        if overlaps || out_of_bounds {
            skipped += 1;
            continue;
        }
        fixed.push_str(&source[cursor..f.start]);
        fixed.push_str(&f.text);
        cursor = f.end();
        applied_flags[i] = true;
        applied += 1;
    }
    fixed.push_str(&source[cursor..]);

    let remaining = violations
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !applied_flags[*i])
        .map(|(_, v)| v)
        .collect();

    (remaining, fixed, applied, skipped)
}

/// Best-effort extraction of a panic payload message.
fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}
