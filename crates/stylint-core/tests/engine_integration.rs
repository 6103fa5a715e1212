//! Integration test: a custom rule end-to-end through the public API.
//!
//! Verifies that the registry -> resolver -> engine pipeline works for
//! downstream rule crates, and that the tokenizer's lossless contract
//! holds through the public surface.

use stylint_core::lexer::tokenize;
use stylint_core::{
    resolve, Config, FileContext, FileMeta, Fix, Linter, OptionKind, OptionSpec, Rule,
    RuleOptions, RuleOverride, RuleRegistry, Severity, TokenKind, Violation,
};

/// Flags number literals longer than a configured number of digits.
struct LongNumbers;

const SCHEMA: &[OptionSpec] = &[OptionSpec {
    key: "max_digits",
    kind: OptionKind::Int { min: 1, max: 32 },
}];

impl Rule for LongNumbers {
    fn id(&self) -> &'static str {
        "long-numbers"
    }
    fn code(&self) -> &'static str {
        "EXT001"
    }
    fn description(&self) -> &'static str {
        "Flags overly long number literals"
    }
    fn options_schema(&self) -> &'static [OptionSpec] {
        SCHEMA
    }
    fn default_options(&self) -> RuleOptions {
        RuleOptions::new().with("max_digits", 6i64)
    }

    fn check(&self, ctx: &FileContext, options: &RuleOptions) -> Vec<Violation> {
        let max = usize::try_from(options.get_int("max_digits", 6)).unwrap_or(6);
        ctx.tokens
            .iter()
            .filter(|t| t.kind == TokenKind::NumberLiteral && t.text.len() > max)
            .map(|t| {
                Violation::new(
                    self.code(),
                    self.id(),
                    self.default_severity(),
                    t.span,
                    format!("Number literal '{}' exceeds {} digits", t.text, max),
                )
                .with_fix(Fix::replace(
                    t.span.offset,
                    t.span.len,
                    "0 /* shortened */",
                ))
            })
            .collect()
    }
}

fn setup() -> RuleRegistry {
    RuleRegistry::from_rules(vec![Box::new(LongNumbers)]).expect("registry should build")
}

#[test]
fn custom_rule_runs_through_the_engine() {
    let registry = setup();
    let config = resolve(&registry, &Config::default()).expect("defaults resolve");
    let report = Linter::new(&registry).lint(
        "var big = 123456789;\nvar small = 42;\n",
        &FileMeta::new("nums.js"),
        &config,
    );

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule, "long-numbers");
    assert_eq!(report.violations[0].span.start_line, 1);
}

#[test]
fn option_override_tightens_the_rule() {
    let registry = setup();
    let config = Config::new().with_rule(
        "long-numbers",
        RuleOverride::new().option("max_digits", 1i64),
    );
    let resolved = resolve(&registry, &config).expect("config resolves");
    let report = Linter::new(&registry).lint(
        "var a = 42;\n",
        &FileMeta::new("nums.js"),
        &resolved,
    );
    assert_eq!(report.violations.len(), 1);
}

#[test]
fn out_of_range_override_fails_before_linting() {
    let registry = setup();
    let config = Config::new().with_rule(
        "long-numbers",
        RuleOverride::new().option("max_digits", 99i64),
    );
    assert!(resolve(&registry, &config).is_err());
}

#[test]
fn severity_override_drives_error_reporting() {
    let registry = setup();
    let config = Config::new().with_rule(
        "long-numbers",
        RuleOverride::new().severity(Severity::Error),
    );
    let resolved = resolve(&registry, &config).expect("config resolves");
    let report = Linter::new(&registry).lint(
        "var big = 123456789;\n",
        &FileMeta::new("nums.js"),
        &resolved,
    );
    assert!(report.has_errors());
}

#[test]
fn fix_pass_rewrites_through_public_api() {
    let registry = setup();
    let config = resolve(&registry, &Config::default()).expect("defaults resolve");
    let report = Linter::new(&registry).lint_and_fix(
        "var big = 123456789;\n",
        &FileMeta::new("nums.js"),
        &config,
    );
    assert_eq!(
        report.fixed_source.as_deref(),
        Some("var big = 0 /* shortened */;\n")
    );
    assert!(report.violations.is_empty());
}

#[test]
fn tokenizer_round_trip_through_public_api() {
    let source = "function f() {\r\n  return `multi\nline`; // done\r\n}\n\u{00a7}";
    let joined: String = tokenize(source).iter().map(|t| t.text.as_str()).collect();
    assert_eq!(joined, source);
}
