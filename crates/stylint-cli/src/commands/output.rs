//! Shared output formatting for lint results.

use anyhow::Result;
use stylint_core::{FileReport, Severity, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// Each entry pairs the original source text with its report; the source
/// is needed for the `pretty` format's snippets.
pub fn print(results: &[(String, FileReport)], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(results),
        OutputFormat::Json => return print_json(results),
        OutputFormat::Compact => print_compact(results),
        OutputFormat::Pretty => print_pretty(results),
    }
    Ok(())
}

fn print_text(results: &[(String, FileReport)]) {
    let mut errors = 0;
    let mut warnings = 0;
    let mut fixes = 0;

    for (_, report) in results {
        if report.violations.is_empty() && report.fixes_applied == 0 {
            continue;
        }
        println!("{}", report.path.display());

        for violation in &report.violations {
            let severity_indicator = match violation.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
            };

            println!(
                "  {}:{}  {}  {}  [{}]",
                violation.span.start_line,
                violation.span.start_col,
                severity_indicator,
                violation.message,
                violation.rule,
            );
        }

        let (e, w) = report.count_by_severity();
        errors += e;
        warnings += w;
        fixes += report.fixes_applied;
        println!();
    }

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let mut summary = format!(
        "{}Found {} error(s), {} warning(s) in {} file(s)",
        summary_color,
        errors,
        warnings,
        results.len()
    );
    if fixes > 0 {
        summary.push_str(&format!(", applied {fixes} fix(es)"));
    }
    println!("{summary}\x1b[0m");
}

fn print_json(results: &[(String, FileReport)]) -> Result<()> {
    let reports: Vec<&FileReport> = results.iter().map(|(_, r)| r).collect();
    let json = serde_json::to_string_pretty(&reports)?;
    println!("{json}");
    Ok(())
}

fn print_compact(results: &[(String, FileReport)]) {
    for (_, report) in results {
        for violation in &report.violations {
            println!(
                "{}:{}:{}: {} [{}] {}",
                report.path.display(),
                violation.span.start_line,
                violation.span.start_col,
                violation.severity,
                violation.code,
                violation.message,
            );
        }
    }
}

fn print_pretty(results: &[(String, FileReport)]) {
    for (source, report) in results {
        let name = report.path.display().to_string();
        for violation in &report.violations {
            let diag = ViolationDiagnostic::from(violation).with_source(&name, source.clone());
            eprintln!("{:?}", miette::Report::new(diag));
        }
    }

    let total: usize = results.iter().map(|(_, r)| r.violations.len()).sum();
    eprintln!("{total} problem(s) found in {} file(s)", results.len());
}
