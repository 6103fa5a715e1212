//! Check command implementation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use stylint_core::{resolve, Config, FileMeta, FileReport, Linter, RuleBox, RuleRegistry};
use stylint_rules::{
    all_rules, BraceStyle, IdentifierCase, NoTrailingComma, NoTrailingSpace, Preset, Quotes, Semi,
    SyntaxAnomaly,
};

use super::output;
use crate::config_resolver::ConfigSource;
use crate::{discover, OutputFormat};

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    fix: bool,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = match source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    // Rule set: explicit --rules filter wins, then the configured preset.
    let rules = if let Some(filter) = rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&names)
    } else {
        let preset: Preset = config
            .preset
            .as_deref()
            .unwrap_or("recommended")
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        preset.rules()
    };

    let registry = RuleRegistry::from_rules(rules).context("Failed to build rule registry")?;

    // Fail fast on bad configuration, before reading any source file.
    let resolved = resolve(&registry, &config).context("Failed to resolve configuration")?;

    let files: Vec<PathBuf> = if path.is_file() {
        vec![path.to_path_buf()]
    } else {
        discover::discover(path, &exclude)?
    };

    tracing::info!(
        "Linting {} file(s) with {} rule(s)",
        files.len(),
        registry.len()
    );

    let linter = Linter::new(&registry);
    let mut results: Vec<(String, FileReport)> = Vec::new();

    for file in &files {
        let text = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))?;
        let meta = FileMeta::new(file);

        let report = if fix {
            let report = linter.lint_and_fix(&text, &meta, &resolved);
            if let Some(fixed) = &report.fixed_source {
                if fixed != &text {
                    std::fs::write(file, fixed)
                        .with_context(|| format!("Failed to write {}", file.display()))?;
                    tracing::info!(
                        "Fixed {} ({} fix(es) applied)",
                        file.display(),
                        report.fixes_applied
                    );
                }
            }
            report
        } else {
            linter.lint(&text, &meta, &resolved)
        };

        results.push((text, report));
    }

    output::print(&results, format)?;

    // Exit with error code if there are errors
    if results.iter().any(|(_, r)| r.has_errors()) {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "quotes" | "SL001" => rules.push(Box::new(Quotes::new())),
            "brace-style" | "SL002" => rules.push(Box::new(BraceStyle::new())),
            "no-trailing-comma" | "SL003" => rules.push(Box::new(NoTrailingComma::new())),
            "semi" | "SL004" => rules.push(Box::new(Semi::new())),
            "identifier-case" | "SL005" => rules.push(Box::new(IdentifierCase::new())),
            "no-trailing-space" | "SL006" => rules.push(Box::new(NoTrailingSpace::new())),
            "syntax-anomaly" | "SL007" => rules.push(Box::new(SyntaxAnomaly::new())),
            "all" => rules.extend(all_rules()),
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylint_core::Rule;

    #[test]
    fn filter_accepts_ids_and_codes() {
        let rules = filter_rules(&["quotes", "SL004"]);
        let ids: Vec<&str> = rules.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["quotes", "semi"]);
    }

    #[test]
    fn filter_ignores_unknown_names() {
        let rules = filter_rules(&["no-such-rule"]);
        assert!(rules.is_empty());
    }
}
