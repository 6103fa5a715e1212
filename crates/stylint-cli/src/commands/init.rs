//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# stylint configuration

# Preset to start from: recommended, strict, or minimal
preset = "recommended"

# Per-rule overrides
# Each rule can be enabled/disabled, have its severity overridden, and
# take rule-specific options

[rules.quotes]
enabled = true
style = "single"
# severity = "error"

[rules.semi]
enabled = true

# [rules.identifier-case]
# allow_leading_underscore = false

# [rules.no-trailing-space]
# skip_blank_lines = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("stylint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created stylint.toml");
    println!("\nNext steps:");
    println!("  1. Edit stylint.toml to configure rules");
    println!("  2. Run: stylint check");

    Ok(())
}
