//! List rules command implementation.

use stylint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<22} Description", "Code", "Id");
    println!("{}", "-".repeat(78));

    for rule in all_rules() {
        println!(
            "{:<10} {:<22} {}",
            rule.code(),
            rule.id(),
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  recommended  - all rules with default severities (default)");
    println!("  strict       - all rules, style rules escalated to errors");
    println!("  minimal      - quotes and syntax-anomaly only");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  stylint check --rules quotes,semi");
    println!("  stylint check --rules SL001,SL004");
}
