//! List rules command implementation.

use fxlint_core::Config;
use fxlint_rules::all_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<18} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules(&Config::default()) {
        println!(
            "{:<8} {:<18} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nEach rule can be disabled or remapped in fxlint.toml:");
    println!("  [rules.module-naming]");
    println!("  enabled = false");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  fxlint check --rules module-location,module-naming");
    println!("  fxlint check --rules FX001,FX003");
}
