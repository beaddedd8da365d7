//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# fxlint configuration
# See https://github.com/fxlint/fxlint for documentation

[analyzer]
# Root directory to analyze, relative to the checked path
# root = "."

# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
]

# Respect .gitignore files
respect-gitignore = true

[module]
# Globs naming files where fx.Module calls are allowed
paths = ["internal/*/module.go", "pkg/*/module.go"]

# Require module names to match their package (or directory)
strict-naming = true

# file-name = "module.go"
# namespace = "fx"
# member = "Module"
# restricted-root = "internal"
# restricted-child = "module"

[mock]
# Globs naming locations where Mock-prefixed types are allowed
paths = ["test/mocks/*"]

# Check placement of Mock-prefixed types
strict-naming = true

# prefix = "Mock"
# dir = "test/mocks"
# restricted-root = "internal"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.module-location]
enabled = true
# severity = "warning"  # Override default severity

[rules.module-naming]
enabled = true

[rules.mock-placement]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("fxlint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created fxlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit fxlint.toml to configure conventions");
    println!("  2. Run: fxlint check");

    Ok(())
}
