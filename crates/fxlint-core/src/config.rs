//! Configuration types for fxlint.
//!
//! A [`Config`] is an immutable per-invocation snapshot: hosts build one
//! (from a file, from flags, or in code), then pass it by value to the rule
//! registry. Nothing here reads ambient process state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for fxlint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Module declaration conventions.
    #[serde(default)]
    pub module: ModuleConfig,

    /// Mock type conventions.
    #[serde(default)]
    pub mock: MockConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<crate::Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/vendor/**".to_string()],
            respect_gitignore: true,
        }
    }
}

/// Conventions for dependency-injection module declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ModuleConfig {
    /// Glob patterns naming additional files allowed to declare modules.
    #[serde(default = "default_module_paths")]
    pub paths: Vec<String>,

    /// Whether module names must match their package or directory.
    #[serde(default = "default_true")]
    pub strict_naming: bool,

    /// Base name of designated module files.
    #[serde(default = "default_module_file")]
    pub file_name: String,

    /// Namespace identifier of the module constructor.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Member name of the module constructor.
    #[serde(default = "default_member")]
    pub member: String,

    /// Directory segment under which module declarations are restricted.
    #[serde(default = "default_restricted_root")]
    pub restricted_root: String,

    /// Child segment that, directly under the restricted root, is also
    /// off-limits for module declarations.
    #[serde(default = "default_restricted_child")]
    pub restricted_child: String,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            paths: default_module_paths(),
            strict_naming: true,
            file_name: default_module_file(),
            namespace: default_namespace(),
            member: default_member(),
            restricted_root: default_restricted_root(),
            restricted_child: default_restricted_child(),
        }
    }
}

impl ModuleConfig {
    /// The constructor in `namespace.Member` display form.
    #[must_use]
    pub fn constructor(&self) -> String {
        format!("{}.{}", self.namespace, self.member)
    }
}

/// Conventions for mock type declarations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct MockConfig {
    /// Glob patterns naming additional files allowed to hold mock types.
    #[serde(default = "default_mock_paths")]
    pub paths: Vec<String>,

    /// Whether mock placement is enforced at all.
    #[serde(default = "default_true")]
    pub strict_naming: bool,

    /// Name prefix identifying a mock type.
    #[serde(default = "default_mock_prefix")]
    pub prefix: String,

    /// Directory mock types belong in.
    #[serde(default = "default_mock_dir")]
    pub dir: String,

    /// Directory segment mock types must never live under.
    #[serde(default = "default_restricted_root")]
    pub restricted_root: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            paths: default_mock_paths(),
            strict_naming: true,
            prefix: default_mock_prefix(),
            dir: default_mock_dir(),
            restricted_root: default_restricted_root(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_module_paths() -> Vec<String> {
    vec![
        "internal/*/module.go".to_string(),
        "pkg/*/module.go".to_string(),
    ]
}

fn default_module_file() -> String {
    "module.go".to_string()
}

fn default_namespace() -> String {
    "fx".to_string()
}

fn default_member() -> String {
    "Module".to_string()
}

fn default_restricted_root() -> String {
    "internal".to_string()
}

fn default_restricted_child() -> String {
    "module".to_string()
}

fn default_mock_paths() -> Vec<String> {
    vec!["test/mocks/*".to_string()]
}

fn default_mock_prefix() -> String {
    "Mock".to_string()
}

fn default_mock_dir() -> String {
    "test/mocks".to_string()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<crate::Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.analyzer.respect_gitignore);
        assert!(config.rules.is_empty());
        assert_eq!(
            config.module.paths,
            vec!["internal/*/module.go", "pkg/*/module.go"]
        );
        assert_eq!(config.module.file_name, "module.go");
        assert_eq!(config.module.constructor(), "fx.Module");
        assert!(config.module.strict_naming);
        assert_eq!(config.mock.paths, vec!["test/mocks/*"]);
        assert_eq!(config.mock.prefix, "Mock");
        assert_eq!(config.mock.dir, "test/mocks");
        assert!(config.mock.strict_naming);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[analyzer]
root = "./services"
exclude = ["**/gen/**"]

[module]
paths = ["lib/*/module.go"]
strict-naming = false
restricted-root = "private"

[mock]
dir = "testutil/mocks"

[rules.module-location]
enabled = true
severity = "warning"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.analyzer.root, PathBuf::from("./services"));
        assert_eq!(config.module.paths, vec!["lib/*/module.go"]);
        assert!(!config.module.strict_naming);
        assert_eq!(config.module.restricted_root, "private");
        // Unset keys keep their defaults.
        assert_eq!(config.module.member, "Module");
        assert_eq!(config.mock.dir, "testutil/mocks");
        assert_eq!(config.mock.prefix, "Mock");
        assert!(config.is_rule_enabled("module-location"));
        assert_eq!(
            config.rule_severity("module-location"),
            Some(crate::Severity::Warning)
        );
    }

    #[test]
    fn disabled_rule_is_reported_as_disabled() {
        let toml = r#"
[rules.mock-placement]
enabled = false
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert!(!config.is_rule_enabled("mock-placement"));
        assert!(config.is_rule_enabled("module-naming"));
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("[module\npaths = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
