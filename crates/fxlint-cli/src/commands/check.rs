//! Check command implementation.

use anyhow::{Context, Result};
use fxlint_core::utils::paths;
use fxlint_core::{check_file, Config, LintResult, RuleBox};
use fxlint_go::{GoExtractor, LanguageExtractor};
use fxlint_rules::{enabled_rules, MockPlacement, ModuleLocation, ModuleNaming};
use std::path::{Path, PathBuf};

use crate::config_resolver::ConfigSource;
use crate::CheckArgs;

/// Runs the check command.
pub fn run(args: &CheckArgs, source: &ConfigSource) -> Result<()> {
    let mut config = match source {
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
    apply_overrides(&mut config, args);

    let rules = if let Some(filter) = &args.rules {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&names, &config)
    } else {
        enabled_rules(&config)
    };

    let root = if config.analyzer.root.is_absolute() {
        config.analyzer.root.clone()
    } else {
        args.path.join(&config.analyzer.root)
    };

    let extractors: Vec<Box<dyn LanguageExtractor>> = vec![Box::new(GoExtractor::new())];
    let files = discover_files(&root, &config, &extractors)?;

    tracing::info!("Analyzing {} files with {} rules", files.len(), rules.len());

    let mut result = LintResult::new();

    for file_path in &files {
        let ext = extension_of(file_path);
        let Some(extractor) = extractors
            .iter()
            .find(|e| e.extensions().contains(&ext.as_str()))
        else {
            continue;
        };

        let source_text = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let rel = file_path
            .strip_prefix(&root)
            .unwrap_or(file_path)
            .to_path_buf();

        let mut file = extractor.parse(&source_text);
        file.path = rel;

        // Per-file order is the engine's visitation order; whole-run order
        // comes from the sorted file list. No re-sorting here.
        result.violations.extend(check_file(&file, &rules));
        result.files_checked += 1;
    }

    super::output::print(&result, args.format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Applies command-line overrides on top of the resolved config.
fn apply_overrides(config: &mut Config, args: &CheckArgs) {
    config.analyzer.exclude.extend(args.exclude.iter().cloned());

    if !args.module_paths.is_empty() {
        config.module.paths = args.module_paths.clone();
    }
    if let Some(strict) = args.strict_naming {
        config.module.strict_naming = strict;
    }
    if !args.mock_paths.is_empty() {
        config.mock.paths = args.mock_paths.clone();
    }
    if let Some(strict) = args.strict_mock_naming {
        config.mock.strict_naming = strict;
    }
}

fn filter_rules(names: &[&str], config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    for name in names {
        match *name {
            "module-location" | "FX001" => {
                let mut rule = ModuleLocation::new(config.module.clone());
                if let Some(severity) = config.rule_severity("module-location") {
                    rule = rule.severity(severity);
                }
                rules.push(Box::new(rule));
            }
            "module-naming" | "FX002" => {
                let mut rule = ModuleNaming::new(config.module.clone());
                if let Some(severity) = config.rule_severity("module-naming") {
                    rule = rule.severity(severity);
                }
                rules.push(Box::new(rule));
            }
            "mock-placement" | "FX003" => {
                let mut rule = MockPlacement::new(config.mock.clone());
                if let Some(severity) = config.rule_severity("mock-placement") {
                    rule = rule.severity(severity);
                }
                rules.push(Box::new(rule));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

fn discover_files(
    root: &Path,
    config: &Config,
    extractors: &[Box<dyn LanguageExtractor>],
) -> Result<Vec<PathBuf>> {
    let supported_exts: Vec<&str> = extractors
        .iter()
        .flat_map(|e| e.extensions().iter().copied())
        .collect();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(config.analyzer.respect_gitignore);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = extension_of(path);
        if !supported_exts.contains(&ext.as_str()) {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(path);
        if paths::matches_any(rel, &config.analyzer.exclude) {
            tracing::debug!("Excluding: {}", rel.display());
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputFormat;

    fn flagless(path: &str) -> CheckArgs {
        CheckArgs {
            path: PathBuf::from(path),
            format: OutputFormat::Text,
            rules: None,
            exclude: vec![],
            module_paths: vec![],
            strict_naming: None,
            mock_paths: vec![],
            strict_mock_naming: None,
        }
    }

    #[test]
    fn overrides_replace_paths_and_toggle_strictness() {
        let mut config = Config::default();
        let mut args = flagless(".");
        args.module_paths = vec!["lib/*/module.go".to_string()];
        args.strict_naming = Some(false);
        args.strict_mock_naming = Some(false);

        apply_overrides(&mut config, &args);

        assert_eq!(config.module.paths, vec!["lib/*/module.go"]);
        assert!(!config.module.strict_naming);
        assert!(!config.mock.strict_naming);
    }

    #[test]
    fn overrides_append_excludes_and_keep_defaults() {
        let mut config = Config::default();
        let mut args = flagless(".");
        args.exclude = vec!["**/generated/**".to_string()];

        apply_overrides(&mut config, &args);

        assert!(config.analyzer.exclude.contains(&"**/vendor/**".to_string()));
        assert!(config
            .analyzer
            .exclude
            .contains(&"**/generated/**".to_string()));
        // Untouched flags leave the config alone
        assert!(config.module.strict_naming);
        assert_eq!(
            config.module.paths,
            vec!["internal/*/module.go", "pkg/*/module.go"]
        );
    }

    #[test]
    fn filter_selects_by_name_or_code_and_skips_unknown() {
        let config = Config::default();
        let rules = filter_rules(&["FX003", "module-location", "no-such-rule"], &config);
        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["mock-placement", "module-location"]);
    }
}
