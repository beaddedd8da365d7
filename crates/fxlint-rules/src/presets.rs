//! Rule registry.
//!
//! Hosts embed the linter by building a [`Config`] and asking the registry
//! for rule objects; each carries its family's convention snapshot.

use crate::{mock_placement, module_location, module_naming};
use crate::{MockPlacement, ModuleLocation, ModuleNaming};
use fxlint_core::{Config, RuleBox};

/// Returns every built-in rule, configured from `config`.
///
/// Includes:
/// - `module-location` (FX001) - Restricts where module declarations live
/// - `module-naming` (FX002) - Requires module names to match their package
/// - `mock-placement` (FX003) - Restricts where mock types live
#[must_use]
pub fn all_rules(config: &Config) -> Vec<RuleBox> {
    vec![
        Box::new(ModuleLocation::new(config.module.clone())),
        Box::new(ModuleNaming::new(config.module.clone())),
        Box::new(MockPlacement::new(config.mock.clone())),
    ]
}

/// Returns the rules `config` enables, with severity overrides applied.
///
/// Rule families are independently selectable; disabling `module-location`
/// does not change what `module-naming` reports.
#[must_use]
pub fn enabled_rules(config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    if config.is_rule_enabled(module_location::NAME) {
        let mut rule = ModuleLocation::new(config.module.clone());
        if let Some(severity) = config.rule_severity(module_location::NAME) {
            rule = rule.severity(severity);
        }
        rules.push(Box::new(rule));
    }

    if config.is_rule_enabled(module_naming::NAME) {
        let mut rule = ModuleNaming::new(config.module.clone());
        if let Some(severity) = config.rule_severity(module_naming::NAME) {
            rule = rule.severity(severity);
        }
        rules.push(Box::new(rule));
    }

    if config.is_rule_enabled(mock_placement::NAME) {
        let mut rule = MockPlacement::new(config.mock.clone());
        if let Some(severity) = config.rule_severity(mock_placement::NAME) {
            rule = rule.severity(severity);
        }
        rules.push(Box::new(rule));
    }

    tracing::debug!(rules = rules.len(), "configured rule set");
    rules
}
