//! Rule restricting where module declarations may appear.
//!
//! # Rationale
//!
//! Scattering `fx.Module` declarations across arbitrary files makes a
//! service's wiring impossible to audit. Each domain package declares its
//! module in a designated module file, and never directly under the
//! restricted root.
//!
//! # Configuration
//!
//! Reads the `[module]` table: `file-name`, `paths`, `namespace`, `member`,
//! `restricted-root`, `restricted-child`.

use fxlint_core::{
    DiagnosticSink, Location, ModuleConfig, NodeContext, NodeKind, NodeRef, Rule, Severity,
    Suggestion, Violation,
};

use crate::module_call::{self, Placement};

/// Rule code for module-location.
pub const CODE: &str = "FX001";

/// Rule name for module-location.
pub const NAME: &str = "module-location";

/// Restricts module constructor calls to designated files and directories.
#[derive(Debug, Clone)]
pub struct ModuleLocation {
    /// Module conventions in effect.
    pub config: ModuleConfig,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ModuleLocation {
    fn default() -> Self {
        Self::new(ModuleConfig::default())
    }
}

impl ModuleLocation {
    /// Creates the rule with the given module conventions.
    #[must_use]
    pub fn new(config: ModuleConfig) -> Self {
        Self {
            config,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for ModuleLocation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Restricts module constructor calls to designated module files and directories"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Call]
    }

    fn check_node(&self, node: NodeRef<'_>, ctx: &NodeContext<'_>, sink: &mut DiagnosticSink) {
        let NodeRef::Call(call) = node else { return };
        if !module_call::is_module_ctor(call, &self.config) {
            return;
        }

        let nested = ctx.enclosing_func.is_some();
        match module_call::classify(ctx.file, nested, &self.config) {
            Placement::Ok => {}
            Placement::WrongFile => {
                // Attach to the enclosing function so the finding points at
                // the construct that buries the declaration.
                let span = ctx.enclosing_func.map_or(call.span, |f| f.span);
                sink.report(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.file.path.clone(), span),
                        format!(
                            "{} can only be used in {} files",
                            self.config.constructor(),
                            self.config.file_name
                        ),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "declare the module at the top of a {} file",
                        self.config.file_name
                    ))),
                );
            }
            Placement::RestrictedDir => {
                sink.report(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        Location::from_span(ctx.file.path.clone(), call.span),
                        format!(
                            "module declarations are not allowed directly under {root}/ or {root}/{child}/ directories",
                            root = self.config.restricted_root,
                            child = self.config.restricted_child
                        ),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "move the module into a domain package under {}/",
                        self.config.restricted_root
                    ))),
                );
            }
        }
    }
}
