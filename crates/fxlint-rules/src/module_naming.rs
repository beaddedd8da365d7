//! Rule requiring module names to match their owning package.
//!
//! # Rationale
//!
//! A module registered under a name that differs from its package sends
//! readers hunting through the dependency graph. The declared name must
//! match the package identifier, or the enclosing directory when the
//! package is unknown.
//!
//! # Configuration
//!
//! Reads the `[module]` table: `strict-naming` gates the rule; the
//! placement settings are re-applied as preconditions so a badly placed
//! declaration is never also flagged for naming.

use fxlint_core::utils::paths;
use fxlint_core::{
    DiagnosticSink, Location, ModuleConfig, NodeContext, NodeKind, NodeRef, Rule, Severity,
    Suggestion, Violation,
};

use crate::module_call::{self, Placement};

/// Rule code for module-naming.
pub const CODE: &str = "FX002";

/// Rule name for module-naming.
pub const NAME: &str = "module-naming";

/// Requires module names to match their owning package or directory.
#[derive(Debug, Clone)]
pub struct ModuleNaming {
    /// Module conventions in effect.
    pub config: ModuleConfig,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ModuleNaming {
    fn default() -> Self {
        Self::new(ModuleConfig::default())
    }
}

impl ModuleNaming {
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

impl Rule for ModuleNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires module names to match their owning package or directory"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::Call]
    }

    fn check_node(&self, node: NodeRef<'_>, ctx: &NodeContext<'_>, sink: &mut DiagnosticSink) {
        let NodeRef::Call(call) = node else { return };
        if !self.config.strict_naming {
            return;
        }
        if !module_call::is_module_ctor(call, &self.config) {
            return;
        }

        // A badly placed declaration is the location rule's finding; naming
        // stays quiet for it.
        let nested = ctx.enclosing_func.is_some();
        if module_call::classify(ctx.file, nested, &self.config) != Placement::Ok {
            return;
        }

        let Some((raw, span)) = module_call::first_string_arg(call) else {
            return;
        };
        let declared = module_call::strip_quotes(raw);
        let location = Location::from_span(ctx.file.path.clone(), span);

        if let Some(package) = &ctx.file.package {
            if declared != package {
                sink.report(
                    Violation::new(
                        CODE,
                        NAME,
                        self.severity,
                        location,
                        format!(
                            "module name {declared:?} should match package name {package:?}"
                        ),
                    )
                    .with_suggestion(Suggestion::new(format!(
                        "rename the module to {package:?}"
                    ))),
                );
            }
            return;
        }

        let dir = paths::dir_segments(&ctx.file.path);
        let Some(dir_name) = dir.last() else { return };
        if declared != dir_name {
            sink.report(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    location,
                    format!("module name {declared:?} should match directory name {dir_name:?}"),
                )
                .with_suggestion(Suggestion::new(format!("rename the module to {dir_name:?}"))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlint_core::{check_file, Arg, CallExpr, Callee, Decl, FuncDecl, SourceFile, Span};
    use std::path::PathBuf;

    fn module_call(name: &str, line: usize) -> Decl {
        Decl::Call(CallExpr {
            callee: Some(Callee {
                namespace: "fx".to_string(),
                member: "Module".to_string(),
            }),
            args: vec![Arg::StringLit {
                raw: format!("{name:?}"),
                span: Span::new(line, 21, line * 40 + 20, name.len() + 2),
            }],
            span: Span::new(line, 11, line * 40, 30),
            decls: vec![],
        })
    }

    fn check(path: &str, package: Option<&str>, decls: Vec<Decl>) -> Vec<Violation> {
        let file = SourceFile {
            path: PathBuf::from(path),
            package: package.map(String::from),
            decls,
        };
        check_file(&file, &[Box::new(ModuleNaming::default())])
    }

    #[test]
    fn matching_package_name_is_fine() {
        let violations = check(
            "a/internal/auth/module.go",
            Some("auth"),
            vec![module_call("auth", 3)],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn mismatched_package_name_points_at_literal() {
        let violations = check(
            "a/bad/wrong_name.go",
            Some("bad"),
            vec![module_call("wrong", 3)],
        );
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "module name \"wrong\" should match package name \"bad\""
        );
        assert_eq!(violations[0].location.line, 3);
        assert_eq!(violations[0].location.column, 21);
    }

    #[test]
    fn directory_fallback_when_package_unknown() {
        let violations = check("a/module/module.go", None, vec![module_call("auth", 3)]);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "module name \"auth\" should match directory name \"module\""
        );
    }

    #[test]
    fn directory_fallback_accepts_matching_name() {
        let violations = check("a/auth/module.go", None, vec![module_call("auth", 3)]);
        assert!(violations.is_empty());
    }

    #[test]
    fn known_package_suppresses_directory_comparison() {
        // Name matches the package but not the directory; only the package
        // comparison runs, so nothing fires.
        let violations = check(
            "a/authentication/module.go",
            Some("auth"),
            vec![module_call("auth", 3)],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn no_directory_means_silence() {
        let violations = check("module.go", None, vec![module_call("auth", 3)]);
        assert!(violations.is_empty());
    }

    #[test]
    fn badly_placed_declaration_is_not_flagged_for_naming() {
        let violations = check(
            "a/internal/module.go",
            Some("internal"),
            vec![module_call("wrong", 3)],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn nested_call_in_wrong_file_is_not_flagged_for_naming() {
        let nested = Decl::Func(FuncDecl {
            name: Some("init".to_string()),
            span: Span::new(5, 1, 200, 80),
            decls: vec![module_call("wrong", 6)],
        });
        let violations = check("a/bad/wrong_file.go", Some("bad"), vec![nested]);
        assert!(violations.is_empty());
    }

    #[test]
    fn non_literal_first_argument_is_skipped() {
        let call = Decl::Call(CallExpr {
            callee: Some(Callee {
                namespace: "fx".to_string(),
                member: "Module".to_string(),
            }),
            args: vec![Arg::Other {
                span: Span::new(3, 21, 140, 8),
            }],
            span: Span::new(3, 11, 120, 30),
            decls: vec![],
        });
        let violations = check("a/auth/module.go", Some("auth"), vec![call]);
        assert!(violations.is_empty());
    }

    #[test]
    fn raw_string_literals_are_unquoted() {
        let call = Decl::Call(CallExpr {
            callee: Some(Callee {
                namespace: "fx".to_string(),
                member: "Module".to_string(),
            }),
            args: vec![Arg::StringLit {
                raw: "`auth`".to_string(),
                span: Span::new(3, 21, 140, 6),
            }],
            span: Span::new(3, 11, 120, 30),
            decls: vec![],
        });
        let violations = check("a/auth/module.go", Some("auth"), vec![call]);
        assert!(violations.is_empty());
    }

    #[test]
    fn strict_naming_disabled_silences_the_rule() {
        let config = ModuleConfig {
            strict_naming: false,
            ..ModuleConfig::default()
        };
        let file = SourceFile {
            path: PathBuf::from("a/bad/wrong_name.go"),
            package: Some("bad".to_string()),
            decls: vec![module_call("wrong", 3)],
        };
        let violations = check_file(&file, &[Box::new(ModuleNaming::new(config))]);
        assert!(violations.is_empty());
    }
}
