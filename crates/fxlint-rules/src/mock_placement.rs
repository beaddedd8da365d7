//! Rule restricting where mock types may be declared.
//!
//! # Rationale
//!
//! Mock types that live next to production code leak into release builds
//! and invite import cycles. Anything named with the mock prefix belongs in
//! the designated mocks directory, and never under the restricted root.
//!
//! # Configuration
//!
//! Reads the `[mock]` table: `strict-naming` gates the rule; `prefix`,
//! `dir`, `paths`, and `restricted-root` describe the convention.

use fxlint_core::utils::paths;
use fxlint_core::{
    DiagnosticSink, Location, MockConfig, NodeContext, NodeKind, NodeRef, Rule, Severity,
    Suggestion, Violation,
};

/// Rule code for mock-placement.
pub const CODE: &str = "FX003";

/// Rule name for mock-placement.
pub const NAME: &str = "mock-placement";

/// Restricts mock type declarations to the designated mocks directory.
#[derive(Debug, Clone)]
pub struct MockPlacement {
    /// Mock conventions in effect.
    pub config: MockConfig,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for MockPlacement {
    fn default() -> Self {
        Self::new(MockConfig::default())
    }
}

impl MockPlacement {
    /// Creates the rule with the given mock conventions.
    #[must_use]
    pub fn new(config: MockConfig) -> Self {
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

impl Rule for MockPlacement {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Restricts mock type declarations to the designated mocks directory"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn node_kinds(&self) -> &'static [NodeKind] {
        &[NodeKind::TypeDecl]
    }

    fn check_node(&self, node: NodeRef<'_>, ctx: &NodeContext<'_>, sink: &mut DiagnosticSink) {
        let NodeRef::Type(ty) = node else { return };
        if !self.config.strict_naming {
            return;
        }
        if !ty.name.starts_with(&self.config.prefix) {
            return;
        }

        let dir = paths::dir_segments(&ctx.file.path);
        let location = Location::from_span(ctx.file.path.clone(), ty.span);

        if paths::has_segment(&dir, &self.config.restricted_root) {
            sink.report(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    location,
                    format!(
                        "mock types are not allowed in {}/ directories",
                        self.config.restricted_root
                    ),
                )
                .with_suggestion(Suggestion::new(format!(
                    "move {} into {}/",
                    ty.name, self.config.dir
                ))),
            );
            return;
        }

        if paths::starts_with_dir(&dir, &self.config.dir)
            || paths::matches_any(&ctx.file.path, &self.config.paths)
        {
            return;
        }

        sink.report(
            Violation::new(
                CODE,
                NAME,
                self.severity,
                location,
                format!(
                    "mock types must be defined in {}/ directory",
                    self.config.dir
                ),
            )
            .with_suggestion(Suggestion::new(format!(
                "move {} into {}/",
                ty.name, self.config.dir
            ))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fxlint_core::{check_file, Decl, SourceFile, Span, TypeDecl, Violation};
    use std::path::PathBuf;

    fn type_decl(name: &str, line: usize) -> Decl {
        Decl::Type(TypeDecl {
            name: name.to_string(),
            span: Span::new(line, 6, line * 30, name.len()),
        })
    }

    fn check(path: &str, decls: Vec<Decl>) -> Vec<Violation> {
        let file = SourceFile {
            path: PathBuf::from(path),
            package: Some("auth".to_string()),
            decls,
        };
        check_file(&file, &[Box::new(MockPlacement::default())])
    }

    #[test]
    fn mock_under_restricted_root_is_flagged() {
        let violations = check("b/internal/auth/mocks.go", vec![type_decl("MockAuth", 4)]);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "mock types are not allowed in internal/ directories"
        );
        assert_eq!(violations[0].location.line, 4);
        assert_eq!(violations[0].location.column, 6);
    }

    #[test]
    fn mock_in_designated_directory_is_fine() {
        let violations = check("test/mocks/auth_mock.go", vec![type_decl("MockAuth", 4)]);
        assert!(violations.is_empty());
    }

    #[test]
    fn nested_mocks_directory_is_fine() {
        let violations = check(
            "test/mocks/auth/client_mock.go",
            vec![type_decl("MockClient", 4)],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn mock_elsewhere_is_flagged() {
        let violations = check("pkg/service/helpers.go", vec![type_decl("MockClient", 4)]);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "mock types must be defined in test/mocks/ directory"
        );
    }

    #[test]
    fn prefix_lookalike_directory_does_not_count() {
        let violations = check("test/mocksextra/a.go", vec![type_decl("MockAuth", 4)]);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "mock types must be defined in test/mocks/ directory"
        );
    }

    #[test]
    fn non_mock_types_are_ignored() {
        let violations = check(
            "b/internal/auth/service.go",
            vec![type_decl("Authenticator", 4), type_decl("mockish", 9)],
        );
        assert!(violations.is_empty());
    }

    #[test]
    fn restricted_root_wins_over_allow_globs() {
        let config = MockConfig {
            paths: vec!["**/*.go".to_string()],
            ..MockConfig::default()
        };
        let file = SourceFile {
            path: PathBuf::from("b/internal/mocks/auth.go"),
            package: Some("mocks".to_string()),
            decls: vec![type_decl("MockAuth", 4)],
        };
        let violations = check_file(&file, &[Box::new(MockPlacement::new(config))]);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("not allowed in internal/"));
    }

    #[test]
    fn allow_globs_widen_the_designated_directory() {
        let config = MockConfig {
            paths: vec!["pkg/*/mocks/*".to_string()],
            ..MockConfig::default()
        };
        let file = SourceFile {
            path: PathBuf::from("pkg/auth/mocks/client.go"),
            package: Some("mocks".to_string()),
            decls: vec![type_decl("MockClient", 4)],
        };
        let violations = check_file(&file, &[Box::new(MockPlacement::new(config))]);
        assert!(violations.is_empty());
    }

    #[test]
    fn disabled_enforcement_silences_the_rule() {
        let config = MockConfig {
            strict_naming: false,
            ..MockConfig::default()
        };
        let file = SourceFile {
            path: PathBuf::from("b/internal/auth/mocks.go"),
            package: Some("auth".to_string()),
            decls: vec![type_decl("MockAuth", 4)],
        };
        let violations = check_file(&file, &[Box::new(MockPlacement::new(config))]);
        assert!(violations.is_empty());
    }

    #[test]
    fn multiple_mocks_report_in_source_order() {
        let violations = check(
            "pkg/service/helpers.go",
            vec![type_decl("MockA", 3), type_decl("MockB", 8)],
        );
        let lines: Vec<usize> = violations.iter().map(|v| v.location.line).collect();
        assert_eq!(lines, vec![3, 8]);
    }
}
