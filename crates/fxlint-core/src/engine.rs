//! Diagnostic sink and per-file check engine.
//!
//! [`check_file`] walks a parsed file once, dispatching each declaration to
//! the rules subscribed to its kind. Reported violations come back in
//! visitation order; the sink never deduplicates and never reorders.

use tracing::debug;

use crate::rule::RuleBox;
use crate::source::SourceFile;
use crate::types::Violation;
use crate::walker::{NodeKind, Walker};

/// Ordered accumulator for reported violations.
///
/// Append-only. Violations come out exactly as they went in: same order,
/// duplicates preserved.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    violations: Vec<Violation>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a violation.
    pub fn report(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Number of violations reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violations reported so far, in report order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Consumes the sink, yielding the violations in report order.
    #[must_use]
    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

/// Checks a single parsed file against `rules`.
///
/// The file is walked once in pre-order. Each declaration is handed to every
/// rule whose [`node_kinds`](crate::Rule::node_kinds) include its kind, in
/// the order the rules were given, so a rule sees a given declaration at
/// most once. The returned violations are in visitation order.
#[must_use]
pub fn check_file(file: &SourceFile, rules: &[RuleBox]) -> Vec<Violation> {
    let mut kinds: Vec<NodeKind> = Vec::new();
    for rule in rules {
        for kind in rule.node_kinds() {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
    }

    let mut sink = DiagnosticSink::new();
    Walker::new(file).visit(&kinds, |node, ctx| {
        for rule in rules {
            if rule.node_kinds().contains(&node.kind()) {
                rule.check_node(node, ctx, &mut sink);
            }
        }
    });

    debug!(
        file = %file.path.display(),
        violations = sink.len(),
        "checked file"
    );

    sink.into_violations()
}
