//! Rule trait for defining convention rules.

use crate::engine::DiagnosticSink;
use crate::types::Severity;
use crate::walker::{NodeContext, NodeKind, NodeRef};

/// A per-declaration convention rule.
///
/// Implement this trait to create rules that inspect individual
/// declarations. A rule declares the kinds it consumes via
/// [`Rule::node_kinds`]; the engine walks each file once and hands the rule
/// only declarations of those kinds, in source order.
///
/// # Example
///
/// ```ignore
/// use fxlint_core::{DiagnosticSink, NodeContext, NodeKind, NodeRef, Rule, Violation};
///
/// pub struct NoInitFuncs;
///
/// impl Rule for NoInitFuncs {
///     fn name(&self) -> &'static str { "no-init-funcs" }
///     fn code(&self) -> &'static str { "FX900" }
///     fn node_kinds(&self) -> &'static [NodeKind] { &[NodeKind::Func] }
///
///     fn check_node(&self, node: NodeRef<'_>, ctx: &NodeContext<'_>, sink: &mut DiagnosticSink) {
///         let NodeRef::Func(func) = node else { return };
///         if func.name.as_deref() == Some("init") {
///             sink.report(/* ... */);
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "module-location").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FX001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Declaration kinds this rule consumes.
    ///
    /// The engine dispatches a declaration to the rule only when its kind
    /// appears in this slice.
    fn node_kinds(&self) -> &'static [NodeKind];

    /// Inspects a single declaration, reporting any violations to `sink`.
    ///
    /// # Arguments
    ///
    /// * `node` - The declaration under inspection
    /// * `ctx` - Enclosing file and nearest enclosing function
    /// * `sink` - Ordered accumulator for reported violations
    fn check_node(&self, node: NodeRef<'_>, ctx: &NodeContext<'_>, sink: &mut DiagnosticSink);
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
