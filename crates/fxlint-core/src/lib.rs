//! # fxlint-core
//!
//! Core framework for enforcing fx module conventions over parsed Go
//! sources.
//!
//! This crate provides the foundational traits and types for building the
//! linter. It includes:
//!
//! - [`SourceFile`] and friends, the parsed-source input contract
//! - [`Rule`] trait for per-declaration convention rules
//! - [`Walker`] for pre-order traversal with enclosing-function context
//! - [`check_file`] and [`DiagnosticSink`] for ordered diagnostic emission
//! - [`Config`] as the per-invocation configuration snapshot
//!
//! The engine is deliberately inert: it performs no I/O, touches no global
//! state, and walks one file at a time, so hosts are free to run several
//! invocations side by side.
//!
//! ## Example
//!
//! ```ignore
//! use fxlint_core::{check_file, Config};
//!
//! let config = Config::default();
//! let rules = fxlint_rules::enabled_rules(&config);
//! let violations = check_file(&parsed, &rules);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod rule;
mod source;
mod types;
mod walker;

/// Utility modules for rule implementations.
pub mod utils;

pub use config::{AnalyzerConfig, Config, ConfigError, MockConfig, ModuleConfig, RuleConfig};
pub use engine::{check_file, DiagnosticSink};
pub use rule::{Rule, RuleBox};
pub use source::{Arg, CallExpr, Callee, Decl, FuncDecl, SourceFile, Span, TypeDecl};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use walker::{NodeContext, NodeKind, NodeRef, Walker};
