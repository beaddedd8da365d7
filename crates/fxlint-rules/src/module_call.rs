//! Shared recognizer for module constructor calls.
//!
//! Both module rules agree on what counts as a module declaration and on
//! whether one is acceptably placed; that shared judgment lives here so the
//! naming rule can re-apply the location preconditions without depending on
//! the location rule being selected.

use fxlint_core::utils::paths;
use fxlint_core::{Arg, CallExpr, ModuleConfig, SourceFile, Span};

/// Placement classification for a module constructor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Acceptably placed.
    Ok,
    /// Buried inside a function in a non-module file.
    WrongFile,
    /// Directly under the restricted root or its restricted child.
    RestrictedDir,
}

/// Whether `call` invokes the configured module constructor.
pub(crate) fn is_module_ctor(call: &CallExpr, config: &ModuleConfig) -> bool {
    call.callee
        .as_ref()
        .map_or(false, |c| c.namespace == config.namespace && c.member == config.member)
}

/// Classifies the placement of a module constructor call.
///
/// `nested` says whether the call sits inside a function-like construct.
/// Only nested calls are held to the module-file gate; top-level
/// declarations answer to the directory check alone.
pub(crate) fn classify(file: &SourceFile, nested: bool, config: &ModuleConfig) -> Placement {
    if nested && !in_module_file(file, config) {
        return Placement::WrongFile;
    }
    let dir = paths::dir_segments(&file.path);
    if in_restricted_dir(&dir, config) {
        return Placement::RestrictedDir;
    }
    Placement::Ok
}

fn in_module_file(file: &SourceFile, config: &ModuleConfig) -> bool {
    paths::base_name(&file.path) == config.file_name
        || paths::matches_any(&file.path, &config.paths)
}

fn in_restricted_dir(dir: &[String], config: &ModuleConfig) -> bool {
    dir.iter().enumerate().any(|(i, seg)| {
        seg == &config.restricted_root
            && dir
                .get(i + 1)
                .map_or(true, |next| next == &config.restricted_child)
    })
}

/// Strips surrounding quote characters (double quotes or backticks) from a
/// string literal's raw text.
pub(crate) fn strip_quotes(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'"' && last == b'"') || (first == b'`' && last == b'`') {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

/// First argument of `call` when it is a string literal.
pub(crate) fn first_string_arg(call: &CallExpr) -> Option<(&str, Span)> {
    match call.args.first() {
        Some(Arg::StringLit { raw, span }) => Some((raw.as_str(), *span)),
        _ => None,
    }
}
