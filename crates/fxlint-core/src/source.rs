//! Parsed-source input contract.
//!
//! Front ends (see the `fxlint-go` crate) lower a parse tree into this
//! representation; the engine and rules only ever read it. Declarations
//! nest: a function carries the declarations found in its body, a call
//! carries the declarations found in its arguments, which is what lets
//! rules resolve the nearest enclosing function-like construct.

use std::path::PathBuf;

/// Position of a construct within its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset of the construct's start.
    pub offset: usize,
    /// Length of the construct in bytes.
    pub length: usize,
}

impl Span {
    /// Creates a span from explicit values.
    #[must_use]
    pub fn new(line: usize, column: usize, offset: usize, length: usize) -> Self {
        Self {
            line,
            column,
            offset,
            length,
        }
    }
}

/// A single parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path relative to the analysis root.
    pub path: PathBuf,
    /// Owning package identifier, when the file declares one.
    pub package: Option<String>,
    /// Top-level declarations in source order.
    pub decls: Vec<Decl>,
}

/// A declaration of interest to the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// A call expression.
    Call(CallExpr),
    /// A named type declaration.
    Type(TypeDecl),
    /// A function-like construct (declaration, method, or literal).
    Func(FuncDecl),
}

/// Callee of a call in `namespace.Member` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callee {
    /// Left-hand identifier as written (e.g., `fx`). Not resolved.
    pub namespace: String,
    /// Selected member name (e.g., `Module`).
    pub member: String,
}

/// A single call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    /// A string literal argument, raw text including its quote characters.
    StringLit {
        /// Literal text as written in source.
        raw: String,
        /// Position of the literal.
        span: Span,
    },
    /// Any other argument expression.
    Other {
        /// Position of the expression.
        span: Span,
    },
}

impl Arg {
    /// Position of this argument.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::StringLit { span, .. } | Self::Other { span } => *span,
        }
    }
}

/// A call expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpr {
    /// Callee in `namespace.Member` form, when the call is written that way.
    pub callee: Option<Callee>,
    /// Arguments in source order.
    pub args: Vec<Arg>,
    /// Position of the call.
    pub span: Span,
    /// Declarations nested inside the call's arguments.
    pub decls: Vec<Decl>,
}

/// A named type declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Declared type name.
    pub name: String,
    /// Position of the declaration.
    pub span: Span,
}

/// A function-like construct: named declaration, method, or literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function name; `None` for anonymous function literals.
    pub name: Option<String>,
    /// Position of the construct's start.
    pub span: Span,
    /// Declarations nested inside the body.
    pub decls: Vec<Decl>,
}
