//! Pre-order traversal over a parsed file's declaration tree.
//!
//! Rules subscribe to the declaration kinds they consume; the walker visits
//! every matching declaration exactly once, in source order, and hands each
//! one over together with its enclosing file and nearest enclosing
//! function-like construct.

use crate::source::{CallExpr, Decl, FuncDecl, SourceFile, Span, TypeDecl};

/// Declaration kinds a rule can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Call expressions.
    Call,
    /// Named type declarations.
    TypeDecl,
    /// Function-like constructs.
    Func,
}

/// Borrowed view of a single declaration during traversal.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// A call expression.
    Call(&'a CallExpr),
    /// A named type declaration.
    Type(&'a TypeDecl),
    /// A function-like construct.
    Func(&'a FuncDecl),
}

impl NodeRef<'_> {
    /// Kind of the viewed declaration.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Call(_) => NodeKind::Call,
            Self::Type(_) => NodeKind::TypeDecl,
            Self::Func(_) => NodeKind::Func,
        }
    }

    /// Position of the viewed declaration.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Call(c) => c.span,
            Self::Type(t) => t.span,
            Self::Func(f) => f.span,
        }
    }
}

/// Context handed to rules alongside each visited declaration.
#[derive(Debug, Clone, Copy)]
pub struct NodeContext<'a> {
    /// The file being walked.
    pub file: &'a SourceFile,
    /// Nearest enclosing function-like construct, if any.
    pub enclosing_func: Option<&'a FuncDecl>,
}

/// Walks a file's declaration tree in pre-order.
pub struct Walker<'a> {
    file: &'a SourceFile,
}

impl<'a> Walker<'a> {
    /// Creates a walker over `file`.
    #[must_use]
    pub fn new(file: &'a SourceFile) -> Self {
        Self { file }
    }

    /// Visits every declaration whose kind appears in `kinds`, in source
    /// order, each exactly once.
    pub fn visit<F>(&self, kinds: &[NodeKind], mut f: F)
    where
        F: FnMut(NodeRef<'a>, &NodeContext<'a>),
    {
        self.walk(&self.file.decls, None, kinds, &mut f);
    }

    fn walk<F>(
        &self,
        decls: &'a [Decl],
        enclosing: Option<&'a FuncDecl>,
        kinds: &[NodeKind],
        f: &mut F,
    ) where
        F: FnMut(NodeRef<'a>, &NodeContext<'a>),
    {
        for decl in decls {
            let node = match decl {
                Decl::Call(call) => NodeRef::Call(call),
                Decl::Type(ty) => NodeRef::Type(ty),
                Decl::Func(func) => NodeRef::Func(func),
            };
            if kinds.contains(&node.kind()) {
                let ctx = NodeContext {
                    file: self.file,
                    enclosing_func: enclosing,
                };
                f(node, &ctx);
            }
            match decl {
                Decl::Call(call) => self.walk(&call.decls, enclosing, kinds, f),
                Decl::Func(func) => self.walk(&func.decls, Some(func), kinds, f),
                Decl::Type(_) => {}
            }
        }
    }
}
