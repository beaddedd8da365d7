//! Go language extractor using Tree-sitter.

use std::path::PathBuf;
use tree_sitter::{Language, Node, Parser};

use fxlint_core::{Arg, CallExpr, Callee, Decl, FuncDecl, SourceFile, Span, TypeDecl};

use crate::extractor::LanguageExtractor;

/// Extracts package, call, type, and function declarations from Go source.
pub struct GoExtractor {
    language: Language,
}

impl GoExtractor {
    /// Creates a new Go extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        node.utf8_text(src).unwrap_or("")
    }

    fn span(node: &Node<'_>) -> Span {
        let start = node.start_position();
        Span::new(
            start.row + 1,
            start.column + 1,
            node.start_byte(),
            node.end_byte() - node.start_byte(),
        )
    }

    fn extract_package(root: &Node<'_>, src: &[u8]) -> Option<String> {
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "package_clause" {
                let mut inner = child.walk();
                for part in child.children(&mut inner) {
                    if part.kind() == "package_identifier" {
                        return Some(Self::text(&part, src).to_owned());
                    }
                }
            }
        }
        None
    }

    /// Callee of a call written as `identifier.Member(...)`.
    fn extract_callee(call: &Node<'_>, src: &[u8]) -> Option<Callee> {
        let function = call.child_by_field_name("function")?;
        if function.kind() != "selector_expression" {
            return None;
        }
        let operand = function.child_by_field_name("operand")?;
        if operand.kind() != "identifier" {
            return None;
        }
        let field = function.child_by_field_name("field")?;
        Some(Callee {
            namespace: Self::text(&operand, src).to_owned(),
            member: Self::text(&field, src).to_owned(),
        })
    }

    fn extract_args(call: &Node<'_>, src: &[u8]) -> Vec<Arg> {
        let Some(args) = call.child_by_field_name("arguments") else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut cursor = args.walk();
        for child in args.named_children(&mut cursor) {
            match child.kind() {
                "interpreted_string_literal" | "raw_string_literal" => out.push(Arg::StringLit {
                    raw: Self::text(&child, src).to_owned(),
                    span: Self::span(&child),
                }),
                _ => out.push(Arg::Other {
                    span: Self::span(&child),
                }),
            }
        }
        out
    }

    fn collect(node: &Node<'_>, src: &[u8], out: &mut Vec<Decl>) {
        match node.kind() {
            "function_declaration" | "method_declaration" | "func_literal" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| Self::text(&n, src).to_owned());
                let mut body = Vec::new();
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    Self::collect(&child, src, &mut body);
                }
                out.push(Decl::Func(FuncDecl {
                    name,
                    span: Self::span(node),
                    decls: body,
                }));
            }
            "type_declaration" => {
                // Handles both single specs and grouped `type (...)` blocks.
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    if child.kind() == "type_spec" {
                        if let Some(name) = child.child_by_field_name("name") {
                            out.push(Decl::Type(TypeDecl {
                                name: Self::text(&name, src).to_owned(),
                                span: Self::span(&child),
                            }));
                        }
                    }
                }
            }
            "call_expression" => {
                let callee = Self::extract_callee(node, src);
                let args = Self::extract_args(node, src);
                let mut nested = Vec::new();
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    Self::collect(&child, src, &mut nested);
                }
                out.push(Decl::Call(CallExpr {
                    callee,
                    args,
                    span: Self::span(node),
                    decls: nested,
                }));
            }
            _ => {
                let mut cursor = node.walk();
                for child in node.children(&mut cursor) {
                    Self::collect(&child, src, out);
                }
            }
        }
    }
}

impl Default for GoExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageExtractor for GoExtractor {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &[".go"]
    }

    fn parse(&self, source: &str) -> SourceFile {
        let mut file = SourceFile {
            path: PathBuf::new(),
            package: None,
            decls: Vec::new(),
        };

        let mut parser = Parser::new();
        if parser.set_language(&self.language).is_err() {
            return file;
        }
        let Some(tree) = parser.parse(source.as_bytes(), None) else {
            return file;
        };

        let src = source.as_bytes();
        let root = tree.root_node();
        file.package = Self::extract_package(&root, src);
        Self::collect(&root, src, &mut file.decls);
        file
    }
}
