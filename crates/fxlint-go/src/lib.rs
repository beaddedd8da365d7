//! # fxlint-go
//!
//! Tree-sitter based Go front end for fxlint.
//!
//! This crate turns Go source text into the `fxlint-core` source model
//! (`SourceFile`, `Decl`, `CallExpr`, `TypeDecl`, `FuncDecl`) that the
//! rule engine consumes. It adds:
//!
//! - [`LanguageExtractor`] trait for pluggable language support
//! - [`GoExtractor`] for Go package/call/type/function extraction

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;
pub mod go;

pub use extractor::LanguageExtractor;
pub use go::GoExtractor;
