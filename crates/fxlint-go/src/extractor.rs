//! Language extraction trait.
//!
//! `LanguageExtractor` is the seam between parsing and checking: an
//! extractor lowers raw source text into the `fxlint-core` input contract,
//! and everything downstream is language-agnostic.

use fxlint_core::SourceFile;

/// Trait for language-specific Tree-sitter extraction.
///
/// The extractor receives raw source text and returns a [`SourceFile`]
/// holding the declarations the rules care about. Extraction never fails:
/// input the grammar cannot make sense of degrades to a file with no
/// declarations. The returned file's `path` is left empty; the caller owns
/// path assignment.
pub trait LanguageExtractor: Send + Sync {
    /// Language identifier (e.g., `"go"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this extractor handles (e.g., `&[".go"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Extracts package, call, type, and function declarations from source.
    fn parse(&self, source: &str) -> SourceFile;
}
