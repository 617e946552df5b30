//! Body extraction using the "next sibling declaration, else end of text" rule.
//!
//! A body runs from its declaration header up to the next occurrence of
//! `<visibility> <keyword>` after that header. The marker is a plain prefix,
//! so `private functions` in a comment counts too. Braces are ignored entirely:
//! a nested or commented-out `private fun` ends the body early, and a body
//! followed by a differently-declared function (`fun`, `override fun`, ...)
//! swallows it. Both are accepted boundary conditions of the lexical approach.

use regex::Regex;

use crate::config::DeclarationSyntax;
use crate::error::{ScanError, ScanResult};
use crate::locate::Span;

/// A borrowed slice of the source, `text[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedBody<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// Compiled sibling-declaration marker.
#[derive(Debug, Clone)]
pub struct BodyExtractor {
    sibling: Regex,
}

impl BodyExtractor {
    pub fn new(syntax: &DeclarationSyntax) -> ScanResult<Self> {
        let source = format!(
            r"{}\s+{}",
            regex::escape(&syntax.visibility),
            regex::escape(&syntax.keyword),
        );
        let sibling = Regex::new(&source).map_err(|e| ScanError::pattern(&syntax.keyword, e))?;
        Ok(Self { sibling })
    }

    /// Extracts the body whose declaration header is `header`.
    ///
    /// The search for the next sibling starts after the header, so the result
    /// always contains at least the header itself.
    pub fn extract<'a>(&self, text: &'a str, header: Span) -> ExtractedBody<'a> {
        let end = self
            .sibling
            .find_at(text, header.header_end)
            .map_or(text.len(), |m| m.start());

        ExtractedBody {
            start: header.start,
            end,
            text: &text[header.start..end],
        }
    }
}

/// One-shot convenience over [`BodyExtractor`].
pub fn extract_body<'a>(text: &'a str, header: Span, syntax: &DeclarationSyntax) -> ScanResult<ExtractedBody<'a>> {
    Ok(BodyExtractor::new(syntax)?.extract(text, header))
}
