//! Function location by declaration header.
//!
//! A header is `<visibility> <keyword> <name>(`, e.g. `private fun getCodec(`.
//! The name is escaped before it goes into the pattern, so metacharacters in a
//! configured name are matched literally.
//!
//! Matching is lexical: a header-shaped string inside a comment or a string
//! literal is found just like a real declaration. There is no brace or paren
//! balancing.

use regex::Regex;

use crate::config::{DeclarationSyntax, MethodSpec, ParamList};
use crate::error::{ScanError, ScanResult};

/// Byte range of a matched declaration header, `[start, header_end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub header_end: usize,
}

/// Compiled header pattern for one method.
#[derive(Debug, Clone)]
pub struct DeclarationHeader {
    pattern: Regex,
}

impl DeclarationHeader {
    /// Compiles the header pattern for `spec` under `syntax`.
    pub fn for_method(spec: &MethodSpec, syntax: &DeclarationSyntax) -> ScanResult<Self> {
        let params = match spec.params {
            ParamList::Empty => r"\(\)",
            ParamList::Any => r"\(",
        };
        let source = format!(
            r"{}\s+{}\s+{}{}",
            regex::escape(&syntax.visibility),
            regex::escape(&syntax.keyword),
            regex::escape(&spec.name),
            params,
        );
        let pattern = Regex::new(&source).map_err(|e| ScanError::pattern(&spec.name, e))?;
        Ok(Self { pattern })
    }

    /// First header occurrence in `text`, if any.
    pub fn locate(&self, text: &str) -> Option<Span> {
        self.pattern.find(text).map(|m| Span {
            start: m.start(),
            header_end: m.end(),
        })
    }
}

/// One-shot convenience over [`DeclarationHeader`].
pub fn locate(text: &str, spec: &MethodSpec, syntax: &DeclarationSyntax) -> ScanResult<Option<Span>> {
    Ok(DeclarationHeader::for_method(spec, syntax)?.locate(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str, params: ParamList) -> MethodSpec {
        MethodSpec::new(name, name, params)
    }

    fn kotlin() -> DeclarationSyntax {
        DeclarationSyntax::default()
    }

    #[test]
    fn test_locate_first_header() {
        let text = "class X {\n    private fun load(id: Int) {}\n    private fun load(x: Int) {}\n}";
        let span = locate(text, &spec("load", ParamList::Any), &kotlin()).unwrap().unwrap();
        assert_eq!(span.start, 14);
        assert_eq!(&text[span.start..span.header_end], "private fun load(");
    }

    #[test]
    fn test_locate_absent() {
        let text = "private fun other() {}";
        assert_eq!(locate(text, &spec("load", ParamList::Any), &kotlin()).unwrap(), None);
    }

    #[test]
    fn test_call_site_is_not_a_header() {
        let text = "fun run() { getCodec() }";
        assert_eq!(locate(text, &spec("getCodec", ParamList::Empty), &kotlin()).unwrap(), None);
    }

    #[test]
    fn test_empty_params_requires_closing_paren() {
        let text = "private fun getCodec(device: Device): String? = null";
        assert!(locate(text, &spec("getCodec", ParamList::Empty), &kotlin()).unwrap().is_none());
        assert!(locate(text, &spec("getCodec", ParamList::Any), &kotlin()).unwrap().is_some());
    }

    #[test]
    fn test_name_prefix_does_not_match_longer_name() {
        let text = "private fun getCodecFromLogs() {}";
        assert!(locate(text, &spec("getCodec", ParamList::Any), &kotlin()).unwrap().is_none());
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let text = "private fun a.b() {}\nprivate fun axb() {}";
        let span = locate(text, &spec("a.b", ParamList::Empty), &kotlin()).unwrap().unwrap();
        assert_eq!(span.start, 0);

        let only_axb = "private fun axb() {}";
        assert!(locate(only_axb, &spec("a.b", ParamList::Empty), &kotlin()).unwrap().is_none());
    }

    #[test]
    fn test_header_inside_comment_still_matches() {
        let text = "// private fun legacy() was removed\nclass X";
        let span = locate(text, &spec("legacy", ParamList::Empty), &kotlin()).unwrap().unwrap();
        assert_eq!(span.start, 3);
    }

    #[test]
    fn test_whitespace_between_keywords() {
        let text = "private  fun\tspaced() {}";
        assert!(locate(text, &spec("spaced", ParamList::Empty), &kotlin()).unwrap().is_some());
    }

    #[test]
    fn test_custom_syntax() {
        let syntax = DeclarationSyntax {
            visibility: "pub".to_string(),
            keyword: "fn".to_string(),
        };
        let text = "fn helper() {}\npub fn helper() {}";
        let span = locate(text, &spec("helper", ParamList::Empty), &syntax).unwrap().unwrap();
        assert_eq!(span.start, 15);
    }
}
