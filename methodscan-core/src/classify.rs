//! Marker classification of an extracted body.
//!
//! Every question is answered by plain substring containment on the body text.
//! The predicates are independent of each other so each can be exercised with
//! a synthetic body.

use serde::Serialize;

use crate::config::Markers;

/// How a function's failure path returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum FallbackShape {
    #[default]
    None,
    ReturnsNull,
    ReturnsFallbackString,
}

impl FallbackShape {
    /// Text for the report's `Fallback:` line; `None` has no line.
    pub fn description(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::ReturnsNull => Some("Returns null on failure"),
            Self::ReturnsFallbackString => Some("Returns string on failure"),
        }
    }
}

/// Everything the report says about one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub line_count: usize,
    pub has_error_handling: bool,
    pub has_logging: bool,
    pub fallback: FallbackShape,
}

/// Number of `\n`-delimited segments; at least 1.
pub fn line_count(body: &str) -> usize {
    body.split('\n').count()
}

pub fn has_error_handling(body: &str, markers: &Markers) -> bool {
    body.contains(markers.error_handling.as_str())
}

pub fn has_logging(body: &str, markers: &Markers) -> bool {
    body.contains(markers.logging.as_str())
}

/// First match wins: the null-return marker is checked before the string-return
/// marker, regardless of where either appears in the body.
pub fn fallback_shape(body: &str, markers: &Markers) -> FallbackShape {
    if body.contains(markers.null_return.as_str()) {
        FallbackShape::ReturnsNull
    } else if body.contains(markers.string_return.as_str()) {
        FallbackShape::ReturnsFallbackString
    } else {
        FallbackShape::None
    }
}

pub fn classify(body: &str, markers: &Markers) -> Classification {
    Classification {
        line_count: line_count(body),
        has_error_handling: has_error_handling(body, markers),
        has_logging: has_logging(body, markers),
        fallback: fallback_shape(body, markers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markers() -> Markers {
        Markers::default()
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("one line"), 1);
        assert_eq!(line_count("a\nb\nc\nd\ne"), 5);
        // trailing newline opens one more (empty) segment
        assert_eq!(line_count("a\nb\n"), 3);
    }

    #[test]
    fn test_error_handling_marker() {
        assert!(has_error_handling("private fun a() {\n    try {\n    } catch (e: Exception) {}\n}", &markers()));
        assert!(!has_error_handling("private fun a() { runCatching { } }", &markers()));
        // the marker includes the brace: `try{` is not recognised
        assert!(!has_error_handling("try{ }", &markers()));
    }

    #[test]
    fn test_logging_marker() {
        assert!(has_logging("android.util.Log.d(TAG, \"x\")", &markers()));
        assert!(!has_logging("Log.d(TAG, \"x\")", &markers()));
    }

    #[test]
    fn test_fallback_null_only() {
        assert_eq!(fallback_shape("if (x) return null", &markers()), FallbackShape::ReturnsNull);
    }

    #[test]
    fn test_fallback_string_only() {
        assert_eq!(
            fallback_shape("return \"SBC\"", &markers()),
            FallbackShape::ReturnsFallbackString
        );
    }

    #[test]
    fn test_fallback_null_wins_when_first() {
        let body = "if (a) return null\nreturn \"AAC\"";
        assert_eq!(fallback_shape(body, &markers()), FallbackShape::ReturnsNull);
    }

    #[test]
    fn test_fallback_null_wins_when_last() {
        let body = "if (a) return \"AAC\"\nreturn null";
        assert_eq!(fallback_shape(body, &markers()), FallbackShape::ReturnsNull);
    }

    #[test]
    fn test_fallback_none() {
        assert_eq!(fallback_shape("return codec", &markers()), FallbackShape::None);
        assert_eq!(FallbackShape::None.description(), None);
    }

    #[test]
    fn test_classify_empty_defaults() {
        let result = classify("private fun plain() {\n    val x = 1\n}", &markers());
        assert_eq!(
            result,
            Classification {
                line_count: 3,
                has_error_handling: false,
                has_logging: false,
                fallback: FallbackShape::None,
            }
        );
    }

    #[test]
    fn test_classify_all_markers() {
        let body = "private fun full(): String? {\n    try {\n        android.util.Log.d(\"T\", \"go\")\n    } catch (e: Exception) {\n        return null\n    }\n}";
        let result = classify(body, &markers());
        assert_eq!(result.line_count, 7);
        assert!(result.has_error_handling);
        assert!(result.has_logging);
        assert_eq!(result.fallback, FallbackShape::ReturnsNull);
    }

    #[test]
    fn test_custom_markers() {
        let custom = Markers {
            error_handling: "match ".to_string(),
            logging: "tracing::".to_string(),
            null_return: "return None".to_string(),
            string_return: "return Err(".to_string(),
        };
        let body = "fn f() { match x { _ => return Err(e) } }";
        let result = classify(body, &custom);
        assert!(result.has_error_handling);
        assert!(!result.has_logging);
        assert_eq!(result.fallback, FallbackShape::ReturnsFallbackString);
    }
}
