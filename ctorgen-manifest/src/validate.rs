//! Validation utilities for C# identifiers and source spans

use miette::SourceSpan;

/// Validate that a name is a well-formed C# identifier.
///
/// A single leading `@` (verbatim identifier) is accepted. Keywords are not
/// rejected here: the generator escapes them when rendering.
///
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<String> {
    let name = name.strip_prefix('@').unwrap_or(name);

    let Some(first) = name.chars().next() else {
        return Some("identifier cannot be empty".to_string());
    };

    if !(first.is_alphabetic() || first == '_') {
        return Some(format!(
            "identifier must start with a letter or underscore, found '{}'",
            first
        ));
    }

    if let Some(c) = name.chars().find(|c| !(c.is_alphanumeric() || *c == '_')) {
        return Some(format!("identifier contains invalid character '{}'", c));
    }

    None
}

/// Find the span of a string value for a key in the source.
///
/// Searches TOML (`key = "value"`, `key = 'value'`) and JSON (`"key": "value"`)
/// spellings and returns the span of the value itself.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{}=\"{}\"", key, value),
        format!("\"{}\": \"{}\"", key, value),
        format!("\"{}\":\"{}\"", key, value),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // The value sits just before the closing quote
            let start = pos + pattern.len() - value.len() - 1;
            return Some(SourceSpan::from((start, value.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of the n-th (0-based) occurrence of a key/value pair.
pub(crate) fn find_nth_value_span(
    src: &str,
    key: &str,
    value: &str,
    nth: usize,
) -> Option<SourceSpan> {
    let mut offset = 0;
    for _ in 0..nth {
        let span = find_value_span(&src[offset..], key, value)?;
        offset += span.offset() + span.len();
    }
    find_value_span(&src[offset..], key, value)
        .map(|span| SourceSpan::from((offset + span.offset(), span.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("Widget").is_none());
        assert!(validate_identifier("_count").is_none());
        assert!(validate_identifier("@class").is_none());
        assert!(validate_identifier("Über").is_none());
        assert!(validate_identifier("T1").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("1Widget").is_some());
        assert!(validate_identifier("my-widget").is_some());
        assert!(validate_identifier("a.b").is_some());
    }

    #[test]
    fn test_find_value_span_toml() {
        let src = "[[types]]\nname = \"Widget\"\n";
        let span = find_value_span(src, "name", "Widget").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Widget");
    }

    #[test]
    fn test_find_value_span_json() {
        let src = r#"{"types": [{"name": "Widget"}]}"#;
        let span = find_value_span(src, "name", "Widget").unwrap();
        assert_eq!(&src[span.offset()..span.offset() + span.len()], "Widget");
    }

    #[test]
    fn test_find_nth_value_span() {
        let src = "name = \"A\"\nname = \"A\"\n";
        let first = find_nth_value_span(src, "name", "A", 0).unwrap();
        let second = find_nth_value_span(src, "name", "A", 1).unwrap();
        assert_eq!(first.offset(), 8);
        assert_eq!(second.offset(), 19);
        assert!(find_nth_value_span(src, "name", "A", 2).is_none());
    }
}
