//! Shared utility functions for code generation.

/// Strip the conventional private-field marker (leading underscores).
///
/// `"_count"` -> `"count"`, `"__count"` -> `"count"`, `"Count"` -> `"Count"`.
pub fn strip_field_marker(name: &str) -> &str {
    name.trim_start_matches('_')
}

/// Lower-case the first character of a string, leaving the rest unchanged
/// (e.g., "Count" -> "count", "URL" -> "uRL")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Convert a member name to camelCase (e.g., "_myDependency" -> "myDependency", "Name" -> "name")
pub fn to_camel_case(name: &str) -> String {
    lower_first(strip_field_marker(name))
}

/// Split a dotted path into its segments (e.g., "A.B.C" -> ["A", "B", "C"])
///
/// Empty segments are dropped, so `""` yields no segments at all.
pub fn split_path(path: &str) -> Vec<String> {
    path.split('.')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_field_marker() {
        assert_eq!(strip_field_marker("_count"), "count");
        assert_eq!(strip_field_marker("__count"), "count");
        assert_eq!(strip_field_marker("Count"), "Count");
        assert_eq!(strip_field_marker("_"), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Count"), "count");
        assert_eq!(lower_first("count"), "count");
        assert_eq!(lower_first("URL"), "uRL");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("_count"), "count");
        assert_eq!(to_camel_case("Count"), "count");
        assert_eq!(to_camel_case("_myDependency"), "myDependency");
        assert_eq!(to_camel_case("MaxRetryCount"), "maxRetryCount");
        assert_eq!(to_camel_case("_"), "");
    }

    #[test]
    fn test_split_path() {
        assert_eq!(split_path("Sample.Services"), vec!["Sample", "Services"]);
        assert_eq!(split_path("Single"), vec!["Single"]);
        assert!(split_path("").is_empty());
        assert_eq!(split_path("A..B"), vec!["A", "B"]);
    }
}
