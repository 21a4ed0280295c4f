//! C# naming rules: keywords, escaping, and parameter names.

use ctorgen_core::to_camel_case;

/// Language-specific naming conventions.
///
/// Defines how member names become parameter names and how reserved words
/// are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a member name to a parameter name (e.g., "_count" -> "count")
    pub member_to_parameter: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "@class")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Derive a safe parameter name from a member name.
    ///
    /// A verbatim `@` prefix on the member name is stripped before escaping.
    /// Returns `None` when nothing is left after stripping the field marker.
    pub fn parameter_name(&self, member_name: &str) -> Option<String> {
        let bare = strip_verbatim(member_name);
        let transformed = (self.member_to_parameter)(bare);
        if transformed.is_empty() {
            None
        } else {
            Some(self.safe_name(&transformed))
        }
    }

    /// Safe spelling of a member name for `this.<member>` access.
    ///
    /// A verbatim `@` prefix is stripped and re-applied only for reserved words.
    pub fn member_access(&self, member_name: &str) -> String {
        self.safe_name(strip_verbatim(member_name))
    }
}

fn strip_verbatim(name: &str) -> &str {
    name.strip_prefix('@').unwrap_or(name)
}

fn escape_verbatim(name: &str) -> String {
    format!("@{}", name)
}

/// C# naming conventions.
pub const CSHARP_NAMING: NamingConvention = NamingConvention {
    member_to_parameter: to_camel_case,
    reserved_words: &[
        "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
        "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
        "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
        "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
        "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
        "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
        "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw",
        "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using",
        "virtual", "void", "volatile", "while",
    ],
    escape_reserved: escape_verbatim,
};

/// Parameter name for a member, per [`CSHARP_NAMING`].
pub fn to_parameter_name(member_name: &str) -> Option<String> {
    CSHARP_NAMING.parameter_name(member_name)
}
