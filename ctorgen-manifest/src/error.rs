use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
///
/// # Example
///
/// ```ignore
/// let ctx = SourceContext::new(content, "ctorgen.toml");
/// ctx.unknown_base_error("Sample.Base", "Sample.Derived", span);
/// ```
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = offset_of(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error with an optional span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message: message.into(),
        })
    }

    /// Create an invalid identifier error.
    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Create a duplicate type error.
    pub fn duplicate_type_error(
        &self,
        name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateType {
            src: self.named_source(),
            span,
            name: name.into(),
        })
    }

    /// Create an unknown base type error.
    pub fn unknown_base_error(
        &self,
        base: impl Into<String>,
        type_name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnknownBaseType {
            src: self.named_source(),
            span,
            base: base.into(),
            type_name: type_name.into(),
        })
    }

    /// Create an ambiguous base type error.
    pub fn ambiguous_base_error(
        &self,
        base: impl Into<String>,
        type_name: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::AmbiguousBaseType {
            src: self.named_source(),
            span,
            base: base.into(),
            type_name: type_name.into(),
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the snapshot file with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported snapshot format '{path}'")]
    #[diagnostic(
        code(ctorgen::unsupported_format),
        help("snapshot files must end in '.toml' or '.json'")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to parse snapshot")]
    #[diagnostic(code(ctorgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse JSON snapshot")]
    #[diagnostic(code(ctorgen::parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid identifier '{name}' for {context}: {reason}")]
    #[diagnostic(
        code(ctorgen::invalid_identifier),
        help("identifiers must start with a letter or underscore and contain only letters, digits, or underscores")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },

    #[error("type '{name}' is declared more than once")]
    #[diagnostic(
        code(ctorgen::duplicate_type),
        help("each type must appear once per snapshot; merge partial declarations before export")
    )]
    DuplicateType {
        #[source_code]
        src: NamedSource<String>,
        #[label("duplicate declaration")]
        span: Option<SourceSpan>,
        name: String,
    },

    #[error("base type '{base}' of '{type_name}' is not in the snapshot")]
    #[diagnostic(
        code(ctorgen::unknown_base),
        help("use the base type's qualified name, or omit 'base' if it is external")
    )]
    UnknownBaseType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown base type")]
        span: Option<SourceSpan>,
        base: String,
        type_name: String,
    },

    #[error("base type '{base}' of '{type_name}' matches several generic arities")]
    #[diagnostic(
        code(ctorgen::ambiguous_base),
        help("append the arity to disambiguate, e.g. 'Sample.Repository`1'")
    )]
    AmbiguousBaseType {
        #[source_code]
        src: NamedSource<String>,
        #[label("ambiguous base type")]
        span: Option<SourceSpan>,
        base: String,
        type_name: String,
    },

    #[error("{message}")]
    #[diagnostic(code(ctorgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "ab\ncd\nef";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 2), Some(4));
        assert_eq!(offset_of(src, 3, 1), Some(6));
        assert_eq!(offset_of(src, 0, 1), None);
    }

    #[test]
    fn test_validation_error_message() {
        let ctx = SourceContext::new("[[types]]", "ctorgen.toml");
        let err = ctx.validation_error("member type must not be empty", None);
        assert_eq!(err.to_string(), "member type must not be empty");
    }
}
