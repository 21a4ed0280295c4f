//! Renderable trait and CodeFragment for decoupled code generation.

/// A fragment of generated C#.
///
/// Fragments sit between the constructor IR and the final text, so that
/// layout (nesting, braces) is decided once and indentation only at write time.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// `{`, the indented body, `}`.
    Braced(Vec<CodeFragment>),
    /// Indent the contained fragments without braces (`where` clauses).
    Indent(Vec<CodeFragment>),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    pub fn braced(body: Vec<CodeFragment>) -> Self {
        Self::Braced(body)
    }

    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }
}

/// Types that can be laid out as code fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
