//! Writes code fragments out as indented text.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates indented lines.
///
/// ```
/// use ctorgen_codegen::builder::{CodeBuilder, CodeFragment, Indent};
///
/// let mut builder = CodeBuilder::new(Indent::CSHARP);
/// builder.emit(&vec![
///     CodeFragment::line("partial class Widget"),
///     CodeFragment::braced(vec![CodeFragment::line("public Widget() { }")]),
/// ]);
///
/// assert_eq!(builder.build(), "partial class Widget\n{\n    public Widget() { }\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Append a renderable node at the current level.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply(fragment);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn apply(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => self.line(&s),
            // Blank lines never carry indentation.
            CodeFragment::Blank => self.buffer.push('\n'),
            CodeFragment::Braced(body) => {
                self.line("{");
                self.nested(body);
                self.line("}");
            }
            CodeFragment::Indent(fragments) => self.nested(fragments),
        }
    }

    fn nested(&mut self, fragments: Vec<CodeFragment>) {
        self.level += 1;
        for fragment in fragments {
            self.apply(fragment);
        }
        self.level -= 1;
    }

    fn line(&mut self, s: &str) {
        for _ in 0..self.level {
            self.indent.write_to(&mut self.buffer);
        }
        self.buffer.push_str(s);
        self.buffer.push('\n');
    }
}

impl Renderable for Vec<CodeFragment> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.clone()
    }
}
