//! Options lowered from the `[generator]` table.

use ctorgen_manifest::{Accessibility, GeneratorConfig, NamespaceStyle, Qualification};

use crate::builder::Indent;

/// Options that shape the synthesized constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisOptions {
    pub qualification: Qualification,
    pub accessibility: Accessibility,
    /// Maximum number of marked ancestors followed.
    pub max_base_depth: usize,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for SynthesisOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            qualification: config.qualification,
            accessibility: config.accessibility,
            max_base_depth: config.max_base_depth,
        }
    }
}

/// Options that shape the emitted text and file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    pub indent: Indent,
    pub namespace_style: NamespaceStyle,
    /// Emit `// <auto-generated />` and `#nullable enable`.
    pub header: bool,
    pub file_suffix: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::from(&GeneratorConfig::default())
    }
}

impl From<&GeneratorConfig> for OutputOptions {
    fn from(config: &GeneratorConfig) -> Self {
        Self {
            indent: Indent::from_width(config.indent),
            namespace_style: config.namespace_style,
            header: config.header,
            file_suffix: config.file_suffix.clone(),
        }
    }
}
