//! The `[generator]` configuration table.

use serde::{Deserialize, Serialize};

/// How the namespace wrapper is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamespaceStyle {
    /// `namespace A.B { ... }`
    #[default]
    Block,
    /// `namespace A.B;`
    FileScoped,
}

/// How much of a type's path is rendered in type references.
///
/// Only display names (`explain`) and diagnostic messages follow it; member
/// types are emitted as declared and declarations use the simple name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Qualification {
    /// `Widget`
    #[default]
    Simple,
    /// `Sample.Ui.Widget`
    Qualified,
    /// `global::Sample.Ui.Widget`
    Global,
}

/// Accessibility of the generated constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accessibility {
    #[default]
    Public,
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    PrivateProtected,
}

impl Accessibility {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
        }
    }
}

fn default_indent() -> u8 {
    4
}

fn default_file_suffix() -> String {
    ".PrimaryConstructor.g.cs".to_string()
}

fn default_header() -> bool {
    true
}

fn default_max_base_depth() -> usize {
    64
}

/// Generator settings; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GeneratorConfig {
    /// Spaces per indentation level (0 selects tabs).
    #[serde(default = "default_indent")]
    pub indent: u8,

    #[serde(default)]
    pub namespace_style: NamespaceStyle,

    /// Qualification of type names in `explain` and diagnostics.
    #[serde(default)]
    pub qualification: Qualification,

    #[serde(default)]
    pub accessibility: Accessibility,

    /// Appended to each unit identifier to form the output file name.
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,

    /// Emit the `// <auto-generated />` banner and `#nullable enable`.
    #[serde(default = "default_header")]
    pub header: bool,

    /// Defensive cap on base-chain depth.
    #[serde(default = "default_max_base_depth")]
    pub max_base_depth: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            namespace_style: NamespaceStyle::default(),
            qualification: Qualification::default(),
            accessibility: Accessibility::default(),
            file_suffix: default_file_suffix(),
            header: default_header(),
            max_base_depth: default_max_base_depth(),
        }
    }
}
