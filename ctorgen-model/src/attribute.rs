//! Attribute data attached to members, and the recognized marker kinds.

use serde::{Deserialize, Serialize};

/// A program element an attribute may be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeTarget {
    Assembly,
    Module,
    Class,
    Struct,
    Enum,
    Constructor,
    Method,
    Property,
    Field,
    Event,
    Interface,
    Parameter,
    Delegate,
    ReturnValue,
    GenericParameter,
    /// Valid on every target.
    All,
}

/// A compile-time constant used as an attribute argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    String(String),
    /// `typeof(T)` with `T` already rendered.
    TypeOf(String),
    /// An enum member, e.g. `global::System.StringComparison.Ordinal`.
    Enum { type_name: String, member: String },
    Array {
        element_type: String,
        values: Vec<ConstantValue>,
    },
    /// A value the provider could not resolve; carries the provider's text.
    Error(String),
}

impl ConstantValue {
    /// Whether this value (or any nested value) is an unresolved constant.
    pub fn is_error(&self) -> bool {
        match self {
            Self::Error(_) => true,
            Self::Array { values, .. } => values.iter().any(Self::is_error),
            _ => false,
        }
    }
}

/// A positional or named attribute argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum AttributeArgument {
    Positional { value: ConstantValue },
    Named { name: String, value: ConstantValue },
}

impl AttributeArgument {
    pub fn value(&self) -> &ConstantValue {
        match self {
            Self::Positional { value } | Self::Named { value, .. } => value,
        }
    }
}

/// An attribute applied to a member.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeData {
    /// Attribute class name as it should be rendered (e.g., "global::Foo.BarAttribute" or "Bar").
    pub name: String,
    pub arguments: Vec<AttributeArgument>,
    /// Targets from the attribute's usage declaration.
    pub targets: Vec<AttributeTarget>,
}

impl AttributeData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
            targets: Vec::new(),
        }
    }

    pub fn with_target(mut self, target: AttributeTarget) -> Self {
        self.targets.push(target);
        self
    }

    pub fn with_argument(mut self, argument: AttributeArgument) -> Self {
        self.arguments.push(argument);
        self
    }

    /// Whether the attribute may be applied to the given target.
    pub fn applies_to(&self, target: AttributeTarget) -> bool {
        self.targets
            .iter()
            .any(|t| *t == target || *t == AttributeTarget::All)
    }
}

/// Marker attributes recognized by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MarkerKind {
    /// Requests constructor synthesis for a type.
    PrimaryConstructor,
    /// Forces a member into the constructor.
    IncludePrimaryConstructor,
    /// Keeps a member out of the constructor.
    IgnorePrimaryConstructor,
}

impl MarkerKind {
    /// Recognize a marker from an attribute name.
    ///
    /// Namespace qualification, a `global::` prefix, and the `Attribute`
    /// suffix are all optional.
    pub fn from_attribute_name(name: &str) -> Option<Self> {
        let name = name.trim_start_matches("global::");
        let simple = name.rsplit('.').next().unwrap_or(name);
        let simple = simple.strip_suffix("Attribute").unwrap_or(simple);
        match simple {
            "PrimaryConstructor" => Some(Self::PrimaryConstructor),
            "IncludePrimaryConstructor" => Some(Self::IncludePrimaryConstructor),
            "IgnorePrimaryConstructor" => Some(Self::IgnorePrimaryConstructor),
            _ => None,
        }
    }
}
