//! Type and member declarations as exported by a symbol provider.

use ctorgen_model::{
    AttributeArgument, AttributeData, AttributeTarget, ConstantValue, MarkerKind, MemberKind,
    TypeConstraint, TypeKind,
};
use serde::Deserialize;

fn default_true() -> bool {
    true
}

/// A declared type (`[[types]]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TypeDecl {
    pub name: String,

    /// Dotted namespace; empty for the global namespace.
    #[serde(default)]
    pub namespace: String,

    #[serde(default)]
    pub kind: TypeKind,

    /// Requests constructor synthesis (same as a `PrimaryConstructor` attribute).
    #[serde(default)]
    pub marked: bool,

    /// Qualified name of the base type, optionally with an arity suffix ("Sample.Repo`1").
    #[serde(default)]
    pub base: Option<String>,

    /// Type arguments applied to a generic base.
    #[serde(default)]
    pub base_arguments: Vec<String>,

    /// Enclosing types, outermost first.
    #[serde(default)]
    pub containing: Vec<ContainingDecl>,

    #[serde(default)]
    pub generics: Vec<GenericDecl>,

    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,

    #[serde(default)]
    pub members: Vec<MemberDecl>,
}

impl TypeDecl {
    /// Qualified name without arity (e.g., "Sample.Outer.Widget").
    pub fn qualified_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.namespace.is_empty() {
            parts.push(&self.namespace);
        }
        parts.extend(self.containing.iter().map(|c| c.name.as_str()));
        parts.push(&self.name);
        parts.join(".")
    }

    /// Number of generic parameters.
    pub fn arity(&self) -> usize {
        self.generics.len()
    }

    /// Whether the type is marked, either directly or by marker attribute.
    pub fn is_marked(&self) -> bool {
        self.marked
            || self.attributes.iter().any(|a| {
                MarkerKind::from_attribute_name(&a.name) == Some(MarkerKind::PrimaryConstructor)
            })
    }
}

/// An enclosing type declaration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainingDecl {
    pub name: String,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default)]
    pub generics: Vec<GenericDecl>,
}

/// A generic type parameter with constraint spellings (`"class"`, `"new()"`, `"IDisposable"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenericDecl {
    pub name: String,
    #[serde(default)]
    pub constraints: Vec<String>,
}

impl GenericDecl {
    pub fn to_constraints(&self) -> Vec<TypeConstraint> {
        self.constraints
            .iter()
            .map(|c| parse_constraint(c))
            .collect()
    }
}

/// Interpret a constraint spelling.
///
/// Anything that is not a keyword constraint and does not look like a type
/// reference is kept as [`TypeConstraint::Opaque`].
pub fn parse_constraint(text: &str) -> TypeConstraint {
    let text = text.trim();
    match text {
        "class" => TypeConstraint::Class,
        "class?" => TypeConstraint::NullableClass,
        "struct" => TypeConstraint::Struct,
        "unmanaged" => TypeConstraint::Unmanaged,
        "notnull" => TypeConstraint::NotNull,
        "new()" => TypeConstraint::Constructor,
        _ if text.starts_with("allows ") => TypeConstraint::Opaque(text.to_string()),
        _ if looks_like_type(text) => TypeConstraint::Type(text.to_string()),
        _ => TypeConstraint::Opaque(text.to_string()),
    }
}

fn looks_like_type(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && text.chars().all(|c| {
            c.is_alphanumeric()
                || matches!(c, '_' | '.' | ':' | '<' | '>' | ',' | ' ' | '?' | '[' | ']')
        })
}

/// A field or property declaration (`[[types.members]]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDecl {
    pub name: String,

    pub kind: MemberKind,

    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub readonly: bool,

    #[serde(default)]
    pub initializer: bool,

    #[serde(default, rename = "static")]
    pub is_static: bool,

    /// False for compiler-synthesized backing members.
    #[serde(default = "default_true")]
    pub referenceable: bool,

    /// Properties only: no explicit accessor body.
    #[serde(default = "default_true")]
    pub auto: bool,

    #[serde(default)]
    pub include: bool,

    #[serde(default)]
    pub exclude: bool,

    #[serde(default)]
    pub attributes: Vec<AttributeDecl>,
}

impl MemberDecl {
    /// Whether an `IncludePrimaryConstructor` marker or `include = true` is present.
    pub fn is_forced_in(&self) -> bool {
        self.include || self.has_marker(MarkerKind::IncludePrimaryConstructor)
    }

    /// Whether an `IgnorePrimaryConstructor` marker or `exclude = true` is present.
    pub fn is_forced_out(&self) -> bool {
        self.exclude || self.has_marker(MarkerKind::IgnorePrimaryConstructor)
    }

    fn has_marker(&self, kind: MarkerKind) -> bool {
        self.attributes
            .iter()
            .any(|a| MarkerKind::from_attribute_name(&a.name) == Some(kind))
    }

    /// Attributes other than the recognized markers.
    pub fn plain_attributes(&self) -> impl Iterator<Item = &AttributeDecl> {
        self.attributes
            .iter()
            .filter(|a| MarkerKind::from_attribute_name(&a.name).is_none())
    }
}

/// An attribute applied to a type or member.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeDecl {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<ArgumentDecl>,
    #[serde(default)]
    pub targets: Vec<AttributeTarget>,
}

impl AttributeDecl {
    pub fn to_attribute_data(&self) -> AttributeData {
        AttributeData {
            name: self.name.clone(),
            arguments: self.arguments.iter().map(ArgumentDecl::to_argument).collect(),
            targets: self.targets.clone(),
        }
    }
}

/// A positional value or a `{ name = "...", value = ... }` named argument.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ArgumentDecl {
    Named { name: String, value: ValueDecl },
    Positional(ValueDecl),
}

impl ArgumentDecl {
    pub fn to_argument(&self) -> AttributeArgument {
        match self {
            Self::Named { name, value } => AttributeArgument::Named {
                name: name.clone(),
                value: value.to_constant(),
            },
            Self::Positional(value) => AttributeArgument::Positional {
                value: value.to_constant(),
            },
        }
    }
}

/// An attribute argument value.
///
/// Plain TOML/JSON scalars map to literals; tables select the other
/// constant shapes (`{ typeof = "T" }`, `{ enum = "E.Member" }`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValueDecl {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Tagged(TaggedValue),
}

/// Constant shapes with no direct scalar spelling.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaggedValue {
    /// `{ null = true }`
    Null(bool),
    Char(char),
    Typeof(String),
    /// Qualified enum member, split at the last dot.
    Enum(String),
    Array {
        element_type: String,
        values: Vec<ValueDecl>,
    },
    /// A value the provider could not resolve.
    Error(String),
}

impl ValueDecl {
    pub fn to_constant(&self) -> ConstantValue {
        match self {
            Self::Bool(b) => ConstantValue::Bool(*b),
            Self::Int(i) => ConstantValue::Int(*i),
            Self::Float(f) => ConstantValue::Float(*f),
            Self::String(s) => ConstantValue::String(s.clone()),
            Self::Tagged(tagged) => match tagged {
                TaggedValue::Null(_) => ConstantValue::Null,
                TaggedValue::Char(c) => ConstantValue::Char(*c),
                TaggedValue::Typeof(ty) => ConstantValue::TypeOf(ty.clone()),
                TaggedValue::Enum(path) => match path.rsplit_once('.') {
                    Some((type_name, member)) => ConstantValue::Enum {
                        type_name: type_name.to_string(),
                        member: member.to_string(),
                    },
                    None => ConstantValue::Error(path.clone()),
                },
                TaggedValue::Array {
                    element_type,
                    values,
                } => ConstantValue::Array {
                    element_type: element_type.clone(),
                    values: values.iter().map(ValueDecl::to_constant).collect(),
                },
                TaggedValue::Error(text) => ConstantValue::Error(text.clone()),
            },
        }
    }
}
