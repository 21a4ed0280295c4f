//! Type-level descriptors.

use serde::{Deserialize, Serialize};

use crate::MemberDescriptor;

/// Index of a type within a [`TypeSnapshot`](crate::TypeSnapshot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub usize);

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Declaration kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Record,
    RecordStruct,
}

impl TypeKind {
    /// The declaration keyword(s) for this kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Struct => "struct",
            Self::Record => "record",
            Self::RecordStruct => "record struct",
        }
    }

    /// Whether a type of this kind can chain to a base constructor.
    pub fn supports_base_call(&self) -> bool {
        matches!(self, Self::Class | Self::Record)
    }
}

/// A constraint on a generic type parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "value")]
pub enum TypeConstraint {
    /// `class`
    Class,
    /// `class?`
    NullableClass,
    /// `struct`
    Struct,
    /// `unmanaged`
    Unmanaged,
    /// `notnull`
    NotNull,
    /// `new()`
    Constructor,
    /// A base class or interface constraint, already rendered.
    Type(String),
    /// A constraint shape the provider could not describe structurally.
    Opaque(String),
}

impl TypeConstraint {
    /// Whether this is a primary constraint (must come first in a `where` clause).
    pub fn is_primary(&self) -> bool {
        matches!(
            self,
            Self::Class | Self::NullableClass | Self::Struct | Self::Unmanaged | Self::NotNull
        )
    }
}

/// A generic type parameter together with its constraints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GenericParameter {
    pub name: String,
    pub constraints: Vec<TypeConstraint>,
}

impl GenericParameter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, constraint: TypeConstraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

/// An enclosing type in a nesting chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ContainingType {
    pub name: String,
    pub kind: TypeKind,
    pub generic_parameters: Vec<GenericParameter>,
}

impl ContainingType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Class,
            generic_parameters: Vec::new(),
        }
    }
}

/// A declared type under consideration for constructor synthesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeDescriptor {
    /// Position in the owning snapshot.
    pub id: TypeId,
    /// Declared name; not unique across a program.
    pub simple_name: String,
    /// Namespace segments, outermost first. Empty for the global namespace.
    pub namespace_path: Vec<String>,
    pub kind: TypeKind,
    pub generic_parameters: Vec<GenericParameter>,
    /// Enclosing types, outermost first.
    pub nesting_chain: Vec<ContainingType>,
    pub base_type: Option<TypeId>,
    /// Type arguments supplied to a generic base (e.g., `["int"]` for `: Base<int>`).
    pub base_type_arguments: Vec<String>,
    /// Members in declaration order.
    pub members: Vec<MemberDescriptor>,
    /// Whether the type requests constructor synthesis.
    pub is_marked: bool,
}

impl TypeDescriptor {
    /// Create an unmarked, non-generic class in the global namespace.
    pub fn new(simple_name: impl Into<String>) -> Self {
        Self {
            id: TypeId(0),
            simple_name: simple_name.into(),
            namespace_path: Vec::new(),
            kind: TypeKind::Class,
            generic_parameters: Vec::new(),
            nesting_chain: Vec::new(),
            base_type: None,
            base_type_arguments: Vec::new(),
            members: Vec::new(),
            is_marked: false,
        }
    }

    /// The dotted namespace, empty for the global namespace.
    pub fn namespace(&self) -> String {
        self.namespace_path.join(".")
    }

    pub fn is_generic(&self) -> bool {
        !self.generic_parameters.is_empty()
    }

    /// Fully qualified name without generic arguments
    /// (e.g., "Sample.Services.Outer.Widget").
    pub fn qualified_name(&self) -> String {
        self.namespace_path
            .iter()
            .map(String::as_str)
            .chain(self.nesting_chain.iter().map(|c| c.name.as_str()))
            .chain(std::iter::once(self.simple_name.as_str()))
            .collect::<Vec<_>>()
            .join(".")
    }
}
