//! Member descriptors (fields and properties).

use serde::{Deserialize, Serialize};

use crate::AttributeData;

/// Kind of a type member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberKind {
    Field,
    Property,
}

impl std::fmt::Display for MemberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberKind::Field => write!(f, "field"),
            MemberKind::Property => write!(f, "property"),
        }
    }
}

/// Mutability of a member's storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mutability {
    /// Assignable after construction.
    Mutable,
    /// Read-only with no initializer; must be set by a constructor.
    Immutable,
    /// Read-only with an initializer expression.
    ImmutableInitialized,
}

impl Mutability {
    /// Derive mutability from the read-only flag and initializer presence.
    pub fn from_flags(readonly: bool, has_initializer: bool) -> Self {
        match (readonly, has_initializer) {
            (false, _) => Self::Mutable,
            (true, false) => Self::Immutable,
            (true, true) => Self::ImmutableInitialized,
        }
    }
}

/// A field or property belonging to a [`TypeDescriptor`](crate::TypeDescriptor).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberDescriptor {
    pub kind: MemberKind,
    /// Rendered type name, generics-aware (e.g., "global::System.Collections.Generic.List<int>").
    pub declared_type: String,
    /// Name as declared, possibly with a leading `_` marker.
    pub member_name: String,
    pub mutability: Mutability,
    pub is_static: bool,
    /// False for compiler-synthesized backing members.
    pub is_referenceable: bool,
    /// Properties only: no explicit accessor body.
    pub is_auto_property: bool,
    pub force_include: bool,
    /// Takes precedence over `force_include`.
    pub force_exclude: bool,
    /// Attributes other than the recognized markers, in declaration order.
    pub attributes: Vec<AttributeData>,
}

impl MemberDescriptor {
    /// A read-only, referenceable instance field without initializer.
    pub fn field(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Field,
            declared_type: declared_type.into(),
            member_name: name.into(),
            mutability: Mutability::Immutable,
            is_static: false,
            is_referenceable: true,
            is_auto_property: false,
            force_include: false,
            force_exclude: false,
            attributes: Vec::new(),
        }
    }

    /// A get-only auto-property without initializer.
    pub fn property(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            kind: MemberKind::Property,
            is_auto_property: true,
            ..Self::field(name, declared_type)
        }
    }

    pub fn is_field(&self) -> bool {
        self.kind == MemberKind::Field
    }

    pub fn is_property(&self) -> bool {
        self.kind == MemberKind::Property
    }
}
