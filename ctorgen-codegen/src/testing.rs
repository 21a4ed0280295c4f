//! Test utilities for constructor synthesis.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::path::Path;

use ctorgen_core::split_path;
use ctorgen_model::{
    AttributeData, ContainingType, GenericParameter, MemberDescriptor, Mutability, TypeDescriptor,
    TypeId, TypeKind, TypeSnapshot,
};
use eyre::{Result, eyre};

use crate::generator::{GenerateResult, Generator};

/// Fluent builder for a [`TypeDescriptor`].
///
/// ```ignore
/// let snapshot = SnapshotBuilder::new()
///     .add(TypeBuilder::class("Base").marked().field("_x", "int"))
///     .add(TypeBuilder::class("Derived").marked().base("Base"))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    ty: TypeDescriptor,
    base: Option<String>,
}

impl TypeBuilder {
    pub fn new(name: &str, kind: TypeKind) -> Self {
        let mut ty = TypeDescriptor::new(name);
        ty.kind = kind;
        Self { ty, base: None }
    }

    pub fn class(name: &str) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn record(name: &str) -> Self {
        Self::new(name, TypeKind::Record)
    }

    pub fn structure(name: &str) -> Self {
        Self::new(name, TypeKind::Struct)
    }

    pub fn namespace(mut self, namespace: &str) -> Self {
        self.ty.namespace_path = split_path(namespace);
        self
    }

    pub fn marked(mut self) -> Self {
        self.ty.is_marked = true;
        self
    }

    pub fn generic(mut self, parameter: GenericParameter) -> Self {
        self.ty.generic_parameters.push(parameter);
        self
    }

    /// Append an enclosing type (call outermost first).
    pub fn nested_in(mut self, containing: ContainingType) -> Self {
        self.ty.nesting_chain.push(containing);
        self
    }

    /// Derive from the type with this qualified name, resolved by [`SnapshotBuilder`].
    pub fn base(mut self, qualified_name: &str) -> Self {
        self.base = Some(qualified_name.to_string());
        self
    }

    pub fn base_arguments(mut self, arguments: &[&str]) -> Self {
        self.ty.base_type_arguments = arguments.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn member(mut self, member: impl Into<MemberDescriptor>) -> Self {
        self.ty.members.push(member.into());
        self
    }

    /// A read-only field with no initializer.
    pub fn field(self, name: &str, ty: &str) -> Self {
        self.member(MemberDescriptor::field(name, ty))
    }

    /// A get-only auto-property with no initializer.
    pub fn property(self, name: &str, ty: &str) -> Self {
        self.member(MemberDescriptor::property(name, ty))
    }

    /// Build a descriptor without a base link.
    pub fn build(self) -> TypeDescriptor {
        self.ty
    }
}

/// Fluent builder for a [`MemberDescriptor`].
#[derive(Debug, Clone)]
pub struct MemberBuilder {
    member: MemberDescriptor,
}

impl MemberBuilder {
    pub fn field(name: &str, ty: &str) -> Self {
        Self {
            member: MemberDescriptor::field(name, ty),
        }
    }

    pub fn property(name: &str, ty: &str) -> Self {
        Self {
            member: MemberDescriptor::property(name, ty),
        }
    }

    pub fn mutable(mut self) -> Self {
        self.member.mutability = Mutability::Mutable;
        self
    }

    pub fn initialized(mut self) -> Self {
        self.member.mutability = Mutability::ImmutableInitialized;
        self
    }

    pub fn static_member(mut self) -> Self {
        self.member.is_static = true;
        self
    }

    pub fn synthesized(mut self) -> Self {
        self.member.is_referenceable = false;
        self
    }

    /// A property with explicit accessor bodies.
    pub fn with_body(mut self) -> Self {
        self.member.is_auto_property = false;
        self
    }

    pub fn include(mut self) -> Self {
        self.member.force_include = true;
        self
    }

    pub fn exclude(mut self) -> Self {
        self.member.force_exclude = true;
        self
    }

    pub fn attribute(mut self, attribute: AttributeData) -> Self {
        self.member.attributes.push(attribute);
        self
    }

    pub fn build(self) -> MemberDescriptor {
        self.member
    }
}

impl From<MemberBuilder> for MemberDescriptor {
    fn from(builder: MemberBuilder) -> Self {
        builder.build()
    }
}

/// Collects [`TypeBuilder`]s and links bases by qualified name.
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    types: Vec<TypeBuilder>,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, ty: TypeBuilder) -> Self {
        self.types.push(ty);
        self
    }

    /// Build the snapshot, in insertion order.
    ///
    /// # Errors
    ///
    /// Fails if a base name matches no added type.
    pub fn build(self) -> Result<TypeSnapshot> {
        let names: Vec<String> = self.types.iter().map(|t| t.ty.qualified_name()).collect();
        let mut types = Vec::with_capacity(self.types.len());
        for builder in self.types {
            let mut ty = builder.ty;
            if let Some(base) = builder.base {
                let index = names
                    .iter()
                    .position(|name| *name == base)
                    .ok_or_else(|| eyre!("base type '{}' was not added", base))?;
                ty.base_type = Some(TypeId(index));
            }
            types.push(ty);
        }
        Ok(TypeSnapshot::new(types))
    }
}

/// Assert that two strings are equal, with a nice diff on failure.
pub fn assert_content_eq(expected: &str, actual: &str) {
    if expected != actual {
        let expected_lines: Vec<&str> = expected.lines().collect();
        let actual_lines: Vec<&str> = actual.lines().collect();

        let mut diff = String::new();
        let max_lines = expected_lines.len().max(actual_lines.len());

        for i in 0..max_lines {
            let exp = expected_lines.get(i).copied().unwrap_or("<missing>");
            let act = actual_lines.get(i).copied().unwrap_or("<missing>");

            if exp != act {
                diff.push_str(&format!("Line {}:\n", i + 1));
                diff.push_str(&format!("  expected: {}\n", exp));
                diff.push_str(&format!("  actual:   {}\n", act));
            }
        }

        panic!("Content mismatch:\n{}", diff);
    }
}

/// Write a generator's units into a temporary directory.
///
/// The directory will be cleaned up when the returned `TempDir` is dropped.
pub fn generate_to_temp(generator: &Generator) -> Result<(tempfile::TempDir, GenerateResult)> {
    let temp_dir = tempfile::TempDir::new()?;
    let result = generator.generate(temp_dir.path())?;
    Ok((temp_dir, result))
}

/// Read a generated unit back from `dir`.
pub fn read_unit(dir: &Path, file_name: &str) -> Result<String> {
    let path = dir.join(file_name);
    std::fs::read_to_string(&path).map_err(|e| eyre!("failed to read '{}': {}", path.display(), e))
}
