//! Lower phase - transforms the manifest into a type snapshot.
//!
//! Declarations become [`TypeDescriptor`]s with resolved base links. Marker
//! attributes are folded into flags; every other attribute is kept in
//! declaration order.

use ctorgen_core::split_path;
use ctorgen_manifest::{ContainingDecl, GenericDecl, Manifest, MemberDecl, TypeDecl, TypeLookup};
use ctorgen_model::{
    ContainingType, GenericParameter, MemberDescriptor, Mutability, TypeDescriptor, TypeId,
    TypeSnapshot,
};
use eyre::Result;

use crate::pipeline::{GenerationContext, Phase};

/// Phase that transforms the manifest into a [`TypeSnapshot`].
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform Manifest to a type snapshot"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let snapshot = lower_manifest(&ctx.manifest);
        tracing::debug!(
            types = snapshot.len(),
            marked = snapshot.marked().count(),
            "lowered manifest"
        );
        ctx.snapshot = Some(snapshot);
        Ok(())
    }
}

/// Lower a manifest into a type snapshot.
///
/// Base references that do not resolve are dropped; `UnresolvedBaseLint`
/// reports them before this runs.
pub fn lower_manifest(manifest: &Manifest) -> TypeSnapshot {
    let types = manifest
        .types
        .iter()
        .enumerate()
        .map(|(index, decl)| lower_type(manifest, TypeId(index), decl))
        .collect();
    TypeSnapshot::new(types)
}

fn lower_type(manifest: &Manifest, id: TypeId, decl: &TypeDecl) -> TypeDescriptor {
    let base_type = decl
        .base
        .as_deref()
        .and_then(|reference| match manifest.resolve_type(reference) {
            TypeLookup::Found(index) => Some(TypeId(index)),
            TypeLookup::NotFound | TypeLookup::Ambiguous => None,
        });

    TypeDescriptor {
        id,
        simple_name: decl.name.clone(),
        namespace_path: split_path(&decl.namespace),
        kind: decl.kind,
        generic_parameters: decl.generics.iter().map(lower_generic).collect(),
        nesting_chain: decl.containing.iter().map(lower_containing).collect(),
        base_type,
        base_type_arguments: decl.base_arguments.clone(),
        members: decl.members.iter().map(lower_member).collect(),
        is_marked: decl.is_marked(),
    }
}

fn lower_generic(decl: &GenericDecl) -> GenericParameter {
    GenericParameter {
        name: decl.name.clone(),
        constraints: decl.to_constraints(),
    }
}

fn lower_containing(decl: &ContainingDecl) -> ContainingType {
    ContainingType {
        name: decl.name.clone(),
        kind: decl.kind,
        generic_parameters: decl.generics.iter().map(lower_generic).collect(),
    }
}

fn lower_member(decl: &MemberDecl) -> MemberDescriptor {
    MemberDescriptor {
        kind: decl.kind,
        declared_type: decl.ty.clone(),
        member_name: decl.name.clone(),
        mutability: Mutability::from_flags(decl.readonly, decl.initializer),
        is_static: decl.is_static,
        is_referenceable: decl.referenceable,
        is_auto_property: decl.auto,
        force_include: decl.is_forced_in(),
        force_exclude: decl.is_forced_out(),
        attributes: decl
            .plain_attributes()
            .map(|attribute| attribute.to_attribute_data())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use ctorgen_model::{MemberKind, TypeConstraint, TypeKind};

    use super::*;

    fn parse_manifest(content: &str) -> Manifest {
        toml::from_str(content).expect("Failed to parse test manifest")
    }

    #[test]
    fn test_lower_phase() {
        let manifest = parse_manifest(
            r#"
            [[types]]
            name = "Widget"
            namespace = "Sample.Ui"
            marked = true
        "#,
        );
        let mut ctx = GenerationContext::new(manifest);

        assert!(ctx.snapshot.is_none());

        LowerPhase.run(&mut ctx).expect("lower should succeed");

        let snapshot = ctx.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        let widget = snapshot.find("Sample.Ui.Widget").unwrap();
        assert_eq!(widget.namespace_path, vec!["Sample", "Ui"]);
        assert!(widget.is_marked);
    }

    #[test]
    fn test_lower_base_and_generics() {
        let snapshot = lower_manifest(&parse_manifest(
            r#"
            [[types]]
            name = "Repository"
            namespace = "Sample"
            marked = true
            generics = [{ name = "T", constraints = ["class", "new()"] }]

            [[types]]
            name = "UserRepository"
            namespace = "Sample"
            kind = "record"
            marked = true
            base = "Sample.Repository`1"
            base-arguments = ["User"]

            [[types.containing]]
            name = "Outer"
            generics = [{ name = "TOuter" }]
        "#,
        ));

        let derived = snapshot.get(TypeId(1)).unwrap();
        assert_eq!(derived.base_type, Some(TypeId(0)));
        assert_eq!(derived.base_type_arguments, vec!["User"]);
        assert_eq!(derived.kind, TypeKind::Record);
        assert_eq!(derived.nesting_chain[0].generic_parameters[0].name, "TOuter");

        let base = snapshot.base_of(derived).unwrap();
        assert_eq!(
            base.generic_parameters[0].constraints,
            vec![TypeConstraint::Class, TypeConstraint::Constructor]
        );
    }

    #[test]
    fn test_lower_members() {
        let snapshot = lower_manifest(&parse_manifest(
            r#"
            [[types]]
            name = "Widget"
            marked = true

            [[types.members]]
            name = "_count"
            kind = "field"
            type = "int"
            readonly = true
            initializer = true

            [[types.members]]
            name = "Name"
            kind = "property"
            type = "string"
            auto = false
            attributes = [
                { name = "IncludePrimaryConstructor" },
                { name = "NotNull", targets = ["parameter"] },
            ]
        "#,
        ));

        let widget = snapshot.find("Widget").unwrap();
        let count = &widget.members[0];
        assert_eq!(count.kind, MemberKind::Field);
        assert_eq!(count.mutability, Mutability::ImmutableInitialized);
        assert!(count.is_referenceable);

        let name = &widget.members[1];
        assert_eq!(name.mutability, Mutability::Mutable);
        assert!(!name.is_auto_property);
        assert!(name.force_include);
        assert!(!name.force_exclude);
        assert_eq!(name.attributes.len(), 1);
        assert_eq!(name.attributes[0].name, "NotNull");
    }

    #[test]
    fn test_unresolved_base_dropped() {
        let snapshot = lower_manifest(&parse_manifest(
            r#"
            [[types]]
            name = "Derived"
            base = "Missing"
        "#,
        ));

        assert_eq!(snapshot.find("Derived").unwrap().base_type, None);
    }
}
