//! Member selection: which members of a type become constructor parameters.

use ctorgen_model::{MemberDescriptor, MemberKind, Mutability, TypeDescriptor};

/// Why a member was or was not selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    ForcedOut,
    ForcedIn,
    Static,
    NotReferenceable,
    Mutable,
    HasInitializer,
    NotAutoProperty,
    Eligible,
}

impl Eligibility {
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::ForcedIn | Self::Eligible)
    }
}

/// Evaluate one member against the selection rules, in precedence order.
pub fn eligibility(member: &MemberDescriptor) -> Eligibility {
    if member.force_exclude {
        return Eligibility::ForcedOut;
    }
    if member.force_include {
        return Eligibility::ForcedIn;
    }
    if member.is_static {
        return Eligibility::Static;
    }
    if !member.is_referenceable {
        return Eligibility::NotReferenceable;
    }
    match member.mutability {
        Mutability::Mutable => return Eligibility::Mutable,
        Mutability::ImmutableInitialized => return Eligibility::HasInitializer,
        Mutability::Immutable => {}
    }
    if member.kind == MemberKind::Property && !member.is_auto_property {
        return Eligibility::NotAutoProperty;
    }
    Eligibility::Eligible
}

/// Members of `ty` that participate in its constructor.
///
/// Fields come before properties; declaration order is kept within each kind.
pub fn select_own_members(ty: &TypeDescriptor) -> Vec<&MemberDescriptor> {
    let selected = |kind: MemberKind| {
        ty.members
            .iter()
            .filter(move |m| m.kind == kind && eligibility(m).is_selected())
    };
    selected(MemberKind::Field)
        .chain(selected(MemberKind::Property))
        .collect()
}

/// Forced members whose assignment cannot compile (static or compiler-synthesized).
pub fn forced_but_unassignable<'a>(
    members: &[&'a MemberDescriptor],
) -> impl Iterator<Item = &'a MemberDescriptor> {
    members
        .iter()
        .copied()
        .filter(|m| m.force_include && (m.is_static || !m.is_referenceable))
}
