//! The immutable set of type descriptors for one generation pass.

use serde::Serialize;

use crate::{TypeDescriptor, TypeId};

/// All type descriptors supplied for one generation pass, in enumeration order.
///
/// Each descriptor's [`TypeId`] is its index in the snapshot; base-type links
/// refer to these indices.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TypeSnapshot {
    types: Vec<TypeDescriptor>,
}

impl TypeSnapshot {
    /// Create a snapshot. Descriptor ids are reassigned to their positions.
    pub fn new(types: Vec<TypeDescriptor>) -> Self {
        let types = types
            .into_iter()
            .enumerate()
            .map(|(index, mut ty)| {
                ty.id = TypeId(index);
                ty
            })
            .collect();
        Self { types }
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id.0)
    }

    /// Look up the base type of a descriptor, if the link resolves.
    pub fn base_of(&self, ty: &TypeDescriptor) -> Option<&TypeDescriptor> {
        ty.base_type.and_then(|id| self.get(id))
    }

    /// Find a type by its qualified name (see [`TypeDescriptor::qualified_name`]).
    pub fn find(&self, qualified_name: &str) -> Option<&TypeDescriptor> {
        self.types
            .iter()
            .find(|ty| ty.qualified_name() == qualified_name)
    }

    /// Iterate all types in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Iterate marked types in enumeration order.
    pub fn marked(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter().filter(|ty| ty.is_marked)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_positions() {
        let snapshot = TypeSnapshot::new(vec![
            TypeDescriptor::new("A"),
            TypeDescriptor::new("B"),
        ]);

        assert_eq!(snapshot.get(TypeId(1)).unwrap().simple_name, "B");
        assert_eq!(snapshot.get(TypeId(1)).unwrap().id, TypeId(1));
        assert!(snapshot.get(TypeId(2)).is_none());
    }

    #[test]
    fn test_marked_and_base() {
        let mut base = TypeDescriptor::new("Base");
        base.is_marked = true;
        let mut derived = TypeDescriptor::new("Derived");
        derived.base_type = Some(TypeId(0));
        let snapshot = TypeSnapshot::new(vec![base, derived, TypeDescriptor::new("Plain")]);

        let marked: Vec<_> = snapshot.marked().map(|t| t.simple_name.as_str()).collect();
        assert_eq!(marked, vec!["Base"]);

        let derived = snapshot.find("Derived").unwrap();
        assert_eq!(snapshot.base_of(derived).unwrap().simple_name, "Base");
    }
}
