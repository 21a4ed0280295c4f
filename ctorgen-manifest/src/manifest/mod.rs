//! Manifest types and parsing for ctorgen snapshot files.

mod config;
mod file;
mod parse;
mod types;
mod validate;

pub use config::{Accessibility, GeneratorConfig, NamespaceStyle, Qualification};
pub use file::ManifestFile;
pub use parse::{Format, parse_manifest};
use serde::Deserialize;
pub use types::{
    ArgumentDecl, AttributeDecl, ContainingDecl, GenericDecl, MemberDecl, TaggedValue, TypeDecl,
    ValueDecl, parse_constraint,
};
pub use validate::ParseContext;

/// Root manifest: one snapshot of type declarations for a generation pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Declared types, in enumeration order
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

/// Outcome of looking up a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLookup {
    /// Index into [`Manifest::types`].
    Found(usize),
    NotFound,
    /// Several generic arities share the name; the reference needs an arity suffix.
    Ambiguous,
}

impl Manifest {
    /// Resolve a qualified type reference, optionally suffixed with an arity ("Sample.Repo`1").
    pub fn resolve_type(&self, reference: &str) -> TypeLookup {
        let (name, arity) = match reference.rsplit_once('`') {
            Some((name, arity)) => match arity.parse::<usize>() {
                Ok(arity) => (name, Some(arity)),
                Err(_) => return TypeLookup::NotFound,
            },
            None => (reference, None),
        };

        let mut candidates = self
            .types
            .iter()
            .enumerate()
            .filter(|(_, ty)| ty.qualified_name() == name)
            .filter(|(_, ty)| arity.is_none_or(|arity| ty.arity() == arity));

        match (candidates.next(), candidates.next()) {
            (Some((index, _)), None) => TypeLookup::Found(index),
            (Some(_), Some(_)) => TypeLookup::Ambiguous,
            (None, _) => TypeLookup::NotFound,
        }
    }

    /// Iterate marked types in enumeration order.
    pub fn marked_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.iter().filter(|ty| ty.is_marked())
    }
}
