//! Lint for base references that do not resolve to exactly one type.

use ctorgen_manifest::{Manifest, TypeLookup};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that rejects base references with no match or several matches.
///
/// A reference to a type outside the snapshot is an error: the snapshot has
/// to carry every ancestor whose members may be forwarded.
pub struct UnresolvedBaseLint;

impl Lint for UnresolvedBaseLint {
    fn name(&self) -> &'static str {
        "unresolved-base"
    }

    fn description(&self) -> &'static str {
        "Reject base references that do not resolve to a single declared type"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for ty in &manifest.types {
            let Some(reference) = &ty.base else {
                continue;
            };
            let message = match manifest.resolve_type(reference) {
                TypeLookup::Found(_) => continue,
                TypeLookup::NotFound => format!("base type '{}' is not declared", reference),
                TypeLookup::Ambiguous => format!(
                    "base type '{}' matches several generic arities; add an arity suffix (e.g. '{}`1')",
                    reference, reference
                ),
            };
            diagnostics.push(Diagnostic::error("validate", message).at(ty.qualified_name()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let manifest: Manifest = toml::from_str(content).expect("Failed to parse test manifest");
        let mut diagnostics = Vec::new();
        UnresolvedBaseLint.check(&manifest, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_missing_base() {
        let diagnostics = check(
            r#"
            [[types]]
            name = "Derived"
            base = "Sample.Missing"
        "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
        assert!(diagnostics[0].message.contains("Sample.Missing"));
    }

    #[test]
    fn test_ambiguous_base() {
        let diagnostics = check(
            r#"
            [[types]]
            name = "Repo"

            [[types]]
            name = "Repo"
            generics = [{ name = "T" }]

            [[types]]
            name = "Derived"
            base = "Repo"
        "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("arity suffix"));
    }

    #[test]
    fn test_arity_suffix_resolves() {
        let diagnostics = check(
            r#"
            [[types]]
            name = "Repo"

            [[types]]
            name = "Repo"
            generics = [{ name = "T" }]

            [[types]]
            name = "Derived"
            base = "Repo`1"
            base-arguments = ["int"]
        "#,
        );

        assert!(diagnostics.is_empty());
    }
}
