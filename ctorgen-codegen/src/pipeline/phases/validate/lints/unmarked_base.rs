//! Lint for marked types whose base is not marked.

use ctorgen_manifest::{Manifest, TypeLookup};

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that notes when a marked type derives from an unmarked declared type.
///
/// Such a base contributes no forwarded parameters and no `base(...)` call.
pub struct UnmarkedBaseLint;

impl Lint for UnmarkedBaseLint {
    fn name(&self) -> &'static str {
        "unmarked-base"
    }

    fn description(&self) -> &'static str {
        "Note marked types whose declared base is not marked"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for ty in manifest.marked_types() {
            let Some(reference) = &ty.base else {
                continue;
            };
            if let TypeLookup::Found(index) = manifest.resolve_type(reference)
                && !manifest.types[index].is_marked()
            {
                diagnostics.push(
                    Diagnostic::info(
                        "validate",
                        format!(
                            "base '{}' is not marked; its members are not forwarded",
                            reference
                        ),
                    )
                    .at(ty.qualified_name()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmarked_base() {
        let manifest: Manifest = toml::from_str(
            r#"
            [[types]]
            name = "Base"
            namespace = "Sample"

            [[types]]
            name = "Derived"
            namespace = "Sample"
            marked = true
            base = "Sample.Base"
        "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        UnmarkedBaseLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            diagnostics[0].severity,
            crate::pipeline::Severity::Info
        ));
        assert_eq!(diagnostics[0].location.as_deref(), Some("Sample.Derived"));
    }

    #[test]
    fn test_marked_base() {
        let manifest: Manifest = toml::from_str(
            r#"
            [[types]]
            name = "Base"
            marked = true

            [[types]]
            name = "Derived"
            marked = true
            base = "Base"
        "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        UnmarkedBaseLint.check(&manifest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }
}
