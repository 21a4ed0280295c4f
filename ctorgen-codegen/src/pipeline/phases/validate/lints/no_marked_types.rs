//! Lint for manifests without any marked type.

use ctorgen_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a pass would generate nothing.
pub struct NoMarkedTypesLint;

impl Lint for NoMarkedTypesLint {
    fn name(&self) -> &'static str {
        "no-marked-types"
    }

    fn description(&self) -> &'static str {
        "Warn when no type requests constructor synthesis"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        if manifest.marked_types().next().is_none() {
            diagnostics.push(Diagnostic::warning(
                "validate",
                format!(
                    "none of the {} declared type(s) is marked; nothing will be generated",
                    manifest.types.len()
                ),
            ));
        }
    }
}
