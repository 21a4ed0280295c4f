//! Lint for members carrying both include and exclude markers.

use ctorgen_manifest::Manifest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when a member is both forced in and forced out.
///
/// Exclusion wins, so the include marker has no effect.
pub struct ConflictingMarkersLint;

impl Lint for ConflictingMarkersLint {
    fn name(&self) -> &'static str {
        "conflicting-markers"
    }

    fn description(&self) -> &'static str {
        "Warn about members marked both included and excluded"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for ty in &manifest.types {
            let type_name = ty.qualified_name();
            for member in &ty.members {
                if member.is_forced_in() && member.is_forced_out() {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "member '{}' is both included and excluded; it will be excluded",
                                member.name
                            ),
                        )
                        .at(format!("{}.{}", type_name, member.name)),
                    );
                }
            }
        }
    }
}
