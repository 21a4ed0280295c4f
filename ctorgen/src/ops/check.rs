//! Check operation - pipeline run without output.

use std::path::Path;

use ctorgen_manifest::Manifest;
use eyre::Result;

use super::run_pipeline;
use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and returns its diagnostics plus the number of units
/// that would be generated.
pub fn check(manifest: &Manifest, config_path: &Path) -> Result<CheckReport> {
    let ctx = run_pipeline(manifest)?;

    Ok(CheckReport {
        config_path: config_path.to_path_buf(),
        type_count: manifest.types.len(),
        marked_count: manifest.marked_types().count(),
        unit_count: ctx.units.len(),
        diagnostics: ctx.diagnostics.clone(),
    })
}
