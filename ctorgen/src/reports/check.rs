//! Check command report data structures.

use std::path::PathBuf;

use ctorgen_codegen::Diagnostic;

use super::{
    diagnostic::{has_errors, render_all},
    output::{Output, Report},
};

/// Report data from a pipeline run without output.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Number of declared types.
    pub type_count: usize,
    /// Number of marked types.
    pub marked_count: usize,
    /// Number of units that would be generated.
    pub unit_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !has_errors(&self.diagnostics)
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        render_all(&self.diagnostics, out);

        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        } else {
            let errors = self.diagnostics.iter().filter(|d| d.severity.is_error()).count();
            out.preformatted(&format!(
                "✗ {} has {} error{}",
                self.config_path.display(),
                errors,
                if errors == 1 { "" } else { "s" }
            ));
        }
        out.key_value_indented("Types", &self.type_count.to_string());
        out.key_value_indented("Marked", &self.marked_count.to_string());
        out.key_value_indented("Units", &self.unit_count.to_string());
    }
}
