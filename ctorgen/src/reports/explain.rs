//! Explain command report data structures.

use std::path::PathBuf;

use ctorgen_codegen::{Diagnostic, TypeExplanation};
use serde::Serialize;

use super::{
    diagnostic::render_all,
    output::{Output, Report},
};

/// Report data from pipeline explanation.
#[derive(Debug, Serialize)]
pub struct ExplainReport {
    /// Path to the manifest file.
    pub config_path: PathBuf,
    pub file_suffix: String,
    /// Pipeline phases.
    pub phases: Vec<NamedItem>,
    /// Validation lints.
    pub lints: Vec<NamedItem>,
    /// Explained constructors, in generation order.
    pub types: Vec<TypeExplanation>,
    pub diagnostics: Vec<Diagnostic>,
}

/// A phase or lint with its description.
#[derive(Debug, Serialize)]
pub struct NamedItem {
    pub name: String,
    pub description: String,
}

impl ExplainReport {
    fn render_type(&self, out: &mut dyn Output, ty: &TypeExplanation) {
        out.section(&ty.display_name);
        out.key_value_indented("Type", &ty.type_name);
        if let Some(unit) = &ty.unit_name {
            out.key_value_indented("Unit", &format!("{}{}", unit, self.file_suffix));
        }
        out.key_value_indented("Constructor", &ty.signature);

        for parameter in &ty.own_parameters {
            out.list_item(&format!("{} -> {}", parameter.declaration(), parameter.member));
        }
        for parameter in &ty.forwarded_parameters {
            let from = parameter.inherited_from.as_deref().unwrap_or_default();
            out.list_item(&format!("{} (from {})", parameter.declaration(), from));
        }
        if let Some(call) = &ty.base_call {
            out.key_value_indented("Base call", call);
        }
        for diagnostic in &ty.diagnostics {
            out.diagnostic(&diagnostic.to_string());
        }
        out.newline();
    }
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.title("ctorgen Pipeline Explanation");
        out.newline();

        out.key_value("Input", &self.config_path.display().to_string());
        out.newline();

        out.section("Pipeline Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.numbered_item(i + 1, &format!("{} - {}", phase.name, phase.description));
        }
        out.newline();

        out.section("Validation Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        for ty in &self.types {
            self.render_type(out, ty);
        }

        render_all(&self.diagnostics, out);
    }
}
