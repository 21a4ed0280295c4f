//! Output of a generation pass: rendered units, disk writes and reports.

use std::path::Path;

use ctorgen_core::{File, WriteResult};
use eyre::Result;
use serde::Serialize;

use crate::{
    emit::render_unit,
    options::OutputOptions,
    pipeline::{Diagnostic, GeneratedUnit, GenerationContext},
    synth::Parameter,
};

/// A generated file for preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewFile {
    /// Path relative to the output directory.
    pub path: String,
    /// File content.
    pub content: String,
    /// Qualified name of the source type.
    pub type_name: String,
}

/// Result of writing a pass to disk.
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files whose content changed (or that did not exist).
    pub written: Vec<String>,
    /// Files left untouched because their content was already current.
    pub unchanged: Vec<String>,
}

/// Per-type breakdown of one synthesized constructor.
#[derive(Debug, Clone, Serialize)]
pub struct TypeExplanation {
    pub type_name: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_name: Option<String>,
    pub signature: String,
    pub own_parameters: Vec<Parameter>,
    pub forwarded_parameters: Vec<Parameter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_call: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

/// Renders and writes the units of a finished pipeline run.
pub struct Generator {
    ctx: GenerationContext,
    options: OutputOptions,
}

impl Generator {
    /// Take ownership of a pipeline result. Output options come from the
    /// manifest's `[generator]` table.
    pub fn from_context(ctx: GenerationContext) -> Self {
        let options = OutputOptions::from(&ctx.manifest.generator);
        Self { ctx, options }
    }

    pub fn context(&self) -> &GenerationContext {
        &self.ctx
    }

    pub fn options(&self) -> &OutputOptions {
        &self.options
    }

    /// Render every named unit without touching the disk.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.ctx
            .units
            .iter()
            .filter_map(|unit| {
                let path = unit.file_name(&self.options.file_suffix)?;
                Some(PreviewFile {
                    path,
                    content: render_unit(&unit.unit, &self.options),
                    type_name: unit.type_name.clone(),
                })
            })
            .collect()
    }

    /// Write every unit into `output_dir`.
    ///
    /// # Errors
    ///
    /// Fails on the first file that cannot be written.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for preview in self.preview() {
            let file = File::new(output_dir.join(&preview.path), preview.content);
            match file.write()? {
                WriteResult::Written => {
                    tracing::debug!(path = %file.path().display(), "wrote unit");
                    result.written.push(preview.path);
                }
                WriteResult::Unchanged => result.unchanged.push(preview.path),
            }
        }
        Ok(result)
    }

    /// Explain the synthesized constructors, optionally restricted to one type.
    ///
    /// `filter` matches a qualified name, a simple name, or a unit name.
    pub fn explain(&self, filter: Option<&str>) -> Vec<TypeExplanation> {
        self.ctx
            .units
            .iter()
            .filter(|unit| filter.is_none_or(|name| matches_unit(unit, name)))
            .map(|unit| self.explain_unit(unit))
            .collect()
    }

    fn explain_unit(&self, unit: &GeneratedUnit) -> TypeExplanation {
        let constructor = &unit.unit.constructor;
        TypeExplanation {
            type_name: unit.type_name.clone(),
            display_name: unit.display_name.clone(),
            unit_name: unit.unit_name.clone(),
            signature: constructor.signature(),
            own_parameters: constructor.own_parameters().cloned().collect(),
            forwarded_parameters: constructor.inherited_parameters().cloned().collect(),
            base_call: constructor
                .base_arguments
                .as_ref()
                .map(|arguments| format!("base({})", arguments.join(", "))),
            diagnostics: self
                .ctx
                .diagnostics_for(&unit.type_name)
                .cloned()
                .collect(),
        }
    }
}

fn matches_unit(unit: &GeneratedUnit, name: &str) -> bool {
    unit.type_name == name
        || unit.unit.declaration.name == name
        || unit.unit_name.as_deref() == Some(name)
}
