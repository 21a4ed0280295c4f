//! Generate operation - unit output from a manifest.

use std::path::Path;

use ctorgen_codegen::Generator;
use ctorgen_manifest::Manifest;
use eyre::{Context, Result};

use super::run_pipeline;
use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory receiving the generated units.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Types that fail synthesis are reported but do not stop the other units
/// from being written.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let ctx = run_pipeline(manifest)?;
    let diagnostics = ctx.diagnostics.clone();
    let generator = Generator::from_context(ctx);

    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write generated units")?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: written.written,
            unchanged: written.unchanged,
        })
    };

    Ok(GenerateReport {
        diagnostics,
        result,
    })
}
