//! Core operations.
//!
//! This module contains the business logic for ctorgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod generate;

use ctorgen_codegen::{
    GenerationContext,
    pipeline::{Pipeline, TracePlugin},
};
use ctorgen_manifest::Manifest;
use eyre::{Context, Result};

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};

/// Run the standard pipeline on a manifest.
fn run_pipeline(manifest: &Manifest) -> Result<GenerationContext> {
    Pipeline::new()
        .plugin(TracePlugin)
        .run(manifest.clone())
        .wrap_err("Pipeline failed")
}

