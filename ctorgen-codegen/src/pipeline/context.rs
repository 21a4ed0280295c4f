//! Generation context passed through pipeline phases.

use ctorgen_manifest::Manifest;
use ctorgen_model::{TypeId, TypeSnapshot};
use eyre::{Result, eyre};
use serde::Serialize;

use super::diagnostic::{Diagnostic, Severity};
use crate::synth::CompilationUnit;

/// A unit synthesized for one marked type.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedUnit {
    pub type_id: TypeId,
    /// Qualified name of the source type.
    pub type_name: String,
    /// The type as rendered under the configured qualification policy.
    pub display_name: String,
    /// Output identifier, assigned by the name phase.
    pub unit_name: Option<String>,
    pub unit: CompilationUnit,
}

impl GeneratedUnit {
    /// Sink file name (`<identifier><suffix>`), once a name is assigned.
    pub fn file_name(&self, suffix: &str) -> Option<String> {
        self.unit_name
            .as_ref()
            .map(|name| format!("{}{}", name, suffix))
    }
}

/// Context passed through all pipeline phases.
///
/// This struct carries the state of one generation pass through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct GenerationContext {
    /// The snapshot manifest being processed.
    pub manifest: Manifest,
    /// Typed descriptors (populated by LowerPhase).
    pub snapshot: Option<TypeSnapshot>,
    /// Synthesized units in enumeration order (populated by SynthesizePhase).
    pub units: Vec<GeneratedUnit>,
    /// Diagnostics collected during the pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    /// Create a new generation context from a manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            snapshot: None,
            units: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_error())
            .count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity.is_warning())
            .count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Diagnostics attributed to one type.
    pub fn diagnostics_for<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.concerns(type_name))
    }

    /// The lowered snapshot.
    ///
    /// # Errors
    ///
    /// Fails if LowerPhase has not run.
    pub fn snapshot(&self) -> Result<&TypeSnapshot> {
        self.snapshot
            .as_ref()
            .ok_or_else(|| eyre!("snapshot not set - did LowerPhase run?"))
    }
}
