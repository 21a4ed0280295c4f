//! Built-in pipeline phases.
//!
//! This module provides the standard phases that run in every pipeline:
//!
//! - [`ValidatePhase`] - runs lints over the manifest
//! - [`LowerPhase`] - transforms the manifest into a type snapshot
//! - [`SynthesizePhase`] - builds one unit per marked type
//! - [`NamePhase`] - assigns unique output identifiers

mod lower;
mod name;
mod synthesize;
mod validate;

pub use lower::{LowerPhase, lower_manifest};
pub use name::NamePhase;
pub use synthesize::SynthesizePhase;
pub use validate::{
    ConflictingMarkersLint, Lint, LintInfo, NoMarkedTypesLint, UnmarkedBaseLint,
    UnresolvedBaseLint, ValidatePhase,
};
