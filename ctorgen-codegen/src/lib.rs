//! Constructor synthesis for the ctorgen generator.
//!
//! This crate turns a snapshot of type descriptors into one generated C#
//! source unit per marked type: a `partial` declaration holding a
//! constructor that assigns every eligible member and forwards the members
//! of marked base types through `base(...)`.
//!
//! # Module Organization
//!
//! - [`select`] - Member eligibility and ordering
//! - [`inherit`] - Base-chain walk for forwarded members
//! - [`naming`], [`render`] - Parameter names, type references, attributes
//! - [`synth`] - Constructor synthesis into a structured IR
//! - [`emit`], [`builder`] - IR to text
//! - [`namer`] - Unique unit identifiers within a pass
//! - [`pipeline`] - Phase orchestration and diagnostics
//! - [`generator`] - Preview, disk output and explain reports
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
pub mod emit;
pub mod generator;
pub mod inherit;
pub mod namer;
pub mod naming;
pub mod options;
pub mod pipeline;
pub mod render;
pub mod select;
pub mod synth;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use generator::{GenerateResult, Generator, PreviewFile, TypeExplanation};
pub use options::{OutputOptions, SynthesisOptions};
pub use pipeline::{Diagnostic, GenerationContext, Pipeline, Severity};
