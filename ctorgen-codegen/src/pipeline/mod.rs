//! Generation pipeline.
//!
//! This module provides a [`Pipeline`] orchestrator that drives one
//! generation pass over a snapshot manifest:
//!
//! - Explicit phase boundaries (validate → lower → synthesize → name)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Per-type diagnostics collection
//! - Shared state via [`GenerationContext`]
//!
//! # Example
//!
//! ```ignore
//! use ctorgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(manifest)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//!
//! let generator = Generator::from_context(ctx);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;

pub use context::{GeneratedUnit, GenerationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::{Plugin, TracePlugin};
pub use runner::Pipeline;
