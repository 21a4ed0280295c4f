//! Core utilities and types for the ctorgen constructor generator.
//!
//! This crate provides the string helpers and the file sink shared
//! across the ctorgen workspace.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{lower_first, split_path, strip_field_marker, to_camel_case};
