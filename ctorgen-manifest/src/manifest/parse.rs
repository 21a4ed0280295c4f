//! Manifest parsing from files and strings.

use std::{path::Path, str::FromStr};

use super::{
    Manifest,
    validate::{ParseContext, validate_manifest},
};
use crate::{Error, Result, error::SourceContext};

/// Input syntax of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Some(Self::Toml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "ctorgen.toml", Format::Toml)
    }
}

impl Manifest {
    /// Parse a JSON snapshot with a custom filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename, Format::Json)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str, format: Format) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = match format {
        Format::Toml => toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?,
        Format::Json => serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?,
    };

    let ctx = ParseContext::new(content, filename);
    validate_manifest(&manifest, &ctx)?;
    Ok(manifest)
}
