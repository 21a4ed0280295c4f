//! Validation context for manifest parsing.

use std::{collections::HashMap, sync::Arc};

use miette::SourceSpan;

use super::{Manifest, TypeDecl, TypeLookup};
use crate::{
    Result,
    error::SourceContext,
    validate::{find_nth_value_span, find_value_span, validate_identifier},
};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested declarations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "ctorgen.toml");
/// ctx.validate_name("Widget", "type")?;
///
/// // For nested validation
/// let nested = ctx.push("Sample.Widget");
/// nested.validate_name("_count", "member")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Sample.Widget", "_count"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "member in 'Sample.Widget'" or just "type" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `name = "..."` value in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), "name", name)
    }

    /// Validate that a name is a well-formed identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }
        Ok(())
    }

    /// Validate every segment of a dotted namespace.
    pub fn validate_namespace(&self, namespace: &str) -> Result<()> {
        if namespace.is_empty() {
            return Ok(());
        }
        for segment in namespace.split('.') {
            if let Some(reason) = validate_identifier(segment) {
                return Err(self.source.invalid_identifier_error(
                    segment,
                    self.context_for("namespace"),
                    reason,
                    find_value_span(self.source.src(), "namespace", namespace),
                ));
            }
        }
        Ok(())
    }
}

/// Validate a whole manifest: identifiers, duplicates, and base references.
pub(super) fn validate_manifest(manifest: &Manifest, ctx: &ParseContext<'_>) -> Result<()> {
    let mut seen: HashMap<(String, usize), usize> = HashMap::new();

    for ty in &manifest.types {
        validate_type(ty, ctx)?;

        let key = (ty.qualified_name(), ty.arity());
        let occurrence = seen.entry(key).or_insert(0);
        if *occurrence > 0 {
            let span = find_nth_value_span(ctx.source_context().src(), "name", &ty.name, *occurrence);
            return Err(ctx
                .source_context()
                .duplicate_type_error(ty.qualified_name(), span));
        }
        *occurrence += 1;
    }

    for ty in &manifest.types {
        let Some(base) = &ty.base else {
            continue;
        };
        let span = find_value_span(ctx.source_context().src(), "base", base);
        match manifest.resolve_type(base) {
            TypeLookup::Found(_) => {}
            TypeLookup::NotFound => {
                return Err(ctx
                    .source_context()
                    .unknown_base_error(base, ty.qualified_name(), span));
            }
            TypeLookup::Ambiguous => {
                return Err(ctx
                    .source_context()
                    .ambiguous_base_error(base, ty.qualified_name(), span));
            }
        }
    }

    Ok(())
}

fn validate_type(ty: &TypeDecl, ctx: &ParseContext<'_>) -> Result<()> {
    ctx.validate_name(&ty.name, "type")?;
    ctx.validate_namespace(&ty.namespace)?;

    for containing in &ty.containing {
        ctx.validate_name(&containing.name, "containing type")?;
        for generic in &containing.generics {
            ctx.validate_name(&generic.name, "type parameter")?;
        }
    }

    let qualified = ty.qualified_name();
    let type_ctx = ctx.push(&qualified);

    for generic in &ty.generics {
        type_ctx.validate_name(&generic.name, "type parameter")?;
    }

    if ty.base.is_none() && !ty.base_arguments.is_empty() {
        return Err(type_ctx.source_context().validation_error(
            format!("'{}' has base-arguments but no base", qualified),
            type_ctx.find_span(&ty.name),
        ));
    }

    for member in &ty.members {
        type_ctx.validate_name(&member.name, "member")?;
        if member.ty.trim().is_empty() {
            return Err(type_ctx.source_context().validation_error(
                format!("member '{}' of '{}' has an empty type", member.name, qualified),
                type_ctx.find_span(&member.name),
            ));
        }
    }

    Ok(())
}
