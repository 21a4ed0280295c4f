//! Explain operation - per-type constructor breakdown.

use std::path::Path;

use ctorgen_codegen::{
    Generator,
    pipeline::{Pipeline, phases::ValidatePhase},
};
use ctorgen_manifest::Manifest;
use eyre::{Result, bail};

use super::run_pipeline;
use crate::reports::{ExplainReport, NamedItem};

/// Execute the explain operation.
///
/// With `type_filter`, only matching types are explained; a filter that
/// matches no generated unit is an error.
pub fn explain(
    manifest: &Manifest,
    config_path: &Path,
    type_filter: Option<&str>,
) -> Result<ExplainReport> {
    let phases = Pipeline::new()
        .phase_info()
        .into_iter()
        .map(|p| NamedItem {
            name: p.name.to_string(),
            description: p.description.to_string(),
        })
        .collect();
    let lints = ValidatePhase::new()
        .lint_info()
        .into_iter()
        .map(|l| NamedItem {
            name: l.name.to_string(),
            description: l.description.to_string(),
        })
        .collect();

    let ctx = run_pipeline(manifest)?;
    let diagnostics = ctx.diagnostics.clone();
    let generator = Generator::from_context(ctx);
    let types = generator.explain(type_filter);

    if let Some(name) = type_filter
        && types.is_empty()
    {
        bail!("no generated unit matches '{}'", name);
    }

    Ok(ExplainReport {
        config_path: config_path.to_path_buf(),
        file_suffix: generator.options().file_suffix.clone(),
        phases,
        lints,
        types,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn manifest() -> Manifest {
        Manifest::from_str(
            r#"
            [[types]]
            name = "Base"
            marked = true
            members = [{ name = "_x", kind = "field", type = "int", readonly = true }]

            [[types]]
            name = "Derived"
            marked = true
            base = "Base"
            members = [{ name = "_y", kind = "field", type = "int", readonly = true }]
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_explain_all_types() {
        let report = explain(&manifest(), Path::new("ctorgen.toml"), None).unwrap();

        assert_eq!(report.phases.len(), 4);
        assert_eq!(report.types.len(), 2);
        assert_eq!(report.types[1].base_call.as_deref(), Some("base(x)"));
    }

    #[test]
    fn test_unknown_type_filter() {
        let result = explain(&manifest(), Path::new("ctorgen.toml"), Some("Missing"));
        assert!(result.is_err());
    }
}
