//! Pipeline orchestrator.

use ctorgen_manifest::Manifest;
use eyre::Result;

use super::{
    GenerationContext, Phase, PhaseInfo, Plugin,
    phases::{LowerPhase, NamePhase, SynthesizePhase, ValidatePhase},
};

/// The generation pipeline orchestrator.
///
/// The pipeline manages the execution of generation phases and plugin hooks.
/// It runs built-in phases (validate, lower, synthesize, name) followed by
/// any user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(MyPlugin::new())
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with default built-in phases.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a manifest.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs manifest lints
    /// 2. LowerPhase - builds the type snapshot
    /// 3. SynthesizePhase - synthesizes one unit per marked type
    /// 4. NamePhase - assigns unit identifiers
    /// 5. User phases (if any)
    ///
    /// Plugin hooks are called before and after each phase.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally. A type that cannot be
    /// synthesized is reported in the context's diagnostics instead.
    pub fn run(&self, manifest: Manifest) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(manifest);

        for phase in builtin_phases().iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Information about every phase this pipeline runs, in order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        builtin_phases()
            .iter()
            .chain(self.phases.iter())
            .map(|phase| phase.info())
            .collect()
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut GenerationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

/// Built-in phases in execution order.
fn builtin_phases() -> Vec<Box<dyn Phase>> {
    vec![
        Box::new(ValidatePhase::new()),
        Box::new(LowerPhase),
        Box::new(SynthesizePhase),
        Box::new(NamePhase),
    ]
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut GenerationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn make_test_manifest() -> Manifest {
        toml::from_str(
            r#"
            [[types]]
            name = "Widget"
            namespace = "Sample"
            marked = true

            [[types.members]]
            name = "_size"
            kind = "field"
            type = "int"
            readonly = true
        "#,
        )
        .expect("Failed to parse test manifest")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        assert!(ctx.snapshot.is_some());
        assert_eq!(ctx.units.len(), 1);
        assert_eq!(ctx.units[0].unit_name.as_deref(), Some("Widget"));
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        // 4 built-in phases = 4 before + 4 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 4);
        assert_eq!(after_count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_phase_info() {
        let names: Vec<_> = Pipeline::new()
            .phase_info()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["validate", "lower", "synthesize", "name"]);
    }

    #[test]
    fn test_user_phase_runs_last() {
        struct DropAll;
        impl Phase for DropAll {
            fn name(&self) -> &'static str {
                "drop-all"
            }
            fn description(&self) -> &'static str {
                "Discard every unit"
            }
            fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
                ctx.units.clear();
                Ok(())
            }
        }

        let ctx = Pipeline::new()
            .phase(DropAll)
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        assert!(ctx.units.is_empty());
    }

    #[test]
    fn test_validation_error_aborts() {
        let manifest: Manifest = toml::from_str(
            r#"
            [[types]]
            name = "Derived"
            marked = true
            base = "Missing"
        "#,
        )
        .unwrap();

        assert!(Pipeline::new().run(manifest).is_err());
    }
}
