//! Synthesize phase - builds one compilation unit per marked type.

use eyre::Result;

use crate::{
    options::SynthesisOptions,
    pipeline::{Diagnostic, GeneratedUnit, GenerationContext, Phase},
    render::render_type,
    synth::synthesize,
};

/// Phase that runs constructor synthesis for every marked type.
///
/// A type that fails is reported as an error diagnostic and skipped; the
/// remaining types are still synthesized.
pub struct SynthesizePhase;

impl Phase for SynthesizePhase {
    fn name(&self) -> &'static str {
        "synthesize"
    }

    fn description(&self) -> &'static str {
        "Synthesize a constructor for each marked type"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let options = SynthesisOptions::from(&ctx.manifest.generator);
        let snapshot = ctx.snapshot()?;

        let mut units = Vec::new();
        let mut diagnostics = Vec::new();
        for ty in snapshot.marked() {
            let type_name = ty.qualified_name();
            match synthesize(snapshot, ty, &options) {
                Ok(synthesis) => {
                    tracing::debug!(
                        type_name = %type_name,
                        parameters = synthesis.unit.constructor.parameters.len(),
                        warnings = synthesis.warnings.len(),
                        "synthesized constructor"
                    );
                    diagnostics.extend(synthesis.warnings);
                    units.push(GeneratedUnit {
                        type_id: ty.id,
                        display_name: render_type(ty, &[], options.qualification),
                        type_name,
                        unit_name: None,
                        unit: synthesis.unit,
                    });
                }
                Err(error) => {
                    tracing::warn!(type_name = %type_name, %error, "skipping type");
                    diagnostics.push(Diagnostic::error(self.name(), error.to_string()).at(type_name));
                }
            }
        }

        ctx.units = units;
        ctx.diagnostics.extend(diagnostics);
        Ok(())
    }
}
