//! Name phase - assigns unique output identifiers.

use eyre::{Result, eyre};

use crate::{
    namer::OutputNamer,
    pipeline::{GenerationContext, Phase},
};

/// Phase that names each synthesized unit, in enumeration order.
///
/// Types that failed synthesis never reach this phase, so they do not
/// consume an ordinal.
pub struct NamePhase;

impl Phase for NamePhase {
    fn name(&self) -> &'static str {
        "name"
    }

    fn description(&self) -> &'static str {
        "Assign a unique identifier to each generated unit"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let GenerationContext { snapshot, units, .. } = ctx;
        let snapshot = snapshot
            .as_ref()
            .ok_or_else(|| eyre!("snapshot not set - did LowerPhase run?"))?;

        let mut namer = OutputNamer::new();
        for unit in units.iter_mut() {
            let ty = snapshot
                .get(unit.type_id)
                .ok_or_else(|| eyre!("unknown type '{}' in snapshot", unit.type_name))?;
            let name = namer.assign_unit_name(ty);
            if name != ty.simple_name {
                tracing::debug!(type_name = %unit.type_name, unit_name = %name, "disambiguated unit name");
            }
            unit.unit_name = Some(name);
        }
        Ok(())
    }
}
