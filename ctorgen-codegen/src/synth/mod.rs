//! Constructor synthesis: selected members and forwarded base members
//! become a [`CompilationUnit`].

mod error;
mod ir;

use std::collections::HashMap;

use ctorgen_model::{
    AttributeTarget, ContainingType, GenericParameter, MemberDescriptor, TypeDescriptor,
    TypeSnapshot,
};
pub use error::SynthesisError;
pub use ir::{Assignment, CompilationUnit, Declaration, GeneratedConstructor, Parameter};

use crate::{
    inherit::{marked_base, resolve_base_chain},
    naming::CSHARP_NAMING,
    options::SynthesisOptions,
    pipeline::Diagnostic,
    render::{render_attribute, render_constraint_clause, render_generic_list, render_type},
    select::{forced_but_unassignable, select_own_members},
};

const PHASE: &str = "synthesize";

/// A synthesized unit plus the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub unit: CompilationUnit,
    pub warnings: Vec<Diagnostic>,
}

/// Synthesize the constructor unit for one marked type.
pub fn synthesize(
    snapshot: &TypeSnapshot,
    ty: &TypeDescriptor,
    options: &SynthesisOptions,
) -> Result<Synthesis, SynthesisError> {
    let type_name = ty.qualified_name();
    let mut warnings = Vec::new();

    let base = marked_base(snapshot, ty);
    if let Some(base) = base {
        if base.is_generic() && ty.base_type_arguments.is_empty() {
            warnings.push(
                Diagnostic::warning(
                    PHASE,
                    format!(
                        "base '{}' is generic but no base-arguments are given; inherited member types are emitted unchanged",
                        render_type(base, &[], options.qualification)
                    ),
                )
                .at(&type_name),
            );
        }
    }

    let own = select_own_members(ty);
    let inherited = resolve_base_chain(snapshot, ty, options.max_base_depth)?;
    // A marked base with nothing to forward gets no base call at all.
    if !inherited.is_empty() && !ty.kind.supports_base_call() {
        return Err(SynthesisError::BaseCallOnStruct {
            type_name,
            kind: ty.kind.keyword(),
        });
    }

    for member in forced_but_unassignable(&own) {
        let reason = if member.is_static {
            "static"
        } else {
            "not referenceable"
        };
        warnings.push(
            Diagnostic::warning(
                PHASE,
                format!(
                    "member '{}' is forced into the constructor but is {}; the assignment will not compile",
                    member.member_name, reason
                ),
            )
            .at(format!("{}.{}", type_name, member.member_name)),
        );
    }

    let mut builder = ParameterBuilder {
        type_name: &type_name,
        seen: HashMap::new(),
        warnings: &mut warnings,
    };
    let mut parameters = Vec::with_capacity(own.len() + inherited.len());
    for member in &own {
        parameters.push(builder.build(member, None)?);
    }
    for inherited_member in &inherited {
        let declared_in = snapshot
            .get(inherited_member.declared_in)
            .map(|t| t.qualified_name())
            .unwrap_or_default();
        parameters.push(builder.build(&inherited_member.member, Some(declared_in))?);
    }

    let base_arguments = (!inherited.is_empty()).then(|| {
        parameters
            .iter()
            .filter(|p| p.is_inherited())
            .map(|p| p.name.clone())
            .collect()
    });

    let assignments = parameters
        .iter()
        .filter(|p| !p.is_inherited())
        .map(|p| Assignment {
            member: CSHARP_NAMING.member_access(&p.member),
            parameter: p.name.clone(),
        })
        .collect();

    let constructor = GeneratedConstructor {
        name: ty.simple_name.clone(),
        accessibility: options.accessibility,
        parameters,
        base_arguments,
        assignments,
    };

    let wrappers = ty
        .nesting_chain
        .iter()
        .map(|containing| wrapper_declaration(containing, &type_name, &mut warnings))
        .collect();
    let declaration = declaration(
        ty.kind.keyword(),
        &ty.simple_name,
        &ty.generic_parameters,
        &type_name,
        &mut warnings,
    );

    let namespace = ty.namespace();
    let unit = CompilationUnit {
        namespace: (!namespace.is_empty()).then_some(namespace),
        wrappers,
        declaration,
        constructor,
    };

    Ok(Synthesis { unit, warnings })
}

struct ParameterBuilder<'a> {
    type_name: &'a str,
    /// Parameter name -> member that claimed it.
    seen: HashMap<String, String>,
    warnings: &'a mut Vec<Diagnostic>,
}

impl ParameterBuilder<'_> {
    fn build(
        &mut self,
        member: &MemberDescriptor,
        inherited_from: Option<String>,
    ) -> Result<Parameter, SynthesisError> {
        let name = CSHARP_NAMING
            .parameter_name(&member.member_name)
            .ok_or_else(|| SynthesisError::EmptyParameterName {
                type_name: self.type_name.to_string(),
                member: member.member_name.clone(),
            })?;

        let origin = match &inherited_from {
            Some(base) => format!("{}.{}", base, member.member_name),
            None => member.member_name.clone(),
        };
        if let Some(first) = self.seen.get(&name) {
            return Err(SynthesisError::DuplicateParameter {
                type_name: self.type_name.to_string(),
                parameter: name,
                first: first.clone(),
                second: origin,
            });
        }
        self.seen.insert(name.clone(), origin);

        let attributes = self.forward_attributes(member);

        Ok(Parameter {
            name,
            ty: member.declared_type.clone(),
            attributes,
            member: member.member_name.clone(),
            inherited_from,
        })
    }

    fn forward_attributes(&mut self, member: &MemberDescriptor) -> Vec<String> {
        member
            .attributes
            .iter()
            .filter(|a| a.applies_to(AttributeTarget::Parameter))
            .filter_map(|attribute| {
                let rendered = render_attribute(attribute);
                if rendered.is_none() {
                    self.warnings.push(
                        Diagnostic::warning(
                            PHASE,
                            format!(
                                "attribute '{}' has an argument that cannot be reproduced and is not forwarded",
                                attribute.name
                            ),
                        )
                        .at(format!("{}.{}", self.type_name, member.member_name)),
                    );
                }
                rendered
            })
            .collect()
    }
}

fn wrapper_declaration(
    containing: &ContainingType,
    type_name: &str,
    warnings: &mut Vec<Diagnostic>,
) -> Declaration {
    declaration(
        containing.kind.keyword(),
        &containing.name,
        &containing.generic_parameters,
        type_name,
        warnings,
    )
}

fn declaration(
    keyword: &str,
    name: &str,
    generic_parameters: &[GenericParameter],
    type_name: &str,
    warnings: &mut Vec<Diagnostic>,
) -> Declaration {
    let mut where_clauses = Vec::new();
    for parameter in generic_parameters {
        let clause = render_constraint_clause(parameter);
        if let Some(problem) = clause.unsupported {
            warnings.push(
                Diagnostic::warning(PHASE, format!("{}; kept in declaration order", problem))
                    .at(type_name),
            );
        }
        where_clauses.extend(clause.text);
    }

    Declaration {
        keyword: keyword.to_string(),
        name: name.to_string(),
        generics: render_generic_list(generic_parameters),
        where_clauses,
    }
}
