//! Inheritance resolution: members forwarded to marked base constructors.

use std::collections::HashMap;

use ctorgen_model::{MemberDescriptor, TypeDescriptor, TypeId, TypeSnapshot};

use crate::{select::select_own_members, synth::SynthesisError};

/// A member contributed by a marked ancestor.
#[derive(Debug, Clone, PartialEq)]
pub struct InheritedMember {
    /// The member, with the ancestor's type parameters substituted.
    pub member: MemberDescriptor,
    /// The ancestor that declares the member.
    pub declared_in: TypeId,
}

/// Collect the members a type must forward to its base constructor.
///
/// Nearest ancestor first. Only marked bases contribute; an unmarked or
/// absent base ends the chain.
pub fn resolve_base_chain(
    snapshot: &TypeSnapshot,
    ty: &TypeDescriptor,
    max_depth: usize,
) -> Result<Vec<InheritedMember>, SynthesisError> {
    let mut visiting = vec![ty.id];
    resolve_from(snapshot, ty, ty, max_depth, &mut visiting)
}

/// The marked base of `ty`, if any.
pub fn marked_base<'a>(snapshot: &'a TypeSnapshot, ty: &TypeDescriptor) -> Option<&'a TypeDescriptor> {
    snapshot.base_of(ty).filter(|base| base.is_marked)
}

fn resolve_from(
    snapshot: &TypeSnapshot,
    origin: &TypeDescriptor,
    ty: &TypeDescriptor,
    max_depth: usize,
    visiting: &mut Vec<TypeId>,
) -> Result<Vec<InheritedMember>, SynthesisError> {
    let Some(base) = marked_base(snapshot, ty) else {
        return Ok(Vec::new());
    };

    if visiting.contains(&base.id) {
        return Err(SynthesisError::CyclicBase {
            type_name: origin.qualified_name(),
            base: base.qualified_name(),
        });
    }
    if visiting.len() > max_depth {
        return Err(SynthesisError::DepthExceeded {
            type_name: origin.qualified_name(),
            limit: max_depth,
        });
    }
    visiting.push(base.id);

    let substitutions = substitutions_for(ty, base)?;

    let mut chain: Vec<InheritedMember> = select_own_members(base)
        .into_iter()
        .map(|member| InheritedMember {
            member: member.clone(),
            declared_in: base.id,
        })
        .collect();
    chain.extend(resolve_from(snapshot, origin, base, max_depth, visiting)?);

    if !substitutions.is_empty() {
        for inherited in &mut chain {
            inherited.member.declared_type =
                substitute_type(&inherited.member.declared_type, &substitutions);
        }
    }

    Ok(chain)
}

/// Map the base's type parameters to the arguments `ty` supplies.
fn substitutions_for<'a>(
    ty: &'a TypeDescriptor,
    base: &'a TypeDescriptor,
) -> Result<HashMap<&'a str, &'a str>, SynthesisError> {
    let arguments = &ty.base_type_arguments;
    if arguments.is_empty() {
        return Ok(HashMap::new());
    }
    if arguments.len() != base.generic_parameters.len() {
        return Err(SynthesisError::BaseArityMismatch {
            type_name: ty.qualified_name(),
            base: base.qualified_name(),
            expected: base.generic_parameters.len(),
            found: arguments.len(),
        });
    }
    Ok(base
        .generic_parameters
        .iter()
        .map(|p| p.name.as_str())
        .zip(arguments.iter().map(String::as_str))
        .collect())
}

/// Replace whole identifiers in a rendered type.
///
/// Identifiers that follow `.` or `:` are parts of qualified names and are
/// left alone.
pub fn substitute_type(rendered: &str, substitutions: &HashMap<&str, &str>) -> String {
    let mut out = String::with_capacity(rendered.len());
    let mut chars = rendered.char_indices().peekable();
    let mut previous: Option<char> = None;

    while let Some((start, c)) = chars.next() {
        if !is_identifier_char(c) {
            out.push(c);
            previous = Some(c);
            continue;
        }

        let mut end = start + c.len_utf8();
        while let Some(&(index, next)) = chars.peek() {
            if !is_identifier_char(next) {
                break;
            }
            end = index + next.len_utf8();
            chars.next();
        }

        let word = &rendered[start..end];
        let qualified = matches!(previous, Some('.') | Some(':'));
        match substitutions.get(word) {
            Some(replacement) if !qualified => out.push_str(replacement),
            _ => out.push_str(word),
        }
        previous = word.chars().last();
    }

    out
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
