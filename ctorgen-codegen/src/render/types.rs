//! Type references and generic declarations.

use ctorgen_manifest::Qualification;
use ctorgen_model::{GenericParameter, TypeConstraint, TypeDescriptor};

/// Render a reference to `ty`.
///
/// `generic_args` replaces the type's own parameter names when non-empty.
/// Containing types are rendered with their own parameter names.
pub fn render_type(
    ty: &TypeDescriptor,
    generic_args: &[String],
    qualification: Qualification,
) -> String {
    let own_args: Vec<String> = if generic_args.is_empty() {
        ty.generic_parameters.iter().map(|p| p.name.clone()).collect()
    } else {
        generic_args.to_vec()
    };
    let leaf = with_arguments(&ty.simple_name, &own_args);

    if qualification == Qualification::Simple {
        return leaf;
    }

    let mut segments: Vec<String> = ty.namespace_path.clone();
    segments.extend(
        ty.nesting_chain
            .iter()
            .map(|c| format!("{}{}", c.name, render_generic_list(&c.generic_parameters))),
    );
    segments.push(leaf);
    let path = segments.join(".");

    match qualification {
        Qualification::Global => format!("global::{}", path),
        _ => path,
    }
}

fn with_arguments(name: &str, args: &[String]) -> String {
    if args.is_empty() {
        name.to_string()
    } else {
        format!("{}<{}>", name, args.join(", "))
    }
}

/// `<T, U>` for a parameter list, empty when there are none.
pub fn render_generic_list(parameters: &[GenericParameter]) -> String {
    let names: Vec<String> = parameters.iter().map(|p| p.name.clone()).collect();
    with_arguments("", &names)
}

/// A rendered `where` clause for one type parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintClause {
    /// `where T : class, new()`, or `None` when unconstrained.
    pub text: Option<String>,
    /// Set when the constraints could not be ordered and were kept as declared.
    pub unsupported: Option<String>,
}

/// Render the `where` clause for a type parameter in C# order:
/// primary constraint, then type constraints, then `new()`.
pub fn render_constraint_clause(parameter: &GenericParameter) -> ConstraintClause {
    let constraints = &parameter.constraints;
    if constraints.is_empty() {
        return ConstraintClause {
            text: None,
            unsupported: None,
        };
    }

    let unsupported = unsupported_reason(constraints);
    let ordered: Vec<&TypeConstraint> = if unsupported.is_some() {
        constraints.iter().collect()
    } else {
        let primary = constraints.iter().filter(|c| c.is_primary());
        let types = constraints
            .iter()
            .filter(|c| matches!(c, TypeConstraint::Type(_)));
        let constructor = constraints
            .iter()
            .find(|c| matches!(c, TypeConstraint::Constructor));
        primary.chain(types).chain(constructor).collect()
    };

    let rendered: Vec<&str> = ordered.into_iter().map(constraint_text).collect();
    ConstraintClause {
        text: Some(format!("where {} : {}", parameter.name, rendered.join(", "))),
        unsupported: unsupported.map(|reason| format!("{} on '{}'", reason, parameter.name)),
    }
}

fn unsupported_reason(constraints: &[TypeConstraint]) -> Option<String> {
    if let Some(TypeConstraint::Opaque(text)) = constraints
        .iter()
        .find(|c| matches!(c, TypeConstraint::Opaque(_)))
    {
        return Some(format!("unrecognized constraint '{}'", text));
    }

    let primaries: Vec<&TypeConstraint> = constraints.iter().filter(|c| c.is_primary()).collect();
    if primaries.len() > 1 {
        let names: Vec<&str> = primaries.iter().map(|c| constraint_text(c)).collect();
        return Some(format!("conflicting constraints '{}'", names.join("', '")));
    }

    let has_constructor = constraints.contains(&TypeConstraint::Constructor);
    let value_primary = primaries
        .iter()
        .find(|c| matches!(c, TypeConstraint::Struct | TypeConstraint::Unmanaged));
    if let (true, Some(primary)) = (has_constructor, value_primary) {
        return Some(format!(
            "'new()' cannot be combined with '{}'",
            constraint_text(primary)
        ));
    }

    None
}

fn constraint_text(constraint: &TypeConstraint) -> &str {
    match constraint {
        TypeConstraint::Class => "class",
        TypeConstraint::NullableClass => "class?",
        TypeConstraint::Struct => "struct",
        TypeConstraint::Unmanaged => "unmanaged",
        TypeConstraint::NotNull => "notnull",
        TypeConstraint::Constructor => "new()",
        TypeConstraint::Type(text) | TypeConstraint::Opaque(text) => text,
    }
}

#[cfg(test)]
mod tests {
    use ctorgen_model::ContainingType;

    use super::*;

    fn nested_generic() -> TypeDescriptor {
        let mut ty = TypeDescriptor::new("Widget");
        ty.namespace_path = vec!["Sample".into(), "Ui".into()];
        ty.nesting_chain = vec![ContainingType {
            generic_parameters: vec![GenericParameter::new("TOuter")],
            ..ContainingType::new("Outer")
        }];
        ty.generic_parameters = vec![GenericParameter::new("T"), GenericParameter::new("U")];
        ty
    }

    #[test]
    fn test_render_type_policies() {
        let ty = nested_generic();
        assert_eq!(render_type(&ty, &[], Qualification::Simple), "Widget<T, U>");
        assert_eq!(
            render_type(&ty, &[], Qualification::Qualified),
            "Sample.Ui.Outer<TOuter>.Widget<T, U>"
        );
        assert_eq!(
            render_type(&ty, &["int".into(), "string".into()], Qualification::Global),
            "global::Sample.Ui.Outer<TOuter>.Widget<int, string>"
        );
    }

    #[test]
    fn test_render_type_global_namespace() {
        let ty = TypeDescriptor::new("Plain");
        assert_eq!(render_type(&ty, &[], Qualification::Global), "global::Plain");
        assert_eq!(render_type(&ty, &[], Qualification::Qualified), "Plain");
    }

    #[test]
    fn test_generic_list() {
        assert_eq!(render_generic_list(&[]), "");
        assert_eq!(
            render_generic_list(&[GenericParameter::new("TKey"), GenericParameter::new("TValue")]),
            "<TKey, TValue>"
        );
    }

    #[test]
    fn test_constraint_ordering() {
        let parameter = GenericParameter::new("T")
            .with_constraint(TypeConstraint::Constructor)
            .with_constraint(TypeConstraint::Type("IDisposable".into()))
            .with_constraint(TypeConstraint::Class)
            .with_constraint(TypeConstraint::Type("IComparable<T>".into()));

        let clause = render_constraint_clause(&parameter);
        assert_eq!(
            clause.text.as_deref(),
            Some("where T : class, IDisposable, IComparable<T>, new()")
        );
        assert!(clause.unsupported.is_none());
    }

    #[test]
    fn test_unconstrained() {
        let clause = render_constraint_clause(&GenericParameter::new("T"));
        assert_eq!(clause.text, None);
    }

    #[test]
    fn test_conflicting_primaries_kept_in_order() {
        let parameter = GenericParameter::new("T")
            .with_constraint(TypeConstraint::NotNull)
            .with_constraint(TypeConstraint::Class);

        let clause = render_constraint_clause(&parameter);
        assert_eq!(clause.text.as_deref(), Some("where T : notnull, class"));
        assert_eq!(
            clause.unsupported.as_deref(),
            Some("conflicting constraints 'notnull', 'class' on 'T'")
        );
    }

    #[test]
    fn test_struct_with_constructor_unsupported() {
        let parameter = GenericParameter::new("T")
            .with_constraint(TypeConstraint::Constructor)
            .with_constraint(TypeConstraint::Struct);

        let clause = render_constraint_clause(&parameter);
        assert_eq!(clause.text.as_deref(), Some("where T : new(), struct"));
        assert!(clause.unsupported.is_some());
    }

    #[test]
    fn test_opaque_constraint_unsupported() {
        let parameter = GenericParameter::new("T")
            .with_constraint(TypeConstraint::Class)
            .with_constraint(TypeConstraint::Opaque("delegate*<int>".into()));

        let clause = render_constraint_clause(&parameter);
        assert_eq!(clause.text.as_deref(), Some("where T : class, delegate*<int>"));
        assert_eq!(
            clause.unsupported.as_deref(),
            Some("unrecognized constraint 'delegate*<int>' on 'T'")
        );
    }
}
