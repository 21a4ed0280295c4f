//! Text emission for [`CompilationUnit`]s.

use ctorgen_manifest::NamespaceStyle;

use crate::{
    builder::{CodeBuilder, CodeFragment, Renderable},
    options::OutputOptions,
    synth::{CompilationUnit, Declaration, GeneratedConstructor},
};

/// A compilation unit paired with the options that shape its text.
pub struct UnitRenderer<'a> {
    unit: &'a CompilationUnit,
    options: &'a OutputOptions,
}

impl<'a> UnitRenderer<'a> {
    pub fn new(unit: &'a CompilationUnit, options: &'a OutputOptions) -> Self {
        Self { unit, options }
    }

    fn header(&self) -> Vec<CodeFragment> {
        if !self.options.header {
            return Vec::new();
        }
        vec![
            CodeFragment::line("// <auto-generated />"),
            CodeFragment::line("#nullable enable"),
            CodeFragment::blank(),
        ]
    }

    fn declarations(&self) -> Vec<CodeFragment> {
        let unit = self.unit;
        let innermost = declaration_fragments(&unit.declaration, constructor_fragments(&unit.constructor));
        unit.wrappers
            .iter()
            .rev()
            .fold(innermost, |inner, wrapper| declaration_fragments(wrapper, inner))
    }
}

impl Renderable for UnitRenderer<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.header();
        let body = self.declarations();

        match (&self.unit.namespace, self.options.namespace_style) {
            (None, _) => fragments.extend(body),
            (Some(namespace), NamespaceStyle::Block) => {
                fragments.push(CodeFragment::line(format!("namespace {}", namespace)));
                fragments.push(CodeFragment::braced(body));
            }
            (Some(namespace), NamespaceStyle::FileScoped) => {
                fragments.push(CodeFragment::line(format!("namespace {};", namespace)));
                fragments.push(CodeFragment::blank());
                fragments.extend(body);
            }
        }

        fragments
    }
}

fn declaration_fragments(declaration: &Declaration, body: Vec<CodeFragment>) -> Vec<CodeFragment> {
    let mut fragments = vec![CodeFragment::line(declaration.header())];
    if !declaration.where_clauses.is_empty() {
        fragments.push(CodeFragment::indent(
            declaration
                .where_clauses
                .iter()
                .map(|clause| CodeFragment::line(clause.as_str()))
                .collect(),
        ));
    }
    fragments.push(CodeFragment::braced(body));
    fragments
}

fn constructor_fragments(constructor: &GeneratedConstructor) -> Vec<CodeFragment> {
    let assignments = constructor
        .assignments
        .iter()
        .map(|a| CodeFragment::line(format!("this.{} = {};", a.member, a.parameter)))
        .collect();
    vec![
        CodeFragment::line(constructor.signature()),
        CodeFragment::braced(assignments),
    ]
}

/// Render a unit to C# source text.
pub fn render_unit(unit: &CompilationUnit, options: &OutputOptions) -> String {
    let mut builder = CodeBuilder::new(options.indent);
    builder.emit(&UnitRenderer::new(unit, options));
    builder.build()
}

#[cfg(test)]
mod tests {
    use ctorgen_manifest::Accessibility;
    use insta::assert_snapshot;

    use super::*;
    use crate::{
        builder::Indent,
        synth::{Assignment, Parameter},
    };

    fn declaration(keyword: &str, name: &str) -> Declaration {
        Declaration {
            keyword: keyword.into(),
            name: name.into(),
            generics: String::new(),
            where_clauses: Vec::new(),
        }
    }

    fn sample_unit(namespace: Option<&str>) -> CompilationUnit {
        CompilationUnit {
            namespace: namespace.map(str::to_string),
            wrappers: vec![],
            declaration: declaration("class", "Widget"),
            constructor: GeneratedConstructor {
                name: "Widget".into(),
                accessibility: Accessibility::Public,
                parameters: vec![Parameter {
                    name: "size".into(),
                    ty: "int".into(),
                    attributes: vec![],
                    member: "_size".into(),
                    inherited_from: None,
                }],
                base_arguments: None,
                assignments: vec![Assignment {
                    member: "_size".into(),
                    parameter: "size".into(),
                }],
            },
        }
    }

    #[test]
    fn test_block_namespace() {
        let code = render_unit(&sample_unit(Some("Sample")), &OutputOptions::default());
        assert_snapshot!(code, @r"
        // <auto-generated />
        #nullable enable

        namespace Sample
        {
            partial class Widget
            {
                public Widget(int size)
                {
                    this._size = size;
                }
            }
        }
        ");
    }

    #[test]
    fn test_file_scoped_namespace_without_header() {
        let options = OutputOptions {
            namespace_style: NamespaceStyle::FileScoped,
            header: false,
            indent: Indent::Spaces(2),
            ..OutputOptions::default()
        };
        let code = render_unit(&sample_unit(Some("Sample.Ui")), &options);
        assert_snapshot!(code, @r"
        namespace Sample.Ui;

        partial class Widget
        {
          public Widget(int size)
          {
            this._size = size;
          }
        }
        ");
    }

    #[test]
    fn test_global_namespace_has_no_wrapper() {
        let options = OutputOptions {
            header: false,
            ..OutputOptions::default()
        };
        let code = render_unit(&sample_unit(None), &options);
        assert!(code.starts_with("partial class Widget\n{\n"));
    }

    #[test]
    fn test_where_clauses_indented_under_header() {
        let mut unit = sample_unit(None);
        unit.declaration.generics = "<T>".into();
        unit.declaration.where_clauses = vec!["where T : class".into()];
        let options = OutputOptions {
            header: false,
            ..OutputOptions::default()
        };

        let code = render_unit(&unit, &options);
        assert!(code.starts_with("partial class Widget<T>\n    where T : class\n{\n"));
    }

    #[test]
    fn test_nested_generic_wrappers() {
        use ctorgen_model::{ContainingType, GenericParameter, TypeConstraint, TypeKind};

        use crate::{
            options::SynthesisOptions,
            synth::synthesize,
            testing::{MemberBuilder, SnapshotBuilder, TypeBuilder},
        };

        let outer = ContainingType {
            kind: TypeKind::Record,
            generic_parameters: vec![GenericParameter::new("TOuter")],
            ..ContainingType::new("Outer")
        };
        let snapshot = SnapshotBuilder::new()
            .add(
                TypeBuilder::class("Cache")
                    .namespace("Sample")
                    .nested_in(outer)
                    .nested_in(ContainingType::new("Inner"))
                    .generic(
                        GenericParameter::new("TKey").with_constraint(TypeConstraint::NotNull),
                    )
                    .marked()
                    .field("_store", "Dictionary<TKey, TOuter>")
                    .member(MemberBuilder::field("_hits", "int").mutable()),
            )
            .build()
            .unwrap();
        let ty = snapshot.find("Sample.Outer.Inner.Cache").unwrap();
        let synthesis = synthesize(&snapshot, ty, &SynthesisOptions::default()).unwrap();

        let options = OutputOptions {
            namespace_style: NamespaceStyle::FileScoped,
            header: false,
            ..OutputOptions::default()
        };
        assert_snapshot!(render_unit(&synthesis.unit, &options), @r"
        namespace Sample;

        partial record Outer<TOuter>
        {
            partial class Inner
            {
                partial class Cache<TKey>
                    where TKey : notnull
                {
                    public Cache(Dictionary<TKey, TOuter> store)
                    {
                        this._store = store;
                    }
                }
            }
        }
        ");
    }
}
