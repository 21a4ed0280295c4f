//! Snapshot tests for generated constructors.
//!
//! These tests run the full pipeline on snapshot manifests and check the
//! emitted C#. Run `cargo insta review` to update snapshots when making
//! intentional changes.

use std::str::FromStr;

use ctorgen_codegen::{Generator, Pipeline};
use ctorgen_manifest::Manifest;

fn generator(manifest_toml: &str) -> Generator {
    let manifest = Manifest::from_str(manifest_toml).expect("Failed to parse manifest");
    let ctx = Pipeline::new().run(manifest).expect("pipeline should succeed");
    Generator::from_context(ctx)
}

/// Generate units and return `(path, content)` pairs in enumeration order.
fn generate_files(manifest_toml: &str) -> Vec<(String, String)> {
    generator(manifest_toml)
        .preview()
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_empty_constructor() {
    let files = generate_files(
        r#"
        [[types]]
        name = "Empty"
        marked = true
        "#,
    );

    let empty = get_file(&files, "Empty.PrimaryConstructor.g.cs").expect("unit not found");
    insta::assert_snapshot!(empty, @r"
    // <auto-generated />
    #nullable enable

    partial class Empty
    {
        public Empty()
        {
        }
    }
    ");
}

#[test]
fn test_service_with_dependencies() {
    let files = generate_files(
        r#"
        [[types]]
        name = "MyService"
        namespace = "Sample.Services"
        attributes = [{ name = "PrimaryConstructor" }]

        [[types.members]]
        name = "_dependency"
        kind = "field"
        type = "global::Sample.IDependency"
        readonly = true
        attributes = [{ name = "FromKeyedServices", arguments = ["primary"], targets = ["parameter"] }]

        [[types.members]]
        name = "_counter"
        kind = "field"
        type = "int"

        [[types.members]]
        name = "_limit"
        kind = "field"
        type = "int"
        readonly = true
        initializer = true

        [[types.members]]
        name = "Count"
        kind = "property"
        type = "int"
        readonly = true
        "#,
    );

    let service = get_file(&files, "MyService.PrimaryConstructor.g.cs").expect("unit not found");
    insta::assert_snapshot!(service, @r#"
    // <auto-generated />
    #nullable enable

    namespace Sample.Services
    {
        partial class MyService
        {
            public MyService([FromKeyedServices("primary")] global::Sample.IDependency dependency, int count)
            {
                this._dependency = dependency;
                this.Count = count;
            }
        }
    }
    "#);
}

#[test]
fn test_include_and_exclude_markers() {
    let files = generate_files(
        r#"
        [generator]
        header = false

        [[types]]
        name = "Widget"
        marked = true

        [[types.members]]
        name = "_plain"
        kind = "field"
        type = "int"
        readonly = true

        [[types.members]]
        name = "_ignored"
        kind = "field"
        type = "int"
        readonly = true
        attributes = [{ name = "IgnorePrimaryConstructorAttribute" }]

        [[types.members]]
        name = "_both"
        kind = "field"
        type = "int"
        readonly = true
        include = true
        exclude = true

        [[types.members]]
        name = "_seeded"
        kind = "field"
        type = "string"
        readonly = true
        initializer = true
        include = true

        [[types.members]]
        name = "Computed"
        kind = "property"
        type = "int"
        auto = false

        [[types.members]]
        name = "Forced"
        kind = "property"
        type = "int"
        auto = false
        attributes = [{ name = "IncludePrimaryConstructor" }]
        "#,
    );

    let widget = get_file(&files, "Widget.PrimaryConstructor.g.cs").expect("unit not found");
    insta::assert_snapshot!(widget, @r"
    partial class Widget
    {
        public Widget(int plain, string seeded, int forced)
        {
            this._plain = plain;
            this._seeded = seeded;
            this.Forced = forced;
        }
    }
    ");
}

#[test]
fn test_field_and_explicit_body_property() {
    let files = generate_files(
        r#"
        [[types]]
        name = "Gauge"
        marked = true

        [[types.members]]
        name = "_value"
        kind = "field"
        type = "double"
        readonly = true

        [[types.members]]
        name = "Display"
        kind = "property"
        type = "string"
        auto = false
        "#,
    );

    let gauge = get_file(&files, "Gauge.PrimaryConstructor.g.cs").expect("unit not found");
    assert!(gauge.contains("public Gauge(double value)\n"));
    assert!(!gauge.contains("display"));
}

#[test]
fn test_three_level_chain() {
    let files = generate_files(
        r#"
        [generator]
        header = false
        namespace-style = "file-scoped"

        [[types]]
        name = "A"
        namespace = "Chain"
        marked = true
        members = [{ name = "_x", kind = "field", type = "int", readonly = true }]

        [[types]]
        name = "B"
        namespace = "Chain"
        marked = true
        base = "Chain.A"
        members = [{ name = "_y", kind = "field", type = "string", readonly = true }]

        [[types]]
        name = "C"
        namespace = "Chain"
        marked = true
        base = "Chain.B"
        members = [{ name = "_z", kind = "field", type = "bool", readonly = true }]
        "#,
    );

    let b = get_file(&files, "B.PrimaryConstructor.g.cs").expect("unit not found");
    assert!(b.contains("public B(string y, int x) : base(x)\n"));

    let c = get_file(&files, "C.PrimaryConstructor.g.cs").expect("unit not found");
    insta::assert_snapshot!(c, @r"
    namespace Chain;

    partial class C
    {
        public C(bool z, string y, int x) : base(y, x)
        {
            this._z = z;
        }
    }
    ");
}

#[test]
fn test_generic_base_arguments() {
    let files = generate_files(
        r#"
        [generator]
        header = false

        [[types]]
        name = "Repository"
        marked = true
        generics = [{ name = "TEntity", constraints = ["new()", "class"] }]
        members = [{ name = "_items", kind = "field", type = "List<TEntity>", readonly = true }]

        [[types]]
        name = "UserRepository"
        marked = true
        base = "Repository`1"
        base-arguments = ["User"]
        members = [{ name = "_cache", kind = "field", type = "ICache", readonly = true }]
        "#,
    );

    let repository = get_file(&files, "Repository.PrimaryConstructor.g.cs").expect("unit not found");
    insta::assert_snapshot!(repository, @r"
    partial class Repository<TEntity>
        where TEntity : class, new()
    {
        public Repository(List<TEntity> items)
        {
            this._items = items;
        }
    }
    ");

    let users = get_file(&files, "UserRepository.PrimaryConstructor.g.cs").expect("unit not found");
    assert!(users.contains("public UserRepository(ICache cache, List<User> items) : base(items)\n"));
}

#[test]
fn test_same_name_in_two_namespaces() {
    let files = generate_files(
        r#"
        [[types]]
        name = "Widget"
        namespace = "Sample.A"
        marked = true

        [[types]]
        name = "Widget"
        namespace = "Sample.B"
        marked = true
        "#,
    );

    let paths: Vec<_> = files.iter().map(|(p, _)| p.as_str()).collect();
    assert_eq!(
        paths,
        vec!["Widget.PrimaryConstructor.g.cs", "Widget2.PrimaryConstructor.g.cs"]
    );
    assert!(files[1].1.contains("namespace Sample.B\n"));
}

#[test]
fn test_keyword_parameter_escaped() {
    let files = generate_files(
        r#"
        [generator]
        header = false
        indent = 0

        [[types]]
        name = "Styled"
        marked = true

        [[types.members]]
        name = "_class"
        kind = "field"
        type = "string"
        readonly = true
        "#,
    );

    let styled = get_file(&files, "Styled.PrimaryConstructor.g.cs").expect("unit not found");
    assert_eq!(
        styled,
        "partial class Styled\n{\n\tpublic Styled(string @class)\n\t{\n\t\tthis._class = @class;\n\t}\n}\n"
    );
}

#[test]
fn test_cycle_isolated_to_affected_types() {
    let generator = generator(
        r#"
        [[types]]
        name = "Left"
        marked = true
        base = "Right"

        [[types]]
        name = "Right"
        marked = true
        base = "Left"

        [[types]]
        name = "Healthy"
        marked = true
        members = [{ name = "_id", kind = "field", type = "int", readonly = true }]
        "#,
    );

    let paths: Vec<_> = generator.preview().into_iter().map(|f| f.path).collect();
    assert_eq!(paths, vec!["Healthy.PrimaryConstructor.g.cs"]);

    let ctx = generator.context();
    assert_eq!(ctx.error_count(), 2);
    assert_eq!(ctx.diagnostics_for("Healthy").count(), 0);
    assert!(ctx.errors().all(|d| d.phase == "synthesize"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let manifest = r#"
        [[types]]
        name = "Base"
        namespace = "Sample"
        marked = true
        members = [{ name = "_logger", kind = "field", type = "ILogger", readonly = true }]

        [[types]]
        name = "Derived"
        namespace = "Sample"
        kind = "record"
        marked = true
        base = "Sample.Base"
        members = [{ name = "Name", kind = "property", type = "string", readonly = true }]
        "#;

    assert_eq!(generate_files(manifest), generate_files(manifest));
}

#[test]
fn test_json_manifest() {
    let manifest = Manifest::from_json_str(
        r#"{
            "generator": { "header": false, "file-suffix": ".g.cs" },
            "types": [
                {
                    "name": "Point",
                    "kind": "record-struct",
                    "marked": true,
                    "members": [
                        { "name": "X", "kind": "property", "type": "int", "readonly": true },
                        { "name": "Y", "kind": "property", "type": "int", "readonly": true }
                    ]
                }
            ]
        }"#,
        "ctorgen.json",
    )
    .expect("Failed to parse manifest");
    let ctx = Pipeline::new().run(manifest).expect("pipeline should succeed");
    let files = Generator::from_context(ctx).preview();

    assert_eq!(files[0].path, "Point.g.cs");
    insta::assert_snapshot!(files[0].content, @r"
    partial record struct Point
    {
        public Point(int x, int y)
        {
            this.X = x;
            this.Y = y;
        }
    }
    ");
}

#[test]
fn test_qualification_only_affects_display_names() {
    let snapshot = |qualification: &str| {
        format!(
            r#"
            [generator]
            qualification = "{qualification}"

            [[types]]
            name = "Box"
            namespace = "Sample"
            marked = true
            generics = [{{ name = "T" }}]
            members = [{{ name = "_inner", kind = "field", type = "Inner", readonly = true }}]
            "#
        )
    };

    let simple = generator(&snapshot("simple"));
    let global = generator(&snapshot("global"));

    assert_eq!(simple.preview(), global.preview());
    assert_eq!(simple.explain(None)[0].display_name, "Box<T>");
    assert_eq!(global.explain(None)[0].display_name, "global::Sample.Box<T>");
}
