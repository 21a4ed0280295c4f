//! Structured output of synthesis, rendered to text by [`crate::emit`].

use ctorgen_manifest::Accessibility;
use serde::Serialize;

/// One constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    /// Parameter name, escaped if it is a keyword.
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Forwarded attributes, already rendered (`[FromKeyedServices("primary")]`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// The member the parameter initializes.
    pub member: String,
    /// Qualified name of the ancestor declaring the member, for forwarded parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<String>,
}

impl Parameter {
    pub fn is_inherited(&self) -> bool {
        self.inherited_from.is_some()
    }

    /// `[Attr] Type name`
    pub fn declaration(&self) -> String {
        let mut out = String::new();
        for attribute in &self.attributes {
            out.push_str(attribute);
            out.push(' ');
        }
        out.push_str(&self.ty);
        out.push(' ');
        out.push_str(&self.name);
        out
    }
}

/// `this.<member> = <parameter>;`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub member: String,
    pub parameter: String,
}

/// The synthesized constructor of one marked type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedConstructor {
    /// Constructor name: the type's simple name.
    pub name: String,
    pub accessibility: Accessibility,
    /// Own parameters first, then forwarded parameters.
    pub parameters: Vec<Parameter>,
    /// Present iff a marked base contributes at least one member.
    pub base_arguments: Option<Vec<String>>,
    /// One per own parameter, in order.
    pub assignments: Vec<Assignment>,
}

impl GeneratedConstructor {
    pub fn own_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| !p.is_inherited())
    }

    pub fn inherited_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.is_inherited())
    }

    /// `public Name(int a, string b) : base(b)`
    pub fn signature(&self) -> String {
        let parameters: Vec<String> = self.parameters.iter().map(Parameter::declaration).collect();
        let mut signature = format!(
            "{} {}({})",
            self.accessibility.keyword(),
            self.name,
            parameters.join(", ")
        );
        if let Some(arguments) = &self.base_arguments {
            signature.push_str(&format!(" : base({})", arguments.join(", ")));
        }
        signature
    }
}

/// A `partial` type declaration header with its generic rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    /// `class`, `struct`, `record`, or `record struct`.
    pub keyword: String,
    pub name: String,
    /// `<T, U>` or empty.
    pub generics: String,
    /// `where T : class`, one per constrained parameter.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub where_clauses: Vec<String>,
}

impl Declaration {
    /// `partial class Name<T>`
    pub fn header(&self) -> String {
        format!("partial {} {}{}", self.keyword, self.name, self.generics)
    }
}

/// One generated source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationUnit {
    /// Dotted namespace; `None` for the global namespace.
    pub namespace: Option<String>,
    /// Enclosing declarations, outermost first.
    pub wrappers: Vec<Declaration>,
    /// The marked type's own declaration.
    pub declaration: Declaration,
    pub constructor: GeneratedConstructor,
}
