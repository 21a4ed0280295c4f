//! Attribute and constant rendering.

use ctorgen_model::{AttributeArgument, AttributeData, ConstantValue};

/// Render an attribute as it appears in a parameter list (`[Name(args)]`).
///
/// Returns `None` if any argument holds an unresolved constant.
pub fn render_attribute(attribute: &AttributeData) -> Option<String> {
    if attribute.arguments.is_empty() {
        return Some(format!("[{}]", attribute.name));
    }

    let arguments = attribute
        .arguments
        .iter()
        .map(|argument| match argument {
            AttributeArgument::Positional { value } => render_constant(value),
            AttributeArgument::Named { name, value } => {
                render_constant(value).map(|value| format!("{} = {}", name, value))
            }
        })
        .collect::<Option<Vec<_>>>()?;

    Some(format!("[{}({})]", attribute.name, arguments.join(", ")))
}

/// Render a constant as a C# expression. `None` for [`ConstantValue::Error`].
pub fn render_constant(value: &ConstantValue) -> Option<String> {
    let rendered = match value {
        ConstantValue::Null => "null".to_string(),
        ConstantValue::Bool(b) => b.to_string(),
        ConstantValue::Int(i) => i.to_string(),
        ConstantValue::Float(f) => render_float(*f),
        ConstantValue::Char(c) => format!("'{}'", escape_char(*c, '\'')),
        ConstantValue::String(s) => {
            let escaped: String = s.chars().map(|c| escape_char(c, '"')).collect();
            format!("\"{}\"", escaped)
        }
        ConstantValue::TypeOf(ty) => format!("typeof({})", ty),
        ConstantValue::Enum { type_name, member } => format!("{}.{}", type_name, member),
        ConstantValue::Array {
            element_type,
            values,
        } => {
            let values = values
                .iter()
                .map(render_constant)
                .collect::<Option<Vec<_>>>()?;
            if values.is_empty() {
                format!("new {}[] {{ }}", element_type)
            } else {
                format!("new {}[] {{ {} }}", element_type, values.join(", "))
            }
        }
        ConstantValue::Error(_) => return None,
    };
    Some(rendered)
}

fn render_float(f: f64) -> String {
    if f.is_nan() {
        "double.NaN".to_string()
    } else if f == f64::INFINITY {
        "double.PositiveInfinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "double.NegativeInfinity".to_string()
    } else if f.abs() >= 1e15 {
        format!("{:e}", f)
    } else if f.fract() == 0.0 {
        format!("{:.1}", f)
    } else {
        f.to_string()
    }
}

fn escape_char(c: char, quote: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\0' => "\\0".to_string(),
        c if c == quote => format!("\\{}", c),
        c if c.is_control() => format!("\\u{:04X}", u32::from(c)),
        c => c.to_string(),
    }
}
