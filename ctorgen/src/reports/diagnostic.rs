//! Pipeline diagnostics as shown to the user.

use ctorgen_codegen::{Diagnostic, Severity};

use super::output::Output;

/// Render diagnostics followed by a blank line; warnings and errors go to
/// the diagnostic stream.
pub(super) fn render_all(diagnostics: &[Diagnostic], out: &mut dyn Output) {
    if diagnostics.is_empty() {
        return;
    }
    for diagnostic in diagnostics {
        match diagnostic.severity {
            Severity::Info => out.preformatted(&diagnostic.to_string()),
            Severity::Warning | Severity::Error => out.diagnostic(&diagnostic.to_string()),
        }
    }
    out.newline();
}

pub(super) fn has_errors(diagnostics: &[Diagnostic]) -> bool {
    diagnostics.iter().any(|d| d.severity.is_error())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_with_location() {
        let diagnostics = vec![
            Diagnostic::error("synthesize", "base chain forms a cycle").at("Left"),
            Diagnostic::info("validate", "base 'Object' is not marked").at("Widget"),
        ];
        let mut out = RecordingOutput::default();
        render_all(&diagnostics, &mut out);

        assert_eq!(
            out.lines,
            vec![
                "error[synthesize]: base chain forms a cycle (at Left)",
                "info[validate]: base 'Object' is not marked (at Widget)",
                "",
            ]
        );
        assert!(has_errors(&diagnostics));
    }
}
