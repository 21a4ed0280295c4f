//! Generate command report data structures.

use std::path::PathBuf;

use ctorgen_codegen::Diagnostic;

use super::{
    diagnostic::{has_errors, render_all},
    output::{Output, Report},
};

/// Report data from unit generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Diagnostics from the pipeline, including types that were skipped.
    pub diagnostics: Vec<Diagnostic>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of unit generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    /// Units whose content changed.
    pub written: Vec<String>,
    /// Units already up to date.
    pub unchanged: Vec<String>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    /// Whether any type failed to generate.
    pub fn has_errors(&self) -> bool {
        has_errors(&self.diagnostics)
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        let total = written.written.len() + written.unchanged.len();
        out.key_value(
            "Generated",
            &format!(
                "{} unit{} in {}",
                total,
                if total == 1 { "" } else { "s" },
                written.output_dir.display()
            ),
        );
        for path in &written.written {
            out.added_item(path);
        }
        if !written.unchanged.is_empty() {
            out.key_value_indented("Unchanged", &written.unchanged.len().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        render_all(&self.diagnostics, out);
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render_written() {
        let report = GenerateReport {
            diagnostics: vec![],
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec!["Widget.PrimaryConstructor.g.cs".into()],
                unchanged: vec!["Gauge.PrimaryConstructor.g.cs".into()],
            }),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "Generated: 2 units in out",
                "  + Widget.PrimaryConstructor.g.cs",
                "  Unchanged: 1",
            ]
        );
    }

    #[test]
    fn test_render_preview() {
        let report = GenerateReport {
            diagnostics: vec![],
            result: GenerationResult::Preview(vec![PreviewFile {
                path: "Empty.g.cs".into(),
                content: "partial class Empty\n{\n}\n".into(),
            }]),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(out.lines[0], "── Empty.g.cs ──");
        assert_eq!(out.lines.last().map(String::as_str), Some("1 files would be generated"));
    }
}
