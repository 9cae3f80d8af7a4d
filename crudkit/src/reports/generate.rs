//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from module generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Sanitized module name.
    pub module_name: String,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to an archive or directory.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

#[derive(Debug)]
pub struct WrittenResult {
    /// Archive file or output directory.
    pub destination: PathBuf,
    /// Paths written, in write order.
    pub files: Vec<String>,
    /// Uncompressed content size.
    pub bytes: usize,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        out.section(&format!("Files ({})", written.files.len()));
        for file in &written.files {
            out.added_item(file);
        }
        out.newline();

        out.key_value("Module", &self.module_name);
        out.key_value(
            "Generated",
            &format!("{} ({} bytes)", written.destination.display(), written.bytes),
        );
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
