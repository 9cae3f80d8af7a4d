//! Generate operation - request to archive, directory or preview.

use std::path::PathBuf;

use crudkit_codegen::{DirectoryWriter, TarGzArchive};
use crudkit_codegen_java::{GenerateResult, Generator};
use crudkit_manifest::{GenerationOptions, GenerationRequest};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Where the generated files go.
#[derive(Debug, Clone)]
pub enum Target {
    /// A `.tar.gz` archive at the given path
    Archive(PathBuf),
    /// Plain files below the given directory
    Directory(PathBuf),
    /// Nothing is written; files are returned for display
    Preview,
}

/// Execute the generate operation.
pub fn generate(
    request: &GenerationRequest,
    options: GenerationOptions,
    target: Target,
) -> Result<GenerateReport> {
    let generator = Generator::new(request, options);
    let module_name = request.sanitized_module_name();

    let (result, warnings) = match target {
        Target::Preview => {
            let files = generator
                .preview()?
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect();
            (GenerationResult::Preview(files), Vec::new())
        }
        Target::Archive(path) => {
            let mut archive = TarGzArchive::new();
            let generated = generator.generate(&mut archive)?;
            let bytes = archive.finish()?;
            std::fs::write(&path, &bytes)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "archive written");
            written(path, generated)
        }
        Target::Directory(dir) => {
            let mut writer = DirectoryWriter::new(&dir);
            let generated = generator.generate(&mut writer)?;
            written(dir, generated)
        }
    };

    Ok(GenerateReport {
        module_name,
        warnings,
        result,
    })
}

fn written(destination: PathBuf, generated: GenerateResult) -> (GenerationResult, Vec<String>) {
    let warnings = generated
        .diagnostics
        .iter()
        .filter(|d| d.severity.is_warning())
        .map(|d| match &d.location {
            Some(location) => format!("{}\n  --> {}", d.message, location),
            None => d.message.clone(),
        })
        .collect();

    let result = GenerationResult::Written(WrittenResult {
        destination,
        files: generated.stats.written_paths,
        bytes: generated.stats.bytes,
    });
    (result, warnings)
}
