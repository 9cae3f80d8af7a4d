use crudkit_codegen::{
    ArchiveWriter, CompilationContext, Diagnostic, FileCategory, FileEntry, FileRegistry, Pipeline,
    PreparedModule, PreviewEntry, TarGzArchive, WriteStats,
};
use crudkit_core::ModuleLayout;
use crudkit_ir::{PreparedStructure, ProcessedClass};
use crudkit_manifest::{GenerationOptions, GenerationRequest};
use eyre::{Result, WrapErr};

use crate::{
    JAVA_NAMING,
    files::{
        ControllerJava, ControllerTestJava, DtoJava, EntityJava, FormHtml, ListHtml, ModelJava,
        ReadmeMd, RepositoryJava, ServiceJava, ServiceTestJava,
    },
};

/// Outcome of a generation run.
#[derive(Debug)]
pub struct GenerateResult {
    pub stats: WriteStats,
    /// Warnings and notes collected while preparing the request
    pub diagnostics: Vec<Diagnostic>,
}

/// Spring/JPA module generator.
///
/// # Example
///
/// ```
/// use crudkit_codegen_java::Generator;
/// use crudkit_manifest::GenerationRequest;
///
/// let request: GenerationRequest = "[[entities]]\nname = \"Book\"\n".parse().unwrap();
/// let generator = Generator::new(&request, request.generation_options());
/// let paths: Vec<_> = generator.preview().unwrap().into_iter().map(|f| f.path).collect();
/// assert_eq!(paths.last().map(String::as_str), Some("README.md"));
/// ```
pub struct Generator<'a> {
    request: &'a GenerationRequest,
    options: GenerationOptions,
}

impl<'a> Generator<'a> {
    pub fn new(request: &'a GenerationRequest, options: GenerationOptions) -> Self {
        Self { request, options }
    }

    /// Validate and prepare the request.
    pub fn compile(&self) -> Result<CompilationContext> {
        Pipeline::new(JAVA_NAMING)
            .run(self.request.clone(), self.options)
            .wrap_err("failed to prepare generation request")
    }

    /// Every file that would be generated, in archive order.
    pub fn preview(&self) -> Result<Vec<PreviewEntry>> {
        let (registry, _) = self.build()?;
        Ok(registry.preview())
    }

    /// Write every file into `writer`, in archive order.
    pub fn generate(&self, writer: &mut impl ArchiveWriter) -> Result<GenerateResult> {
        let (registry, diagnostics) = self.build()?;
        let stats = registry.write_to(writer)?;
        tracing::info!(files = stats.written, bytes = stats.bytes, "module generated");
        Ok(GenerateResult { stats, diagnostics })
    }

    /// Generate the module as a gzip-compressed tar archive.
    pub fn generate_archive(&self) -> Result<Vec<u8>> {
        let mut archive = TarGzArchive::new();
        self.generate(&mut archive)?;
        archive.finish()
    }

    fn build(&self) -> Result<(FileRegistry, Vec<Diagnostic>)> {
        let mut ctx = self.compile()?;
        let module = ctx.take_prepared()?;
        Ok((register_module(&module), ctx.diagnostics))
    }
}

/// Render every artifact of a prepared module.
///
/// Definitions are visited in declaration order. An entity yields its
/// entity, DTO, repository, service and controller, then views and tests
/// when enabled; a supplemental structure yields its model type. The README
/// is last.
pub fn register_module(module: &PreparedModule) -> FileRegistry {
    let layout = module.layout();
    let mut registry = FileRegistry::new();

    for structure in &module.structures {
        let _span = tracing::debug_span!("structure", name = %structure.name()).entered();
        match structure {
            PreparedStructure::Class(class) => register_class(&mut registry, class, module, &layout),
            PreparedStructure::Supplemental(supplemental) => {
                registry.register(FileEntry::from_generated(
                    &ModelJava::new(supplemental, module),
                    &layout,
                    FileCategory::Source,
                ));
            }
        }
    }

    registry.register(FileEntry::from_generated(
        &ReadmeMd::new(module),
        &layout,
        FileCategory::Summary,
    ));
    registry
}

fn register_class(
    registry: &mut FileRegistry,
    class: &ProcessedClass,
    module: &PreparedModule,
    layout: &ModuleLayout,
) {
    let options = module.options;
    registry.register_all([
        FileEntry::from_generated(&EntityJava::new(class, module), layout, FileCategory::Source),
        FileEntry::from_generated(&DtoJava::new(class, module), layout, FileCategory::Source),
        FileEntry::from_generated(&RepositoryJava::new(class, module), layout, FileCategory::Source),
        FileEntry::from_generated(&ServiceJava::new(class, module), layout, FileCategory::Source),
        FileEntry::from_generated(&ControllerJava::new(class, module), layout, FileCategory::Source),
    ]);
    if options.views {
        registry.register_all([
            FileEntry::from_generated(&ListHtml::new(class, module), layout, FileCategory::Template),
            FileEntry::from_generated(&FormHtml::new(class, module), layout, FileCategory::Template),
        ]);
    }
    if options.tests {
        registry.register_all([
            FileEntry::from_generated(&ServiceTestJava::new(class, module), layout, FileCategory::Test),
            FileEntry::from_generated(&ControllerTestJava::new(class, module), layout, FileCategory::Test),
        ]);
    }
}
