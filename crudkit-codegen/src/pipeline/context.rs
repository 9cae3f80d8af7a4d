//! Compilation context passed through pipeline phases.

use crudkit_core::ModuleLayout;
use crudkit_ir::{KnownStructures, PreparedStructure, ProcessedClassMap};
use crudkit_manifest::{GenerationOptions, GenerationRequest};
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// Everything the emitters need for one generation run.
#[derive(Debug, Clone)]
pub struct PreparedModule {
    /// Sanitized module directory name
    pub module_name: String,
    /// Sanitized base package
    pub base_package: String,
    pub options: GenerationOptions,
    pub known: KnownStructures,
    /// Entities keyed by normalized name, in declaration order
    pub classes: ProcessedClassMap,
    /// Every definition in declaration order
    pub structures: Vec<PreparedStructure>,
}

impl PreparedModule {
    /// Path and package layout of the module.
    pub fn layout(&self) -> ModuleLayout {
        ModuleLayout::new(&self.module_name, &self.base_package)
    }

    /// Supplemental structures in declaration order.
    pub fn supplementals(&self) -> impl Iterator<Item = &crudkit_ir::SupplementalStructure> {
        self.structures.iter().filter_map(|s| match s {
            PreparedStructure::Supplemental(structure) => Some(structure),
            PreparedStructure::Class(_) => None,
        })
    }
}

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The request being compiled.
    pub request: GenerationRequest,
    /// Resolved generation options.
    pub options: GenerationOptions,
    /// Prepared records (populated by PreparePhase).
    pub prepared: Option<PreparedModule>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context.
    pub fn new(request: GenerationRequest, options: GenerationOptions) -> Self {
        Self {
            request,
            options,
            prepared: None,
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Borrow the prepared module.
    pub fn prepared(&self) -> Result<&PreparedModule> {
        self.prepared
            .as_ref()
            .ok_or_else(|| eyre!("prepared module not set - did PreparePhase run?"))
    }

    /// Take the prepared module out of the context.
    pub fn take_prepared(&mut self) -> Result<PreparedModule> {
        self.prepared
            .take()
            .ok_or_else(|| eyre!("prepared module not set - did PreparePhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> CompilationContext {
        let request: GenerationRequest = "[[entities]]\nname = \"Book\"\n".parse().unwrap();
        let options = request.generation_options();
        CompilationContext::new(request, options)
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();
        assert!(ctx.prepared.is_none());
        assert!(ctx.diagnostics.is_empty());
        assert!(ctx.prepared().is_err());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_diagnostic(Diagnostic::info("test", "note"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.diagnostics.len(), 3);
    }
}
