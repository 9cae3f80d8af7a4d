//! Shared code generation machinery for crudkit.
//!
//! This crate provides the language-agnostic half of the generator, used by
//! the target-specific emitters (e.g., `crudkit-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (ImportCollector, FileRegistry, archive writers)
//! - [`language`] - Language-specific abstractions (NamingConvention, TypeMapper)
//! - [`prepare`] - Field/method resolution and class preparation
//! - [`pipeline`] - Validate → prepare compilation pipeline with diagnostics

pub mod builder;
pub mod generation;
pub mod language;
pub mod pipeline;
pub mod prepare;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use generation::{
    ArchiveWriter, DirectoryWriter, FileCategory, FileEntry, FileRegistry, ImportCollector,
    PreviewEntry, TarGzArchive, WriteStats,
};
pub use language::{NamingConvention, TypeMapper};
pub use pipeline::{CompilationContext, Diagnostic, Pipeline, PreparedModule, Severity};
