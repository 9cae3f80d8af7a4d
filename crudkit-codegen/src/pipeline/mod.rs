//! Compilation pipeline for code generation.
//!
//! [`Pipeline`] runs the phases that turn a generation request into prepared
//! records:
//!
//! - Explicit phase boundaries (validate → prepare)
//! - Unified diagnostics collection
//! - Shared results via [`CompilationContext`]
//!
//! # Example
//!
//! ```
//! use crudkit_codegen::{NamingConvention, Pipeline};
//! use crudkit_manifest::GenerationRequest;
//!
//! let request: GenerationRequest = "[[entities]]\nname = \"Book\"\n".parse().unwrap();
//! let options = request.generation_options();
//!
//! let mut ctx = Pipeline::new(NamingConvention::PLAIN)
//!     .run(request, options)
//!     .unwrap();
//! let module = ctx.take_prepared().unwrap();
//! assert_eq!(module.classes.len(), 1);
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{CompilationContext, PreparedModule};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
