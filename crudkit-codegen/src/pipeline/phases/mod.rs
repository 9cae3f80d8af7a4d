//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - lints the request and collects diagnostics
//! - [`PreparePhase`] - normalizes names and builds the prepared records

mod prepare;
mod validate;

pub use prepare::PreparePhase;
pub use validate::{
    DuplicateEntityLint, EmptyRequestLint, Lint, LintInfo, ReferenceFlagsLint, ValidatePhase,
};
