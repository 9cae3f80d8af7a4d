//! Pipeline orchestrator.

use crudkit_manifest::{GenerationOptions, GenerationRequest};
use eyre::Result;

use super::{
    CompilationContext, Phase,
    phases::{PreparePhase, ValidatePhase},
};
use crate::language::NamingConvention;

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases (validate, prepare) followed by any user phases.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(JAVA_NAMING).phase(MyCustomPhase);
/// let ctx = pipeline.run(request, options)?;
/// ```
pub struct Pipeline {
    builtin: Vec<Box<dyn Phase>>,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a new pipeline whose prepare phase uses `naming`.
    pub fn new(naming: NamingConvention) -> Self {
        Self {
            builtin: vec![
                Box::new(ValidatePhase::new()),
                Box::new(PreparePhase::new(naming)),
            ],
            phases: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names of every phase, in execution order.
    pub fn phase_names(&self) -> Vec<&'static str> {
        self.builtin
            .iter()
            .chain(self.phases.iter())
            .map(|p| p.name())
            .collect()
    }

    /// Run the pipeline on a request.
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(
        &self,
        request: GenerationRequest,
        options: GenerationOptions,
    ) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(request, options);

        for phase in self.builtin.iter().chain(self.phases.iter()) {
            let _span = tracing::debug_span!("phase", name = phase.name()).entered();
            tracing::debug!(description = phase.description(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(ctx)
    }
}
