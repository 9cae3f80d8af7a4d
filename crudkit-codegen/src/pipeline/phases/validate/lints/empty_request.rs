//! Lint for requests without definitions.

use crudkit_manifest::GenerationRequest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that errors when the request defines nothing to generate.
pub struct EmptyRequestLint;

impl Lint for EmptyRequestLint {
    fn name(&self) -> &'static str {
        "empty-request"
    }

    fn description(&self) -> &'static str {
        "Require at least one entity definition"
    }

    fn check(&self, request: &GenerationRequest, diagnostics: &mut Vec<Diagnostic>) {
        if request.entities.is_empty() {
            diagnostics.push(
                Diagnostic::error("validate", "generation request must define at least one entity")
                    .at("entities"),
            );
        }
    }
}
