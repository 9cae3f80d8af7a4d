//! Check operation - request validation and preparation.

use std::path::Path;

use crudkit_codegen::{
    CompilationContext,
    pipeline::{
        Phase,
        phases::{PreparePhase, ValidatePhase},
    },
};
use crudkit_codegen_java::JAVA_NAMING;
use crudkit_manifest::{GenerationOptions, GenerationRequest};
use eyre::{Context, Result};

use crate::reports::{CheckReport, EntitySummary, StructureSummary};

/// Execute the check operation.
///
/// Validation errors end up in the report instead of failing the call, so
/// every problem is shown at once.
pub fn check(
    request: &GenerationRequest,
    options: GenerationOptions,
    config_path: &Path,
) -> Result<CheckReport> {
    let mut ctx = CompilationContext::new(request.clone(), options);

    if ValidatePhase::new().run(&mut ctx).is_ok() {
        PreparePhase::new(JAVA_NAMING)
            .run(&mut ctx)
            .wrap_err("failed to prepare request")?;
    }

    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        diagnostics: ctx.diagnostics.clone(),
        entities: Vec::new(),
        structures: Vec::new(),
    };

    if let Some(module) = &ctx.prepared {
        report.entities = module
            .classes
            .iter()
            .map(|class| EntitySummary {
                name: class.entity_name.clone(),
                table: class.table_name.clone(),
                path: format!("/{}", class.path_segment),
                identifier: format!("{}: {}", class.identifier().name, class.identifier_type()),
                fields: class.fields().len(),
                references: class.reference_fields().count(),
            })
            .collect();
        report.structures = module
            .supplementals()
            .map(|s| StructureSummary {
                name: s.name.clone(),
                kind: s.kind.label(),
            })
            .collect();
    }

    Ok(report)
}
