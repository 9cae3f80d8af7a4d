//! Lint for definitions that collapse to the same type name.

use std::collections::HashMap;

use crudkit_core::{DEFAULT_TYPE_NAME, to_pascal_case};
use crudkit_manifest::GenerationRequest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two definitions normalize to one type name.
///
/// The prepare phase still renames the later one (`Book2`), so this is only
/// a warning.
pub struct DuplicateEntityLint;

impl Lint for DuplicateEntityLint {
    fn name(&self) -> &'static str {
        "duplicate-entity"
    }

    fn description(&self) -> &'static str {
        "Detect definitions whose names normalize to the same type"
    }

    fn check(&self, request: &GenerationRequest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<String, &str> = HashMap::new();

        for (index, def) in request.entities.iter().enumerate() {
            let mut normalized = to_pascal_case(&def.name);
            if normalized.is_empty() {
                normalized = DEFAULT_TYPE_NAME.to_string();
            }

            if let Some(first) = seen.get(&normalized) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "definition '{}' normalizes to '{}' (conflicts with '{}')",
                            def.name, normalized, first
                        ),
                    )
                    .at(format!("entities[{}]", index)),
                );
            } else {
                seen.insert(normalized, def.name.as_str());
            }
        }
    }
}
