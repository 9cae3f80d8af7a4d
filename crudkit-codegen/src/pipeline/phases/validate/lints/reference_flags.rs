//! Lint for relationship settings on scalar fields.

use crudkit_manifest::GenerationRequest;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when `target` or `relationship` is set on a field that
/// is not marked as a reference. Those settings are ignored.
pub struct ReferenceFlagsLint;

impl Lint for ReferenceFlagsLint {
    fn name(&self) -> &'static str {
        "reference-flags"
    }

    fn description(&self) -> &'static str {
        "Flag relationship settings on non-reference fields"
    }

    fn check(&self, request: &GenerationRequest, diagnostics: &mut Vec<Diagnostic>) {
        for (index, def) in request.entities.iter().enumerate() {
            for (position, field) in def.fields.iter().enumerate() {
                if field.reference {
                    continue;
                }
                let has_target = field
                    .target
                    .as_deref()
                    .is_some_and(|t| !t.trim().is_empty());
                if !has_target && field.relationship.is_none() {
                    continue;
                }

                let name = if field.name.trim().is_empty() {
                    format!("#{}", position + 1)
                } else {
                    format!("'{}'", field.name)
                };
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "field {} sets a relationship but is not a reference; the setting is ignored",
                            name
                        ),
                    )
                    .at(format!("entities[{}].fields[{}]", index, position)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let request: GenerationRequest = content.parse().unwrap();
        let mut diagnostics = Vec::new();
        ReferenceFlagsLint.check(&request, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_target_without_reference_warns() {
        let diagnostics = check(
            r#"
            [[entities]]
            name = "Book"

            [[entities.fields]]
            name = "author"
            type = "String"
            target = "Author"
        "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("entities[0].fields[0]")
        );
    }

    #[test]
    fn test_reference_field_passes() {
        let diagnostics = check(
            r#"
            [[entities]]
            name = "Book"

            [[entities.fields]]
            name = "author"
            reference = true
            target = "Author"
            relationship = "many-to-one"
        "#,
        );
        assert!(diagnostics.is_empty());
    }
}
