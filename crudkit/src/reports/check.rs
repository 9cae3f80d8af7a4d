//! Check command report data structures.

use std::path::PathBuf;

use crudkit_codegen::Diagnostic;
use serde::{Serialize, Serializer, ser::SerializeStruct};

use super::output::{Output, Report};

/// Report data from request validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the request file.
    pub config_path: PathBuf,
    /// Diagnostics from validation and preparation.
    pub diagnostics: Vec<Diagnostic>,
    /// Entities that would be generated, in declaration order.
    pub entities: Vec<EntitySummary>,
    /// Supplemental structures.
    pub structures: Vec<StructureSummary>,
}

/// One prepared entity.
#[derive(Debug, Serialize)]
pub struct EntitySummary {
    pub name: String,
    pub table: String,
    /// Request path, leading slash included.
    pub path: String,
    /// `name: Type` of the identifier field.
    pub identifier: String,
    pub fields: usize,
    pub references: usize,
}

#[derive(Debug, Serialize)]
pub struct StructureSummary {
    pub name: String,
    pub kind: &'static str,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }
}

impl Serialize for CheckReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CheckReport", 5)?;
        state.serialize_field("config", &self.config_path)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("diagnostics", &self.diagnostics)?;
        state.serialize_field("entities", &self.entities)?;
        state.serialize_field("structures", &self.structures)?;
        state.end()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diagnostic in &self.diagnostics {
            let message = match &diagnostic.location {
                Some(location) => format!("{} ({})", diagnostic.message, location),
                None => diagnostic.message.clone(),
            };
            if diagnostic.severity.is_error() {
                out.error(&message);
            } else if diagnostic.severity.is_warning() {
                out.warning(&message);
            } else {
                out.preformatted(&format!("info: {}", message));
            }
        }

        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&format!("Entities ({})", self.entities.len()));
        for entity in &self.entities {
            out.list_item(&format!(
                "{} -> table {}, {} ({} fields, {} references, id {})",
                entity.name,
                entity.table,
                entity.path,
                entity.fields,
                entity.references,
                entity.identifier
            ));
        }

        if !self.structures.is_empty() {
            out.newline();
            out.section(&format!("Supplemental structures ({})", self.structures.len()));
            for structure in &self.structures {
                out.list_item(&format!("{} ({})", structure.name, structure.kind));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::testing::RecordingOutput;

    fn report(diagnostics: Vec<Diagnostic>) -> CheckReport {
        CheckReport {
            config_path: PathBuf::from("crudkit.toml"),
            diagnostics,
            entities: vec![EntitySummary {
                name: "Book".into(),
                table: "book".into(),
                path: "/books".into(),
                identifier: "id: Long".into(),
                fields: 3,
                references: 1,
            }],
            structures: vec![StructureSummary {
                name: "Genre".into(),
                kind: "enum",
            }],
        }
    }

    #[test]
    fn test_render_valid_report() {
        let mut out = RecordingOutput::default();
        report(vec![]).render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "✓ crudkit.toml is valid",
                "",
                "Entities (1):",
                "  - Book -> table book, /books (3 fields, 1 references, id id: Long)",
                "",
                "Supplemental structures (1):",
                "  - Genre (enum)",
            ]
        );
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_render_errors_skips_summary() {
        let mut out = RecordingOutput::default();
        let report = report(vec![
            Diagnostic::error("validate", "generation request must define at least one entity"),
            Diagnostic::warning("prepare", "unknown target").at("entities.Book"),
        ]);
        assert!(!report.is_valid());

        report.render(&mut out);
        assert_eq!(
            out.stderr,
            vec![
                "error: generation request must define at least one entity",
                "warning: unknown target (entities.Book)",
            ]
        );
        assert_eq!(out.lines, vec![""]);
    }
}
