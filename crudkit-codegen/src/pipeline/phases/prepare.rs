//! Prepare phase - builds the prepared records the emitters read.

use crudkit_ir::{PreparedStructure, ProcessedClassMap};
use eyre::Result;

use crate::{
    language::NamingConvention,
    pipeline::{CompilationContext, Phase, PreparedModule},
    prepare::{ClassPreparer, assign_names, known_structures},
};

/// Phase that normalizes names and resolves every definition.
///
/// The full class map is built here, before any emitter runs, so
/// cross-references resolve regardless of declaration order.
pub struct PreparePhase {
    naming: NamingConvention,
}

impl PreparePhase {
    pub fn new(naming: NamingConvention) -> Self {
        Self { naming }
    }
}

impl Phase for PreparePhase {
    fn name(&self) -> &'static str {
        "prepare"
    }

    fn description(&self) -> &'static str {
        "Normalize names and build processed classes"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let definitions = &ctx.request.entities;
        let mut diagnostics = Vec::new();

        let names = assign_names(definitions, &self.naming, &mut diagnostics);
        let known = known_structures(definitions, &names);
        let preparer = ClassPreparer::new(&self.naming, &known);

        let structures: Vec<PreparedStructure> = definitions
            .iter()
            .zip(&names)
            .map(|(def, name)| preparer.prepare(def, name, &mut diagnostics))
            .collect();

        let mut classes = ProcessedClassMap::new();
        for class in structures.iter().filter_map(PreparedStructure::as_class) {
            classes.insert(class.clone());
        }

        for diagnostic in diagnostics.iter().filter(|d| d.severity.is_warning()) {
            tracing::warn!(location = ?diagnostic.location, "{}", diagnostic.message);
        }
        tracing::debug!(
            classes = classes.len(),
            structures = structures.len(),
            "prepared module"
        );

        ctx.prepared = Some(PreparedModule {
            module_name: ctx.request.sanitized_module_name(),
            base_package: ctx.request.sanitized_base_package(),
            options: ctx.options,
            known,
            classes,
            structures,
        });
        ctx.diagnostics.extend(diagnostics);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crudkit_ir::StructureKind;
    use crudkit_manifest::GenerationRequest;

    use super::*;

    fn run(content: &str) -> CompilationContext {
        let request: GenerationRequest = content.parse().expect("Failed to parse test request");
        let options = request.generation_options();
        let mut ctx = CompilationContext::new(request, options);
        PreparePhase::new(NamingConvention::PLAIN)
            .run(&mut ctx)
            .expect("prepare should succeed");
        ctx
    }

    #[test]
    fn test_prepare_builds_class_map() {
        let ctx = run(
            r#"
            base_package = "com.acme.library"

            [[entities]]
            name = "book"

            [[entities.fields]]
            name = "author"
            reference = true
            target = "author"

            [[entities]]
            name = "author"
        "#,
        );

        let module = ctx.prepared().unwrap();
        assert_eq!(module.base_package, "com.acme.library");
        assert_eq!(module.module_name, "crud-module");
        assert_eq!(module.classes.len(), 2);

        let book = module.classes.get("Book").unwrap();
        let author = book.fields().iter().find(|f| f.name == "author").unwrap();
        assert!(author.is_reference());
        assert_eq!(author.target(), "Author");
    }

    #[test]
    fn test_prepare_keeps_supplementals_in_order() {
        let ctx = run(
            r#"
            [[entities]]
            name = "status"
            kind = "enum"
            enum_constants = ["active", "retired"]

            [[entities]]
            name = "Book"
        "#,
        );

        let module = ctx.prepared().unwrap();
        assert_eq!(module.classes.len(), 1);
        assert_eq!(module.structures.len(), 2);
        assert_eq!(module.structures[0].kind(), StructureKind::Enum);

        let supplementals: Vec<_> = module.supplementals().collect();
        assert_eq!(supplementals.len(), 1);
        assert_eq!(supplementals[0].enum_constants, vec!["ACTIVE", "RETIRED"]);
    }

    #[test]
    fn test_prepare_records_demotion_warning() {
        let ctx = run(
            r#"
            [[entities]]
            name = "Book"

            [[entities.fields]]
            name = "publisher"
            reference = true
            target = "Publisher"
        "#,
        );

        assert!(ctx.has_warnings());
        let book = ctx.prepared().unwrap().classes.get("Book").unwrap();
        let publisher = book.fields().iter().find(|f| f.name == "publisher").unwrap();
        assert!(!publisher.is_reference());
    }
}
