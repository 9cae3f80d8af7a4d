//! Class preparation.

use std::collections::HashSet;

use crudkit_core::{DEFAULT_TYPE_NAME, path_segment, table_name, unique_name};
use crudkit_ir::{
    DERIVED_SUFFIXES, KnownStructures, PreparedStructure, ProcessedClass, ProcessedField, StructureKind,
    SupplementalStructure,
};
use crudkit_manifest::{self as manifest, EntityDefinition};

use super::Resolver;
use crate::{language::NamingConvention, pipeline::Diagnostic};

const PHASE: &str = "prepare";

/// Lower a manifest structure kind to the IR kind.
fn lower_structure_kind(kind: manifest::StructureKind) -> StructureKind {
    match kind {
        manifest::StructureKind::Class => StructureKind::Class,
        manifest::StructureKind::AbstractClass => StructureKind::AbstractClass,
        manifest::StructureKind::Interface => StructureKind::Interface,
        manifest::StructureKind::Enum => StructureKind::Enum,
    }
}

/// Give every definition a unique normalized type name.
///
/// Blank names fall back to `GeneratedEntity`. A name is taken when it, or
/// one of the types generated next to an entity (`BookDto`, ...), is already
/// used by an earlier definition or is a reserved library type (`Table`,
/// `Service`). Taken names get a numeric suffix (`Book2`).
pub fn assign_names(
    definitions: &[EntityDefinition],
    naming: &NamingConvention,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<String> {
    let mut used = HashSet::new();
    definitions
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let mut base = naming.type_name(&def.name);
            if base.is_empty() {
                base = DEFAULT_TYPE_NAME.to_string();
            }
            let kind = lower_structure_kind(def.kind);
            let name = free_type_name(&base, kind, naming, &mut used);
            if name != base {
                let reason = if generated_types(&base, kind).any(|t| naming.is_reserved_type(&t)) {
                    "clashes with a library type"
                } else {
                    "duplicate structure"
                };
                diagnostics.push(
                    Diagnostic::info(
                        PHASE,
                        format!("{} '{}' renamed to '{}'", reason, base, name),
                    )
                    .at(format!("entities[{}]", index)),
                );
            }
            name
        })
        .collect()
}

/// Every type name emitted for a structure called `name`.
fn generated_types(name: &str, kind: StructureKind) -> impl Iterator<Item = String> + '_ {
    let suffixes: &[&str] = if kind.is_entity() { DERIVED_SUFFIXES } else { &[] };
    std::iter::once(name.to_string()).chain(suffixes.iter().map(move |s| format!("{}{}", name, s)))
}

/// First of `base`, `base2`, ... whose generated types are all free; marks them used.
fn free_type_name(
    base: &str,
    kind: StructureKind,
    naming: &NamingConvention,
    used: &mut HashSet<String>,
) -> String {
    let mut counter = 1;
    loop {
        let candidate = if counter == 1 {
            base.to_string()
        } else {
            format!("{}{}", base, counter)
        };
        let free = generated_types(&candidate, kind)
            .all(|t| !used.contains(&t) && !naming.is_reserved_type(&t));
        if free {
            used.extend(generated_types(&candidate, kind));
            return candidate;
        }
        counter += 1;
    }
}

/// Build the name → kind table from assigned names.
pub fn known_structures(definitions: &[EntityDefinition], names: &[String]) -> KnownStructures {
    let mut known = KnownStructures::new();
    for (def, name) in definitions.iter().zip(names) {
        known.register(name.clone(), lower_structure_kind(def.kind));
    }
    known
}

/// Builds processed classes and supplemental structures.
#[derive(Debug, Clone, Copy)]
pub struct ClassPreparer<'a> {
    resolver: Resolver<'a>,
    naming: &'a NamingConvention,
}

impl<'a> ClassPreparer<'a> {
    pub fn new(naming: &'a NamingConvention, known: &'a KnownStructures) -> Self {
        Self {
            resolver: Resolver::new(naming, known),
            naming,
        }
    }

    /// Prepare one definition under its assigned name.
    pub fn prepare(
        &self,
        def: &EntityDefinition,
        name: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> PreparedStructure {
        let kind = lower_structure_kind(def.kind);
        if kind.is_entity() {
            PreparedStructure::Class(self.prepare_class(def, name, diagnostics))
        } else {
            PreparedStructure::Supplemental(self.prepare_supplemental(def, name, kind, diagnostics))
        }
    }

    fn prepare_class(
        &self,
        def: &EntityDefinition,
        name: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ProcessedClass {
        let location = format!("entities.{}", name);

        let mut fields = self.resolve_fields(def, &location, diagnostics);
        if !fields.iter().any(|f| f.identifier) {
            fields.insert(0, ProcessedField::synthetic_identifier());
        } else if fields.iter().filter(|f| f.identifier).count() > 1 {
            diagnostics.push(
                Diagnostic::warning(
                    PHASE,
                    "several identifier fields declared, only the first is kept",
                )
                .at(location.as_str()),
            );
        }
        self.dedupe_field_names(&mut fields, &location, diagnostics);

        let methods = self.resolve_methods(def, StructureKind::Class, &location, diagnostics);

        let table = def
            .table
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| table_name(name));

        ProcessedClass::new(name, table, path_segment(name), fields, methods)
    }

    fn prepare_supplemental(
        &self,
        def: &EntityDefinition,
        name: &str,
        kind: StructureKind,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> SupplementalStructure {
        let location = format!("entities.{}", name);

        let mut fields = self.resolve_fields(def, &location, diagnostics);
        self.dedupe_field_names(&mut fields, &location, diagnostics);

        let mut seen = HashSet::new();
        let enum_constants = def
            .enum_constants
            .iter()
            .map(|c| self.naming.constant_name(c))
            .filter(|c| !c.is_empty())
            .filter(|c| seen.insert(c.clone()))
            .collect();

        SupplementalStructure {
            name: name.to_string(),
            kind,
            fields,
            methods: self.resolve_methods(def, kind, &location, diagnostics),
            enum_constants,
        }
    }

    fn resolve_fields(
        &self,
        def: &EntityDefinition,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<ProcessedField> {
        def.fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let field_location = format!("{}.fields[{}]", location, index);
                self.resolver
                    .resolve_field(field, index + 1, &field_location, diagnostics)
            })
            .collect()
    }

    fn resolve_methods(
        &self,
        def: &EntityDefinition,
        owner: StructureKind,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<crudkit_ir::ProcessedMethod> {
        def.methods
            .iter()
            .enumerate()
            .filter_map(|(index, method)| {
                let method_location = format!("{}.methods[{}]", location, index);
                self.resolver
                    .resolve_method(method, owner, &method_location, diagnostics)
            })
            .collect()
    }

    /// Rename fields whose normalized names collide (`name`, `name2`, ...).
    fn dedupe_field_names(
        &self,
        fields: &mut [ProcessedField],
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let mut used = HashSet::new();
        for field in fields.iter_mut() {
            let name = unique_name(&field.name, &mut used);
            if name != field.name {
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!("duplicate field '{}' renamed to '{}'", field.name, name),
                    )
                    .at(location),
                );
                field.name = name;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crudkit_ir::RelationshipKind;
    use crudkit_manifest::FieldDefinition;

    use super::*;

    fn entity(name: &str, fields: Vec<FieldDefinition>) -> EntityDefinition {
        EntityDefinition {
            name: name.into(),
            fields,
            ..EntityDefinition::default()
        }
    }

    fn prepare_all(
        definitions: &[EntityDefinition],
    ) -> (Vec<PreparedStructure>, Vec<Diagnostic>) {
        let naming = NamingConvention::PLAIN;
        let mut diagnostics = Vec::new();
        let names = assign_names(definitions, &naming, &mut diagnostics);
        let known = known_structures(definitions, &names);
        let preparer = ClassPreparer::new(&naming, &known);
        let prepared = definitions
            .iter()
            .zip(&names)
            .map(|(def, name)| preparer.prepare(def, name, &mut diagnostics))
            .collect();
        (prepared, diagnostics)
    }

    #[test]
    fn test_widget_gets_synthetic_identifier() {
        let (prepared, _) = prepare_all(&[entity(
            "Widget",
            vec![FieldDefinition::scalar("label", "String")],
        )]);
        let class = prepared[0].as_class().unwrap();

        assert_eq!(class.fields().len(), 2);
        let id = &class.fields()[0];
        assert_eq!(id.name, "id");
        assert_eq!(id.ty, "Long");
        assert!(id.identifier && id.required && id.unique);
        assert_eq!(class.fields()[1].name, "label");
        assert_eq!(class.table_name, "widget");
        assert_eq!(class.path_segment, "widgets");
    }

    #[test]
    fn test_blank_entity_name_falls_back() {
        let (prepared, _) = prepare_all(&[entity("!!!", vec![])]);
        let class = prepared[0].as_class().unwrap();

        assert_eq!(class.entity_name, "GeneratedEntity");
        assert_eq!(class.dto_name, "GeneratedEntityDto");
        assert_eq!(class.repository_name, "GeneratedEntityRepository");
        assert_eq!(class.service_name, "GeneratedEntityService");
        assert_eq!(class.controller_name, "GeneratedEntityController");
        assert_eq!(class.table_name, "generated_entity");
    }

    #[test]
    fn test_forward_reference_resolves() {
        let (prepared, diagnostics) = prepare_all(&[
            entity(
                "Book",
                vec![
                    FieldDefinition::scalar("title", "String"),
                    FieldDefinition::reference(
                        "author",
                        "Author",
                        crudkit_manifest::RelationshipKind::ManyToOne,
                    ),
                ],
            ),
            entity("Author", vec![FieldDefinition::scalar("name", "String")]),
        ]);
        let book = prepared[0].as_class().unwrap();
        let author = &book.fields()[2];

        assert_eq!(author.target(), "Author");
        assert_eq!(author.relationship_kind(), Some(RelationshipKind::ManyToOne));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_explicit_table_trimmed() {
        let mut def = entity("Book", vec![]);
        def.table = Some("  library_books ".into());
        let (prepared, _) = prepare_all(&[def]);
        assert_eq!(prepared[0].as_class().unwrap().table_name, "library_books");
    }

    #[test]
    fn test_duplicate_names_get_suffix() {
        let (prepared, diagnostics) = prepare_all(&[
            entity(
                "book",
                vec![
                    FieldDefinition::scalar("name", "String"),
                    FieldDefinition::scalar("Name", "String"),
                ],
            ),
            entity("Book", vec![]),
        ]);

        assert_eq!(prepared[0].name(), "Book");
        assert_eq!(prepared[1].name(), "Book2");

        let book = prepared[0].as_class().unwrap();
        let names: Vec<_> = book.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "name2"]);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.iter().filter(|d| d.severity.is_warning()).count(), 1);
    }

    #[test]
    fn test_library_type_names_renamed() {
        const NAMING: NamingConvention = NamingConvention {
            reserved_types: &["Table", "Service", "JpaRepository"],
            ..NamingConvention::PLAIN
        };
        let definitions = [
            entity("table", vec![]),
            entity("Service", vec![]),
            entity("jpa", vec![]),
            entity("Book", vec![]),
        ];
        let mut diagnostics = Vec::new();
        let names = assign_names(&definitions, &NAMING, &mut diagnostics);

        assert_eq!(names, vec!["Table2", "Service2", "Jpa2", "Book"]);
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(
            diagnostics[0].message,
            "clashes with a library type 'Table' renamed to 'Table2'"
        );
        assert!(diagnostics.iter().all(|d| !d.severity.is_warning()));
    }

    #[test]
    fn test_derived_names_do_not_collide() {
        let definitions = [entity("Book", vec![]), entity("Book Dto", vec![])];
        let mut diagnostics = Vec::new();
        let names = assign_names(&definitions, &NamingConvention::PLAIN, &mut diagnostics);

        // BookDto is already the DTO generated for Book
        assert_eq!(names, vec!["Book", "BookDto2"]);
        assert_eq!(
            diagnostics[0].message,
            "duplicate structure 'BookDto' renamed to 'BookDto2'"
        );
    }

    #[test]
    fn test_enum_constants_deduplicated() {
        let def = EntityDefinition {
            name: "order status".into(),
            kind: crudkit_manifest::StructureKind::Enum,
            enum_constants: vec![
                "in progress".into(),
                "DONE".into(),
                "inProgress".into(),
                "done".into(),
                "---".into(),
            ],
            ..EntityDefinition::default()
        };
        let (prepared, _) = prepare_all(&[def]);

        let PreparedStructure::Supplemental(status) = &prepared[0] else {
            panic!("expected a supplemental structure");
        };
        assert_eq!(status.name, "OrderStatus");
        assert_eq!(status.kind, StructureKind::Enum);
        assert_eq!(status.enum_constants, vec!["IN_PROGRESS", "DONE"]);
    }

    #[test]
    fn test_reference_to_supplemental_demoted() {
        let shape = EntityDefinition {
            name: "Shape".into(),
            kind: crudkit_manifest::StructureKind::Interface,
            ..EntityDefinition::default()
        };
        let (prepared, diagnostics) = prepare_all(&[
            shape,
            entity(
                "Drawing",
                vec![FieldDefinition::reference(
                    "shape",
                    "Shape",
                    crudkit_manifest::RelationshipKind::OneToOne,
                )],
            ),
        ]);

        let drawing = prepared[1].as_class().unwrap();
        assert!(!drawing.has_references());
        assert_eq!(diagnostics.len(), 1);
    }
}
