//! Field and method resolution.

use crudkit_ir::{
    KnownStructures, Parameter, ProcessedField, ProcessedMethod, RelationshipKind, StructureKind,
    VOID,
};
use crudkit_manifest::{self as manifest, FieldDefinition, MethodDefinition, ParameterDefinition};

use crate::{language::NamingConvention, pipeline::Diagnostic};

const PHASE: &str = "prepare";

/// Map a declared scalar type to its canonical token.
///
/// Matching is case-insensitive. Unknown names are capitalized and passed
/// through; blank or missing input becomes `String`.
pub fn normalize_type(raw: Option<&str>) -> String {
    let candidate = raw.unwrap_or_default().trim();
    if candidate.is_empty() {
        return "String".to_string();
    }
    match candidate.to_ascii_lowercase().as_str() {
        "long" => "Long".to_string(),
        "int" | "integer" => "Integer".to_string(),
        "double" => "Double".to_string(),
        "bigdecimal" => "BigDecimal".to_string(),
        "localdate" => "LocalDate".to_string(),
        "localdatetime" => "LocalDateTime".to_string(),
        "boolean" | "bool" => "Boolean".to_string(),
        _ => crudkit_core::capitalize(candidate),
    }
}

/// Lower a manifest relationship kind to the IR kind.
fn lower_relationship(kind: manifest::RelationshipKind) -> RelationshipKind {
    match kind {
        manifest::RelationshipKind::OneToOne => RelationshipKind::OneToOne,
        manifest::RelationshipKind::ManyToOne => RelationshipKind::ManyToOne,
        manifest::RelationshipKind::OneToMany => RelationshipKind::OneToMany,
        manifest::RelationshipKind::ManyToMany => RelationshipKind::ManyToMany,
    }
}

/// Resolves fields, methods and parameters against the known structures.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    naming: &'a NamingConvention,
    known: &'a KnownStructures,
}

impl<'a> Resolver<'a> {
    pub fn new(naming: &'a NamingConvention, known: &'a KnownStructures) -> Self {
        Self { naming, known }
    }

    /// Resolve one field. `position` is the 1-based declared position, used
    /// for the fallback name `field<N>`.
    ///
    /// A reference whose target is not a known ordinary class is demoted to
    /// a scalar field and a warning is recorded.
    pub fn resolve_field(
        &self,
        def: &FieldDefinition,
        position: usize,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ProcessedField {
        let mut name = self.naming.member_name(&def.name);
        if name.is_empty() {
            name = format!("field{}", position);
            diagnostics.push(
                Diagnostic::info(PHASE, format!("unnamed field renamed to '{}'", name))
                    .at(location),
            );
        }

        let mut field = if def.reference {
            self.resolve_reference(def, name, location, diagnostics)
        } else {
            ProcessedField::scalar(name, normalize_type(def.ty.as_deref()))
        };
        field.identifier = def.identifier && !field.is_reference();
        field.required = def.required;
        field.unique = def.unique;
        field
    }

    fn resolve_reference(
        &self,
        def: &FieldDefinition,
        name: String,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> ProcessedField {
        let raw_target = def.target.as_deref().unwrap_or_default();
        let target = self.naming.type_name(raw_target);

        let reason = if def.identifier {
            Some("an identifier cannot be a reference".to_string())
        } else if target.is_empty() {
            Some("no target entity given".to_string())
        } else if !self.known.is_entity(&target) {
            Some(match self.known.kind(&target) {
                Some(kind) => format!("target '{}' is an {}, not an entity", target, kind.label()),
                None => format!("target '{}' is not a known entity", raw_target.trim()),
            })
        } else {
            None
        };

        match reason {
            Some(reason) => {
                let ty = normalize_type(def.ty.as_deref());
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!("field '{}' demoted to '{}': {}", name, ty, reason),
                    )
                    .at(location),
                );
                ProcessedField::scalar(name, ty)
            }
            None => {
                let kind = def
                    .relationship
                    .map(lower_relationship)
                    .unwrap_or(RelationshipKind::ManyToOne);
                ProcessedField::reference(name, target, kind)
            }
        }
    }

    /// Resolve one method declared on a structure of kind `owner`.
    ///
    /// Returns `None` when the name normalizes to nothing.
    pub fn resolve_method(
        &self,
        def: &MethodDefinition,
        owner: StructureKind,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<ProcessedMethod> {
        let name = self.naming.member_name(&def.name);
        if name.is_empty() {
            diagnostics.push(Diagnostic::info(PHASE, "unnamed method dropped").at(location));
            return None;
        }

        let return_type = match def.return_type.as_deref().map(str::trim) {
            None | Some("") => VOID.to_string(),
            Some(ty) if ty.eq_ignore_ascii_case(VOID) => VOID.to_string(),
            Some(ty) => normalize_type(Some(ty)),
        };

        let parameters = def
            .parameters
            .iter()
            .filter_map(|p| self.resolve_parameter(p))
            .collect();

        let is_abstract = match owner {
            StructureKind::Interface => !def.is_default,
            StructureKind::AbstractClass => def.is_abstract,
            StructureKind::Class | StructureKind::Enum => false,
        };

        let body = def
            .body
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string);

        Some(ProcessedMethod {
            name,
            return_type,
            parameters,
            is_abstract,
            body: if is_abstract { None } else { body },
        })
    }

    /// Resolve one parameter. Returns `None` if its name or type is blank.
    pub fn resolve_parameter(&self, def: &ParameterDefinition) -> Option<Parameter> {
        let name = self.naming.member_name(&def.name);
        let ty = def.ty.trim();
        if name.is_empty() || ty.is_empty() {
            return None;
        }
        Some(Parameter {
            name,
            ty: normalize_type(Some(ty)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known() -> KnownStructures {
        let mut known = KnownStructures::new();
        known.register("Author", StructureKind::Class);
        known.register("Shape", StructureKind::AbstractClass);
        known
    }

    #[test]
    fn test_normalize_type_table() {
        for (input, expected) in [
            ("long", "Long"),
            ("INT", "Integer"),
            ("integer", "Integer"),
            ("Double", "Double"),
            ("bigdecimal", "BigDecimal"),
            ("localDate", "LocalDate"),
            ("LOCALDATETIME", "LocalDateTime"),
            ("bool", "Boolean"),
            ("boolean", "Boolean"),
            ("uuid", "Uuid"),
            ("String", "String"),
            ("  ", "String"),
        ] {
            assert_eq!(normalize_type(Some(input)), expected, "input {:?}", input);
        }
        assert_eq!(normalize_type(None), "String");
    }

    #[test]
    fn test_resolve_reference() {
        let naming = NamingConvention::PLAIN;
        let known = known();
        let resolver = Resolver::new(&naming, &known);
        let mut diagnostics = Vec::new();

        let def = FieldDefinition::reference(
            "the author",
            "author",
            manifest::RelationshipKind::ManyToOne,
        );
        let field = resolver.resolve_field(&def, 1, "f", &mut diagnostics);

        assert_eq!(field.name, "theAuthor");
        assert_eq!(field.ty, "Author");
        assert_eq!(field.target(), "Author");
        assert_eq!(field.relationship_kind(), Some(RelationshipKind::ManyToOne));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_reference_without_kind_defaults_to_many_to_one() {
        let naming = NamingConvention::PLAIN;
        let known = known();
        let resolver = Resolver::new(&naming, &known);

        let def = FieldDefinition {
            name: "author".into(),
            reference: true,
            target: Some("Author".into()),
            ..FieldDefinition::default()
        };
        let field = resolver.resolve_field(&def, 1, "f", &mut Vec::new());
        assert_eq!(field.relationship_kind(), Some(RelationshipKind::ManyToOne));
    }

    #[test]
    fn test_unknown_target_demoted() {
        let naming = NamingConvention::PLAIN;
        let known = known();
        let resolver = Resolver::new(&naming, &known);
        let mut diagnostics = Vec::new();

        let def = FieldDefinition::reference(
            "publisher",
            "Publisher",
            manifest::RelationshipKind::ManyToOne,
        );
        let field = resolver.resolve_field(&def, 2, "entities.Book.fields.publisher", &mut diagnostics);

        assert!(!field.is_reference());
        assert_eq!(field.target(), "");
        assert_eq!(field.ty, "String");
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_warning());
        assert!(diagnostics[0].message.contains("not a known entity"));
    }

    #[test]
    fn test_supplemental_target_demoted() {
        let naming = NamingConvention::PLAIN;
        let known = known();
        let resolver = Resolver::new(&naming, &known);
        let mut diagnostics = Vec::new();

        let def =
            FieldDefinition::reference("shape", "Shape", manifest::RelationshipKind::OneToOne);
        let field = resolver.resolve_field(&def, 1, "f", &mut diagnostics);

        assert!(!field.is_reference());
        assert!(diagnostics[0].message.contains("abstract class"));
    }

    #[test]
    fn test_unnamed_field_fallback() {
        let naming = NamingConvention::PLAIN;
        let known = known();
        let resolver = Resolver::new(&naming, &known);

        let def = FieldDefinition::scalar("???", "int");
        let field = resolver.resolve_field(&def, 3, "f", &mut Vec::new());
        assert_eq!(field.name, "field3");
        assert_eq!(field.ty, "Integer");
    }

    #[test]
    fn test_method_abstract_rules() {
        let naming = NamingConvention::PLAIN;
        let known = known();
        let resolver = Resolver::new(&naming, &known);
        let mut diagnostics = Vec::new();

        let flagged = MethodDefinition {
            name: "area".into(),
            return_type: Some("double".into()),
            is_abstract: true,
            ..MethodDefinition::default()
        };

        let in_abstract = resolver
            .resolve_method(&flagged, StructureKind::AbstractClass, "m", &mut diagnostics)
            .unwrap();
        assert!(in_abstract.is_abstract);
        assert_eq!(in_abstract.return_type, "Double");

        let in_class = resolver
            .resolve_method(&flagged, StructureKind::Class, "m", &mut diagnostics)
            .unwrap();
        assert!(!in_class.is_abstract);

        let plain = MethodDefinition {
            name: "describe".into(),
            ..MethodDefinition::default()
        };
        let in_interface = resolver
            .resolve_method(&plain, StructureKind::Interface, "m", &mut diagnostics)
            .unwrap();
        assert!(in_interface.is_abstract);
        assert_eq!(in_interface.return_type, VOID);

        let default = MethodDefinition {
            name: "describe".into(),
            is_default: true,
            body: Some("System.out.println(\"x\");".into()),
            ..MethodDefinition::default()
        };
        let in_interface = resolver
            .resolve_method(&default, StructureKind::Interface, "m", &mut diagnostics)
            .unwrap();
        assert!(!in_interface.is_abstract);
        assert!(in_interface.body.is_some());
    }

    #[test]
    fn test_method_and_parameter_dropping() {
        let naming = NamingConvention::PLAIN;
        let known = known();
        let resolver = Resolver::new(&naming, &known);
        let mut diagnostics = Vec::new();

        let unnamed = MethodDefinition {
            name: "  ".into(),
            ..MethodDefinition::default()
        };
        assert!(
            resolver
                .resolve_method(&unnamed, StructureKind::Class, "m", &mut diagnostics)
                .is_none()
        );

        let method = MethodDefinition {
            name: "scale".into(),
            return_type: Some("VOID".into()),
            parameters: vec![
                ParameterDefinition {
                    name: "factor".into(),
                    ty: "int".into(),
                },
                ParameterDefinition {
                    name: "".into(),
                    ty: "int".into(),
                },
                ParameterDefinition {
                    name: "unit".into(),
                    ty: " ".into(),
                },
            ],
            ..MethodDefinition::default()
        };
        let resolved = resolver
            .resolve_method(&method, StructureKind::Class, "m", &mut diagnostics)
            .unwrap();
        assert_eq!(resolved.return_type, VOID);
        assert_eq!(
            resolved.parameters,
            vec![Parameter {
                name: "factor".into(),
                ty: "Integer".into()
            }]
        );
    }
}
