//! Field shapes shared by several artifacts.
//!
//! Entities hold full references; DTOs flatten every reference to the
//! target's identifier (`authorId`) or a list of identifiers (`courseIds`).

use std::collections::HashSet;

use crudkit_codegen::{PreparedModule, TypeMapper};
use crudkit_core::{Layer, capitalize, unique_name};
use crudkit_ir::{ProcessedClass, ProcessedClassMap, ProcessedField};

use crate::JavaTypeMapper;

/// Declared type of a field on the entity.
pub fn entity_type(field: &ProcessedField) -> String {
    if field.is_collection() {
        JavaTypeMapper.collection_of(&field.ty)
    } else {
        field.ty.clone()
    }
}

/// A DTO field derived from an entity field.
#[derive(Debug, Clone)]
pub struct DtoField<'a> {
    pub source: &'a ProcessedField,
    identifier_type: &'a str,
    name: String,
}

impl<'a> DtoField<'a> {
    pub fn new(source: &'a ProcessedField, classes: &'a ProcessedClassMap) -> Self {
        let identifier_type = if source.is_reference() {
            classes.identifier_type(source.target())
        } else {
            source.ty.as_str()
        };
        Self {
            source,
            identifier_type,
            name: flattened_name(source),
        }
    }

    /// Field name on the DTO.
    pub fn name(&self) -> String {
        self.name.clone()
    }

    /// Declared type on the DTO.
    pub fn ty(&self) -> String {
        if self.source.is_collection() {
            JavaTypeMapper.collection_of(self.identifier_type)
        } else {
            self.identifier_type.to_string()
        }
    }

    /// Scalar type carried by the field (the element type for collections).
    pub fn scalar_type(&self) -> &'a str {
        self.identifier_type
    }

    /// Getter/setter suffix (`AuthorId`).
    pub fn accessor(&self) -> String {
        capitalize(&self.name)
    }
}

/// `author` -> `authorId`, `courses` -> `courseIds`; scalars keep their name.
fn flattened_name(source: &ProcessedField) -> String {
    let name = &source.name;
    if !source.is_reference() {
        name.clone()
    } else if source.is_collection() {
        let stem = match name.strip_suffix('s') {
            Some(stem) if !stem.is_empty() && !stem.ends_with('s') => stem,
            _ => name.as_str(),
        };
        format!("{}Ids", stem)
    } else {
        format!("{}Id", name)
    }
}

/// DTO fields of a class, in declaration order.
///
/// Scalar names are already unique within the class. A flattened reference
/// name that collides with a scalar or an earlier reference gets a numeric
/// suffix (`courseIds2`).
pub fn dto_fields<'a>(class: &'a ProcessedClass, classes: &'a ProcessedClassMap) -> Vec<DtoField<'a>> {
    let mut used: HashSet<String> = class
        .fields()
        .iter()
        .filter(|f| !f.is_reference())
        .map(|f| f.name.clone())
        .collect();

    class
        .fields()
        .iter()
        .map(|f| {
            let mut field = DtoField::new(f, classes);
            if f.is_reference() {
                field.name = unique_name(&field.name, &mut used);
            }
            field
        })
        .collect()
}

/// Name of the identifier field of the referenced entity.
pub fn target_identifier<'a>(field: &ProcessedField, classes: &'a ProcessedClassMap) -> &'a str {
    classes
        .get(field.target())
        .map(|c| c.identifier().name.as_str())
        .unwrap_or("id")
}

/// Imports needed to mention `ty` from generated code.
///
/// Generic arguments are scanned too, so `List<Author>` yields both the
/// `List` import and the entity import.
pub fn type_imports(ty: &str, module: &PreparedModule) -> Vec<String> {
    let layout = module.layout();
    ty.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.'))
        .filter(|token| !token.is_empty() && !token.contains('.'))
        .filter_map(|token| {
            if let Some(path) = JavaTypeMapper.import_for(token) {
                return Some(path.to_string());
            }
            let kind = module.known.kind(token)?;
            let layer = if kind.is_entity() {
                Layer::Entity
            } else {
                Layer::Model
            };
            Some(layout.qualified(layer, token))
        })
        .collect()
}
