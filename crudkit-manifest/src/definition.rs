//! User-supplied entity, field and method definitions.

use serde::Deserialize;

/// The kind of structure an entity definition describes.
///
/// Only [`StructureKind::Class`] goes through the full CRUD pipeline; the
/// other kinds are emitted as supplemental structures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructureKind {
    #[default]
    #[serde(alias = "CLASS")]
    Class,
    #[serde(alias = "ABSTRACT_CLASS", alias = "abstract_class")]
    AbstractClass,
    #[serde(alias = "INTERFACE")]
    Interface,
    #[serde(alias = "ENUM", alias = "enumeration")]
    Enum,
}

/// Cardinality tag of a reference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelationshipKind {
    #[serde(alias = "ONE_TO_ONE", alias = "one_to_one")]
    OneToOne,
    #[serde(alias = "MANY_TO_ONE", alias = "many_to_one")]
    ManyToOne,
    #[serde(alias = "ONE_TO_MANY", alias = "one_to_many")]
    OneToMany,
    #[serde(alias = "MANY_TO_MANY", alias = "many_to_many")]
    ManyToMany,
}

/// One data class (or supplemental structure) to scaffold.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntityDefinition {
    /// Free-text name, normalized to PascalCase during preparation
    #[serde(default)]
    pub name: String,

    /// Explicit table name; derived from the entity name when absent
    #[serde(default, alias = "tableName")]
    pub table: Option<String>,

    #[serde(default, alias = "structureType")]
    pub kind: StructureKind,

    #[serde(default)]
    pub fields: Vec<FieldDefinition>,

    #[serde(default)]
    pub methods: Vec<MethodDefinition>,

    /// Constant names (enumerations only)
    #[serde(default, alias = "enumConstants")]
    pub enum_constants: Vec<String>,
}

impl EntityDefinition {
    /// Returns true if this definition goes through the CRUD pipeline.
    pub fn is_entity(&self) -> bool {
        self.kind == StructureKind::Class
    }
}

/// A field of an entity definition.
///
/// A field is either scalar (`type`) or a reference to another entity
/// (`reference = true` plus `target`). The relationship kind only matters
/// for reference fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldDefinition {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub ty: Option<String>,

    #[serde(default)]
    pub identifier: bool,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub unique: bool,

    #[serde(default, alias = "objectType")]
    pub reference: bool,

    /// Free-text name of the referenced entity
    #[serde(default, alias = "targetClassName")]
    pub target: Option<String>,

    #[serde(default, alias = "relationshipType")]
    pub relationship: Option<RelationshipKind>,
}

impl FieldDefinition {
    /// Create a scalar field.
    pub fn scalar(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Create a reference field targeting another entity.
    pub fn reference(
        name: impl Into<String>,
        target: impl Into<String>,
        relationship: RelationshipKind,
    ) -> Self {
        Self {
            name: name.into(),
            reference: true,
            target: Some(target.into()),
            relationship: Some(relationship),
            ..Self::default()
        }
    }

    /// Mark this field as the identifier.
    pub fn identifier(mut self) -> Self {
        self.identifier = true;
        self
    }

    /// Mark this field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mark this field as unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// A method declared on a class, abstract class, interface or enumeration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MethodDefinition {
    #[serde(default)]
    pub name: String,

    /// Return type; blank means no value
    #[serde(default, alias = "returnType")]
    pub return_type: Option<String>,

    #[serde(default)]
    pub parameters: Vec<ParameterDefinition>,

    /// Only honored inside abstract classes
    #[serde(default, rename = "abstract", alias = "abstractMethod")]
    pub is_abstract: bool,

    /// Only honored inside interfaces
    #[serde(default, rename = "default", alias = "defaultImplementation")]
    pub is_default: bool,

    /// Method body, emitted verbatim
    #[serde(default)]
    pub body: Option<String>,
}

/// A method parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParameterDefinition {
    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub ty: String,
}
