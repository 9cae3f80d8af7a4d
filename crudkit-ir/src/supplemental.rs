use crate::{ProcessedField, ProcessedMethod, StructureKind};

/// An abstract class, interface or enumeration.
///
/// These skip the CRUD layers and are emitted as a single model type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplementalStructure {
    /// PascalCase type name
    pub name: String,
    pub kind: StructureKind,
    /// Fields; interface fields become constants
    pub fields: Vec<ProcessedField>,
    pub methods: Vec<ProcessedMethod>,
    /// CONSTANT_CASE names in first-occurrence order, without duplicates
    pub enum_constants: Vec<String>,
}

impl SupplementalStructure {
    /// Returns true if any method is emitted without a body.
    pub fn has_abstract_methods(&self) -> bool {
        self.methods.iter().any(|m| m.is_abstract)
    }
}
