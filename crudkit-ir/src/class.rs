use crate::{ProcessedField, ProcessedMethod, StructureKind, SupplementalStructure};

/// Suffixes of the types generated next to each entity (`BookDto`,
/// `BookServiceTest`, ...).
pub const DERIVED_SUFFIXES: &[&str] = &[
    "Dto",
    "Repository",
    "Service",
    "Controller",
    "ServiceTest",
    "ControllerTest",
];

/// An entity ready for emission, with every derived name resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedClass {
    /// PascalCase entity name
    pub entity_name: String,
    pub dto_name: String,
    pub repository_name: String,
    pub service_name: String,
    pub controller_name: String,
    pub table_name: String,
    /// Pluralized kebab-case segment for URLs and template directories
    pub path_segment: String,
    fields: Vec<ProcessedField>,
    identifier: usize,
    /// Declared methods, emitted as concrete members of the entity
    pub methods: Vec<ProcessedMethod>,
}

impl ProcessedClass {
    /// Build a processed class from resolved fields.
    ///
    /// Exactly one field ends up flagged as identifier: the first declared
    /// one wins and later flags are cleared. When none is declared, the
    /// synthetic `id` field is prepended.
    pub fn new(
        entity_name: impl Into<String>,
        table_name: impl Into<String>,
        path_segment: impl Into<String>,
        mut fields: Vec<ProcessedField>,
        methods: Vec<ProcessedMethod>,
    ) -> Self {
        let identifier = match fields.iter().position(|f| f.identifier) {
            Some(index) => {
                for field in fields.iter_mut().skip(index + 1) {
                    field.identifier = false;
                }
                index
            }
            None => {
                fields.insert(0, ProcessedField::synthetic_identifier());
                0
            }
        };

        let entity_name = entity_name.into();
        Self {
            dto_name: format!("{}Dto", entity_name),
            repository_name: format!("{}Repository", entity_name),
            service_name: format!("{}Service", entity_name),
            controller_name: format!("{}Controller", entity_name),
            entity_name,
            table_name: table_name.into(),
            path_segment: path_segment.into(),
            fields,
            identifier,
            methods,
        }
    }

    /// All fields in emission order.
    pub fn fields(&self) -> &[ProcessedField] {
        &self.fields
    }

    /// The identifier field.
    pub fn identifier(&self) -> &ProcessedField {
        &self.fields[self.identifier]
    }

    /// Type token of the identifier field.
    pub fn identifier_type(&self) -> &str {
        &self.identifier().ty
    }

    /// Fields other than the identifier, in declaration order.
    pub fn non_identifier_fields(&self) -> impl Iterator<Item = &ProcessedField> {
        self.fields.iter().filter(|f| !f.identifier)
    }

    /// Reference fields, in declaration order.
    pub fn reference_fields(&self) -> impl Iterator<Item = &ProcessedField> {
        self.fields.iter().filter(|f| f.is_reference())
    }

    /// Returns true if any field references another entity.
    pub fn has_references(&self) -> bool {
        self.fields.iter().any(ProcessedField::is_reference)
    }

    /// camelCase variable name for an instance of the entity.
    pub fn variable_name(&self) -> String {
        let mut chars = self.entity_name.chars();
        match chars.next() {
            Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Output of the class preparer for one definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedStructure {
    Class(ProcessedClass),
    Supplemental(SupplementalStructure),
}

impl PreparedStructure {
    /// Normalized type name.
    pub fn name(&self) -> &str {
        match self {
            PreparedStructure::Class(class) => &class.entity_name,
            PreparedStructure::Supplemental(structure) => &structure.name,
        }
    }

    /// Structure kind.
    pub fn kind(&self) -> StructureKind {
        match self {
            PreparedStructure::Class(_) => StructureKind::Class,
            PreparedStructure::Supplemental(structure) => structure.kind,
        }
    }

    /// Returns the processed class, if this is an entity.
    pub fn as_class(&self) -> Option<&ProcessedClass> {
        match self {
            PreparedStructure::Class(class) => Some(class),
            PreparedStructure::Supplemental(_) => None,
        }
    }
}
