//! Core type definitions.

/// Kind of a prepared structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Class,
    AbstractClass,
    Interface,
    Enum,
}

impl StructureKind {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            StructureKind::Class => "class",
            StructureKind::AbstractClass => "abstract-class",
            StructureKind::Interface => "interface",
            StructureKind::Enum => "enum",
        }
    }

    /// Human-readable label used in summaries.
    pub fn label(&self) -> &'static str {
        match self {
            StructureKind::Class => "class",
            StructureKind::AbstractClass => "abstract class",
            StructureKind::Interface => "interface",
            StructureKind::Enum => "enum",
        }
    }

    /// Returns true for ordinary classes, the only kind that gets CRUD layers.
    pub fn is_entity(&self) -> bool {
        matches!(self, StructureKind::Class)
    }
}

/// Cardinality of a resolved reference field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    OneToOne,
    ManyToOne,
    OneToMany,
    ManyToMany,
}

impl RelationshipKind {
    /// Returns true if the field holds a collection of targets.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            RelationshipKind::OneToMany | RelationshipKind::ManyToMany
        )
    }

    /// PascalCase name, matching the persistence annotation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipKind::OneToOne => "OneToOne",
            RelationshipKind::ManyToOne => "ManyToOne",
            RelationshipKind::OneToMany => "OneToMany",
            RelationshipKind::ManyToMany => "ManyToMany",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_is_collection() {
        assert!(!RelationshipKind::OneToOne.is_collection());
        assert!(!RelationshipKind::ManyToOne.is_collection());
        assert!(RelationshipKind::OneToMany.is_collection());
        assert!(RelationshipKind::ManyToMany.is_collection());
    }

    #[test]
    fn test_structure_kind_labels() {
        assert_eq!(StructureKind::AbstractClass.as_str(), "abstract-class");
        assert_eq!(StructureKind::AbstractClass.label(), "abstract class");
        assert!(StructureKind::Class.is_entity());
        assert!(!StructureKind::Enum.is_entity());
    }
}
