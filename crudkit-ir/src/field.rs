use crate::RelationshipKind;

/// Resolved target of a reference field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub kind: RelationshipKind,
    /// Normalized name of the target entity
    pub target: String,
}

/// A field after name and type resolution.
///
/// For reference fields `ty` is the target entity name; emitters wrap it in
/// a collection when the relationship is plural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedField {
    /// camelCase member name
    pub name: String,
    /// Canonical type token (e.g., `Long`, `String`, `Author`)
    pub ty: String,
    pub identifier: bool,
    pub required: bool,
    pub unique: bool,
    pub relationship: Option<Relationship>,
}

impl ProcessedField {
    /// Create a scalar field.
    pub fn scalar(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            identifier: false,
            required: false,
            unique: false,
            relationship: None,
        }
    }

    /// Create a reference field.
    pub fn reference(
        name: impl Into<String>,
        target: impl Into<String>,
        kind: RelationshipKind,
    ) -> Self {
        let target = target.into();
        Self {
            name: name.into(),
            ty: target.clone(),
            identifier: false,
            required: false,
            unique: false,
            relationship: Some(Relationship { kind, target }),
        }
    }

    /// The `id: Long` identifier injected when a class declares none.
    pub fn synthetic_identifier() -> Self {
        Self {
            name: "id".into(),
            ty: "Long".into(),
            identifier: true,
            required: true,
            unique: true,
            relationship: None,
        }
    }

    /// Returns true if this field references another entity.
    pub fn is_reference(&self) -> bool {
        self.relationship.is_some()
    }

    /// Returns true if this field holds a collection of entities.
    pub fn is_collection(&self) -> bool {
        self.relationship
            .as_ref()
            .is_some_and(|r| r.kind.is_collection())
    }

    /// Target entity name, empty for scalar fields.
    pub fn target(&self) -> &str {
        self.relationship
            .as_ref()
            .map(|r| r.target.as_str())
            .unwrap_or_default()
    }

    /// Relationship kind, if this is a reference field.
    pub fn relationship_kind(&self) -> Option<RelationshipKind> {
        self.relationship.as_ref().map(|r| r.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_identifier() {
        let id = ProcessedField::synthetic_identifier();
        assert_eq!(id.name, "id");
        assert_eq!(id.ty, "Long");
        assert!(id.identifier && id.required && id.unique);
        assert!(!id.is_reference());
    }

    #[test]
    fn test_reference_accessors() {
        let field = ProcessedField::reference("courses", "Course", RelationshipKind::ManyToMany);
        assert!(field.is_reference());
        assert!(field.is_collection());
        assert_eq!(field.target(), "Course");
        assert_eq!(field.ty, "Course");

        let scalar = ProcessedField::scalar("title", "String");
        assert_eq!(scalar.target(), "");
        assert_eq!(scalar.relationship_kind(), None);
    }
}
