use indexmap::IndexMap;

use crate::{ProcessedClass, StructureKind};

/// Normalized name → kind of every structure in a request.
///
/// Built before any field is resolved so that forward references resolve
/// regardless of declaration order. The first definition of a name wins.
#[derive(Debug, Clone, Default)]
pub struct KnownStructures {
    kinds: IndexMap<String, StructureKind>,
}

impl KnownStructures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a name. Returns false if the name was already known.
    pub fn register(&mut self, name: impl Into<String>, kind: StructureKind) -> bool {
        let name = name.into();
        if self.kinds.contains_key(&name) {
            return false;
        }
        self.kinds.insert(name, kind);
        true
    }

    pub fn kind(&self, name: &str) -> Option<StructureKind> {
        self.kinds.get(name).copied()
    }

    /// Returns true if the name resolves to an ordinary class.
    pub fn is_entity(&self, name: &str) -> bool {
        self.kind(name).is_some_and(|k| k.is_entity())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.kinds.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, StructureKind)> {
        self.kinds.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}

/// Entity name → processed class, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ProcessedClassMap {
    classes: IndexMap<String, ProcessedClass>,
}

impl ProcessedClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a class keyed by its entity name.
    pub fn insert(&mut self, class: ProcessedClass) {
        self.classes.insert(class.entity_name.clone(), class);
    }

    pub fn get(&self, name: &str) -> Option<&ProcessedClass> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Identifier type of the named entity, `Long` when unknown.
    pub fn identifier_type(&self, name: &str) -> &str {
        self.get(name)
            .map(ProcessedClass::identifier_type)
            .unwrap_or("Long")
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessedClass> {
        self.classes.values()
    }
}
