//! Archive path and package layout of a generated module.

/// Source layer of a generated Java artifact.
///
/// Each layer maps to its own sub-package and directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Entity,
    Dto,
    Repository,
    Service,
    Controller,
    /// Abstract classes, interfaces and enumerations.
    Model,
}

impl Layer {
    /// Get the sub-package / directory name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Layer::Entity => "entity",
            Layer::Dto => "dto",
            Layer::Repository => "repository",
            Layer::Service => "service",
            Layer::Controller => "controller",
            Layer::Model => "model",
        }
    }
}

/// Where a module's files live inside the archive.
///
/// # Example
///
/// ```
/// use crudkit_core::{Layer, ModuleLayout};
///
/// let layout = ModuleLayout::new("library", "com.example.library");
/// assert_eq!(layout.package(Layer::Dto), "com.example.library.dto");
/// assert_eq!(
///     layout.main_java(Layer::Entity, "Book"),
///     "library/src/main/java/com/example/library/entity/Book.java"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    module_dir: String,
    base_package: String,
}

impl ModuleLayout {
    pub fn new(module_dir: impl Into<String>, base_package: impl Into<String>) -> Self {
        Self {
            module_dir: module_dir.into(),
            base_package: base_package.into(),
        }
    }

    /// Get the sanitized module directory.
    pub fn module_dir(&self) -> &str {
        &self.module_dir
    }

    /// Get the base package (e.g., "com.example.demo").
    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    /// Fully qualified package for a layer.
    pub fn package(&self, layer: Layer) -> String {
        format!("{}.{}", self.base_package, layer.as_str())
    }

    /// Fully qualified name of a type living in a layer.
    pub fn qualified(&self, layer: Layer, type_name: &str) -> String {
        format!("{}.{}", self.package(layer), type_name)
    }

    /// Path of a main source file.
    pub fn main_java(&self, layer: Layer, type_name: &str) -> String {
        self.java_path("main", layer, type_name)
    }

    /// Path of a test source file.
    pub fn test_java(&self, layer: Layer, type_name: &str) -> String {
        self.java_path("test", layer, type_name)
    }

    /// Path of a view template (e.g., `templates/books/list.html`).
    pub fn template(&self, segment: &str, file_name: &str) -> String {
        format!(
            "{}/src/main/resources/templates/{}/{}",
            self.module_dir, segment, file_name
        )
    }

    /// Path of a file at the archive root.
    pub fn root(&self, file_name: &str) -> String {
        file_name.to_string()
    }

    fn java_path(&self, source_set: &str, layer: Layer, type_name: &str) -> String {
        format!(
            "{}/src/{}/java/{}/{}/{}.java",
            self.module_dir,
            source_set,
            self.base_package.replace('.', "/"),
            layer.as_str(),
            type_name
        )
    }
}
