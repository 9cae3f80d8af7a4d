//! File registration for declarative code generation.
//!
//! Emitters register rendered files in the order they should appear in the
//! output; the registry then previews them or streams them into an
//! [`ArchiveWriter`].
//!
//! # Example
//!
//! ```
//! use crudkit_codegen::generation::{FileEntry, FileRegistry};
//!
//! let mut registry = FileRegistry::new();
//! registry.register(FileEntry::source("shop/src/main/java/Book.java", "class Book {}\n"));
//! registry.register(FileEntry::summary("README.md", "# CRUD Module\n"));
//!
//! let paths: Vec<_> = registry.entries().map(|e| e.path.as_str()).collect();
//! assert_eq!(paths, vec!["shop/src/main/java/Book.java", "README.md"]);
//! ```

use crudkit_core::{GeneratedFile, ModuleLayout};
use eyre::{Result, WrapErr};

use super::ArchiveWriter;

/// Category of generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileCategory {
    /// Java sources under `src/main/java`
    Source,
    /// View templates under `src/main/resources/templates`
    Template,
    /// Java sources under `src/test/java`
    Test,
    /// The README summarizing the module
    Summary,
}

impl FileCategory {
    /// Get the lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            FileCategory::Source => "source",
            FileCategory::Template => "template",
            FileCategory::Test => "test",
            FileCategory::Summary => "summary",
        }
    }
}

/// An entry in the file registry representing a file to be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Archive path.
    pub path: String,
    /// File content.
    pub content: String,
    pub category: FileCategory,
}

impl FileEntry {
    /// Create a new file entry with the given category.
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        category: FileCategory,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            category,
        }
    }

    /// Create a main source entry.
    pub fn source(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Source)
    }

    /// Create a view template entry.
    pub fn template(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Template)
    }

    /// Create a test source entry.
    pub fn test(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Test)
    }

    /// Create a summary entry.
    pub fn summary(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, content, FileCategory::Summary)
    }

    /// Render a GeneratedFile into an entry.
    pub fn from_generated<F: GeneratedFile>(
        file: &F,
        layout: &ModuleLayout,
        category: FileCategory,
    ) -> Self {
        let (path, content) = file.to_file(layout).into_parts();
        Self::new(path, content, category)
    }
}

/// Registry for collecting generated files in emission order.
#[derive(Debug, Default)]
pub struct FileRegistry {
    entries: Vec<FileEntry>,
}

impl FileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file entry.
    pub fn register(&mut self, entry: FileEntry) {
        tracing::debug!(path = %entry.path, category = entry.category.as_str(), "registered file");
        self.entries.push(entry);
    }

    /// Register multiple file entries.
    pub fn register_all(&mut self, entries: impl IntoIterator<Item = FileEntry>) {
        for entry in entries {
            self.register(entry);
        }
    }

    /// Get all registered entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter()
    }

    /// Get entries for a specific category.
    pub fn entries_by_category(&self, category: FileCategory) -> impl Iterator<Item = &FileEntry> {
        self.entries.iter().filter(move |e| e.category == category)
    }

    /// Find an entry by path.
    pub fn get(&self, path: &str) -> Option<&FileEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Get the number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preview all files (returns path and content pairs).
    pub fn preview(&self) -> Vec<PreviewEntry> {
        self.entries()
            .map(|e| PreviewEntry {
                path: e.path.clone(),
                content: e.content.clone(),
                category: e.category,
            })
            .collect()
    }

    /// Write every entry, in order, into the given writer.
    ///
    /// The first failing entry aborts the whole write.
    pub fn write_to(&self, writer: &mut impl ArchiveWriter) -> Result<WriteStats> {
        let mut stats = WriteStats::default();

        for entry in self.entries() {
            writer
                .write_entry(&entry.path, entry.content.as_bytes())
                .wrap_err_with(|| format!("failed to write '{}'", entry.path))?;
            stats.written += 1;
            stats.bytes += entry.content.len();
            stats.written_paths.push(entry.path.clone());
        }

        Ok(stats)
    }

    /// Clear all registered entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// A preview entry for displaying what would be generated.
#[derive(Debug, Clone)]
pub struct PreviewEntry {
    /// Archive path.
    pub path: String,
    /// File content.
    pub content: String,
    /// File category.
    pub category: FileCategory,
}

/// Statistics from a write operation.
#[derive(Debug, Default)]
pub struct WriteStats {
    /// Number of entries written.
    pub written: usize,
    /// Uncompressed content size in bytes.
    pub bytes: usize,
    /// Paths of written entries.
    pub written_paths: Vec<String>,
}
