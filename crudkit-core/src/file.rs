use crate::ModuleLayout;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the archive path of this file within the module layout
    fn path(&self, layout: &ModuleLayout) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Render into a path/content pair
    fn to_file(&self, layout: &ModuleLayout) -> File {
        File::new(self.path(layout), self.render())
    }
}

/// A rendered file waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: String,
    content: String,
}

impl File {
    /// Create a new file with the given path and content
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the file and return its path and content
    pub fn into_parts(self) -> (String, String) {
        (self.path, self.content)
    }
}
