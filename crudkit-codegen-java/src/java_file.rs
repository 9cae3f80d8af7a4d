//! JavaFile abstraction for structured Java file generation.
//!
//! Provides a high-level API for generating Java files with a package
//! declaration, sorted imports and body content.

use crudkit_codegen::{CodeBuilder, CodeFragment, ImportCollector, Renderable};

/// A structured representation of a Java source file.
///
/// Imports are fully qualified and sorted; static imports form a second
/// group. Imports from the file's own package are dropped on render.
///
/// # Example
///
/// ```
/// use crudkit_codegen_java::{JavaFile, TypeDecl};
///
/// let code = JavaFile::new("com.acme.repository")
///     .import("com.acme.entity.Book")
///     .import("com.acme.repository.Other")
///     .add(&TypeDecl::interface("BookRepository"))
///     .render();
///
/// assert_eq!(
///     code,
///     "package com.acme.repository;\n\nimport com.acme.entity.Book;\n\npublic interface BookRepository {\n}\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    imports: ImportCollector,
    static_imports: ImportCollector,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            imports: ImportCollector::new(),
            static_imports: ImportCollector::new(),
            body: Vec::new(),
        }
    }

    /// Add a fully qualified import.
    pub fn import(mut self, path: impl AsRef<str>) -> Self {
        self.imports.add_qualified(path.as_ref(), ".");
        self
    }

    /// Add several fully qualified imports.
    pub fn imports<S: AsRef<str>>(mut self, paths: impl IntoIterator<Item = S>) -> Self {
        for path in paths {
            self.imports.add_qualified(path.as_ref(), ".");
        }
        self
    }

    /// Add a static import (`org.mockito.Mockito.when`).
    pub fn static_import(mut self, path: impl AsRef<str>) -> Self {
        self.static_imports.add_qualified(path.as_ref(), ".");
        self
    }

    /// Add a top-level node to the body.
    pub fn add(mut self, node: &impl Renderable) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render the file.
    pub fn render(&self) -> String {
        let mut imports = self.imports.clone();
        imports.remove_module(&self.package);
        imports.remove_module("java.lang");

        let mut builder = CodeBuilder::java()
            .line(&format!("package {};", self.package))
            .blank();

        if !imports.is_empty() {
            builder = builder
                .each(imports.qualified("."), |b, path| {
                    b.line(&format!("import {};", path))
                })
                .blank();
        }

        if !self.static_imports.is_empty() {
            builder = builder
                .each(self.static_imports.qualified("."), |b, path| {
                    b.line(&format!("import static {};", path))
                })
                .blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder = builder.blank();
            }
            builder = builder.render(fragments);
        }

        builder.build()
    }
}
