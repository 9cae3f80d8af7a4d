//! Java field builder.

use crudkit_codegen::{CodeFragment, Renderable};

use super::Annotation;

/// A field declaration.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    ty: String,
    annotations: Vec<Annotation>,
    modifiers: Vec<&'static str>,
    initializer: Option<String>,
}

impl Field {
    /// Create a private field.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotations: Vec::new(),
            modifiers: vec!["private"],
            initializer: None,
        }
    }

    /// Create a `public static final` constant.
    pub fn constant(name: impl Into<String>, ty: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            modifiers: vec!["public", "static", "final"],
            initializer: Some(value.into()),
            ..Self::new(name, ty)
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub fn final_(mut self) -> Self {
        self.modifiers.push("final");
        self
    }

    pub fn initializer(mut self, value: impl Into<String>) -> Self {
        self.initializer = Some(value.into());
        self
    }

    fn declaration(&self) -> String {
        let mut decl = format!("{} {} {}", self.modifiers.join(" "), self.ty, self.name);
        if let Some(value) = &self.initializer {
            decl.push_str(" = ");
            decl.push_str(value);
        }
        decl.push(';');
        decl
    }
}

impl Renderable for Field {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.annotations
            .iter()
            .map(|a| CodeFragment::line(a.to_string()))
            .chain(std::iter::once(CodeFragment::line(self.declaration())))
            .collect()
    }
}
