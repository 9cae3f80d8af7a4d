//! Java type declaration builder.

use crudkit_codegen::{CodeFragment, Renderable};

use super::Annotation;

/// The flavor of a top-level type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    AbstractClass,
    Interface,
    Enum,
}

impl DeclKind {
    fn keyword(&self) -> &'static str {
        match self {
            DeclKind::Class => "public class",
            DeclKind::AbstractClass => "public abstract class",
            DeclKind::Interface => "public interface",
            DeclKind::Enum => "public enum",
        }
    }
}

/// Builder for a top-level class, interface or enum.
///
/// Members are separated by one blank line; enum constants come first.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    kind: DeclKind,
    name: String,
    annotations: Vec<Annotation>,
    extends: Option<String>,
    constants: Vec<String>,
    members: Vec<Vec<CodeFragment>>,
    package_private: bool,
}

impl TypeDecl {
    pub fn new(kind: DeclKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            annotations: Vec::new(),
            extends: None,
            constants: Vec::new(),
            members: Vec::new(),
            package_private: false,
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Class, name)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(DeclKind::Interface, name)
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends = Some(ty.into());
        self
    }

    /// Add an enum constant.
    pub fn constant(mut self, name: impl Into<String>) -> Self {
        self.constants.push(name.into());
        self
    }

    /// Drop the `public` modifier (test classes).
    pub fn package_private(mut self) -> Self {
        self.package_private = true;
        self
    }

    /// Add a member (field, method, constructor).
    pub fn member(mut self, node: &impl Renderable) -> Self {
        self.members.push(node.to_fragments());
        self
    }

    /// Add every member of a sequence.
    pub fn members<'a, R: Renderable + 'a>(mut self, nodes: impl IntoIterator<Item = &'a R>) -> Self {
        for node in nodes {
            self.members.push(node.to_fragments());
        }
        self
    }

    fn header(&self) -> String {
        let keyword = self.kind.keyword();
        let keyword = if self.package_private {
            keyword.trim_start_matches("public ")
        } else {
            keyword
        };
        match &self.extends {
            Some(parent) => format!("{} {} extends {} {{", keyword, self.name, parent),
            None => format!("{} {} {{", keyword, self.name),
        }
    }

    fn constants_fragments(&self) -> Vec<CodeFragment> {
        let last = self.constants.len().saturating_sub(1);
        let terminator = if self.members.is_empty() { "" } else { ";" };
        self.constants
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let sep = if i == last { terminator } else { "," };
                CodeFragment::line(format!("{}{}", c, sep))
            })
            .collect()
    }
}

impl Renderable for TypeDecl {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::line(a.to_string()))
            .collect();

        let mut sections = Vec::new();
        if !self.constants.is_empty() {
            sections.push(self.constants_fragments());
        }
        sections.extend(self.members.iter().cloned());

        let mut body = Vec::new();
        for section in sections {
            body.push(CodeFragment::blank());
            body.extend(section);
        }

        fragments.push(CodeFragment::block(self.header(), body, Some("}".to_string())));
        fragments
    }
}
