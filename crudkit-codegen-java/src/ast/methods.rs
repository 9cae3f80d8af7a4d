//! Java method builder.

use crudkit_codegen::{CodeFragment, Renderable};

use super::Annotation;

/// A parameter in a Java method.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub annotation: Option<Annotation>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            annotation: None,
        }
    }

    /// Prefix the parameter with an annotation (`@PathVariable Long id`).
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }

    fn format(&self) -> String {
        match &self.annotation {
            Some(annotation) => format!("{} {} {}", annotation, self.ty, self.name),
            None => format!("{} {}", self.ty, self.name),
        }
    }
}

/// Builder for Java methods and constructors.
///
/// A method without a body renders as a bodyless declaration
/// (`abstract` methods, interface methods).
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    annotations: Vec<Annotation>,
    modifiers: Vec<&'static str>,
    params: Vec<Param>,
    return_type: Option<String>,
    throws: Vec<String>,
    body: Option<Vec<String>>,
}

impl Method {
    /// Create a public `void` method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            modifiers: vec!["public"],
            params: Vec::new(),
            return_type: Some("void".into()),
            throws: Vec::new(),
            body: Some(Vec::new()),
        }
    }

    /// Create a public constructor.
    pub fn constructor(type_name: impl Into<String>) -> Self {
        Self {
            return_type: None,
            ..Self::new(type_name)
        }
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Replace the modifiers (`private`, `protected`, `public abstract`, ...).
    pub fn modifiers(mut self, modifiers: &[&'static str]) -> Self {
        self.modifiers = modifiers.to_vec();
        self
    }

    pub fn private(self) -> Self {
        self.modifiers(&["private"])
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn throws(mut self, exception: impl Into<String>) -> Self {
        self.throws.push(exception.into());
        self
    }

    /// Drop the body; renders as `...;`.
    pub fn bodyless(mut self) -> Self {
        self.body = None;
        self
    }

    /// Add a line to the body.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.get_or_insert_with(Vec::new).push(line.into());
        self
    }

    /// Add raw body content (can contain multiple lines).
    pub fn body(mut self, content: &str) -> Self {
        let body = self.body.get_or_insert_with(Vec::new);
        body.extend(content.trim_matches('\n').lines().map(|l| l.trim_end().to_string()));
        self
    }

    /// Apply `f` only when `condition` holds.
    pub fn when(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition { f(self) } else { self }
    }

    fn signature(&self) -> String {
        let mut sig = String::new();
        for modifier in &self.modifiers {
            sig.push_str(modifier);
            sig.push(' ');
        }
        if let Some(ret) = &self.return_type {
            sig.push_str(ret);
            sig.push(' ');
        }
        let params = self
            .params
            .iter()
            .map(Param::format)
            .collect::<Vec<_>>()
            .join(", ");
        sig.push_str(&format!("{}({})", self.name, params));
        if !self.throws.is_empty() {
            sig.push_str(&format!(" throws {}", self.throws.join(", ")));
        }
        sig
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments: Vec<CodeFragment> = self
            .annotations
            .iter()
            .map(|a| CodeFragment::line(a.to_string()))
            .collect();

        match &self.body {
            None => fragments.push(CodeFragment::line(format!("{};", self.signature()))),
            Some(lines) => fragments.push(CodeFragment::block(
                format!("{} {{", self.signature()),
                lines
                    .iter()
                    .map(|line| {
                        if line.is_empty() {
                            CodeFragment::blank()
                        } else {
                            CodeFragment::line(line.as_str())
                        }
                    })
                    .collect(),
                Some("}".to_string()),
            )),
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use crudkit_codegen::CodeBuilder;

    use super::*;

    fn build(method: &Method) -> String {
        CodeBuilder::java().render(method).build()
    }

    #[test]
    fn test_getter() {
        let getter = Method::new("getTitle")
            .returns("String")
            .body_line("return title;");
        assert_eq!(
            build(&getter),
            "public String getTitle() {\n    return title;\n}\n"
        );
    }

    #[test]
    fn test_empty_constructor() {
        assert_eq!(build(&Method::constructor("Book")), "public Book() {\n}\n");
    }

    #[test]
    fn test_annotated_params() {
        let method = Method::new("delete")
            .annotation(Annotation::new("DeleteMapping").string("/{id}"))
            .param(Param::new("id", "Long").annotated(Annotation::new("PathVariable")))
            .body_line("service.delete(id);");
        assert_eq!(
            build(&method),
            "@DeleteMapping(\"/{id}\")\npublic void delete(@PathVariable Long id) {\n    service.delete(id);\n}\n"
        );
    }

    #[test]
    fn test_bodyless_method() {
        let method = Method::new("area")
            .modifiers(&["public", "abstract"])
            .returns("Double")
            .bodyless();
        assert_eq!(build(&method), "public abstract Double area();\n");
    }

    #[test]
    fn test_multiline_body_and_throws() {
        let method = Method::new("run")
            .modifiers(&[])
            .throws("Exception")
            .body("\nfirst();\n\nsecond();\n");
        assert_eq!(
            build(&method),
            "void run() throws Exception {\n    first();\n\n    second();\n}\n"
        );
    }
}
