/// Return type token for methods that return nothing.
pub const VOID: &str = "void";

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: String,
}

/// A method after resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedMethod {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    /// Emitted without a body
    pub is_abstract: bool,
    /// Body text, emitted verbatim
    pub body: Option<String>,
}

impl ProcessedMethod {
    /// Returns true unless the return type is [`VOID`].
    pub fn returns_value(&self) -> bool {
        !self.return_type.eq_ignore_ascii_case(VOID)
    }
}
