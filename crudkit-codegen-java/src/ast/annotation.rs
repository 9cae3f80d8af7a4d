//! Java annotation builder.

use std::fmt;

/// A Java annotation such as `@Column(nullable = false)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    name: String,
    args: Vec<String>,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a raw argument (`name = "book"`, `HttpStatus.CREATED`, ...).
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add a quoted string argument.
    pub fn string(self, value: &str) -> Self {
        self.arg(format!("\"{}\"", value))
    }

    /// Add a `key = "value"` argument.
    pub fn named_string(self, key: &str, value: &str) -> Self {
        self.arg(format!("{} = \"{}\"", key, value))
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.args.is_empty() {
            write!(f, "({})", self.args.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_annotation() {
        assert_eq!(Annotation::new("Entity").to_string(), "@Entity");
    }

    #[test]
    fn test_annotation_args() {
        let column = Annotation::new("Column")
            .arg("nullable = false")
            .arg("unique = true");
        assert_eq!(column.to_string(), "@Column(nullable = false, unique = true)");
        assert_eq!(
            Annotation::new("Table").named_string("name", "book").to_string(),
            "@Table(name = \"book\")"
        );
        assert_eq!(
            Annotation::new("GetMapping").string("/{id}").to_string(),
            "@GetMapping(\"/{id}\")"
        );
    }
}
