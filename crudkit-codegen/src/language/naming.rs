//! Naming conventions for different target languages.

use crudkit_core::{to_camel_case, to_constant_case, to_pascal_case};

/// Language-specific naming conventions.
///
/// Defines how free-text names become type, member and constant names, and
/// how reserved words are escaped.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform free text to a type name (e.g., "order line" -> "OrderLine")
    pub text_to_type: fn(&str) -> String,
    /// Transform free text to a member name (e.g., "order line" -> "orderLine")
    pub text_to_member: fn(&str) -> String,
    /// Transform free text to a constant name (e.g., "in progress" -> "IN_PROGRESS")
    pub text_to_constant: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "class" -> "class_" in Java)
    pub escape_reserved: fn(&str) -> String,
    /// Simple names of library types generated code imports or relies on.
    /// A generated type with one of these names would shadow the import.
    pub reserved_types: &'static [&'static str],
}

fn keep(name: &str) -> String {
    name.to_string()
}

impl NamingConvention {
    /// Case conversion only, with no reserved words.
    pub const PLAIN: Self = Self {
        text_to_type: to_pascal_case,
        text_to_member: to_camel_case,
        text_to_constant: to_constant_case,
        reserved_words: &[],
        escape_reserved: keep,
        reserved_types: &[],
    };

    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a generated type name would clash with a library type.
    pub fn is_reserved_type(&self, name: &str) -> bool {
        self.reserved_types.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    /// Transform and make safe for use as a type name. May be empty.
    pub fn type_name(&self, name: &str) -> String {
        let transformed = (self.text_to_type)(name);
        if transformed.is_empty() {
            return transformed;
        }
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a field, method or parameter name.
    /// May be empty.
    pub fn member_name(&self, name: &str) -> String {
        let transformed = (self.text_to_member)(name);
        if transformed.is_empty() {
            return transformed;
        }
        self.safe_name(&transformed)
    }

    /// Transform and make safe for use as a constant name. May be empty.
    pub fn constant_name(&self, name: &str) -> String {
        let transformed = (self.text_to_constant)(name);
        if transformed.is_empty() {
            return transformed;
        }
        self.safe_name(&transformed)
    }
}

impl Default for NamingConvention {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suffix(name: &str) -> String {
        format!("{}_", name)
    }

    const TEST_NAMING: NamingConvention = NamingConvention {
        reserved_words: &["class", "default"],
        escape_reserved: suffix,
        reserved_types: &["List"],
        ..NamingConvention::PLAIN
    };

    #[test]
    fn test_plain_naming() {
        let naming = NamingConvention::PLAIN;
        assert_eq!(naming.type_name("order line"), "OrderLine");
        assert_eq!(naming.member_name("order line"), "orderLine");
        assert_eq!(naming.constant_name("in progress"), "IN_PROGRESS");
        assert_eq!(naming.member_name("class"), "class");
    }

    #[test]
    fn test_reserved_words_escaped() {
        assert!(TEST_NAMING.is_reserved("class"));
        assert_eq!(TEST_NAMING.member_name("Class"), "class_");
        assert_eq!(TEST_NAMING.member_name("default"), "default_");
        assert_eq!(TEST_NAMING.member_name("title"), "title");
    }

    #[test]
    fn test_reserved_types() {
        assert!(TEST_NAMING.is_reserved_type("List"));
        assert!(!TEST_NAMING.is_reserved_type("Book"));
        assert!(!NamingConvention::PLAIN.is_reserved_type("List"));
    }

    #[test]
    fn test_empty_stays_empty() {
        assert_eq!(TEST_NAMING.type_name("!!!"), "");
        assert_eq!(TEST_NAMING.member_name(""), "");
        assert_eq!(TEST_NAMING.constant_name("--"), "");
    }
}
