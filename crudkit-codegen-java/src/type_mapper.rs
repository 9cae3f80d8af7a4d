//! Java type mapping.

use crudkit_codegen::TypeMapper;

/// Maps canonical type tokens to Java imports and literals.
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaTypeMapper;

impl TypeMapper for JavaTypeMapper {
    fn language(&self) -> &'static str {
        "java"
    }

    fn import_for(&self, ty: &str) -> Option<&'static str> {
        match ty {
            "BigDecimal" => Some("java.math.BigDecimal"),
            "BigInteger" => Some("java.math.BigInteger"),
            "LocalDate" => Some("java.time.LocalDate"),
            "LocalDateTime" => Some("java.time.LocalDateTime"),
            "LocalTime" => Some("java.time.LocalTime"),
            "Instant" => Some("java.time.Instant"),
            "UUID" => Some("java.util.UUID"),
            "List" => Some("java.util.List"),
            "ArrayList" => Some("java.util.ArrayList"),
            "Set" => Some("java.util.Set"),
            "HashSet" => Some("java.util.HashSet"),
            "Map" => Some("java.util.Map"),
            "HashMap" => Some("java.util.HashMap"),
            "Optional" => Some("java.util.Optional"),
            _ => None,
        }
    }

    fn default_literal(&self, ty: &str) -> &'static str {
        match ty {
            "String" => "\"\"",
            "Long" => "0L",
            "Integer" => "0",
            "Short" => "(short) 0",
            "Double" => "0.0",
            "Float" => "0.0f",
            "BigDecimal" => "BigDecimal.ZERO",
            "BigInteger" => "BigInteger.ZERO",
            "Boolean" => "false",
            "LocalDate" => "LocalDate.EPOCH",
            "LocalDateTime" => "LocalDateTime.MIN",
            "LocalTime" => "LocalTime.MIDNIGHT",
            "Instant" => "Instant.EPOCH",
            _ => "null",
        }
    }

    fn collection_of(&self, ty: &str) -> String {
        format!("List<{}>", ty)
    }

    fn sample_literal(&self, ty: &str) -> String {
        match ty {
            "Long" => "1L".into(),
            "Integer" => "1".into(),
            "String" => "\"1\"".into(),
            "UUID" => "UUID.fromString(\"00000000-0000-0000-0000-000000000001\")".into(),
            other => self.default_literal(other).into(),
        }
    }
}

impl JavaTypeMapper {
    /// HTML input type used for a scalar field in form templates.
    pub fn input_type(&self, ty: &str) -> &'static str {
        match ty {
            "Long" | "Integer" | "Short" | "Double" | "Float" | "BigDecimal" | "BigInteger" => {
                "number"
            }
            "Boolean" => "checkbox",
            "LocalDate" => "date",
            "LocalDateTime" => "datetime-local",
            "LocalTime" => "time",
            _ => "text",
        }
    }

    /// Returns true for types whose form input needs `step="any"`.
    pub fn is_decimal(&self, ty: &str) -> bool {
        matches!(ty, "Double" | "Float" | "BigDecimal")
    }

    /// JSON rendering of [`TypeMapper::sample_literal`], when it has a stable one.
    pub fn sample_json(&self, ty: &str) -> Option<&'static str> {
        match ty {
            "Long" | "Integer" => Some("1"),
            "String" => Some("\"1\""),
            _ => None,
        }
    }
}
