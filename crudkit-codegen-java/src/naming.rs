//! Java-specific naming conventions.

use crudkit_codegen::NamingConvention;
use crudkit_core::{to_camel_case, to_constant_case, to_pascal_case};

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    text_to_type: to_pascal_case,
    text_to_member: to_camel_case,
    text_to_constant: to_constant_case,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "false",
        "final", "finally", "float", "for", "goto", "if", "implements", "import", "instanceof",
        "int", "interface", "long", "native", "new", "null", "package", "private", "protected",
        "public", "record", "return", "short", "static", "strictfp", "super", "switch",
        "synchronized", "this", "throw", "throws", "transient", "true", "try", "var", "void",
        "volatile", "while", "yield",
    ],
    escape_reserved: escape_java_reserved,
    reserved_types: &[
        // java.lang
        "Boolean", "Double", "Exception", "Float", "Integer", "Long", "Object", "Override",
        "Short", "String",
        // java.math, java.time, java.util
        "ArrayList", "BigDecimal", "BigInteger", "Collectors", "HashMap", "HashSet", "Instant",
        "List", "LocalDate", "LocalDateTime", "LocalTime", "Map", "Optional", "Set", "UUID",
        // persistence
        "Column", "Entity", "GeneratedValue", "GenerationType", "Id", "JoinColumn", "JoinTable",
        "ManyToMany", "ManyToOne", "OneToMany", "OneToOne", "Table",
        // lombok
        "AllArgsConstructor", "Data", "Getter", "NoArgsConstructor", "RequiredArgsConstructor",
        "Setter",
        // spring
        "Autowired", "Controller", "DeleteMapping", "GetMapping", "HttpStatus", "JpaRepository",
        "Model", "ModelAttribute", "PathVariable", "PostMapping", "PutMapping", "Repository",
        "RequestBody", "RequestMapping", "ResponseStatus", "ResponseStatusException",
        "RestController", "Service",
        // tests
        "Assertions", "ExtendWith", "InjectMocks", "Mock", "MockBean", "MockMvc",
        "MockMvcRequestBuilders", "MockMvcResultMatchers", "Mockito", "MockitoExtension", "Test",
        "WebMvcTest",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_naming_type() {
        assert_eq!(JAVA_NAMING.type_name("order line"), "OrderLine");
        assert_eq!(JAVA_NAMING.type_name("!!!"), "");
    }

    #[test]
    fn test_java_naming_member() {
        assert_eq!(JAVA_NAMING.member_name("First Name"), "firstName");
        assert_eq!(JAVA_NAMING.member_name("class"), "class_");
        assert_eq!(JAVA_NAMING.member_name("New"), "new_");
    }

    #[test]
    fn test_java_reserved_words() {
        assert!(JAVA_NAMING.is_reserved("package"));
        assert!(JAVA_NAMING.is_reserved("default"));
        assert!(!JAVA_NAMING.is_reserved("title"));
    }

    #[test]
    fn test_java_reserved_types() {
        assert!(JAVA_NAMING.is_reserved_type("Table"));
        assert!(JAVA_NAMING.is_reserved_type("JpaRepository"));
        assert!(JAVA_NAMING.is_reserved_type("String"));
        assert!(!JAVA_NAMING.is_reserved_type("Book"));
    }

    #[test]
    fn test_java_naming_constant() {
        assert_eq!(JAVA_NAMING.constant_name("max size"), "MAX_SIZE");
    }
}
