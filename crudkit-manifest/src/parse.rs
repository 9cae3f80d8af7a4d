use crate::{GenerationRequest, Result, SourceContext};

/// Parse a TOML request, using `filename` in error reports.
pub fn parse_toml(content: &str, filename: &str) -> Result<GenerationRequest> {
    let ctx = SourceContext::new(content, filename);
    let request: GenerationRequest =
        toml::from_str(content).map_err(|e| ctx.toml_error(e))?;
    request.validate(&ctx)?;
    Ok(request)
}

/// Parse a JSON request, using `filename` in error reports.
pub fn parse_json(content: &str, filename: &str) -> Result<GenerationRequest> {
    let ctx = SourceContext::new(content, filename);
    let request: GenerationRequest =
        serde_json::from_str(content).map_err(|e| ctx.json_error(e))?;
    request.validate(&ctx)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, PersistenceApi, RelationshipKind, StructureKind};

    #[test]
    fn test_parse_toml_full() {
        let content = r#"
module_name = "library"
base_package = "com.acme.library"

[options]
lombok = true
persistence = "legacy"
dependencies = ["thymeleaf"]

[[entities]]
name = "Author"

[[entities.fields]]
name = "name"
type = "String"
required = true

[[entities]]
name = "Book"
table = "books"

[[entities.fields]]
name = "author"
reference = true
target = "Author"
relationship = "many-to-one"

[[entities.methods]]
name = "summary"
return_type = "String"
body = "return title;"

[[entities]]
name = "Status"
kind = "enum"
enum_constants = ["draft", "published"]
"#;
        let request = parse_toml(content, "crudkit.toml").unwrap();
        assert_eq!(request.entities.len(), 3);

        let book = &request.entities[1];
        assert_eq!(book.table.as_deref(), Some("books"));
        assert!(book.fields[0].reference);
        assert_eq!(book.fields[0].relationship, Some(RelationshipKind::ManyToOne));
        assert_eq!(book.methods[0].return_type.as_deref(), Some("String"));
        assert_eq!(book.methods[0].body.as_deref(), Some("return title;"));

        let status = &request.entities[2];
        assert_eq!(status.kind, StructureKind::Enum);
        assert_eq!(status.enum_constants, vec!["draft", "published"]);

        let options = request.generation_options();
        assert!(options.lombok);
        assert!(options.views);
        assert_eq!(options.persistence, PersistenceApi::Legacy);
    }

    #[test]
    fn test_parse_json_payload() {
        let content = r#"{
  "moduleName": "school",
  "basePackage": "com.acme.school",
  "classes": [
    {
      "name": "Shape",
      "structureType": "ABSTRACT_CLASS",
      "methods": [
        {
          "name": "area",
          "returnType": "double",
          "abstractMethod": true,
          "parameters": [{"name": "scale", "type": "int"}]
        }
      ]
    },
    {
      "name": "Student",
      "tableName": "students",
      "fields": [
        {"name": "courses", "objectType": true, "targetClassName": "Course", "relationshipType": "MANY_TO_MANY"}
      ]
    }
  ]
}"#;
        let request = parse_json(content, "request.json").unwrap();
        assert_eq!(request.sanitized_base_package(), "com.acme.school");

        let shape = &request.entities[0];
        assert_eq!(shape.kind, StructureKind::AbstractClass);
        assert!(shape.methods[0].is_abstract);
        assert_eq!(shape.methods[0].parameters[0].ty, "int");

        let student = &request.entities[1];
        assert_eq!(student.table.as_deref(), Some("students"));
        let field = &student.fields[0];
        assert!(field.reference);
        assert_eq!(field.target.as_deref(), Some("Course"));
        assert_eq!(field.relationship, Some(RelationshipKind::ManyToMany));
    }

    #[test]
    fn test_empty_request_rejected() {
        let err = parse_toml("module_name = \"x\"\n", "crudkit.toml").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert!(err.to_string().contains("at least one entity"));

        let err = parse_json(r#"{"classes": []}"#, "request.json").unwrap_err();
        assert!(matches!(*err, Error::Validation { span: Some(_), .. }));
    }

    #[test]
    fn test_parse_errors_carry_source() {
        let err = parse_toml("[[entities]\nname = 1", "crudkit.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));

        let err = parse_json("{\"classes\": [", "request.json").unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));
    }

    #[test]
    fn test_unknown_relationship_rejected() {
        let content = r#"
[[entities]]
name = "Book"

[[entities.fields]]
name = "author"
relationship = "sideways"
"#;
        let err = parse_toml(content, "crudkit.toml").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
