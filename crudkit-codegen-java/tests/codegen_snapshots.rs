//! Snapshot tests for Spring/JPA code generation.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use crudkit_codegen_java::Generator;
use crudkit_manifest::GenerationRequest;

const LIBRARY: &str = r#"
module_name = "library"
base_package = "com.acme.library"

[options]
lombok = true

[[entities]]
name = "Author"

[[entities.fields]]
name = "name"
required = true

[[entities]]
name = "Book"

[[entities.fields]]
name = "title"
required = true

[[entities.fields]]
name = "author"
reference = true
target = "Author"

[[entities]]
name = "Genre"
kind = "enum"
enum_constants = ["fiction", "poetry"]
"#;

fn generate_files(content: &str) -> Vec<(String, String)> {
    let request: GenerationRequest = content.parse().expect("Failed to parse request");
    Generator::new(&request, request.generation_options())
        .preview()
        .expect("Failed to generate")
        .into_iter()
        .map(|f| (f.path, f.content))
        .collect()
}

fn get_file<'a>(files: &'a [(String, String)], path: &str) -> Option<&'a str> {
    files
        .iter()
        .find(|(p, _)| p == path)
        .map(|(_, c)| c.as_str())
}

#[test]
fn test_book_entity() {
    let files = generate_files(LIBRARY);
    let entity = get_file(
        &files,
        "library/src/main/java/com/acme/library/entity/Book.java",
    )
    .expect("Book.java not found");
    insta::assert_snapshot!("book_entity", entity);
}

#[test]
fn test_book_service() {
    let files = generate_files(LIBRARY);
    let service = get_file(
        &files,
        "library/src/main/java/com/acme/library/service/BookService.java",
    )
    .expect("BookService.java not found");
    insta::assert_snapshot!("book_service", service);
}

#[test]
fn test_readme() {
    let files = generate_files(LIBRARY);
    let readme = get_file(&files, "README.md").expect("README.md not found");
    insta::assert_snapshot!("readme", readme);
}
