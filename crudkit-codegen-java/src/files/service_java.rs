use crudkit_codegen::PreparedModule;
use crudkit_core::{GeneratedFile, Layer, ModuleLayout, capitalize};
use crudkit_ir::ProcessedClass;

use crate::{
    JavaFile,
    ast::{Annotation, Field, Method, Param, TypeDecl},
    shape::{DtoField, dto_fields, entity_type, target_identifier, type_imports},
};

/// Locals already used by the mapping methods.
const RESERVED_LOCALS: &[&str] = &["dto", "entity", "item", "itemId"];

fn local_name(name: &str) -> String {
    if RESERVED_LOCALS.contains(&name) {
        format!("{}Ref", name)
    } else {
        name.to_string()
    }
}

/// Service with the five CRUD operations and the DTO mapping.
pub struct ServiceJava<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> ServiceJava<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }

    fn not_found(&self) -> String {
        format!(
            "new ResponseStatusException(HttpStatus.NOT_FOUND, \"{} not found\")",
            self.class.entity_name
        )
    }

    fn find_all(&self) -> Method {
        Method::new("findAll")
            .returns(format!("List<{}>", self.class.dto_name))
            .body(
                "return repository.findAll()
    .stream()
    .map(this::toDto)
    .collect(Collectors.toList());",
            )
    }

    fn find_by_id(&self) -> Method {
        let class = self.class;
        Method::new("findById")
            .returns(class.dto_name.as_str())
            .param(Param::new("id", class.identifier_type()))
            .body_line(format!("{} entity = repository.findById(id)", class.entity_name))
            .body_line(format!("    .orElseThrow(() -> {});", self.not_found()))
            .body_line("return toDto(entity);")
    }

    fn create(&self) -> Method {
        let class = self.class;
        Method::new("create")
            .returns(class.dto_name.as_str())
            .param(Param::new("dto", class.dto_name.as_str()))
            .body_line(format!("{} entity = toEntity(dto);", class.entity_name))
            .body_line(format!("{} saved = repository.save(entity);", class.entity_name))
            .body_line("return toDto(saved);")
    }

    fn update(&self) -> Method {
        let class = self.class;
        Method::new("update")
            .returns(class.dto_name.as_str())
            .param(Param::new("id", class.identifier_type()))
            .param(Param::new("dto", class.dto_name.as_str()))
            .body_line(format!("{} entity = repository.findById(id)", class.entity_name))
            .body_line(format!("    .orElseThrow(() -> {});", self.not_found()))
            .body_line("applyNonIdentifierFields(dto, entity);")
            .body_line(format!("{} saved = repository.save(entity);", class.entity_name))
            .body_line("return toDto(saved);")
    }

    fn delete(&self) -> Method {
        Method::new("delete")
            .param(Param::new("id", self.class.identifier_type()))
            .body_line("if (!repository.existsById(id)) {")
            .body_line(format!("    throw {};", self.not_found()))
            .body_line("}")
            .body_line("repository.deleteById(id);")
    }

    fn to_dto(&self, fields: &[DtoField<'_>]) -> Method {
        let class = self.class;
        let classes = &self.module.classes;
        let mut method = Method::new("toDto")
            .private()
            .returns(class.dto_name.as_str())
            .param(Param::new("entity", class.entity_name.as_str()))
            .body_line(format!("{0} dto = new {0}();", class.dto_name));

        for field in fields {
            let source = field.source;
            let getter = format!("entity.get{}()", capitalize(&source.name));
            let setter = format!("dto.set{}", field.accessor());
            if !source.is_reference() {
                method = method.body_line(format!("{}({});", setter, getter));
            } else if source.is_collection() {
                method = method
                    .body_line(format!("{}({} != null", setter, getter))
                    .body_line(format!(
                        "    ? {}.stream().map({}::get{}).collect(Collectors.toList())",
                        getter,
                        source.target(),
                        capitalize(target_identifier(source, classes))
                    ))
                    .body_line("    : new ArrayList<>());");
            } else {
                method = method.body_line(format!(
                    "{}({} != null ? {}.get{}() : null);",
                    setter,
                    getter,
                    getter,
                    capitalize(target_identifier(source, classes))
                ));
            }
        }

        method.body_line("return dto;")
    }

    fn to_entity(&self) -> Method {
        let class = self.class;
        let identifier = capitalize(&class.identifier().name);
        Method::new("toEntity")
            .private()
            .returns(class.entity_name.as_str())
            .param(Param::new("dto", class.dto_name.as_str()))
            .body_line(format!("{0} entity = new {0}();", class.entity_name))
            .body_line(format!("entity.set{0}(dto.get{0}());", identifier))
            .body_line("applyNonIdentifierFields(dto, entity);")
            .body_line("return entity;")
    }

    /// Copies every non-identifier field; references become id-only stubs.
    fn apply_fields(&self, fields: &[DtoField<'_>]) -> Method {
        let class = self.class;
        let classes = &self.module.classes;
        let mut method = Method::new("applyNonIdentifierFields")
            .private()
            .param(Param::new("dto", class.dto_name.as_str()))
            .param(Param::new("entity", class.entity_name.as_str()));

        for field in fields.iter().filter(|f| !f.source.identifier) {
            let source = field.source;
            let setter = format!("entity.set{}", capitalize(&source.name));
            let getter = format!("dto.get{}()", field.accessor());
            if !source.is_reference() {
                method = method.body_line(format!("{}({});", setter, getter));
                continue;
            }

            let target = source.target();
            let target_setter = format!("set{}", capitalize(target_identifier(source, classes)));
            let local = local_name(&source.name);
            if source.is_collection() {
                method = method
                    .body_line(format!("{} {} = new ArrayList<>();", entity_type(source), local))
                    .body_line(format!("if ({} != null) {{", getter))
                    .body_line(format!(
                        "    for ({} itemId : {}) {{",
                        field.scalar_type(),
                        getter
                    ))
                    .body_line(format!("        {0} item = new {0}();", target))
                    .body_line(format!("        item.{}(itemId);", target_setter))
                    .body_line(format!("        {}.add(item);", local))
                    .body_line("    }")
                    .body_line("}")
                    .body_line(format!("{}({});", setter, local));
            } else {
                method = method
                    .body_line(format!("if ({} != null) {{", getter))
                    .body_line(format!("    {0} {1} = new {0}();", target, local))
                    .body_line(format!("    {}.{}({});", local, target_setter, getter))
                    .body_line(format!("    {}({});", setter, local))
                    .body_line("} else {")
                    .body_line(format!("    {}(null);", setter))
                    .body_line("}");
            }
        }

        method
    }

    fn imports(&self, fields: &[DtoField<'_>]) -> Vec<String> {
        let layout = self.module.layout();
        let class = self.class;
        let mut imports = vec![
            layout.qualified(Layer::Dto, &class.dto_name),
            layout.qualified(Layer::Entity, &class.entity_name),
            layout.qualified(Layer::Repository, &class.repository_name),
            "java.util.List".to_string(),
            "java.util.stream.Collectors".to_string(),
            "org.springframework.http.HttpStatus".to_string(),
            "org.springframework.stereotype.Service".to_string(),
            "org.springframework.web.server.ResponseStatusException".to_string(),
        ];
        imports.extend(type_imports(class.identifier_type(), self.module));

        for field in fields.iter().filter(|f| f.source.is_reference()) {
            imports.push(layout.qualified(Layer::Entity, field.source.target()));
            imports.extend(type_imports(field.scalar_type(), self.module));
            if field.source.is_collection() {
                imports.push("java.util.ArrayList".into());
            }
        }

        if self.module.options.lombok {
            imports.push("lombok.RequiredArgsConstructor".into());
        }
        imports
    }
}

impl GeneratedFile for ServiceJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.main_java(Layer::Service, &self.class.service_name)
    }

    fn render(&self) -> String {
        let class = self.class;
        let lombok = self.module.options.lombok;
        let fields = dto_fields(class, &self.module.classes);

        let mut decl = TypeDecl::class(&class.service_name).annotation(Annotation::new("Service"));
        if lombok {
            decl = decl.annotation(Annotation::new("RequiredArgsConstructor"));
        }
        decl = decl.member(&Field::new("repository", class.repository_name.as_str()).final_());
        if !lombok {
            decl = decl.member(
                &Method::constructor(class.service_name.as_str())
                    .param(Param::new("repository", class.repository_name.as_str()))
                    .body_line("this.repository = repository;"),
            );
        }

        let decl = decl
            .member(&self.find_all())
            .member(&self.find_by_id())
            .member(&self.create())
            .member(&self.update())
            .member(&self.delete())
            .member(&self.to_dto(&fields))
            .member(&self.to_entity())
            .member(&self.apply_fields(&fields));

        JavaFile::new(self.module.layout().package(Layer::Service))
            .imports(self.imports(&fields))
            .add(&decl)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::prepare;

    const LIBRARY: &str = r#"
        [[entities]]
        name = "Author"

        [[entities.fields]]
        name = "name"

        [[entities]]
        name = "Book"

        [[entities.fields]]
        name = "title"

        [[entities.fields]]
        name = "author"
        reference = true
        target = "Author"

        [[entities.fields]]
        name = "chapters"
        reference = true
        target = "Chapter"
        relationship = "one-to-many"

        [[entities]]
        name = "Chapter"

        [[entities.fields]]
        name = "number"
        type = "int"
        identifier = true
    "#;

    fn render(configure: impl FnOnce(&mut PreparedModule)) -> String {
        let mut module = prepare(LIBRARY);
        configure(&mut module);
        let book = module.classes.get("Book").unwrap().clone();
        ServiceJava::new(&book, &module).render()
    }

    #[test]
    fn test_service_imports() {
        let code = render(|_| {});
        assert!(code.starts_with(
            "package com.example.demo.service;\n\
             \n\
             import com.example.demo.dto.BookDto;\n\
             import com.example.demo.entity.Author;\n\
             import com.example.demo.entity.Book;\n\
             import com.example.demo.entity.Chapter;\n\
             import com.example.demo.repository.BookRepository;\n\
             import java.util.ArrayList;\n\
             import java.util.List;\n\
             import java.util.stream.Collectors;\n\
             import org.springframework.http.HttpStatus;\n\
             import org.springframework.stereotype.Service;\n\
             import org.springframework.web.server.ResponseStatusException;\n\
             \n\
             @Service\n\
             public class BookService {\n"
        ));
    }

    #[test]
    fn test_service_not_found_paths() {
        let code = render(|_| {});
        assert_eq!(code.matches("HttpStatus.NOT_FOUND, \"Book not found\"").count(), 3);
        assert!(code.contains(
            "    public void delete(Long id) {\n        if (!repository.existsById(id)) {\n            throw new ResponseStatusException(HttpStatus.NOT_FOUND, \"Book not found\");\n        }\n        repository.deleteById(id);\n    }"
        ));
    }

    #[test]
    fn test_service_to_dto_flattens() {
        let code = render(|_| {});
        assert!(code.contains(
            "        dto.setAuthorId(entity.getAuthor() != null ? entity.getAuthor().getId() : null);\n"
        ));
        assert!(code.contains(
            "        dto.setChapterIds(entity.getChapters() != null\n            ? entity.getChapters().stream().map(Chapter::getNumber).collect(Collectors.toList())\n            : new ArrayList<>());\n"
        ));
    }

    #[test]
    fn test_service_builds_reference_stubs() {
        let code = render(|_| {});
        assert!(code.contains(
            "        if (dto.getAuthorId() != null) {\n            Author author = new Author();\n            author.setId(dto.getAuthorId());\n            entity.setAuthor(author);\n        } else {\n            entity.setAuthor(null);\n        }\n"
        ));
        assert!(code.contains(
            "        List<Chapter> chapters = new ArrayList<>();\n        if (dto.getChapterIds() != null) {\n            for (Integer itemId : dto.getChapterIds()) {\n                Chapter item = new Chapter();\n                item.setNumber(itemId);\n                chapters.add(item);\n            }\n        }\n        entity.setChapters(chapters);\n"
        ));
    }

    #[test]
    fn test_service_update_skips_identifier() {
        let code = render(|_| {});
        let apply = code
            .split("private void applyNonIdentifierFields(BookDto dto, Book entity) {")
            .nth(1)
            .unwrap();
        assert!(apply.contains("entity.setTitle(dto.getTitle());"));
        assert!(!apply.contains("entity.setId("));
        assert!(code.contains("        entity.setId(dto.getId());\n        applyNonIdentifierFields(dto, entity);\n        return entity;"));
    }

    #[test]
    fn test_service_constructor_or_lombok() {
        let plain = render(|_| {});
        assert!(plain.contains("    private final BookRepository repository;\n"));
        assert!(plain.contains("    public BookService(BookRepository repository) {\n        this.repository = repository;\n    }"));

        let lombok = render(|module| module.options.lombok = true);
        assert!(lombok.contains("@Service\n@RequiredArgsConstructor\npublic class BookService {"));
        assert!(lombok.contains("import lombok.RequiredArgsConstructor;"));
        assert!(!lombok.contains("public BookService("));
    }
}
