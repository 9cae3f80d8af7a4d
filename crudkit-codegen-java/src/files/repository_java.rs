use crudkit_codegen::PreparedModule;
use crudkit_core::{GeneratedFile, Layer, ModuleLayout};
use crudkit_ir::ProcessedClass;

use crate::{
    JavaFile,
    ast::{Annotation, TypeDecl},
    shape::type_imports,
};

/// Spring Data repository of a processed class.
pub struct RepositoryJava<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> RepositoryJava<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }
}

impl GeneratedFile for RepositoryJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.main_java(Layer::Repository, &self.class.repository_name)
    }

    fn render(&self) -> String {
        let layout = self.module.layout();
        let class = self.class;

        let decl = TypeDecl::interface(&class.repository_name)
            .annotation(Annotation::new("Repository"))
            .extends(format!(
                "JpaRepository<{}, {}>",
                class.entity_name,
                class.identifier_type()
            ));

        JavaFile::new(layout.package(Layer::Repository))
            .import(layout.qualified(Layer::Entity, &class.entity_name))
            .import("org.springframework.data.jpa.repository.JpaRepository")
            .import("org.springframework.stereotype.Repository")
            .imports(type_imports(class.identifier_type(), self.module))
            .add(&decl)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::prepare;

    #[test]
    fn test_repository() {
        let module = prepare("[[entities]]\nname = \"book\"\n");
        let book = module.classes.get("Book").unwrap();

        assert_eq!(
            RepositoryJava::new(book, &module).render(),
            "package com.example.demo.repository;\n\
             \n\
             import com.example.demo.entity.Book;\n\
             import org.springframework.data.jpa.repository.JpaRepository;\n\
             import org.springframework.stereotype.Repository;\n\
             \n\
             @Repository\n\
             public interface BookRepository extends JpaRepository<Book, Long> {\n\
             }\n"
        );
    }

    #[test]
    fn test_repository_custom_identifier_type() {
        let module = prepare(
            r#"
            [[entities]]
            name = "Session"

            [[entities.fields]]
            name = "token"
            type = "UUID"
            identifier = true
        "#,
        );
        let session = module.classes.get("Session").unwrap();
        let code = RepositoryJava::new(session, &module).render();

        assert!(code.contains("import java.util.UUID;"));
        assert!(code.contains("extends JpaRepository<Session, UUID>"));
    }
}
