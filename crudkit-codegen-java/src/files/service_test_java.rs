use crudkit_codegen::{PreparedModule, TypeMapper};
use crudkit_core::{GeneratedFile, Layer, ModuleLayout, capitalize};
use crudkit_ir::ProcessedClass;

use crate::{
    JavaFile, JavaTypeMapper,
    ast::{Annotation, Field, Method, TypeDecl},
    shape::type_imports,
};

/// Mockito unit test checking that `findAll` maps every stored entity.
pub struct ServiceTestJava<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> ServiceTestJava<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }

    fn test_name(&self) -> String {
        format!("{}Test", self.class.service_name)
    }
}

impl GeneratedFile for ServiceTestJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.test_java(Layer::Service, &self.test_name())
    }

    fn render(&self) -> String {
        let class = self.class;
        let layout = self.module.layout();
        let identifier = capitalize(&class.identifier().name);
        let sample = JavaTypeMapper.sample_literal(class.identifier_type());

        let test = Method::new("findAllReturnsMappedDtos")
            .modifiers(&[])
            .annotation(Annotation::new("Test"))
            .body_line(format!("{0} entity = new {0}();", class.entity_name))
            .body_line(format!("entity.set{}({});", identifier, sample))
            .body_line("when(repository.findAll()).thenReturn(List.of(entity));")
            .body_line("")
            .body_line(format!("List<{}> result = service.findAll();", class.dto_name))
            .body_line("")
            .body_line("assertThat(result).hasSize(1);")
            .body_line(format!(
                "assertThat(result.get(0).get{}()).isEqualTo({});",
                identifier, sample
            ))
            .body_line("verify(repository).findAll();");

        let decl = TypeDecl::class(self.test_name())
            .package_private()
            .annotation(Annotation::new("ExtendWith").arg("MockitoExtension.class"))
            .member(&Field::new("repository", class.repository_name.as_str()).annotation(Annotation::new("Mock")))
            .member(&Field::new("service", class.service_name.as_str()).annotation(Annotation::new("InjectMocks")))
            .member(&test);

        JavaFile::new(layout.package(Layer::Service))
            .imports([
                layout.qualified(Layer::Dto, &class.dto_name),
                layout.qualified(Layer::Entity, &class.entity_name),
                layout.qualified(Layer::Repository, &class.repository_name),
                "java.util.List".to_string(),
                "org.junit.jupiter.api.Test".to_string(),
                "org.junit.jupiter.api.extension.ExtendWith".to_string(),
                "org.mockito.InjectMocks".to_string(),
                "org.mockito.Mock".to_string(),
                "org.mockito.junit.jupiter.MockitoExtension".to_string(),
            ])
            .imports(type_imports(class.identifier_type(), self.module))
            .static_import("org.assertj.core.api.Assertions.assertThat")
            .static_import("org.mockito.Mockito.verify")
            .static_import("org.mockito.Mockito.when")
            .add(&decl)
            .render()
    }
}
