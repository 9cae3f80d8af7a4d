use crudkit_codegen::{PreparedModule, TypeMapper};
use crudkit_core::{GeneratedFile, Layer, ModuleLayout, capitalize};
use crudkit_ir::ProcessedClass;

use super::ControllerJava;
use crate::{
    JavaFile, JavaTypeMapper,
    ast::{Annotation, Field, Method, TypeDecl},
    shape::type_imports,
};

const MATCHERS: &str = "org.springframework.test.web.servlet.result.MockMvcResultMatchers";

/// `@WebMvcTest` slice test for the list endpoint of a controller.
pub struct ControllerTestJava<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> ControllerTestJava<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }

    fn test_name(&self) -> String {
        format!("{}Test", self.class.controller_name)
    }

    fn list_test(&self) -> Method {
        let class = self.class;
        let method = Method::new("listReturnsOk")
            .modifiers(&[])
            .annotation(Annotation::new("Test"))
            .throws("Exception");

        if self.module.options.views {
            return method
                .body_line("when(service.findAll()).thenReturn(List.of());")
                .body_line("")
                .body_line(format!("mockMvc.perform(get(\"/{}\"))", class.path_segment))
                .body_line("    .andExpect(status().isOk())")
                .body_line(format!(
                    "    .andExpect(view().name(\"{}/list\"));",
                    class.path_segment
                ));
        }

        let id = &class.identifier().name;
        let id_type = class.identifier_type();
        let expectation = match JavaTypeMapper.sample_json(id_type) {
            Some(value) => format!("value({})", value),
            None => "exists()".to_string(),
        };
        method
            .body_line(format!("{0} dto = new {0}();", class.dto_name))
            .body_line(format!(
                "dto.set{}({});",
                capitalize(id),
                JavaTypeMapper.sample_literal(id_type)
            ))
            .body_line("when(service.findAll()).thenReturn(List.of(dto));")
            .body_line("")
            .body_line(format!("mockMvc.perform(get(\"/api/{}\"))", class.path_segment))
            .body_line("    .andExpect(status().isOk())")
            .body_line(format!("    .andExpect(jsonPath(\"$[0].{}\").{});", id, expectation))
    }
}

impl GeneratedFile for ControllerTestJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.test_java(Layer::Controller, &self.test_name())
    }

    fn render(&self) -> String {
        let class = self.class;
        let layout = self.module.layout();
        let views = self.module.options.views;

        let mut decl = TypeDecl::class(self.test_name())
            .package_private()
            .annotation(Annotation::new("WebMvcTest").arg(format!("{}.class", class.controller_name)))
            .member(&Field::new("mockMvc", "MockMvc").annotation(Annotation::new("Autowired")));

        let mut imports = vec![
            "java.util.List".to_string(),
            "org.junit.jupiter.api.Test".to_string(),
            "org.springframework.beans.factory.annotation.Autowired".to_string(),
            "org.springframework.boot.test.autoconfigure.web.servlet.WebMvcTest".to_string(),
            "org.springframework.boot.test.mock.mockito.MockBean".to_string(),
            "org.springframework.test.web.servlet.MockMvc".to_string(),
        ];
        for (name, ty) in ControllerJava::new(class, self.module).dependencies() {
            imports.push(layout.qualified(Layer::Service, &ty));
            decl = decl.member(&Field::new(name, ty).annotation(Annotation::new("MockBean")));
        }
        if !views {
            imports.push(layout.qualified(Layer::Dto, &class.dto_name));
            imports.extend(type_imports(class.identifier_type(), self.module));
        }
        decl = decl.member(&self.list_test());

        let file = JavaFile::new(layout.package(Layer::Controller))
            .imports(imports)
            .static_import("org.mockito.Mockito.when")
            .static_import("org.springframework.test.web.servlet.request.MockMvcRequestBuilders.get")
            .static_import(format!("{}.status", MATCHERS));
        let file = if views {
            file.static_import(format!("{}.view", MATCHERS))
        } else {
            file.static_import(format!("{}.jsonPath", MATCHERS))
        };
        file.add(&decl).render()
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
        name = "isbn"
        identifier = true

        [[entities.fields]]
        name = "author"
        reference = true
        target = "Author"
    "#;

    fn render(views: bool) -> String {
        let mut module = prepare(LIBRARY);
        module.options.views = views;
        let book = module.classes.get("Book").unwrap().clone();
        ControllerTestJava::new(&book, &module).render()
    }

    #[test]
    fn test_rest_controller_test() {
        let code = render(false);
        assert!(code.contains("@WebMvcTest(BookController.class)\nclass BookControllerTest {\n\n    @Autowired\n    private MockMvc mockMvc;\n\n    @MockBean\n    private BookService service;\n"));
        assert!(!code.contains("AuthorService"));
        assert!(code.contains(
            "        BookDto dto = new BookDto();\n        dto.setIsbn(\"1\");\n        when(service.findAll()).thenReturn(List.of(dto));\n\n        mockMvc.perform(get(\"/api/books\"))\n            .andExpect(status().isOk())\n            .andExpect(jsonPath(\"$[0].isbn\").value(\"1\"));\n"
        ));
        assert!(code.contains("import static org.springframework.test.web.servlet.result.MockMvcResultMatchers.jsonPath;\n"));
    }

    #[test]
    fn test_view_controller_test() {
        let code = render(true);
        assert!(code.contains("    @MockBean\n    private AuthorService authorService;\n"));
        assert!(code.contains("import com.example.demo.service.AuthorService;\n"));
        assert!(code.contains(
            "    @Test\n    void listReturnsOk() throws Exception {\n        when(service.findAll()).thenReturn(List.of());\n\n        mockMvc.perform(get(\"/books\"))\n            .andExpect(status().isOk())\n            .andExpect(view().name(\"books/list\"));\n    }"
        ));
        assert!(!code.contains("BookDto"));
    }
}
