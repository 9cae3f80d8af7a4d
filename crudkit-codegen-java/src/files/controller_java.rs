use crudkit_codegen::PreparedModule;
use crudkit_core::{GeneratedFile, Layer, ModuleLayout, capitalize, to_camel_case};
use crudkit_ir::ProcessedClass;

use crate::{
    JavaFile,
    ast::{Annotation, Field, Method, Param, TypeDecl},
    shape::type_imports,
};

const WEB: &str = "org.springframework.web.bind.annotation";

/// The controller of a processed class.
///
/// Renders a JSON API under `/api/<segment>` or, with views enabled, a
/// form-driven controller returning `<segment>/list` and `<segment>/form`.
pub struct ControllerJava<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

/// A service the view controller needs for option lists.
struct OptionSource {
    field: String,
    service_field: String,
    service_type: String,
}

impl<'a> ControllerJava<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }

    fn id_param(&self) -> Param {
        Param::new("id", self.class.identifier_type()).annotated(Annotation::new("PathVariable"))
    }

    fn dto_param(&self, marker: Annotation) -> Param {
        Param::new("dto", self.class.dto_name.as_str()).annotated(marker)
    }

    /// One option list per reference field, backed by the target's service.
    fn option_sources(&self) -> Vec<OptionSource> {
        self.class
            .reference_fields()
            .filter(|f| self.module.classes.contains(f.target()))
            .map(|field| {
                let target = field.target();
                let service_field = if target == self.class.entity_name {
                    "service".to_string()
                } else {
                    format!("{}Service", to_camel_case(target))
                };
                OptionSource {
                    field: field.name.clone(),
                    service_field,
                    service_type: format!("{}Service", target),
                }
            })
            .collect()
    }

    /// Service dependencies in declaration order, the own service first.
    fn services(&self, sources: &[OptionSource]) -> Vec<(String, String)> {
        let mut services = vec![("service".to_string(), self.class.service_name.clone())];
        for source in sources {
            if !services.iter().any(|(name, _)| name == &source.service_field) {
                services.push((source.service_field.clone(), source.service_type.clone()));
            }
        }
        services
    }

    /// Service fields of the controller as `(field, type)` pairs.
    pub(crate) fn dependencies(&self) -> Vec<(String, String)> {
        if self.module.options.views {
            self.services(&self.option_sources())
        } else {
            self.services(&[])
        }
    }

    fn with_dependencies(&self, mut decl: TypeDecl, services: &[(String, String)]) -> TypeDecl {
        for (name, ty) in services {
            decl = decl.member(&Field::new(name.as_str(), ty.as_str()).final_());
        }
        if self.module.options.lombok {
            return decl;
        }

        let mut constructor = Method::constructor(self.class.controller_name.as_str());
        for (name, ty) in services {
            constructor = constructor
                .param(Param::new(name.as_str(), ty.as_str()))
                .body_line(format!("this.{0} = {0};", name));
        }
        decl.member(&constructor)
    }

    fn rest_decl(&self) -> TypeDecl {
        let class = self.class;
        let decl = TypeDecl::class(&class.controller_name)
            .annotation(Annotation::new("RestController"))
            .annotation(Annotation::new("RequestMapping").string(&format!("/api/{}", class.path_segment)));
        let decl = self.lombok_marker(decl);
        let decl = self.with_dependencies(decl, &self.services(&[]));

        decl.member(
            &Method::new("findAll")
                .annotation(Annotation::new("GetMapping"))
                .returns(format!("List<{}>", class.dto_name))
                .body_line("return service.findAll();"),
        )
        .member(
            &Method::new("findById")
                .annotation(Annotation::new("GetMapping").string("/{id}"))
                .returns(class.dto_name.as_str())
                .param(self.id_param())
                .body_line("return service.findById(id);"),
        )
        .member(
            &Method::new("create")
                .annotation(Annotation::new("PostMapping"))
                .annotation(Annotation::new("ResponseStatus").arg("HttpStatus.CREATED"))
                .returns(class.dto_name.as_str())
                .param(self.dto_param(Annotation::new("RequestBody")))
                .body_line("return service.create(dto);"),
        )
        .member(
            &Method::new("update")
                .annotation(Annotation::new("PutMapping").string("/{id}"))
                .returns(class.dto_name.as_str())
                .param(self.id_param())
                .param(self.dto_param(Annotation::new("RequestBody")))
                .body_line("return service.update(id, dto);"),
        )
        .member(
            &Method::new("delete")
                .annotation(Annotation::new("DeleteMapping").string("/{id}"))
                .annotation(Annotation::new("ResponseStatus").arg("HttpStatus.NO_CONTENT"))
                .param(self.id_param())
                .body_line("service.delete(id);"),
        )
    }

    fn view_decl(&self, sources: &[OptionSource]) -> TypeDecl {
        let class = self.class;
        let segment = &class.path_segment;
        let form_view = format!("return \"{}/form\";", segment);
        let redirect = format!("return \"redirect:/{}\";", segment);
        let populate = !sources.is_empty();

        let decl = TypeDecl::class(&class.controller_name)
            .annotation(Annotation::new("Controller"))
            .annotation(Annotation::new("RequestMapping").string(&format!("/{}", segment)));
        let decl = self.lombok_marker(decl);
        let mut decl = self.with_dependencies(decl, &self.services(sources));

        decl = decl
            .member(
                &Method::new("list")
                    .annotation(Annotation::new("GetMapping"))
                    .returns("String")
                    .param(Param::new("model", "Model"))
                    .body_line("model.addAttribute(\"items\", service.findAll());")
                    .body_line(format!("return \"{}/list\";", segment)),
            )
            .member(
                &Method::new("createForm")
                    .annotation(Annotation::new("GetMapping").string("/new"))
                    .returns("String")
                    .param(Param::new("model", "Model"))
                    .body_line(format!("model.addAttribute(\"item\", new {}());", class.dto_name))
                    .when(populate, |m| m.body_line("populateOptions(model);"))
                    .body_line(form_view.as_str()),
            )
            .member(
                &Method::new("editForm")
                    .annotation(Annotation::new("GetMapping").string("/{id}/edit"))
                    .returns("String")
                    .param(self.id_param())
                    .param(Param::new("model", "Model"))
                    .body_line("model.addAttribute(\"item\", service.findById(id));")
                    .when(populate, |m| m.body_line("populateOptions(model);"))
                    .body_line(form_view.as_str()),
            )
            .member(
                &Method::new("save")
                    .annotation(Annotation::new("PostMapping"))
                    .returns("String")
                    .param(self.dto_param(Annotation::new("ModelAttribute").string("item")))
                    .body_line(format!("if (dto.get{}() == null) {{", capitalize(&class.identifier().name)))
                    .body_line("    service.create(dto);")
                    .body_line("} else {")
                    .body_line(format!(
                        "    service.update(dto.get{}(), dto);",
                        capitalize(&class.identifier().name)
                    ))
                    .body_line("}")
                    .body_line(redirect.as_str()),
            )
            .member(
                &Method::new("delete")
                    .annotation(Annotation::new("PostMapping").string("/{id}/delete"))
                    .returns("String")
                    .param(self.id_param())
                    .body_line("service.delete(id);")
                    .body_line(redirect.as_str()),
            );

        if populate {
            let mut method = Method::new("populateOptions")
                .private()
                .param(Param::new("model", "Model"));
            for source in sources {
                method = method.body_line(format!(
                    "model.addAttribute(\"{}Options\", {}.findAll());",
                    source.field, source.service_field
                ));
            }
            decl = decl.member(&method);
        }
        decl
    }

    fn lombok_marker(&self, decl: TypeDecl) -> TypeDecl {
        if self.module.options.lombok {
            decl.annotation(Annotation::new("RequiredArgsConstructor"))
        } else {
            decl
        }
    }

    fn imports(&self, sources: &[OptionSource]) -> Vec<String> {
        let layout = self.module.layout();
        let class = self.class;
        let mut imports = vec![
            layout.qualified(Layer::Dto, &class.dto_name),
            layout.qualified(Layer::Service, &class.service_name),
        ];
        imports.extend(type_imports(class.identifier_type(), self.module));

        let markers: &[&str] = if self.module.options.views {
            imports.push("org.springframework.stereotype.Controller".into());
            imports.push("org.springframework.ui.Model".into());
            imports.extend(
                sources
                    .iter()
                    .map(|s| layout.qualified(Layer::Service, &s.service_type)),
            );
            &["GetMapping", "ModelAttribute", "PathVariable", "PostMapping", "RequestMapping"]
        } else {
            imports.push("java.util.List".into());
            imports.push("org.springframework.http.HttpStatus".into());
            &[
                "DeleteMapping",
                "GetMapping",
                "PathVariable",
                "PostMapping",
                "PutMapping",
                "RequestBody",
                "RequestMapping",
                "ResponseStatus",
                "RestController",
            ]
        };
        imports.extend(markers.iter().map(|m| format!("{}.{}", WEB, m)));

        if self.module.options.lombok {
            imports.push("lombok.RequiredArgsConstructor".into());
        }
        imports
    }
}

impl GeneratedFile for ControllerJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.main_java(Layer::Controller, &self.class.controller_name)
    }

    fn render(&self) -> String {
        let sources = if self.module.options.views {
            self.option_sources()
        } else {
            Vec::new()
        };
        let decl = if self.module.options.views {
            self.view_decl(&sources)
        } else {
            self.rest_decl()
        };

        JavaFile::new(self.module.layout().package(Layer::Controller))
            .imports(self.imports(&sources))
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
        name = "coAuthor"
        reference = true
        target = "Author"

        [[entities.fields]]
        name = "sequel"
        reference = true
        target = "Book"
        relationship = "one-to-one"
    "#;

    fn render(entity: &str, configure: impl FnOnce(&mut PreparedModule)) -> String {
        let mut module = prepare(LIBRARY);
        configure(&mut module);
        let class = module.classes.get(entity).unwrap().clone();
        ControllerJava::new(&class, &module).render()
    }

    #[test]
    fn test_rest_controller() {
        let code = render("Book", |_| {});
        assert!(code.contains("@RestController\n@RequestMapping(\"/api/books\")\npublic class BookController {"));
        assert!(code.contains(
            "    @PostMapping\n    @ResponseStatus(HttpStatus.CREATED)\n    public BookDto create(@RequestBody BookDto dto) {\n        return service.create(dto);\n    }"
        ));
        assert!(code.contains(
            "    @PutMapping(\"/{id}\")\n    public BookDto update(@PathVariable Long id, @RequestBody BookDto dto) {"
        ));
        assert!(code.contains(
            "    @DeleteMapping(\"/{id}\")\n    @ResponseStatus(HttpStatus.NO_CONTENT)\n    public void delete(@PathVariable Long id) {\n        service.delete(id);\n    }"
        ));
        assert!(!code.contains("AuthorService"));
        assert!(!code.contains("import org.springframework.ui.Model;"));
    }

    #[test]
    fn test_rest_controller_imports() {
        let code = render("Author", |_| {});
        assert!(code.starts_with(
            "package com.example.demo.controller;\n\
             \n\
             import com.example.demo.dto.AuthorDto;\n\
             import com.example.demo.service.AuthorService;\n\
             import java.util.List;\n\
             import org.springframework.http.HttpStatus;\n"
        ));
        assert!(code.contains("import org.springframework.web.bind.annotation.RestController;\n\n@RestController"));
    }

    #[test]
    fn test_view_controller_actions() {
        let code = render("Author", |module| module.options.views = true);
        assert!(code.contains("@Controller\n@RequestMapping(\"/authors\")\npublic class AuthorController {"));
        assert!(code.contains(
            "    public String list(Model model) {\n        model.addAttribute(\"items\", service.findAll());\n        return \"authors/list\";\n    }"
        ));
        assert!(code.contains(
            "    @PostMapping\n    public String save(@ModelAttribute(\"item\") AuthorDto dto) {\n        if (dto.getId() == null) {\n            service.create(dto);\n        } else {\n            service.update(dto.getId(), dto);\n        }\n        return \"redirect:/authors\";\n    }"
        ));
        assert!(code.contains("    @PostMapping(\"/{id}/delete\")\n"));
        // No references, no option lists
        assert!(!code.contains("populateOptions"));
        assert!(!code.contains("List"));
    }

    #[test]
    fn test_view_controller_option_services() {
        let code = render("Book", |module| module.options.views = true);
        assert!(code.contains(
            "    private final BookService service;\n\n    private final AuthorService authorService;\n\n    public BookController(BookService service, AuthorService authorService) {"
        ));
        assert!(code.contains("import com.example.demo.service.AuthorService;"));
        assert!(code.contains(
            "    private void populateOptions(Model model) {\n        model.addAttribute(\"authorOptions\", authorService.findAll());\n        model.addAttribute(\"coAuthorOptions\", authorService.findAll());\n        model.addAttribute(\"sequelOptions\", service.findAll());\n    }"
        ));
        assert!(code.contains(
            "        model.addAttribute(\"item\", new BookDto());\n        populateOptions(model);\n        return \"books/form\";"
        ));
    }

    #[test]
    fn test_lombok_controller() {
        let code = render("Book", |module| {
            module.options.lombok = true;
            module.options.views = true;
        });
        assert!(code.contains("@Controller\n@RequestMapping(\"/books\")\n@RequiredArgsConstructor\n"));
        assert!(!code.contains("public BookController("));
    }
}
