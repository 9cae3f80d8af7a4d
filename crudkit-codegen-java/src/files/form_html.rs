use crudkit_codegen::{CodeBuilder, PreparedModule};
use crudkit_core::{GeneratedFile, ModuleLayout, humanize};
use crudkit_ir::{ProcessedClass, ProcessedField};

use super::page;
use crate::{
    JavaTypeMapper,
    shape::{DtoField, dto_fields, target_identifier},
};

/// Create/edit form of an entity.
///
/// Reference fields become selects fed by the `<field>Options` model
/// attribute; collections allow multiple selection.
pub struct FormHtml<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> FormHtml<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }

    /// Property shown for an option: the target's first text field, else
    /// its identifier.
    fn option_label(&self, field: &ProcessedField) -> String {
        let classes = &self.module.classes;
        classes
            .get(field.target())
            .and_then(|target| {
                target
                    .non_identifier_fields()
                    .find(|f| !f.is_reference() && f.ty == "String")
            })
            .map(|f| f.name.clone())
            .unwrap_or_else(|| target_identifier(field, classes).to_string())
    }

    fn input(&self, b: CodeBuilder, field: &DtoField<'_>) -> CodeBuilder {
        let name = field.name();
        let source = field.source;

        if source.is_reference() {
            let mut select = format!("<select id=\"{0}\" th:field=\"*{{{0}}}\"", name);
            if source.is_collection() {
                select.push_str(" multiple");
            } else if source.required {
                select.push_str(" required");
            }
            select.push('>');

            let option = format!(
                "<option th:each=\"option : ${{{}Options}}\" th:value=\"${{option.{}}}\" th:text=\"${{option.{}}}\"></option>",
                source.name,
                target_identifier(source, &self.module.classes),
                self.option_label(source)
            );
            return b
                .line(&format!("<label for=\"{}\">{}</label>", name, humanize(&source.name)))
                .block_with_close(&select, "</select>", |b| {
                    b.when(!source.is_collection(), |b| b.line("<option value=\"\">--</option>"))
                        .line(&option)
                });
        }

        let input_type = JavaTypeMapper.input_type(&source.ty);
        let mut input = format!(
            "<input type=\"{1}\" id=\"{0}\" th:field=\"*{{{0}}}\"",
            name, input_type
        );
        if JavaTypeMapper.is_decimal(&source.ty) {
            input.push_str(" step=\"any\"");
        }
        if source.required && input_type != "checkbox" {
            input.push_str(" required");
        }
        input.push('>');

        b.line(&format!("<label for=\"{}\">{}</label>", name, humanize(&name)))
            .line(&input)
    }
}

impl GeneratedFile for FormHtml<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.template(&self.class.path_segment, "form.html")
    }

    fn render(&self) -> String {
        let class = self.class;
        let segment = &class.path_segment;
        let title = humanize(&class.entity_name);
        let fields = dto_fields(class, &self.module.classes);

        page(CodeBuilder::markup(), &title, |b| {
            b.line(&format!("<h1>{}</h1>", title)).block_with_close(
                &format!(
                    "<form th:action=\"@{{/{}}}\" th:object=\"${{item}}\" method=\"post\">",
                    segment
                ),
                "</form>",
                |b| {
                    b.line(&format!(
                        "<input type=\"hidden\" th:field=\"*{{{}}}\">",
                        class.identifier().name
                    ))
                    .each(fields.iter().filter(|f| !f.source.identifier), |b, field| {
                        b.block_with_close("<div>", "</div>", |b| self.input(b, field))
                    })
                    .line("<button type=\"submit\">Save</button>")
                    .line(&format!("<a th:href=\"@{{/{}}}\">Cancel</a>", segment))
                },
            )
        })
        .build()
    }
}
