use crudkit_codegen::{CodeBuilder, PreparedModule};
use crudkit_core::{GeneratedFile, ModuleLayout, humanize, pluralize};
use crudkit_ir::ProcessedClass;

use super::page;
use crate::shape::dto_fields;

/// Table view listing every instance of an entity.
pub struct ListHtml<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> ListHtml<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }
}

impl GeneratedFile for ListHtml<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.template(&self.class.path_segment, "list.html")
    }

    fn render(&self) -> String {
        let class = self.class;
        let segment = &class.path_segment;
        let id = &class.identifier().name;
        let title = humanize(&pluralize(&class.entity_name));
        let columns: Vec<String> = dto_fields(class, &self.module.classes)
            .iter()
            .map(|f| f.name())
            .collect();

        page(CodeBuilder::markup(), &title, |b| {
            b.line(&format!("<h1>{}</h1>", title))
                .line(&format!(
                    "<a th:href=\"@{{/{}/new}}\">New {}</a>",
                    segment,
                    humanize(&class.entity_name)
                ))
                .block_with_close("<table>", "</table>", |b| {
                    b.block_with_close("<thead>", "</thead>", |b| {
                        b.block_with_close("<tr>", "</tr>", |b| {
                            b.each(&columns, |b, column| {
                                b.line(&format!("<th>{}</th>", humanize(column)))
                            })
                            .line("<th>Actions</th>")
                        })
                    })
                    .block_with_close("<tbody>", "</tbody>", |b| {
                        b.block_with_close("<tr th:each=\"item : ${items}\">", "</tr>", |b| {
                            b.each(&columns, |b, column| {
                                b.line(&format!("<td th:text=\"${{item.{}}}\"></td>", column))
                            })
                            .block_with_close("<td>", "</td>", |b| {
                                b.line(&format!(
                                    "<a th:href=\"@{{/{}/{{id}}/edit(id=${{item.{}}})}}\">Edit</a>",
                                    segment, id
                                ))
                                .block_with_close(
                                    &format!(
                                        "<form th:action=\"@{{/{}/{{id}}/delete(id=${{item.{}}})}}\" method=\"post\">",
                                        segment, id
                                    ),
                                    "</form>",
                                    |b| b.line("<button type=\"submit\">Delete</button>"),
                                )
                            })
                        })
                    })
                })
        })
        .build()
    }
}
