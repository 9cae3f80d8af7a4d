use crudkit_codegen::{CodeBuilder, PreparedModule};
use crudkit_core::{GeneratedFile, ModuleLayout};

/// Summary of what was generated, placed at the archive root.
pub struct ReadmeMd<'a> {
    module: &'a PreparedModule,
}

impl<'a> ReadmeMd<'a> {
    pub fn new(module: &'a PreparedModule) -> Self {
        Self { module }
    }

    fn layers(&self) -> Vec<&'static str> {
        let options = self.module.options;
        let mut layers = vec!["Entity", "DTO", "Repository", "Service", "Controller"];
        if options.views {
            layers.push("Views");
        }
        if options.tests {
            layers.push("Tests");
        }
        layers
    }
}

impl GeneratedFile for ReadmeMd<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.root("README.md")
    }

    fn render(&self) -> String {
        let module = self.module;
        let supplementals: Vec<_> = module.supplementals().collect();

        CodeBuilder::markup()
            .line("# CRUD Module")
            .blank()
            .line(&format!("Base package: `{}`", module.base_package))
            .blank()
            .line("## Classes")
            .blank()
            .each(module.classes.iter(), |b, class| {
                b.line(&format!("- {}", class.entity_name))
            })
            .when(!supplementals.is_empty(), |b| {
                b.blank()
                    .line("## Supplemental structures")
                    .blank()
                    .each(&supplementals, |b, structure| {
                        b.line(&format!("- {} ({})", structure.name, structure.kind.label()))
                    })
            })
            .blank()
            .line("## Generated layers")
            .blank()
            .each(self.layers(), |b, layer| b.line(&format!("- {}", layer)))
            .build()
    }
}
