use crudkit_codegen::PreparedModule;
use crudkit_core::{GeneratedFile, Layer, ModuleLayout};
use crudkit_ir::ProcessedClass;

use super::accessors;
use crate::{
    JavaFile,
    ast::{Annotation, Field, Method, TypeDecl},
    shape::{dto_fields, type_imports},
};

/// The transfer object of a processed class.
///
/// References are flattened to identifiers so a DTO never carries a
/// related entity graph.
pub struct DtoJava<'a> {
    class: &'a ProcessedClass,
    module: &'a PreparedModule,
}

impl<'a> DtoJava<'a> {
    pub fn new(class: &'a ProcessedClass, module: &'a PreparedModule) -> Self {
        Self { class, module }
    }
}

impl GeneratedFile for DtoJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.main_java(Layer::Dto, &self.class.dto_name)
    }

    fn render(&self) -> String {
        let lombok = self.module.options.lombok;
        let fields = dto_fields(self.class, &self.module.classes);

        let mut imports = Vec::new();
        let mut decl = TypeDecl::class(&self.class.dto_name);
        if lombok {
            for marker in ["Data", "NoArgsConstructor", "AllArgsConstructor"] {
                decl = decl.annotation(Annotation::new(marker));
                imports.push(format!("lombok.{}", marker));
            }
        }

        for field in &fields {
            let ty = field.ty();
            imports.extend(type_imports(&ty, self.module));
            decl = decl.member(&Field::new(field.name(), ty));
        }

        if !lombok {
            decl = decl.member(&Method::constructor(&self.class.dto_name));
            for field in &fields {
                decl = decl.members(&accessors(&field.name(), &field.ty()));
            }
        }

        JavaFile::new(self.module.layout().package(Layer::Dto))
            .imports(imports)
            .add(&decl)
            .render()
    }
}
