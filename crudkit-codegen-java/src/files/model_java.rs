use crudkit_codegen::{PreparedModule, TypeMapper};
use crudkit_core::{GeneratedFile, Layer, ModuleLayout, to_constant_case};
use crudkit_ir::{StructureKind, SupplementalStructure};

use super::{accessors, declared_method, method_imports};
use crate::{
    JavaFile, JavaTypeMapper,
    ast::{Annotation, DeclKind, Field, Method, TypeDecl},
    shape::{entity_type, type_imports},
};

/// Constant emitted for an enumeration declared without any.
const PLACEHOLDER_CONSTANT: &str = "VALUE";

/// An abstract class, interface or enumeration in the model package.
pub struct ModelJava<'a> {
    structure: &'a SupplementalStructure,
    module: &'a PreparedModule,
}

impl<'a> ModelJava<'a> {
    pub fn new(structure: &'a SupplementalStructure, module: &'a PreparedModule) -> Self {
        Self { structure, module }
    }

    fn decl_kind(&self) -> DeclKind {
        match self.structure.kind {
            StructureKind::AbstractClass => DeclKind::AbstractClass,
            StructureKind::Interface => DeclKind::Interface,
            StructureKind::Enum => DeclKind::Enum,
            // Ordinary classes never reach the model package
            StructureKind::Class => DeclKind::Class,
        }
    }
}

impl GeneratedFile for ModelJava<'_> {
    fn path(&self, layout: &ModuleLayout) -> String {
        layout.main_java(Layer::Model, &self.structure.name)
    }

    fn render(&self) -> String {
        let structure = self.structure;
        let kind = self.decl_kind();
        let lombok = self.module.options.lombok;
        let mut imports = Vec::new();
        let mut decl = TypeDecl::new(kind, &structure.name);

        match kind {
            DeclKind::Enum => {
                if structure.enum_constants.is_empty() {
                    decl = decl.constant(PLACEHOLDER_CONSTANT);
                }
                for constant in &structure.enum_constants {
                    decl = decl.constant(constant.as_str());
                }
            }
            DeclKind::Interface => {
                for field in &structure.fields {
                    let ty = entity_type(field);
                    imports.extend(type_imports(&ty, self.module));
                    let value = JavaTypeMapper.default_literal(&ty);
                    decl = decl.member(&Field::constant(to_constant_case(&field.name), ty, value));
                }
            }
            DeclKind::AbstractClass | DeclKind::Class => {
                if lombok {
                    for marker in ["Getter", "Setter"] {
                        decl = decl.annotation(Annotation::new(marker));
                        imports.push(format!("lombok.{}", marker));
                    }
                }
                for field in &structure.fields {
                    let ty = entity_type(field);
                    imports.extend(type_imports(&ty, self.module));
                    decl = decl.member(&Field::new(field.name.as_str(), ty));
                }
                if !lombok {
                    decl = decl.member(&Method::constructor(structure.name.as_str()).modifiers(&["protected"]));
                    for field in &structure.fields {
                        decl = decl.members(&accessors(&field.name, &entity_type(field)));
                    }
                }
            }
        }

        for method in &structure.methods {
            imports.extend(method_imports(method, self.module));
            decl = decl.member(&declared_method(method, kind));
        }

        JavaFile::new(self.module.layout().package(Layer::Model))
            .imports(imports)
            .add(&decl)
            .render()
    }
}
