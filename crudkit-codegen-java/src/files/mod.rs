//! Generated artifacts for the Spring/JPA target.

mod controller_java;
mod controller_test_java;
mod dto_java;
mod entity_java;
mod form_html;
mod list_html;
mod model_java;
mod readme_md;
mod repository_java;
mod service_java;
mod service_test_java;

pub use controller_java::ControllerJava;
pub use controller_test_java::ControllerTestJava;
use crudkit_codegen::{CodeBuilder, PreparedModule, TypeMapper};
use crudkit_core::capitalize;
use crudkit_ir::ProcessedMethod;
pub use dto_java::DtoJava;
pub use entity_java::EntityJava;
pub use form_html::FormHtml;
pub use list_html::ListHtml;
pub use model_java::ModelJava;
pub use readme_md::ReadmeMd;
pub use repository_java::RepositoryJava;
pub use service_java::ServiceJava;
pub use service_test_java::ServiceTestJava;

use crate::{
    JavaTypeMapper,
    ast::{DeclKind, Method, Param},
    shape::type_imports,
};

/// Getter and setter for a field.
fn accessors(name: &str, ty: &str) -> [Method; 2] {
    let suffix = capitalize(name);
    [
        Method::new(format!("get{}", suffix))
            .returns(ty)
            .body_line(format!("return {};", name)),
        Method::new(format!("set{}", suffix))
            .param(Param::new(name, ty))
            .body_line(format!("this.{} = {};", name, name)),
    ]
}

/// Build a declared method for a type of the given kind.
///
/// Abstract methods are bodyless. Concrete methods without body text return
/// the default literal of their return type.
fn declared_method(method: &ProcessedMethod, owner: DeclKind) -> Method {
    let mut decl = Method::new(method.name.as_str())
        .returns(method.return_type.as_str())
        .params(
            method
                .parameters
                .iter()
                .map(|p| Param::new(p.name.as_str(), p.ty.as_str())),
        );

    if method.is_abstract {
        decl = match owner {
            DeclKind::Interface => decl.modifiers(&[]),
            _ => decl.modifiers(&["public", "abstract"]),
        };
        return decl.bodyless();
    }

    if owner == DeclKind::Interface {
        decl = decl.modifiers(&["default"]);
    }
    match &method.body {
        Some(body) => decl.body(body),
        None if method.returns_value() => decl.body_line(format!(
            "return {};",
            JavaTypeMapper.default_literal(&method.return_type)
        )),
        None => decl,
    }
}

/// Thymeleaf page skeleton around `body`.
fn page(b: CodeBuilder, title: &str, body: impl FnOnce(CodeBuilder) -> CodeBuilder) -> CodeBuilder {
    b.line("<!DOCTYPE html>")
        .line("<html xmlns:th=\"http://www.thymeleaf.org\">")
        .block_with_close("<head>", "</head>", |b| {
            b.line("<meta charset=\"UTF-8\">")
                .line(&format!("<title>{}</title>", title))
        })
        .block_with_close("<body>", "</body>", body)
        .line("</html>")
}

/// Imports needed by a method's signature.
fn method_imports(method: &ProcessedMethod, module: &PreparedModule) -> Vec<String> {
    std::iter::once(method.return_type.as_str())
        .chain(method.parameters.iter().map(|p| p.ty.as_str()))
        .flat_map(|ty| type_imports(ty, module))
        .collect()
}
