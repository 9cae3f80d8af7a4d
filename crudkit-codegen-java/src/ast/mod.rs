//! Java AST builders for generating classes, fields and methods.
//!
//! These provide a high-level API for constructing Java syntax,
//! which is then rendered via CodeBuilder.

mod annotation;
mod fields;
mod methods;
mod types;

pub use annotation::Annotation;
pub use fields::Field;
pub use methods::{Method, Param};
pub use types::{DeclKind, TypeDecl};
