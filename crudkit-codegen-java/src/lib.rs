//! Spring/JPA emitters for the crudkit scaffolding generator.
//!
//! Turns a prepared module into entity, DTO, repository, service and
//! controller sources, optional Thymeleaf views and tests, model types for
//! supplemental structures and a README.

mod generator;
mod java_file;
mod naming;
mod shape;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Annotation, DeclKind, Field, Method, Param, TypeDecl};
pub use generator::{GenerateResult, Generator, register_module};
pub use java_file::JavaFile;
pub use naming::JAVA_NAMING;
pub use type_mapper::JavaTypeMapper;
