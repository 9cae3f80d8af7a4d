//! Core utilities and types for the crudkit scaffolding generator.
//!
//! This crate provides the name normalizer shared by every stage of the
//! generator, and the [`GeneratedFile`] contract implemented by each emitted
//! artifact.

mod file;
mod layout;
mod naming;

// File contracts
pub use file::{File, GeneratedFile};
pub use layout::{Layer, ModuleLayout};
// Name normalization
pub use naming::{
    DEFAULT_TABLE_NAME, DEFAULT_TYPE_NAME, capitalize, constant_name, humanize, path_segment,
    pluralize, table_name, to_camel_case, to_constant_case, to_kebab_case, to_pascal_case,
    to_snake_case, type_name, unique_name,
};
