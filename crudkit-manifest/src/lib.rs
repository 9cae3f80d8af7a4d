// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Generation request parsing and validation for crudkit.
//!
//! A request can be written as TOML (`crudkit.toml`) or sent as the JSON
//! payload accepted by the scaffolding endpoint. Both shapes deserialize into
//! the same [`GenerationRequest`].

mod definition;
mod error;
mod options;
mod parse;
mod request;

pub use definition::{
    EntityDefinition, FieldDefinition, MethodDefinition, ParameterDefinition, RelationshipKind,
    StructureKind,
};
pub use error::{Error, Result, SourceContext};
pub use options::{GenerationOptions, OptionsConfig, PersistenceApi};
pub use parse::{parse_json, parse_toml};
pub use request::{DEFAULT_BASE_PACKAGE, DEFAULT_MODULE_NAME, GenerationRequest};
