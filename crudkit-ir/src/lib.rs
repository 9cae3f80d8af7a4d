//! Intermediate representation types for the crudkit scaffolding generator.
//!
//! These records are built once per generation run by the prepare phase and
//! are read-only for every emitter afterwards.
//!
//! # Architecture
//!
//! ```text
//! crudkit.toml / JSON → crudkit-manifest (parsing) → crudkit-ir (prepared records) → codegen
//! ```
//!
//! The IR types are:
//! - Language-agnostic apart from the canonical scalar type tokens
//! - Immutable after construction
//! - Ordered, so emission is deterministic

mod class;
mod field;
mod map;
mod method;
mod supplemental;
mod types;

pub use class::{DERIVED_SUFFIXES, PreparedStructure, ProcessedClass};
pub use field::{ProcessedField, Relationship};
pub use map::{KnownStructures, ProcessedClassMap};
pub use method::{Parameter, ProcessedMethod, VOID};
pub use supplemental::SupplementalStructure;
pub use types::{RelationshipKind, StructureKind};
