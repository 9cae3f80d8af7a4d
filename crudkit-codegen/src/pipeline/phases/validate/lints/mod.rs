//! Built-in lints for request validation.

mod duplicate_entity;
mod empty_request;
mod reference_flags;

pub use duplicate_entity::DuplicateEntityLint;
pub use empty_request::EmptyRequestLint;
pub use reference_flags::ReferenceFlagsLint;
