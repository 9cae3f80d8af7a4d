//! Field/method resolution and class preparation.
//!
//! Preparation runs in two passes: every definition is first given a unique
//! normalized name and registered in [`KnownStructures`], then each one is
//! prepared against the complete table so forward references resolve.
//!
//! [`KnownStructures`]: crudkit_ir::KnownStructures

mod preparer;
mod resolver;

pub use preparer::{ClassPreparer, assign_names, known_structures};
pub use resolver::{Resolver, normalize_type};
