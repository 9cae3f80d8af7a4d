//! Language-specific abstractions.
//!
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`TypeMapper`] - Trait for mapping canonical type tokens to a target language

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::TypeMapper;
