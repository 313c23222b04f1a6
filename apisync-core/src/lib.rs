//! Core utilities and types for the apisync schema translator.
//!
//! This crate provides the string helpers and the type-mapping seam shared by
//! the document model and the translation engine.

mod type_mapper;
mod utils;

// Type mapping
pub use type_mapper::{Primitive, TypeMapper};
// String utilities
pub use utils::{sanitize_identifier, to_camel_case, to_pascal_case};
