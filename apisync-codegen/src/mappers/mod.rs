//! Language-specific type mappers.

mod typescript;

pub use typescript::TypeScriptMapper;
