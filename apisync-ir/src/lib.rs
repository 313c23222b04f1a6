//! Intermediate representation types for the apisync schema translator.
//!
//! This crate provides the types the translation engine produces and the
//! code-emission stage consumes.
//!
//! # Architecture
//!
//! ```text
//! openapi.json → apisync-schema (document) → apisync-codegen (translate) → ApiIR → emitters
//! ```
//!
//! The IR types are designed to be:
//! - Immutable once produced (built once per parse, read-only afterwards)
//! - Order preserving (interfaces and properties keep declaration order)
//! - Serializable, so emitters in other processes can read them as JSON

mod api;
mod types;

pub use api::{ApiIR, Constraints, Endpoint, Interface, Parameter, Property};
pub use types::{HttpMethod, TypeExpr};
