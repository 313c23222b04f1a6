//! Schema translation engine for apisync.
//!
//! This crate turns a parsed OpenAPI [`Document`](apisync_schema::Document)
//! into the typed [`ApiIR`](apisync_ir::ApiIR) that emitters consume.
//!
//! # Module Organization
//!
//! - [`translate`] - schema nodes to target type expressions ([`TypeTranslator`])
//! - [`mappers`] - target language mappers ([`TypeScriptMapper`])
//! - [`parse`] - definitions and path operations to IR, plus exclusion rules
//! - [`pipeline`] - phased translation with plugin hooks and diagnostics

pub mod mappers;
pub mod parse;
pub mod pipeline;
pub mod translate;

pub use mappers::TypeScriptMapper;
pub use parse::{ParseOptions, parse, parse_with_diagnostics};
pub use translate::TypeTranslator;
