//! Input models for the apisync schema translator.
//!
//! This crate reads the two inputs of a translation run:
//!
//! - the OpenAPI [`Document`], parsed from JSON into an order-preserving model
//!   whose type fragments are [`SchemaNode`] variants
//! - the generator [`Config`], parsed from `apisync.toml` or the
//!   `[tool.api-sync]` table of `pyproject.toml`
//!
//! Parsing errors are reported as [`miette`] diagnostics with source spans.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod document;
mod error;

pub use config::{CONFIG_FILE, Config, Framework, HooksMode, PYPROJECT_FILE, PYPROJECT_TABLE};
pub use document::{
    Definition, DefinitionKind, Document, JSON_MEDIA_TYPE, MAX_DEPTH, Operation,
    ParameterLocation, ParameterSpec, PathItem, PropertySchema, ResponseBody, SUCCESS_STATUS,
    SchemaNode,
};
pub use error::{Error, Result, SourceContext};
