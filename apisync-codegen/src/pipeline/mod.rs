//! Compilation pipeline for schema translation.
//!
//! This module provides a [`Pipeline`] orchestrator that runs translation as
//! explicit phases. The pipeline provides:
//!
//! - Phase boundaries (components, then endpoints)
//! - Plugin hooks before and after each phase
//! - Unified diagnostics collection in a [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use apisync_codegen::{parse::ParseOptions, pipeline::Pipeline};
//!
//! let ctx = Pipeline::new().run(document, ParseOptions::new().exclude("@internal"))?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let ir = ctx.into_ir();
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
