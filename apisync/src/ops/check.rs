//! Check operation - translate and collect diagnostics.

use std::{path::Path, sync::Arc};

use apisync_codegen::{
    ParseOptions,
    pipeline::{Pipeline, Severity, SnapshotPlugin},
};
use apisync_schema::Document;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline over the document and sorts diagnostics by severity.
/// When `snapshot_dir` is set, the IR after each phase is written there.
pub fn check(
    document: Document,
    options: ParseOptions,
    schema_path: &Path,
    snapshot_dir: Option<&Path>,
) -> Result<CheckReport> {
    let operation_count = document.entry_count();
    let snapshots = Arc::new(SnapshotPlugin::new());
    let ctx = Pipeline::new()
        .plugin(snapshots.clone())
        .run(document, options)
        .wrap_err("Translation failed")?;

    if let Some(dir) = snapshot_dir {
        snapshots
            .write_to_dir(dir)
            .wrap_err_with(|| format!("Failed to write snapshots to {}", dir.display()))?;
    }

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut infos = Vec::new();

    for diag in &ctx.diagnostics {
        let msg = if let Some(loc) = &diag.location {
            format!("{}\n  --> {}", diag.message, loc)
        } else {
            diag.message.clone()
        };

        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
            Severity::Info => infos.push(msg),
        }
    }

    Ok(CheckReport {
        schema_path: schema_path.to_path_buf(),
        interface_count: ctx.ir.interfaces.len(),
        endpoint_count: ctx.ir.endpoints.len(),
        excluded_count: ctx.infos().count(),
        skipped_count: operation_count
            .saturating_sub(ctx.ir.endpoints.len() + ctx.infos().count()),
        errors,
        warnings,
        infos,
    })
}
