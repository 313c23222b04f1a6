//! Pipeline snapshot plugin for debugging.
//!
//! This module provides a plugin that captures the pipeline state after each
//! phase, so the IR can be inspected as it is built up.

use std::{
    fs,
    path::Path,
    sync::{PoisonError, RwLock},
};

use apisync_ir::ApiIR;
use eyre::Result;
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,
    /// The IR as it stood after the phase.
    pub ir: ApiIR,
    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// # Example
///
/// ```ignore
/// let snapshots = Arc::new(SnapshotPlugin::new());
/// let ctx = Pipeline::new().plugin(snapshots.clone()).run(document, options)?;
///
/// snapshots.write_to_dir(".apisync/debug")?;
/// ```
#[derive(Debug, Default)]
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
}

impl SnapshotPlugin {
    /// Create a new snapshot plugin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write each snapshot to `<dir>/<phase>.json`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        for snapshot in self
            .snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
        {
            let path = dir.join(format!("{}.json", snapshot.phase));
            let json = serde_json::to_string_pretty(snapshot)?;
            fs::write(&path, json)?;
        }

        Ok(())
    }

    fn capture_snapshot(&self, phase: &str, ctx: &CompilationContext) {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            ir: ctx.ir.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };
        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        self.capture_snapshot(phase, ctx);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use apisync_schema::Document;
    use serde_json::json;

    use super::*;
    use crate::{parse::ParseOptions, pipeline::Pipeline};

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_snapshots_track_phases() {
        let document = Document::from_value(&json!({
            "paths": {"/ping": {"get": {}}},
            "components": {"schemas": {"Pong": {"type": "object"}}}
        }));
        let plugin = Arc::new(SnapshotPlugin::new());
        Pipeline::new()
            .plugin(plugin.clone())
            .run(document, ParseOptions::default())
            .unwrap();

        let snapshots = plugin.snapshots();
        let phases: Vec<_> = snapshots.iter().map(|s| s.phase.as_str()).collect();
        assert_eq!(phases, ["components", "endpoints"]);

        // Endpoints are not built yet after the first phase.
        assert_eq!(snapshots[0].ir.interfaces.len(), 1);
        assert!(snapshots[0].ir.endpoints.is_empty());
        assert_eq!(snapshots[1].ir.endpoints.len(), 1);
    }
}
