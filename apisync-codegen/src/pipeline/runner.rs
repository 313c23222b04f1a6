//! Pipeline orchestrator.

use apisync_schema::Document;
use eyre::{Context, Result};

use super::{
    CompilationContext, Phase, Plugin,
    phases::{ComponentsPhase, EndpointsPhase},
};
use crate::parse::ParseOptions;

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (components, endpoints) followed by
/// any user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::new())
///     .phase(MyLintPhase);
///
/// let ctx = pipeline.run(document, ParseOptions::default())?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the built-in phases only.
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on a document.
    ///
    /// Executes all phases in order:
    /// 1. ComponentsPhase - interfaces from named definitions
    /// 2. EndpointsPhase - endpoints from path operations
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if a user phase or plugin fails. The built-in phases
    /// never fail; odd input is reported through diagnostics.
    pub fn run(&self, document: Document, options: ParseOptions) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(document, options);

        let builtin_phases: [Box<dyn Phase>; 2] =
            [Box::new(ComponentsPhase), Box::new(EndpointsPhase)];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase
            .run(ctx)
            .wrap_err_with(|| format!("phase '{}' failed: {}", phase_name, phase.description()))?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    use serde_json::json;

    use super::*;
    use crate::parse;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct OrderPlugin(Arc<Mutex<Vec<String>>>);

    impl Plugin for OrderPlugin {
        fn name(&self) -> &'static str {
            "order"
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.0.lock().unwrap().push(phase.to_string());
            Ok(())
        }
    }

    struct EmptyResponseLint;

    impl Phase for EmptyResponseLint {
        fn name(&self) -> &'static str {
            "lint"
        }

        fn description(&self) -> &'static str {
            "Flag endpoints without a response body"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            let missing: Vec<_> = ctx
                .ir
                .endpoints
                .iter()
                .filter(|e| e.response_body_type.is_none())
                .map(|e| e.operation_id.clone())
                .collect();
            for id in missing {
                ctx.add_warning("lint", format!("{} has no response body", id));
            }
            Ok(())
        }
    }

    struct FailingPhase;

    impl Phase for FailingPhase {
        fn name(&self) -> &'static str {
            "emit"
        }

        fn description(&self) -> &'static str {
            "Write client modules"
        }

        fn run(&self, _ctx: &mut CompilationContext) -> Result<()> {
            eyre::bail!("disk full")
        }
    }

    fn make_test_document() -> Document {
        Document::from_value(&json!({
            "paths": {
                "/users": {
                    "get": {
                        "responses": {"200": {"content": {"application/json": {"schema": {
                            "type": "array", "items": {"$ref": "#/components/schemas/User"}
                        }}}}}
                    },
                    "delete": {"tags": ["@admin_only"]},
                    "put": {}
                }
            },
            "components": {"schemas": {
                "User": {"type": "object", "properties": {"id": {"type": "integer"}}, "required": ["id"]}
            }}
        }))
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_document(), ParseOptions::new().exclude("@admin_only"))
            .expect("pipeline should succeed");

        assert_eq!(ctx.ir.interfaces.len(), 1);
        assert_eq!(ctx.ir.endpoints.len(), 2);
        assert_eq!(ctx.infos().count(), 1);
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_pipeline_matches_parse() {
        let document = make_test_document();
        let options = ParseOptions::new().exclude("@admin_only");
        let (ir, diagnostics) = parse::parse_with_diagnostics(&document, &options);

        let ctx = Pipeline::new().run(document, options).unwrap();
        assert_eq!(ctx.diagnostics, diagnostics);
        assert_eq!(ctx.into_ir(), ir);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin);
        let _ = pipeline
            .run(make_test_document(), ParseOptions::default())
            .expect("pipeline should succeed");

        // 2 built-in phases = 2 before + 2 after hooks
        assert_eq!(before_count.load(Ordering::SeqCst), 2);
        assert_eq!(after_count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_user_phase_runs_last() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let ctx = Pipeline::new()
            .phase(EmptyResponseLint)
            .plugin(OrderPlugin(order.clone()))
            .run(make_test_document(), ParseOptions::default())
            .unwrap();

        assert_eq!(*order.lock().unwrap(), ["components", "endpoints", "lint"]);
        let warnings: Vec<_> = ctx.warnings().map(|d| d.message.as_str()).collect();
        assert_eq!(
            warnings,
            ["deleteUsers has no response body", "putUsers has no response body"]
        );
    }

    #[test]
    fn test_failing_phase_names_itself() {
        let err = Pipeline::new()
            .phase(FailingPhase)
            .run(make_test_document(), ParseOptions::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "phase 'emit' failed: Write client modules");
        assert_eq!(err.root_cause().to_string(), "disk full");
    }
}
