//! Compilation context passed through pipeline phases.

use apisync_ir::ApiIR;
use apisync_schema::Document;

use super::diagnostic::{Diagnostic, Severity};
use crate::parse::ParseOptions;

/// Context passed through all pipeline phases.
///
/// This struct carries the state of translation through each phase,
/// accumulating IR and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The document being translated.
    pub document: Document,
    /// Options the run was started with.
    pub options: ParseOptions,
    /// The IR built so far.
    pub ir: ApiIR,
    /// Diagnostics collected during translation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a document.
    pub fn new(document: Document, options: ParseOptions) -> Self {
        Self {
            document,
            options,
            ir: ApiIR::default(),
            diagnostics: Vec::new(),
        }
    }

    /// Check if any error diagnostics have been recorded.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Check if any warning diagnostics have been recorded.
    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    /// Count the number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Count the number of warning diagnostics.
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add an error diagnostic.
    pub fn add_error(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(phase, message));
    }

    /// Add a warning diagnostic.
    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    /// Add an info diagnostic.
    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Add a diagnostic with a location.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Get all info diagnostics.
    pub fn infos(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Info))
    }

    /// Consume the context, keeping only the IR.
    pub fn into_ir(self) -> ApiIR {
        self.ir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_context() -> CompilationContext {
        CompilationContext::new(Document::default(), ParseOptions::default())
    }

    #[test]
    fn test_context_creation() {
        let ctx = make_context();

        assert!(ctx.ir.is_empty());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = make_context();

        ctx.add_error("test", "test error");
        ctx.add_warning("test", "test warning");
        ctx.add_diagnostic(Diagnostic::info("test", "note").at("paths./x.get"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
        assert_eq!(ctx.infos().count(), 1);
    }

    #[test]
    fn test_context_no_errors() {
        let mut ctx = make_context();

        ctx.add_warning("test", "just a warning");
        ctx.add_info("test", "just info");

        assert!(!ctx.has_errors());
        assert!(ctx.has_warnings());
    }
}
