//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a translation check.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the schema document.
    pub schema_path: PathBuf,
    /// Interfaces produced.
    pub interface_count: usize,
    /// Endpoints produced.
    pub endpoint_count: usize,
    /// Operations dropped by exclusion rules.
    pub excluded_count: usize,
    /// Path entries that are not supported verbs.
    pub skipped_count: usize,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for warning in &self.warnings {
            out.warning(warning);
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} translated", self.schema_path.display()));
        out.newline();
        out.section("Summary");
        out.key_value_indented("interfaces", &self.interface_count.to_string());
        out.key_value_indented("endpoints", &self.endpoint_count.to_string());
        out.key_value_indented("excluded", &self.excluded_count.to_string());
        if self.skipped_count > 0 {
            out.key_value_indented("skipped", &self.skipped_count.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct BufferOutput(String);

    impl Output for BufferOutput {
        fn section(&mut self, name: &str) {
            self.0.push_str(&format!("{}:\n", name));
        }

        fn key_value_indented(&mut self, key: &str, value: &str) {
            self.0.push_str(&format!("  {}: {}\n", key, value));
        }

        fn error(&mut self, msg: &str) {
            self.0.push_str(&format!("error: {}\n", msg));
        }

        fn warning(&mut self, msg: &str) {
            self.0.push_str(&format!("warning: {}\n", msg));
        }

        fn preformatted(&mut self, text: &str) {
            self.0.push_str(&format!("{}\n", text));
        }

        fn newline(&mut self) {
            self.0.push('\n');
        }
    }

    fn report() -> CheckReport {
        CheckReport {
            schema_path: PathBuf::from("openapi.json"),
            interface_count: 2,
            endpoint_count: 2,
            excluded_count: 1,
            skipped_count: 0,
            errors: Vec::new(),
            warnings: vec!["unsupported schema construct (type 'file'); translated as `any`".into()],
            infos: vec!["excluded GET /internal/stats (tag '@internal')".into()],
        }
    }

    #[test]
    fn test_render_summary() {
        let mut out = BufferOutput::default();
        report().render(&mut out);
        assert_eq!(
            out.0,
            "warning: unsupported schema construct (type 'file'); translated as `any`\n\
             info: excluded GET /internal/stats (tag '@internal')\n\
             \n\
             ✓ openapi.json translated\n\
             \n\
             Summary:\n  \
             interfaces: 2\n  \
             endpoints: 2\n  \
             excluded: 1\n"
        );
    }

    #[test]
    fn test_render_errors_skip_summary() {
        let mut out = BufferOutput::default();
        let report = CheckReport {
            errors: vec!["lint failed".into()],
            ..report()
        };
        assert!(!report.is_valid());
        report.render(&mut out);
        assert!(out.0.starts_with("error: lint failed\n"));
        assert!(!out.0.contains("Summary"));
    }
}
