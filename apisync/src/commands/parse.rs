use std::{fs, path::PathBuf};

use apisync_codegen::parse_with_diagnostics;
use clap::Args;
use eyre::{Context, Result};

use super::SourceArgs;
use crate::reports::{Output, TerminalOutput};

#[derive(Args)]
pub struct ParseCommand {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the IR to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ParseCommand {
    /// Run the parse command
    pub fn run(&self) -> Result<()> {
        let (document, options) = self.source.load()?;
        let (ir, diagnostics) = parse_with_diagnostics(&document, &options);

        let mut out = TerminalOutput::new();
        for diag in diagnostics.iter().filter(|d| d.severity.is_warning()) {
            out.warning(&diag.to_string());
        }

        let json = serde_json::to_string_pretty(&ir).wrap_err("Failed to serialize IR")?;
        match &self.output {
            Some(path) => {
                fs::write(path, json)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
                out.preformatted(&format!(
                    "✓ wrote {} interfaces and {} endpoints to {}",
                    ir.interfaces.len(),
                    ir.endpoints.len(),
                    path.display()
                ));
            }
            None => out.preformatted(&json),
        }

        Ok(())
    }
}
