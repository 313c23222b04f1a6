mod check;
mod parse;

use std::path::{Path, PathBuf};

use apisync_codegen::ParseOptions;
use apisync_schema::{Config, Document};
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use eyre::{Context, Result};
use parse::ParseCommand;

/// Extension trait for exiting on schema and config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for apisync_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "apisync")]
#[command(version)]
#[command(about = "Translate OpenAPI schemas into a typed IR for frontend clients")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Parse(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a schema and print the IR as JSON
    Parse(ParseCommand),

    /// Translate a schema and report diagnostics without printing the IR
    Check(CheckCommand),
}

/// Inputs shared by every command.
#[derive(Args)]
pub struct SourceArgs {
    /// Path to the OpenAPI JSON document
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Config file (defaults to ./apisync.toml, then ./pyproject.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Extra tag or description marker to exclude (repeatable)
    #[arg(short, long = "exclude", value_name = "TAG")]
    pub excludes: Vec<String>,
}

impl SourceArgs {
    /// Load the document and build parse options from config and flags.
    pub fn load(&self) -> Result<(Document, ParseOptions)> {
        let cwd = std::env::current_dir().wrap_err("Failed to read current directory")?;
        let config = resolve_config(self.config.as_deref(), &cwd).unwrap_or_exit();
        let document = Document::from_file(&self.schema).unwrap_or_exit();
        Ok((document, self.options(&config)))
    }

    fn options(&self, config: &Config) -> ParseOptions {
        self.excludes
            .iter()
            .fold(ParseOptions::from(config), |options, entry| {
                options.exclude(entry.as_str())
            })
    }
}

/// Pick the config: an explicit file, else one discovered in `dir`, else defaults.
fn resolve_config(explicit: Option<&Path>, dir: &Path) -> apisync_schema::Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path);
    }
    Ok(Config::discover(dir)?
        .map(|(_, config)| config)
        .unwrap_or_default())
}
