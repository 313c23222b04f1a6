//! Config loading from files and strings.

use std::path::{Path, PathBuf};

use miette::SourceSpan;

use super::Config;
use crate::{Error, Result, error::SourceContext};

/// Dedicated config file name.
pub const CONFIG_FILE: &str = "apisync.toml";

/// Python project file that may carry the config as a tool table.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Table inside `pyproject.toml` holding the config.
pub const PYPROJECT_TABLE: &str = "api-sync";

impl Config {
    /// Parse a config from TOML text.
    ///
    /// Files named `pyproject.toml` are read from their `[tool.api-sync]`
    /// table (absent table means defaults); any other file is read from its
    /// top-level keys.
    pub fn from_toml_str(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let config = if is_pyproject(filename) {
            let project: toml::Table =
                toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
            match project
                .get("tool")
                .and_then(|tool| tool.get(PYPROJECT_TABLE))
                .cloned()
            {
                Some(table) => table.try_into::<Config>().map_err(|e| source_ctx.parse_error(e))?,
                None => Config::default(),
            }
        } else {
            toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?
        };

        if let Some((message, key)) = config.check() {
            let span = find_key_span(content, key);
            return Err(source_ctx.validation_error_at(message, span));
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Look for a config in `dir`: `apisync.toml` first, then `pyproject.toml`.
    ///
    /// Returns `None` when neither file exists, so callers can fall back to
    /// [`Config::default`].
    pub fn discover(dir: impl AsRef<Path>) -> Result<Option<(PathBuf, Self)>> {
        let dir = dir.as_ref();
        for name in [CONFIG_FILE, PYPROJECT_FILE] {
            let path = dir.join(name);
            if path.is_file() {
                let config = Self::from_file(&path)?;
                return Ok(Some((path, config)));
            }
        }
        Ok(None)
    }
}

fn is_pyproject(filename: &str) -> bool {
    Path::new(filename)
        .file_name()
        .is_some_and(|name| name == PYPROJECT_FILE)
}

/// Find the span of a `key = ...` assignment.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from(start..start + key.len()));
        }
        offset += line.len();
    }
    None
}
