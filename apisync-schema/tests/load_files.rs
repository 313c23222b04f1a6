//! File loading tests for documents and configs.

use std::fs;

use apisync_schema::{Config, Document, Error, HooksMode};
use tempfile::TempDir;

#[test]
fn discover_prefers_dedicated_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("apisync.toml"), "hooks_mode = \"react\"\n").unwrap();
    fs::write(
        dir.path().join("pyproject.toml"),
        "[tool.api-sync]\nhooks_mode = \"none\"\n",
    )
    .unwrap();

    let (path, config) = Config::discover(dir.path()).unwrap().expect("config found");
    assert!(path.ends_with("apisync.toml"));
    assert_eq!(config.hooks_mode, HooksMode::React);
}

#[test]
fn discover_falls_back_to_pyproject() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pyproject.toml"),
        "[tool.api-sync]\nexclude_tags = [\"@beta\"]\n",
    )
    .unwrap();

    let (path, config) = Config::discover(dir.path()).unwrap().expect("config found");
    assert!(path.ends_with("pyproject.toml"));
    assert_eq!(config.exclude_tags, ["@beta"]);
}

#[test]
fn discover_without_files_returns_none() {
    let dir = TempDir::new().unwrap();
    assert!(Config::discover(dir.path()).unwrap().is_none());
}

#[test]
fn document_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("openapi.json");
    fs::write(
        &path,
        r#"{"components": {"schemas": {"User": {"type": "object"}}}, "paths": {}}"#,
    )
    .unwrap();

    let doc = Document::from_file(&path).unwrap();
    assert!(doc.schemas.contains_key("User"));
    assert!(doc.paths.is_empty());
}

#[test]
fn missing_document_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = Document::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}
