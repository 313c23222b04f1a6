//! OpenAPI document model.
//!
//! Only the parts of the document the translator reads are modeled:
//! `components.schemas` and `paths`. Building the model from a JSON value is
//! total; missing or mistyped sections simply come out empty.

mod definition;
mod node;
mod operation;

use std::path::Path;

use indexmap::IndexMap;
pub use definition::{Definition, DefinitionKind, PropertySchema};
pub use node::{MAX_DEPTH, SchemaNode};
pub use operation::{
    JSON_MEDIA_TYPE, Operation, ParameterLocation, ParameterSpec, ResponseBody, SUCCESS_STATUS,
};
use serde_json::{Map, Value};

use crate::{Error, Result, error::SourceContext};

/// A parsed schema document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Named type definitions in declaration order.
    pub schemas: IndexMap<String, Definition>,
    /// Path items in declaration order.
    pub paths: IndexMap<String, PathItem>,
}

/// The entries under one path template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathItem {
    /// Object-valued entries keyed as written (verbs and anything else).
    pub entries: IndexMap<String, Operation>,
}

impl Document {
    /// Build a document from a JSON value.
    pub fn from_value(value: &Value) -> Self {
        let schemas = value
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
            .map(|schemas| {
                schemas
                    .iter()
                    .map(|(name, def)| (name.clone(), Definition::from_value(def)))
                    .collect()
            })
            .unwrap_or_default();

        let paths = value
            .get("paths")
            .and_then(Value::as_object)
            .map(|paths| {
                paths
                    .iter()
                    .filter_map(|(path, item)| {
                        Some((path.clone(), PathItem::from_object(item.as_object()?)))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self { schemas, paths }
    }

    /// Parse a document from JSON text with a filename for error reporting.
    pub fn from_json_str(content: &str, filename: &str) -> Result<Self> {
        let source_ctx = SourceContext::new(content, filename);
        let value: Value = serde_json::from_str(content).map_err(|e| source_ctx.json_error(e))?;
        if !value.is_object() {
            return Err(source_ctx.validation_error("OpenAPI document must be a JSON object"));
        }
        Ok(Self::from_value(&value))
    }

    /// Read and parse a document from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_json_str(&content, &path.display().to_string())
    }

    /// Total number of entries across all path items.
    pub fn entry_count(&self) -> usize {
        self.paths.values().map(|item| item.entries.len()).sum()
    }
}

impl PathItem {
    fn from_object(obj: &Map<String, Value>) -> Self {
        let entries = obj
            .iter()
            .filter_map(|(key, value)| Some((key.clone(), Operation::from_object(value.as_object()?))))
            .collect();
        Self { entries }
    }
}

/// Read a string field.
pub(crate) fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Read `description`, falling back to `title` when it is missing or empty.
pub(crate) fn describe(obj: &Map<String, Value>) -> Option<String> {
    ["description", "title"]
        .into_iter()
        .filter_map(|key| obj.get(key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_missing_sections_are_empty() {
        let doc = Document::from_value(&json!({"openapi": "3.0.2"}));
        assert!(doc.schemas.is_empty());
        assert!(doc.paths.is_empty());

        let doc = Document::from_value(&json!({"components": {}, "paths": []}));
        assert_eq!(doc, Document::default());
    }

    #[test]
    fn test_path_order_preserved() {
        let doc = Document::from_json_str(
            r#"{
                "paths": {
                    "/zebra": {"get": {}},
                    "/alpha": {"post": {}, "get": {}, "parameters": [], "summary": "x"}
                }
            }"#,
            "openapi.json",
        )
        .unwrap();

        let paths: Vec<_> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(paths, ["/zebra", "/alpha"]);

        let verbs: Vec<_> = doc.paths["/alpha"].entries.keys().map(String::as_str).collect();
        assert_eq!(verbs, ["post", "get"]);
        assert_eq!(doc.entry_count(), 3);
    }

    #[test]
    fn test_describe_falls_back_to_title() {
        let obj = json!({"description": "", "title": "User"});
        assert_eq!(describe(obj.as_object().unwrap()).as_deref(), Some("User"));

        let obj = json!({"description": "A user", "title": "User"});
        assert_eq!(describe(obj.as_object().unwrap()).as_deref(), Some("A user"));

        let obj = json!({});
        assert_eq!(describe(obj.as_object().unwrap()), None);
    }

    #[test]
    fn test_invalid_json() {
        let err = Document::from_json_str("{\"paths\": ", "openapi.json").unwrap_err();
        assert!(matches!(*err, Error::Json { .. }));

        let err = Document::from_json_str("[1, 2]", "openapi.json").unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
