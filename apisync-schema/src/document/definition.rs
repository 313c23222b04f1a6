//! Named type definitions from `components.schemas`.

use indexmap::IndexMap;
use serde_json::Value;

use super::{SchemaNode, describe, string_field};

/// A named type definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// `description`, falling back to `title`.
    pub description: Option<String>,
    /// What kind of definition this is.
    pub kind: DefinitionKind,
}

/// The shape of a named definition.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionKind {
    /// An enumeration of literal values, in declaration order.
    Enum(Vec<Value>),
    /// A structured definition (possibly without any properties).
    Object {
        properties: IndexMap<String, PropertySchema>,
        required: Vec<String>,
    },
    /// The entry is not a JSON object at all.
    Malformed,
}

/// A declared property of an object definition.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    /// Type node of the property.
    pub node: SchemaNode,
    /// `description`, falling back to `title`.
    pub description: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub pattern: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl Definition {
    /// Build a definition from its raw JSON value.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self {
                description: None,
                kind: DefinitionKind::Malformed,
            };
        };

        let description = describe(obj);

        if let Some(values) = obj.get("enum").and_then(Value::as_array) {
            return Self {
                description,
                kind: DefinitionKind::Enum(values.clone()),
            };
        }

        let properties = obj
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(name, schema)| (name.clone(), PropertySchema::from_value(schema)))
                    .collect()
            })
            .unwrap_or_default();

        let required = obj
            .get("required")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            description,
            kind: DefinitionKind::Object {
                properties,
                required,
            },
        }
    }

    /// Returns true if this definition is an enumeration.
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, DefinitionKind::Enum(_))
    }
}

impl PropertySchema {
    /// Build a property schema from its raw JSON value.
    pub fn from_value(value: &Value) -> Self {
        let obj = value.as_object();
        let number = |key: &str| obj.and_then(|o| o.get(key)).and_then(Value::as_f64);
        let length = |key: &str| obj.and_then(|o| o.get(key)).and_then(whole_number);

        Self {
            node: SchemaNode::from_value(value),
            description: obj.and_then(describe),
            min_length: length("minLength"),
            max_length: length("maxLength"),
            pattern: obj.and_then(|o| string_field(o, "pattern")),
            minimum: number("minimum"),
            maximum: number("maximum"),
        }
    }
}

/// Read a non-negative integer, accepting float spellings such as `3.0`.
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
            .map(|n| n as u64)
    })
}
