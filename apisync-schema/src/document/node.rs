//! Schema type nodes.
//!
//! A [`SchemaNode`] is the tagged form of a JSON-Schema fragment as far as type
//! translation cares about it. Construction from raw JSON is total: anything
//! the model does not understand becomes [`SchemaNode::Unknown`] or
//! [`SchemaNode::Unsupported`] instead of an error.

use apisync_core::Primitive;
use serde_json::{Map, Value};

/// Maximum nesting depth followed when building a node tree.
pub const MAX_DEPTH: usize = 128;

/// A schema type node.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// `string`, `integer`, `number` or `boolean`.
    Primitive(Primitive),
    /// `array` with its item schema.
    ArrayOf(Box<SchemaNode>),
    /// `object`, with the value schema of `additionalProperties` if declared.
    ObjectOf {
        additional: Option<Box<SchemaNode>>,
    },
    /// `$ref` pointer to a named definition.
    Reference(String),
    /// Alternatives from `anyOf`, `oneOf` or a `type` array.
    UnionOf(Vec<SchemaNode>),
    /// The literal `null` type.
    Null,
    /// A schema that places no constraint on the type (e.g. `{}`).
    Unknown,
    /// A construct that is recognized but not modeled; carries a short reason.
    Unsupported(String),
}

impl SchemaNode {
    /// Build a node from a raw JSON value.
    pub fn from_value(value: &Value) -> Self {
        Self::build(value, 0)
    }

    fn build(value: &Value, depth: usize) -> Self {
        if depth > MAX_DEPTH {
            return SchemaNode::Unsupported(format!("schema nested deeper than {MAX_DEPTH} levels"));
        }
        let Some(obj) = value.as_object() else {
            return SchemaNode::Unknown;
        };

        if let Some(pointer) = obj.get("$ref").and_then(Value::as_str) {
            return SchemaNode::Reference(pointer.to_string());
        }

        match obj.get("type") {
            Some(Value::String(keyword)) => {
                if let Some(node) = Self::typed(keyword, obj, depth) {
                    return node;
                }
            }
            Some(Value::Array(keywords)) => {
                let branches: Vec<_> = keywords
                    .iter()
                    .map(|k| match k.as_str() {
                        Some("null") => SchemaNode::Null,
                        Some(keyword) => Self::typed(keyword, obj, depth)
                            .unwrap_or_else(|| SchemaNode::Unsupported(format!("type '{keyword}'"))),
                        None => SchemaNode::Unknown,
                    })
                    .collect();
                return SchemaNode::UnionOf(branches);
            }
            _ => {}
        }

        for combinator in ["anyOf", "oneOf"] {
            if let Some(branches) = obj.get(combinator).and_then(Value::as_array) {
                return SchemaNode::UnionOf(
                    branches.iter().map(|b| Self::branch(b, depth + 1)).collect(),
                );
            }
        }

        if let Some(parts) = obj.get("allOf").and_then(Value::as_array) {
            return match parts.as_slice() {
                [single] => Self::build(single, depth + 1),
                _ => SchemaNode::Unsupported(format!("allOf with {} members", parts.len())),
            };
        }

        match obj.get("type").and_then(Value::as_str) {
            Some("null") => SchemaNode::Null,
            Some(other) => SchemaNode::Unsupported(format!("type '{other}'")),
            None => SchemaNode::Unknown,
        }
    }

    /// Build a union branch. A branch typed `null` is null whatever else it
    /// declares.
    fn branch(value: &Value, depth: usize) -> Self {
        match value.get("type").and_then(Value::as_str) {
            Some("null") => SchemaNode::Null,
            _ => Self::build(value, depth),
        }
    }

    /// Build a node for a single `type` keyword, or `None` if the keyword is
    /// not one of the structural kinds.
    fn typed(keyword: &str, obj: &Map<String, Value>, depth: usize) -> Option<Self> {
        if let Some(primitive) = Primitive::from_keyword(keyword) {
            return Some(SchemaNode::Primitive(primitive));
        }
        match keyword {
            "array" => {
                let items = obj
                    .get("items")
                    .map_or(SchemaNode::Unknown, |items| Self::build(items, depth + 1));
                Some(SchemaNode::ArrayOf(Box::new(items)))
            }
            "object" => {
                let additional = match obj.get("additionalProperties") {
                    Some(Value::Bool(true)) => Some(Box::new(SchemaNode::Unknown)),
                    Some(schema @ Value::Object(_)) => Some(Box::new(Self::build(schema, depth + 1))),
                    _ => None,
                };
                Some(SchemaNode::ObjectOf { additional })
            }
            _ => None,
        }
    }

    /// Name of the referenced definition (last pointer segment).
    pub fn reference_name(&self) -> Option<&str> {
        match self {
            SchemaNode::Reference(pointer) => pointer.rsplit('/').next(),
            _ => None,
        }
    }

    /// Returns true if this node is the literal `null` type.
    pub fn is_null(&self) -> bool {
        matches!(self, SchemaNode::Null)
    }

    /// Collect the reasons of every unsupported construct in this tree.
    pub fn unsupported(&self) -> Vec<&str> {
        let mut reasons = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                SchemaNode::Unsupported(reason) => reasons.push(reason.as_str()),
                SchemaNode::ArrayOf(items) => stack.push(items),
                SchemaNode::ObjectOf {
                    additional: Some(values),
                } => stack.push(values),
                SchemaNode::UnionOf(branches) => stack.extend(branches.iter().rev()),
                _ => {}
            }
        }
        reasons
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn node(value: Value) -> SchemaNode {
        SchemaNode::from_value(&value)
    }

    #[test]
    fn test_reference_wins_over_type() {
        let n = node(json!({"$ref": "#/components/schemas/User", "type": "object"}));
        assert_eq!(n, SchemaNode::Reference("#/components/schemas/User".into()));
        assert_eq!(n.reference_name(), Some("User"));
    }

    #[test]
    fn test_primitives() {
        assert_eq!(
            node(json!({"type": "string", "format": "date-time"})),
            SchemaNode::Primitive(Primitive::String)
        );
        assert_eq!(
            node(json!({"type": "integer"})),
            SchemaNode::Primitive(Primitive::Integer)
        );
    }

    #[test]
    fn test_array_without_items() {
        assert_eq!(
            node(json!({"type": "array"})),
            SchemaNode::ArrayOf(Box::new(SchemaNode::Unknown))
        );
    }

    #[test]
    fn test_object_additional_properties() {
        assert_eq!(
            node(json!({"type": "object", "additionalProperties": {"type": "number"}})),
            SchemaNode::ObjectOf {
                additional: Some(Box::new(SchemaNode::Primitive(Primitive::Number)))
            }
        );
        assert_eq!(
            node(json!({"type": "object", "additionalProperties": false})),
            SchemaNode::ObjectOf { additional: None }
        );
        assert_eq!(
            node(json!({"type": "object", "additionalProperties": true})),
            SchemaNode::ObjectOf {
                additional: Some(Box::new(SchemaNode::Unknown))
            }
        );
    }

    #[test]
    fn test_null_typed_branch_is_null() {
        assert_eq!(
            node(json!({"oneOf": [
                {"type": "null", "anyOf": [{"type": "integer"}]},
                {"type": "boolean"}
            ]})),
            SchemaNode::UnionOf(vec![
                SchemaNode::Null,
                SchemaNode::Primitive(Primitive::Boolean)
            ])
        );
    }

    #[test]
    fn test_unions() {
        assert_eq!(
            node(json!({"anyOf": [{"type": "string"}, {"type": "null"}]})),
            SchemaNode::UnionOf(vec![SchemaNode::Primitive(Primitive::String), SchemaNode::Null])
        );
        assert_eq!(
            node(json!({"type": ["integer", "null"]})),
            SchemaNode::UnionOf(vec![SchemaNode::Primitive(Primitive::Integer), SchemaNode::Null])
        );
        // A null type with alternatives is a union, not a null.
        assert!(matches!(
            node(json!({"type": "null", "oneOf": [{"type": "string"}]})),
            SchemaNode::UnionOf(_)
        ));
    }

    #[test]
    fn test_all_of_single_member() {
        assert_eq!(
            node(json!({"allOf": [{"$ref": "#/components/schemas/Role"}], "description": "x"})),
            SchemaNode::Reference("#/components/schemas/Role".into())
        );
        assert!(matches!(
            node(json!({"allOf": [{"type": "string"}, {"type": "number"}]})),
            SchemaNode::Unsupported(_)
        ));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(node(json!({})), SchemaNode::Unknown);
        assert_eq!(node(json!("string")), SchemaNode::Unknown);
        assert_eq!(node(json!({"type": "null"})), SchemaNode::Null);
        assert_eq!(
            node(json!({"type": "file"})),
            SchemaNode::Unsupported("type 'file'".into())
        );
    }

    #[test]
    fn test_depth_limit() {
        let mut value = json!({"type": "string"});
        for _ in 0..(MAX_DEPTH + 10) {
            value = json!({"type": "array", "items": value});
        }
        let n = node(value);
        let reasons = n.unsupported();
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("nested deeper"));
    }

    #[test]
    fn test_unsupported_collects_nested() {
        let n = node(json!({
            "anyOf": [
                {"type": "array", "items": {"type": "file"}},
                {"allOf": [{"type": "string"}, {"type": "number"}]}
            ]
        }));
        assert_eq!(n.unsupported(), ["type 'file'", "allOf with 2 members"]);
    }
}
