//! Operations declared under `paths`.

use serde_json::{Map, Value};

use super::{SchemaNode, string_field};

/// Media type whose schemas are used for request and response bodies.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Response status whose body becomes the endpoint's response type.
pub const SUCCESS_STATUS: &str = "200";

/// One entry under a path item, keyed by its (not yet validated) verb.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    /// String tags in declaration order.
    pub tags: Vec<String>,
    /// Declared parameters in order.
    pub parameters: Vec<ParameterSpec>,
    /// Schema of the JSON request body, if one is declared.
    pub request_body: Option<SchemaNode>,
    /// JSON body of the 200 response, if one is declared.
    pub response: Option<ResponseBody>,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Cookie,
    Other(String),
}

impl ParameterLocation {
    fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "path" => ParameterLocation::Path,
            "query" => ParameterLocation::Query,
            "header" => ParameterLocation::Header,
            "cookie" => ParameterLocation::Cookie,
            other => ParameterLocation::Other(other.to_string()),
        }
    }
}

/// A declared operation parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSpec {
    /// Parameter name (`None` for entries such as unresolved `$ref`s).
    pub name: Option<String>,
    pub location: ParameterLocation,
    pub required: bool,
    pub schema: SchemaNode,
    pub description: Option<String>,
}

/// JSON body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBody {
    pub schema: SchemaNode,
    /// Whether the schema's `type` keyword is literally `array`.
    pub declared_array: bool,
}

impl Operation {
    /// Build an operation from its raw JSON object.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        let tags = obj
            .get("tags")
            .and_then(Value::as_array)
            .map(|tags| {
                tags.iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let parameters = obj
            .get("parameters")
            .and_then(Value::as_array)
            .map(|params| params.iter().filter_map(ParameterSpec::from_value).collect())
            .unwrap_or_default();

        let request_body = obj
            .get("requestBody")
            .and_then(json_content)
            .and_then(|media| media.get("schema"))
            .filter(|schema| is_non_empty_object(schema))
            .map(SchemaNode::from_value);

        let response = obj
            .get("responses")
            .and_then(|responses| responses.get(SUCCESS_STATUS))
            .and_then(json_content)
            .filter(|media| is_non_empty_object(media))
            .map(|media| {
                let schema = media.get("schema");
                ResponseBody {
                    schema: schema.map_or(SchemaNode::Unknown, SchemaNode::from_value),
                    declared_array: schema
                        .and_then(|s| s.get("type"))
                        .and_then(Value::as_str)
                        == Some("array"),
                }
            });

        Self {
            operation_id: string_field(obj, "operationId"),
            summary: string_field(obj, "summary"),
            description: string_field(obj, "description"),
            tags,
            parameters,
            request_body,
            response,
        }
    }
}

impl ParameterSpec {
    /// Build a parameter from its raw JSON value; non-objects are dropped.
    fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            name: string_field(obj, "name"),
            location: ParameterLocation::from_keyword(
                obj.get("in").and_then(Value::as_str).unwrap_or_default(),
            ),
            required: obj
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            schema: obj
                .get("schema")
                .map_or(SchemaNode::Unknown, SchemaNode::from_value),
            description: string_field(obj, "description"),
        })
    }
}

/// Get the `application/json` media object under `content`.
fn json_content(value: &Value) -> Option<&Value> {
    value.get("content")?.get(JSON_MEDIA_TYPE)
}

fn is_non_empty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|o| !o.is_empty())
}
