//! API Intermediate Representation.
//!
//! This module defines the IR produced from an OpenAPI document: named
//! interfaces extracted from `components.schemas` and endpoints extracted from
//! `paths`.

use indexmap::IndexMap;
use serde::Serialize;

use crate::{HttpMethod, TypeExpr};

/// API IR - unified representation for client code generation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ApiIR {
    /// Named interfaces, in document order.
    pub interfaces: IndexMap<String, Interface>,
    /// Endpoints, in path-then-method document order.
    pub endpoints: Vec<Endpoint>,
}

impl ApiIR {
    /// Look up an interface by name.
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.get(name)
    }

    /// Look up an endpoint by its camel-cased operation id.
    pub fn endpoint(&self, operation_id: &str) -> Option<&Endpoint> {
        self.endpoints
            .iter()
            .find(|e| e.operation_id == operation_id)
    }

    /// Iterate over endpoints declared under a path template.
    pub fn endpoints_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Endpoint> {
        self.endpoints.iter().filter(move |e| e.path == path)
    }

    /// Returns true if neither interfaces nor endpoints were produced.
    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty() && self.endpoints.is_empty()
    }
}

/// A named structured or enumerated type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interface {
    /// Definition name (the key under `components.schemas`).
    pub name: String,
    /// Properties in declaration order.
    pub properties: IndexMap<String, Property>,
    /// Whether this definition is an enumeration.
    pub is_enum: bool,
    /// Rendered enum members (empty unless `is_enum`).
    pub enum_values: Vec<String>,
    /// Description or title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Interface {
    /// Iterate over the required properties.
    pub fn required_properties(&self) -> impl Iterator<Item = (&String, &Property)> {
        self.properties.iter().filter(|(_, p)| !p.optional)
    }

    /// Iterate over the optional properties.
    pub fn optional_properties(&self) -> impl Iterator<Item = (&String, &Property)> {
        self.properties.iter().filter(|(_, p)| p.optional)
    }
}

/// A property of an interface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Translated property type.
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Description or title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Validation constraints copied from the schema.
    #[serde(flatten)]
    pub constraints: Constraints,
    /// Whether the property is absent from the definition's `required` list.
    pub optional: bool,
}

/// String and numeric validation constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Constraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
}

/// A path or query parameter of an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name as declared.
    pub name: String,
    /// Translated parameter type.
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Parameter description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the parameter may be omitted (never true for path parameters).
    pub optional: bool,
}

/// One HTTP operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Path template (e.g. `/users/{user_id}`).
    pub path: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Sanitized, camel-cased operation id.
    pub operation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Path parameters in declaration order.
    pub url_params: Vec<Parameter>,
    /// Query parameters in declaration order.
    pub query_params: Vec<Parameter>,
    /// JSON request body type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body_type: Option<TypeExpr>,
    /// JSON type of the 200 response, including any array suffix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body_type: Option<TypeExpr>,
    /// Whether the 200 response schema is declared as an array.
    pub is_array_response: bool,
}
