//! Core type definitions.

use std::fmt;

use serde::Serialize;

/// HTTP method of an endpoint.
///
/// Only the five verbs the client generator understands are represented;
/// anything else under a path item is skipped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// All supported methods.
    pub const ALL: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
    ];

    /// Get the uppercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Get the lowercase verb as it appears in a path item.
    pub fn verb(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }

    /// Match a path item key against the supported verbs, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.verb().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A type expression in the target type syntax (e.g. `User[]`, `string | number`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TypeExpr(String);

impl TypeExpr {
    /// Create a type expression from its textual form.
    pub fn new(expr: impl Into<String>) -> Self {
        Self(expr.into())
    }

    /// Get the textual form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the expression and return its textual form.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeExpr {
    fn from(expr: &str) -> Self {
        Self::new(expr)
    }
}

impl From<String> for TypeExpr {
    fn from(expr: String) -> Self {
        Self(expr)
    }
}

impl PartialEq<str> for TypeExpr {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeExpr {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
