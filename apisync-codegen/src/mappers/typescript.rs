//! TypeScript type mapper implementation.

use apisync_core::{Primitive, TypeMapper};

/// TypeScript type mapper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptMapper;

impl TypeMapper for TypeScriptMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_primitive(&self, primitive: Primitive) -> &'static str {
        match primitive {
            Primitive::String => "string",
            Primitive::Integer => "number",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
        }
    }

    fn map_array(&self, item: &str) -> String {
        // `A | B[]` would bind the suffix to the last member only
        if item.contains(" | ") {
            format!("({})[]", item)
        } else {
            format!("{}[]", item)
        }
    }

    fn map_record(&self, value: &str) -> String {
        format!("{{ [key: string]: {} }}", value)
    }

    fn map_union(&self, members: &[String]) -> String {
        members.join(" | ")
    }

    fn unknown(&self) -> &'static str {
        "any"
    }
}
