//! Type mapping between schema kinds and target-language type syntax.

/// Primitive schema types.
///
/// This is a language-agnostic representation of the scalar `type` keywords.
/// Use a [`TypeMapper`] to convert to language-specific type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Integer,
    Number,
    Boolean,
}

impl Primitive {
    /// Get the schema type keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Integer => "integer",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
        }
    }

    /// Parse a schema `type` keyword into a primitive, if it names one.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(Primitive::String),
            "integer" => Some(Primitive::Integer),
            "number" => Some(Primitive::Number),
            "boolean" => Some(Primitive::Boolean),
            _ => None,
        }
    }
}

/// Trait for mapping schema kinds to language-specific type expressions.
///
/// Implement this trait for each target language. The translation engine
/// decides *which* construct a schema node becomes; the mapper decides how
/// that construct is spelled.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a primitive to a language-specific type string
    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// Wrap an element type into an array type
    fn map_array(&self, item: &str) -> String;

    /// Build a string-keyed map type with the given value type
    fn map_record(&self, value: &str) -> String;

    /// Join already deduplicated and ordered members into a union type
    fn map_union(&self, members: &[String]) -> String;

    /// The unconstrained fallback type
    fn unknown(&self) -> &'static str;
}
