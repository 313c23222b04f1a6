//! Named definitions to interfaces.

use apisync_core::TypeMapper;
use apisync_ir::{Constraints, Interface, Property};
use apisync_schema::{Definition, DefinitionKind, PropertySchema};
use indexmap::IndexMap;
use serde_json::Value;

use super::warn_unsupported;
use crate::{pipeline::Diagnostic, translate::TypeTranslator};

/// Phase name used for diagnostics.
pub const PHASE: &str = "components";

/// Turns `components.schemas` into ordered [`Interface`]s.
pub struct ComponentParser<'a, M> {
    translator: &'a TypeTranslator<M>,
}

impl<'a, M: TypeMapper> ComponentParser<'a, M> {
    pub fn new(translator: &'a TypeTranslator<M>) -> Self {
        Self { translator }
    }

    /// Parse every definition, keeping declaration order.
    pub fn parse(
        &self,
        schemas: &IndexMap<String, Definition>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> IndexMap<String, Interface> {
        schemas
            .iter()
            .map(|(name, definition)| {
                (
                    name.clone(),
                    self.parse_definition(name, definition, diagnostics),
                )
            })
            .collect()
    }

    fn parse_definition(
        &self,
        name: &str,
        definition: &Definition,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Interface {
        let location = format!("components.schemas.{}", name);
        let mut interface = Interface {
            name: name.to_string(),
            properties: IndexMap::new(),
            is_enum: false,
            enum_values: Vec::new(),
            description: definition.description.clone(),
        };

        match &definition.kind {
            DefinitionKind::Enum(values) => {
                interface.is_enum = true;
                interface.enum_values = values.iter().map(render_enum_value).collect();
            }
            DefinitionKind::Object {
                properties,
                required,
            } => {
                for (prop_name, schema) in properties {
                    let optional = !required.iter().any(|r| r == prop_name);
                    let prop_location = format!("{}.properties.{}", location, prop_name);
                    warn_unsupported(PHASE, &schema.node, &prop_location, diagnostics);
                    interface
                        .properties
                        .insert(prop_name.clone(), self.parse_property(schema, optional));
                }
            }
            DefinitionKind::Malformed => {
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!(
                            "definition '{}' is not an object; emitted as an empty interface",
                            name
                        ),
                    )
                    .at(location),
                );
            }
        }

        interface
    }

    fn parse_property(&self, schema: &PropertySchema, optional: bool) -> Property {
        Property {
            ty: self.translator.translate(&schema.node),
            description: schema.description.clone(),
            constraints: Constraints {
                min_length: schema.min_length,
                max_length: schema.max_length,
                pattern: schema.pattern.clone(),
                minimum: schema.minimum,
                maximum: schema.maximum,
            },
            optional,
        }
    }
}

/// Render an enum member as a target literal: strings single-quoted, anything
/// else in its JSON form.
pub fn render_enum_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        other => other.to_string(),
    }
}
