//! Type translation from schema nodes to target type expressions.

use std::collections::BTreeSet;

use apisync_core::TypeMapper;
use apisync_ir::TypeExpr;
use apisync_schema::SchemaNode;

use crate::mappers::TypeScriptMapper;

/// Translates [`SchemaNode`]s into [`TypeExpr`]s.
///
/// Translation is referential: a `$ref` becomes the bare name of the
/// referenced definition and is never expanded, so reference cycles cannot
/// recurse. Nodes the model does not understand become the mapper's
/// unconstrained type.
#[derive(Debug, Clone, Default)]
pub struct TypeTranslator<M = TypeScriptMapper> {
    mapper: M,
}

impl TypeTranslator {
    /// Create a translator targeting TypeScript.
    pub fn typescript() -> Self {
        Self::new(TypeScriptMapper)
    }
}

impl<M: TypeMapper> TypeTranslator<M> {
    /// Create a translator with the given mapper.
    pub fn new(mapper: M) -> Self {
        Self { mapper }
    }

    /// Translate a schema node.
    pub fn translate(&self, node: &SchemaNode) -> TypeExpr {
        TypeExpr::new(self.render(node))
    }

    fn render(&self, node: &SchemaNode) -> String {
        match node {
            SchemaNode::Reference(_) => node.reference_name().unwrap_or_default().to_string(),
            SchemaNode::Primitive(primitive) => self.mapper.map_primitive(*primitive).to_string(),
            SchemaNode::ArrayOf(items) => self.mapper.map_array(&self.render(items)),
            SchemaNode::ObjectOf {
                additional: Some(values),
            } => self.mapper.map_record(&self.render(values)),
            SchemaNode::UnionOf(branches) => {
                let members: BTreeSet<String> = branches
                    .iter()
                    .filter(|branch| !branch.is_null())
                    .map(|branch| self.render(branch))
                    .collect();
                let members: Vec<String> = members.into_iter().collect();
                match members.as_slice() {
                    [] => self.mapper.unknown().to_string(),
                    [single] => single.clone(),
                    _ => self.mapper.map_union(&members),
                }
            }
            SchemaNode::ObjectOf { additional: None }
            | SchemaNode::Null
            | SchemaNode::Unknown
            | SchemaNode::Unsupported(_) => self.mapper.unknown().to_string(),
        }
    }
}
