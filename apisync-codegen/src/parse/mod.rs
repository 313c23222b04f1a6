//! Document to IR translation.
//!
//! [`parse`] is the entry point: it runs the [`ComponentParser`] over
//! `components.schemas` and the [`EndpointParser`] over `paths`, and
//! assembles the results into an [`ApiIR`]. Translation is a pure function of
//! its inputs, so a single document may be parsed from several threads at
//! once.

mod components;
mod endpoints;
mod filter;

use apisync_core::TypeMapper;
use apisync_ir::ApiIR;
use apisync_schema::{Config, Document, SchemaNode};
pub use components::{ComponentParser, render_enum_value};
pub use endpoints::{EndpointParser, operation_id};
pub use filter::{Exclusion, ExclusionSet};

use crate::{pipeline::Diagnostic, translate::TypeTranslator};

/// Options controlling a translation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Operations matching these entries are left out of the IR.
    pub exclusions: ExclusionSet,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an exclusion entry.
    pub fn exclude(mut self, entry: impl Into<String>) -> Self {
        self.exclusions.insert(entry);
        self
    }

    /// Build options from a loaded config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            exclusions: ExclusionSet::new(config.exclude_tags.iter().cloned()),
        }
    }
}

impl From<&Config> for ParseOptions {
    fn from(config: &Config) -> Self {
        Self::from_config(config)
    }
}

/// Translate a document into an [`ApiIR`].
pub fn parse(document: &Document, options: &ParseOptions) -> ApiIR {
    parse_with_diagnostics(document, options).0
}

/// Translate a document, also returning what was defaulted or skipped.
pub fn parse_with_diagnostics(
    document: &Document,
    options: &ParseOptions,
) -> (ApiIR, Vec<Diagnostic>) {
    let translator = TypeTranslator::typescript();
    parse_with(&translator, document, options)
}

/// Translate a document with a specific type translator.
pub fn parse_with<M: TypeMapper>(
    translator: &TypeTranslator<M>,
    document: &Document,
    options: &ParseOptions,
) -> (ApiIR, Vec<Diagnostic>) {
    let mut diagnostics = Vec::new();
    let interfaces = ComponentParser::new(translator).parse(&document.schemas, &mut diagnostics);
    let endpoints = EndpointParser::new(translator, &options.exclusions)
        .parse(&document.paths, &mut diagnostics);
    (
        ApiIR {
            interfaces,
            endpoints,
        },
        diagnostics,
    )
}

/// Record a warning for every construct in `node` that fell back to `any`.
pub(crate) fn warn_unsupported(
    phase: &str,
    node: &SchemaNode,
    location: &str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    for reason in node.unsupported() {
        diagnostics.push(
            Diagnostic::warning(
                phase,
                format!("unsupported schema construct ({}); translated as `any`", reason),
            )
            .at(location),
        );
    }
}
