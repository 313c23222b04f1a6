//! Path operations to endpoints.

use apisync_core::{TypeMapper, sanitize_identifier, to_camel_case};
use apisync_ir::{Endpoint, HttpMethod, Parameter};
use apisync_schema::{Operation, ParameterLocation, ParameterSpec, PathItem};
use indexmap::IndexMap;

use super::{ExclusionSet, warn_unsupported};
use crate::{pipeline::Diagnostic, translate::TypeTranslator};

/// Phase name used for diagnostics.
pub const PHASE: &str = "endpoints";

/// Turns `paths` into ordered [`Endpoint`]s, dropping excluded operations.
pub struct EndpointParser<'a, M> {
    translator: &'a TypeTranslator<M>,
    exclusions: &'a ExclusionSet,
}

impl<'a, M: TypeMapper> EndpointParser<'a, M> {
    pub fn new(translator: &'a TypeTranslator<M>, exclusions: &'a ExclusionSet) -> Self {
        Self {
            translator,
            exclusions,
        }
    }

    /// Parse every supported operation in path-then-method order.
    pub fn parse(
        &self,
        paths: &IndexMap<String, PathItem>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<Endpoint> {
        let mut endpoints = Vec::new();

        for (path, item) in paths {
            for (key, operation) in &item.entries {
                let Some(method) = HttpMethod::from_key(key) else {
                    continue;
                };
                let location = format!("paths.{}.{}", path, key);

                if let Some(reason) = self.exclusions.check(operation) {
                    diagnostics.push(
                        Diagnostic::info(
                            PHASE,
                            format!("excluded {} {} ({})", method, path, reason),
                        )
                        .at(location),
                    );
                    continue;
                }

                endpoints.push(self.parse_operation(path, method, operation, &location, diagnostics));
            }
        }

        endpoints
    }

    fn parse_operation(
        &self,
        path: &str,
        method: HttpMethod,
        operation: &Operation,
        location: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Endpoint {
        let mut url_params = Vec::new();
        let mut query_params = Vec::new();

        for (index, param) in operation.parameters.iter().enumerate() {
            let param_location = format!("{}.parameters[{}]", location, index);
            let Some(name) = &param.name else {
                diagnostics.push(
                    Diagnostic::warning(PHASE, "parameter without a name skipped")
                        .at(param_location),
                );
                continue;
            };
            match param.location {
                ParameterLocation::Path => {
                    warn_unsupported(PHASE, &param.schema, &param_location, diagnostics);
                    url_params.push(self.parse_parameter(name, param, false));
                }
                ParameterLocation::Query => {
                    warn_unsupported(PHASE, &param.schema, &param_location, diagnostics);
                    query_params.push(self.parse_parameter(name, param, !param.required));
                }
                ParameterLocation::Header
                | ParameterLocation::Cookie
                | ParameterLocation::Other(_) => {}
            }
        }

        let request_body_type = operation.request_body.as_ref().map(|node| {
            warn_unsupported(PHASE, node, &format!("{}.requestBody", location), diagnostics);
            self.translator.translate(node)
        });

        let (response_body_type, is_array_response) = match &operation.response {
            Some(response) => {
                let response_location = format!("{}.responses.200", location);
                warn_unsupported(PHASE, &response.schema, &response_location, diagnostics);
                (
                    Some(self.translator.translate(&response.schema)),
                    response.declared_array,
                )
            }
            None => (None, false),
        };

        Endpoint {
            path: path.to_string(),
            method,
            operation_id: operation_id(method, path, operation.operation_id.as_deref()),
            summary: operation.summary.clone(),
            description: operation.description.clone(),
            url_params,
            query_params,
            request_body_type,
            response_body_type,
            is_array_response,
        }
    }

    fn parse_parameter(&self, name: &str, param: &ParameterSpec, optional: bool) -> Parameter {
        Parameter {
            name: name.to_string(),
            ty: self.translator.translate(&param.schema),
            description: param.description.clone(),
            optional,
        }
    }
}

/// Derive the camel-cased operation id.
///
/// The declared id is used when it is still non-empty after sanitizing and
/// camel-casing; otherwise the id is synthesized as `{verb}_{path}` with `/`
/// replaced by `_`.
pub fn operation_id(method: HttpMethod, path: &str, declared: Option<&str>) -> String {
    declared
        .map(|id| to_camel_case(&sanitize_identifier(id)))
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| {
            let synthesized = format!("{}_{}", method.verb(), path.replace('/', "_"));
            to_camel_case(&sanitize_identifier(&synthesized))
        })
}
