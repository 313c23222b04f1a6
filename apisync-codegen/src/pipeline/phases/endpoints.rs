//! Endpoints phase - path operations to endpoints.

use eyre::Result;

use crate::{
    parse::EndpointParser,
    pipeline::{CompilationContext, Phase},
    translate::TypeTranslator,
};

/// Phase that fills [`ApiIR::endpoints`](apisync_ir::ApiIR::endpoints),
/// applying the context's exclusions.
pub struct EndpointsPhase;

impl Phase for EndpointsPhase {
    fn name(&self) -> &'static str {
        "endpoints"
    }

    fn description(&self) -> &'static str {
        "Translate path operations into endpoints"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let translator = TypeTranslator::typescript();
        ctx.ir.endpoints = EndpointParser::new(&translator, &ctx.options.exclusions)
            .parse(&ctx.document.paths, &mut ctx.diagnostics);
        Ok(())
    }
}
