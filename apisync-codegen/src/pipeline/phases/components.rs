//! Components phase - named definitions to interfaces.

use eyre::Result;

use crate::{
    parse::ComponentParser,
    pipeline::{CompilationContext, Phase},
    translate::TypeTranslator,
};

/// Phase that fills [`ApiIR::interfaces`](apisync_ir::ApiIR::interfaces).
pub struct ComponentsPhase;

impl Phase for ComponentsPhase {
    fn name(&self) -> &'static str {
        "components"
    }

    fn description(&self) -> &'static str {
        "Translate named definitions into interfaces"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let translator = TypeTranslator::typescript();
        ctx.ir.interfaces =
            ComponentParser::new(&translator).parse(&ctx.document.schemas, &mut ctx.diagnostics);
        Ok(())
    }
}
