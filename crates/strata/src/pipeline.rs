//! Layout entry points.

use crate::assembler::{AlgorithmAssembler, ProcessorConfiguration};
use crate::phase::Phase;
use crate::processors::Processor;
use crate::{CancelToken, LayoutContext, LayoutGraph, LayoutOptions, LayoutReport, Result};

/// Lays out `g` with the options stored in its graph label.
pub fn layout(g: &mut LayoutGraph) -> Result<LayoutReport> {
    let options = LayoutOptions::from_properties(&g.graph().properties);
    layout_with(g, &options, &CancelToken::new())
}

/// Lays out `g` with explicit options. Returns early with a canceled report once `cancel` is
/// set; the graph is then left partially processed.
pub fn layout_with(
    g: &mut LayoutGraph,
    options: &LayoutOptions,
    cancel: &CancelToken,
) -> Result<LayoutReport> {
    let assembler = assembler_for(options);
    let mut ctx = LayoutContext::with_cancel_token(options.clone(), cancel.clone());
    let status = assembler.execute(g, &mut ctx)?;
    Ok(ctx.into_report(status))
}

/// The assembler `layout` uses: one strategy per phase from `options`, plus the mandatory init
/// and post processors.
pub fn assembler_for(options: &LayoutOptions) -> AlgorithmAssembler {
    let mut assembler = AlgorithmAssembler::new();
    assembler
        .set_phase(options.cycle_breaking)
        .set_phase(options.layering)
        .set_phase(options.crossing_minimization)
        .set_phase(options.node_placement)
        .set_phase(options.edge_routing)
        .add_processor_configuration(mandatory_processors());
    assembler
}

fn mandatory_processors() -> ProcessorConfiguration {
    ProcessorConfiguration::new()
        .before(Phase::CycleBreak, Processor::Init)
        .after(Phase::EdgeRouting, Processor::Post)
}
