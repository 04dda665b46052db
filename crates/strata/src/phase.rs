//! The five layout phases and the strategies available for each.

use crate::assembler::ProcessorConfiguration;
use crate::options::{
    CrossingMinimizationStrategy, CycleBreakingStrategy, EdgeRoutingStrategy, LayeringStrategy,
    NodePlacementStrategy,
};
use crate::order::{self, BarycenterSettings};
use crate::processors::Processor;
use crate::{LayoutContext, LayoutGraph, LayoutWarning, Result, acyclic, position, rank, route};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    CycleBreak,
    LayerAssignment,
    CrossingMinimization,
    NodePlacement,
    EdgeRouting,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::CycleBreak,
        Phase::LayerAssignment,
        Phase::CrossingMinimization,
        Phase::NodePlacement,
        Phase::EdgeRouting,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One implementation of one phase.
pub trait LayoutPhase {
    fn phase(&self) -> Phase;

    fn name(&self) -> &'static str;

    /// Processors this implementation needs around the phases.
    fn processor_configuration(&self) -> ProcessorConfiguration {
        ProcessorConfiguration::new()
    }

    fn process(&self, g: &mut LayoutGraph, ctx: &mut LayoutContext) -> Result<()>;
}

fn dummy_processors() -> ProcessorConfiguration {
    ProcessorConfiguration::new()
        .before(Phase::CrossingMinimization, Processor::DummyInsertion)
        .after(Phase::EdgeRouting, Processor::DummyRemoval)
}

impl LayoutPhase for CycleBreakingStrategy {
    fn phase(&self) -> Phase {
        Phase::CycleBreak
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Noop => "cycle-breaking/noop",
            Self::Greedy => "cycle-breaking/greedy",
        }
    }

    fn processor_configuration(&self) -> ProcessorConfiguration {
        match self {
            Self::Noop => ProcessorConfiguration::new(),
            Self::Greedy => ProcessorConfiguration::new()
                .after(Phase::EdgeRouting, Processor::UndoCycleBreak),
        }
    }

    fn process(&self, g: &mut LayoutGraph, _ctx: &mut LayoutContext) -> Result<()> {
        match self {
            Self::Noop => {}
            Self::Greedy => {
                acyclic::run(g)?;
            }
        }
        Ok(())
    }
}

impl LayoutPhase for LayeringStrategy {
    fn phase(&self) -> Phase {
        Phase::LayerAssignment
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Noop => "layering/noop",
            Self::LongestPath => "layering/longest-path",
            Self::Topological => "layering/topological",
        }
    }

    fn process(&self, g: &mut LayoutGraph, _ctx: &mut LayoutContext) -> Result<()> {
        match self {
            Self::Noop => {}
            Self::LongestPath => {
                rank::longest_path(g)?;
            }
            Self::Topological => {
                rank::topological(g)?;
            }
        }
        Ok(())
    }
}

impl LayoutPhase for CrossingMinimizationStrategy {
    fn phase(&self) -> Phase {
        Phase::CrossingMinimization
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Noop => "crossing-minimization/noop",
            Self::KeepOrder => "crossing-minimization/keep-order",
            Self::Barycenter => "crossing-minimization/barycenter",
        }
    }

    fn processor_configuration(&self) -> ProcessorConfiguration {
        match self {
            Self::Noop => ProcessorConfiguration::new(),
            Self::KeepOrder | Self::Barycenter => dummy_processors(),
        }
    }

    fn process(&self, g: &mut LayoutGraph, ctx: &mut LayoutContext) -> Result<()> {
        match self {
            Self::Noop => {}
            Self::KeepOrder => order::keep_order(g),
            Self::Barycenter => {
                let settings = BarycenterSettings {
                    iterations: ctx.options().crossing_minimization_iterations,
                    permutations: ctx.options().crossing_minimization_permutations,
                };
                let layering = order::init_order(g);
                let (layering, crossings) = order::barycenter(g, layering, settings, ctx.rng());
                crate::util::assign_positions(g, &layering);
                tracing::debug!(crossings, "crossing minimization done");
            }
        }
        Ok(())
    }
}

impl LayoutPhase for NodePlacementStrategy {
    fn phase(&self) -> Phase {
        Phase::NodePlacement
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Noop => "node-placement/noop",
            Self::Simple => "node-placement/simple",
            Self::Stacking => "node-placement/stacking",
            Self::Constraint => "node-placement/constraint",
        }
    }

    fn processor_configuration(&self) -> ProcessorConfiguration {
        match self {
            Self::Noop => ProcessorConfiguration::new(),
            Self::Simple | Self::Stacking | Self::Constraint => dummy_processors(),
        }
    }

    fn process(&self, g: &mut LayoutGraph, ctx: &mut LayoutContext) -> Result<()> {
        let spacing = ctx.options().spacing();
        match self {
            Self::Noop => {}
            Self::Simple => position::simple(g, &spacing),
            Self::Stacking => position::stacking(g, &spacing),
            Self::Constraint => {
                for node in position::constraint(g, &spacing) {
                    ctx.warn(LayoutWarning::UnresolvedConstraint { node });
                }
            }
        }
        Ok(())
    }
}

impl LayoutPhase for EdgeRoutingStrategy {
    fn phase(&self) -> Phase {
        Phase::EdgeRouting
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Noop => "edge-routing/noop",
            Self::Polyline => "edge-routing/polyline",
        }
    }

    fn process(&self, g: &mut LayoutGraph, _ctx: &mut LayoutContext) -> Result<()> {
        match self {
            Self::Noop => {}
            Self::Polyline => {
                let routed = route::polyline(g);
                tracing::debug!(routed, "edges routed");
            }
        }
        Ok(())
    }
}

/// A strategy for any one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseStrategy {
    CycleBreaking(CycleBreakingStrategy),
    Layering(LayeringStrategy),
    CrossingMinimization(CrossingMinimizationStrategy),
    NodePlacement(NodePlacementStrategy),
    EdgeRouting(EdgeRoutingStrategy),
}

impl PhaseStrategy {
    fn inner(&self) -> &dyn LayoutPhase {
        match self {
            Self::CycleBreaking(s) => s,
            Self::Layering(s) => s,
            Self::CrossingMinimization(s) => s,
            Self::NodePlacement(s) => s,
            Self::EdgeRouting(s) => s,
        }
    }
}

impl LayoutPhase for PhaseStrategy {
    fn phase(&self) -> Phase {
        self.inner().phase()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn processor_configuration(&self) -> ProcessorConfiguration {
        self.inner().processor_configuration()
    }

    fn process(&self, g: &mut LayoutGraph, ctx: &mut LayoutContext) -> Result<()> {
        self.inner().process(g, ctx)
    }
}

impl From<CycleBreakingStrategy> for PhaseStrategy {
    fn from(s: CycleBreakingStrategy) -> Self {
        Self::CycleBreaking(s)
    }
}

impl From<LayeringStrategy> for PhaseStrategy {
    fn from(s: LayeringStrategy) -> Self {
        Self::Layering(s)
    }
}

impl From<CrossingMinimizationStrategy> for PhaseStrategy {
    fn from(s: CrossingMinimizationStrategy) -> Self {
        Self::CrossingMinimization(s)
    }
}

impl From<NodePlacementStrategy> for PhaseStrategy {
    fn from(s: NodePlacementStrategy) -> Self {
        Self::NodePlacement(s)
    }
}

impl From<EdgeRoutingStrategy> for PhaseStrategy {
    fn from(s: EdgeRoutingStrategy) -> Self {
        Self::EdgeRouting(s)
    }
}
