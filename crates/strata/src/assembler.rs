//! Assembling phases and processors into one ordered list of steps.
//!
//! Processors are anchored in slots: slot `i` runs immediately before phase `i`, so "after phase
//! `i`" is slot `i + 1` and the slot after the last phase holds post-processors. Within a slot,
//! processors form an ordered set: requesting a processor twice keeps its first position.

use crate::phase::{LayoutPhase, Phase, PhaseStrategy};
use crate::processors::Processor;
use crate::{LayoutContext, LayoutGraph, LayoutStatus, Result};
use indexmap::{IndexMap, IndexSet};

const SLOT_COUNT: usize = Phase::ALL.len() + 1;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessorConfiguration {
    slots: [IndexSet<Processor>; SLOT_COUNT],
}

impl ProcessorConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn before(mut self, phase: Phase, processor: Processor) -> Self {
        self.add_before(phase, processor);
        self
    }

    pub fn after(mut self, phase: Phase, processor: Processor) -> Self {
        self.add_after(phase, processor);
        self
    }

    pub fn add_before(&mut self, phase: Phase, processor: Processor) -> &mut Self {
        self.slots[phase.index()].insert(processor);
        self
    }

    pub fn add_after(&mut self, phase: Phase, processor: Processor) -> &mut Self {
        self.slots[phase.index() + 1].insert(processor);
        self
    }

    /// Adds every processor of `other`, keeping existing ones in place.
    pub fn merge(&mut self, other: &ProcessorConfiguration) -> &mut Self {
        for (slot, theirs) in self.slots.iter_mut().zip(&other.slots) {
            slot.extend(theirs.iter().copied());
        }
        self
    }

    /// Processors that run immediately before `phase`.
    pub fn before_phase(&self, phase: Phase) -> impl Iterator<Item = Processor> + '_ {
        self.slots[phase.index()].iter().copied()
    }

    /// Processors that run immediately after `phase`.
    pub fn after_phase(&self, phase: Phase) -> impl Iterator<Item = Processor> + '_ {
        self.slots[phase.index() + 1].iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(IndexSet::is_empty)
    }
}

/// One executable step of an assembled algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Processor(Processor),
    Phase(PhaseStrategy),
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Processor(p) => p.name(),
            Self::Phase(s) => s.name(),
        }
    }

    pub fn run(&self, g: &mut LayoutGraph, ctx: &mut LayoutContext) -> Result<()> {
        match self {
            Self::Processor(p) => p.process(g, ctx),
            Self::Phase(s) => s.process(g, ctx),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlgorithmAssembler {
    phases: IndexMap<Phase, PhaseStrategy>,
    additional: Vec<ProcessorConfiguration>,
}

impl AlgorithmAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the strategy for the strategy's phase, replacing any previous choice.
    pub fn set_phase(&mut self, strategy: impl Into<PhaseStrategy>) -> &mut Self {
        let strategy = strategy.into();
        self.phases.insert(strategy.phase(), strategy);
        self
    }

    pub fn phase(&self, phase: Phase) -> Option<&PhaseStrategy> {
        self.phases.get(&phase)
    }

    /// Registers processors that do not belong to any phase strategy.
    pub fn add_processor_configuration(&mut self, config: ProcessorConfiguration) -> &mut Self {
        self.additional.push(config);
        self
    }

    /// The merged processor requirements: phase strategies from the last phase to the first, then
    /// additional configurations in registration order.
    pub fn processor_configuration(&self) -> ProcessorConfiguration {
        let mut merged = ProcessorConfiguration::new();
        for phase in Phase::ALL.iter().rev() {
            if let Some(strategy) = self.phases.get(phase) {
                merged.merge(&strategy.processor_configuration());
            }
        }
        for config in &self.additional {
            merged.merge(config);
        }
        merged
    }

    /// Interleaves every phase with the processors of its slot. Phases without a strategy are
    /// skipped; their slots still run.
    pub fn build(&self) -> Vec<Step> {
        let config = self.processor_configuration();
        let mut steps: Vec<Step> = Vec::new();
        for phase in Phase::ALL {
            steps.extend(config.before_phase(phase).map(Step::Processor));
            if let Some(&strategy) = self.phases.get(&phase) {
                steps.push(Step::Phase(strategy));
            }
        }
        if let Some(&last) = Phase::ALL.last() {
            steps.extend(config.after_phase(last).map(Step::Processor));
        }
        steps
    }

    pub fn execute(&self, g: &mut LayoutGraph, ctx: &mut LayoutContext) -> Result<LayoutStatus> {
        run_steps(&self.build(), g, ctx)
    }
}

/// Runs `steps` in order. The cancellation flag is checked before every step; once set, the
/// remaining steps are skipped and the graph is left as the last completed step produced.
pub fn run_steps(
    steps: &[Step],
    g: &mut LayoutGraph,
    ctx: &mut LayoutContext,
) -> Result<LayoutStatus> {
    for (index, step) in steps.iter().enumerate() {
        if ctx.is_canceled() {
            tracing::debug!(index, step = step.name(), "layout canceled");
            return Ok(LayoutStatus::Canceled);
        }
        let _span = tracing::debug_span!("layout_step", index, step = step.name()).entered();
        step.run(g, ctx)?;
    }
    Ok(LayoutStatus::Completed)
}
