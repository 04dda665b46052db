//! Intermediate processors: graph rewriting steps anchored before or after a phase.

mod init;
mod post;

pub use init::check_simple_edges;
pub use post::translate_to_padding;

use crate::{LayoutContext, LayoutGraph, Result, acyclic, normalize};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Processor {
    /// Warns about edges that are not simple.
    Init,
    /// Splits edges spanning several layers into dummy chains.
    DummyInsertion,
    /// Joins dummy chains back into routed polylines.
    DummyRemoval,
    /// Restores the orientation of reversed edges.
    UndoCycleBreak,
    /// Moves the drawing to the padding origin and sets the graph size.
    Post,
}

impl Processor {
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::DummyInsertion => "dummy-insertion",
            Self::DummyRemoval => "dummy-removal",
            Self::UndoCycleBreak => "undo-cycle-break",
            Self::Post => "post",
        }
    }

    pub fn process(self, g: &mut LayoutGraph, ctx: &mut LayoutContext) -> Result<()> {
        match self {
            Self::Init => {
                for warning in check_simple_edges(g) {
                    ctx.warn(warning);
                }
            }
            Self::DummyInsertion => {
                normalize::run(g)?;
            }
            Self::DummyRemoval => {
                normalize::undo(g)?;
            }
            Self::UndoCycleBreak => {
                let restored = acyclic::undo(g)?;
                tracing::debug!(restored, "reversed edges restored");
            }
            Self::Post => {
                let padding = ctx.options().padding;
                for warning in translate_to_padding(g, &padding) {
                    ctx.warn(warning);
                }
            }
        }
        Ok(())
    }
}
