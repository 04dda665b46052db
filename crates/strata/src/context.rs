//! Per-run state shared by phases and processors.

use crate::graphlib::{EdgeId, NodeId};
use crate::options::LayoutOptions;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag. Clones share the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// A non-fatal condition observed while laying out a graph.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    NonSimpleEdge {
        edge: EdgeId,
        sources: usize,
        targets: usize,
    },
    /// The node's vertical position depends on itself through a cycle of placement constraints.
    UnresolvedConstraint { node: NodeId },
    NonFiniteCoordinates { node: NodeId },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonSimpleEdge {
                edge,
                sources,
                targets,
            } => write!(
                f,
                "edge {edge} has {sources} sources and {targets} targets; only simple edges are laid out"
            ),
            Self::UnresolvedConstraint { node } => {
                write!(f, "placement constraint of node {node} is cyclic; left at y = 0")
            }
            Self::NonFiniteCoordinates { node } => {
                write!(f, "node {node} has non-finite coordinates; excluded from the bounding box")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutStatus {
    Completed,
    Canceled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub status: LayoutStatus,
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutReport {
    pub fn is_completed(&self) -> bool {
        self.status == LayoutStatus::Completed
    }
}

#[derive(Debug)]
pub struct LayoutContext {
    options: LayoutOptions,
    rng: StdRng,
    cancel: CancelToken,
    warnings: Vec<LayoutWarning>,
}

impl LayoutContext {
    pub fn new(options: LayoutOptions) -> Self {
        Self::with_cancel_token(options, CancelToken::new())
    }

    pub fn with_cancel_token(options: LayoutOptions, cancel: CancelToken) -> Self {
        Self {
            rng: StdRng::seed_from_u64(options.seed),
            options,
            cancel,
            warnings: Vec::new(),
        }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    pub fn is_canceled(&self) -> bool {
        self.cancel.is_canceled()
    }

    pub fn warn(&mut self, warning: LayoutWarning) {
        tracing::warn!(%warning, "layout degraded");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    pub fn into_report(self, status: LayoutStatus) -> LayoutReport {
        LayoutReport {
            status,
            warnings: self.warnings,
        }
    }
}
