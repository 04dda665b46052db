//! Layered (Sugiyama-style) graph layout.
//!
//! A layout runs five phases in order: cycle breaking, layer assignment, crossing minimization,
//! node placement and edge routing. Each phase has interchangeable strategies, and each strategy
//! declares the intermediate processors it needs. [`assembler::AlgorithmAssembler`] merges those
//! requirements into one step list; [`layout`] is the usual entry point.

pub use strata_graph as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod acyclic;
pub mod assembler;
pub mod context;
mod error;
pub mod greedy_fas;
mod model;
pub mod normalize;
pub mod options;
pub mod order;
pub mod phase;
mod pipeline;
pub mod position;
pub mod processors;
pub mod rank;
pub mod route;
pub mod util;

pub use context::{CancelToken, LayoutContext, LayoutReport, LayoutStatus, LayoutWarning};
pub use error::{Error, Result};
pub use model::{EdgeLabel, GraphLabel, LayoutGraph, NodeLabel, Padding, Point};
pub use options::LayoutOptions;
pub use pipeline::{assembler_for, layout, layout_with};
