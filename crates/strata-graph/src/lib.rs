//! Graph container APIs used by `strata`.
//!
//! Nodes and edges live in arenas and are addressed by stable `NodeId` / `EdgeId` handles.
//! Removing an entity tombstones its slot, so handles held elsewhere never alias a newer entity.

mod error;
mod graph;
pub mod property;

pub use error::{GraphError, Result};
pub use graph::{EdgeId, Graph, NodeId, alg};
pub use property::{Property, PropertyBag};
