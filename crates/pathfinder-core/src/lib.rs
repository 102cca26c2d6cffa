//! **pathfinder-core**: the graph model shared by the pathfinder crates.
//!
//! A [`Graph`] is an arena of named [`Node`]s and directed [`Arc`]s. Every
//! undirected edge is stored as a pair of arcs with equal cost, one per
//! direction, and nodes are addressed through stable [`NodeId`] / [`ArcId`]
//! handles. Solvers live in `pathfinder-paths`; this crate only owns the
//! topology and validates it as it is built.

pub mod error;
pub mod geom;
pub mod graph;

pub use error::GraphError;
pub use geom::Point;
pub use graph::{Arc, ArcId, Graph, Node, NodeId};
