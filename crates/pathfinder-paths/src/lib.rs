//! Shortest paths and minimum spanning forests over a
//! [`pathfinder_core::Graph`].
//!
//! - **Dijkstra** single-pair shortest path ([`shortest_path`])
//! - **Kruskal** minimum spanning forest ([`minimum_spanning_forest`],
//!   [`minimum_spanning_forest_with`] for the accept/ignore stream)
//!
//! Results are expressed as [`Path`] values, which keep their total cost and
//! a printable label up to date as arcs are appended. Solvers only borrow the
//! graph and keep no state between calls.
//!
//! Solver decisions are reported through the [`log`] facade: fixes, accepts
//! and ignores at `debug`, frontier pushes at `trace`.

mod dijkstra;
mod disjoint;
mod error;
mod frontier;
mod kruskal;
mod path;
#[cfg(test)]
mod testutil;

pub use dijkstra::shortest_path;
pub use disjoint::DisjointSet;
pub use error::PathError;
pub use kruskal::{KruskalStep, SpanningForest, minimum_spanning_forest, minimum_spanning_forest_with};
pub use path::Path;
