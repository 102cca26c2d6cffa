use std::fmt;

use pathfinder_core::{ArcId, NodeId};

/// Errors produced while building paths or searching the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The appended arc does not start where the path currently ends.
    NonContiguous { expected: NodeId, found: NodeId },
    /// An arc id that does not belong to the graph.
    UnknownArc(ArcId),
    /// A node id that does not belong to the graph.
    UnknownNode(NodeId),
    /// `finish` cannot be reached from `start`.
    NoPathFound { start: NodeId, finish: NodeId },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonContiguous { expected, found } => write!(
                f,
                "arc starts at node {} but the path ends at node {}",
                found.index(),
                expected.index()
            ),
            Self::UnknownArc(id) => write!(f, "arc id {} is not in this graph", id.index()),
            Self::UnknownNode(id) => write!(f, "node id {} is not in this graph", id.index()),
            Self::NoPathFound { start, finish } => write!(
                f,
                "no path from node {} to node {}",
                start.index(),
                finish.index()
            ),
        }
    }
}

impl std::error::Error for PathError {}
