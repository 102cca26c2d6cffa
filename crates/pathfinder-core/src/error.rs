use std::fmt;

use crate::graph::NodeId;

/// Errors raised while building a [`Graph`](crate::Graph).
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A node with this name already exists.
    DuplicateNode(String),
    /// Node names must be non-empty.
    EmptyName,
    /// An edge endpoint names a node that was never added.
    UnknownNode(String),
    /// A node id that does not belong to this graph.
    UnknownNodeId(NodeId),
    /// Edge costs must be finite and non-negative.
    InvalidCost { from: String, to: String, cost: f64 },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(name) => write!(f, "duplicate node \u{201c}{name}\u{201d}"),
            Self::EmptyName => write!(f, "node name is empty"),
            Self::UnknownNode(name) => write!(f, "unknown node \u{201c}{name}\u{201d}"),
            Self::UnknownNodeId(id) => write!(f, "node id {} is not in this graph", id.index()),
            Self::InvalidCost { from, to, cost } => {
                write!(f, "edge {from} - {to} has invalid cost {cost}")
            }
        }
    }
}

impl std::error::Error for GraphError {}
