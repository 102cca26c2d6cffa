//! Incrementally built paths.

use std::fmt;

use pathfinder_core::{ArcId, Graph, NodeId};

use crate::error::PathError;

/// A contiguous walk through a [`Graph`], starting at an origin node.
///
/// The total cost and the `"A -> B -> C"` label are updated on every append,
/// so reading either is O(1). An empty path stands at its origin with cost 0
/// and an empty label.
#[derive(Clone)]
pub struct Path<'g> {
    graph: &'g Graph,
    origin: NodeId,
    arcs: Vec<ArcId>,
    cost: f64,
    label: String,
}

impl<'g> Path<'g> {
    /// An empty path standing at `origin`.
    pub fn new(graph: &'g Graph, origin: NodeId) -> Self {
        Self {
            graph,
            origin,
            arcs: Vec::new(),
            cost: 0.0,
            label: String::new(),
        }
    }

    /// Append `arc`, which must start at [`terminal`](Self::terminal).
    ///
    /// On error the path is left unchanged.
    pub fn append(&mut self, arc: ArcId) -> Result<(), PathError> {
        let a = *self.graph.get_arc(arc).ok_or(PathError::UnknownArc(arc))?;
        let end = self.terminal();
        if a.start() != end {
            return Err(PathError::NonContiguous {
                expected: end,
                found: a.start(),
            });
        }

        if self.arcs.is_empty() {
            self.label.push_str(self.graph.name(a.start()));
        }
        self.label.push_str(" -> ");
        self.label.push_str(self.graph.name(a.finish()));
        self.arcs.push(arc);
        self.cost += a.cost();
        Ok(())
    }

    /// A new path equal to this one extended by `arc`. `self` is untouched.
    pub fn then(&self, arc: ArcId) -> Result<Self, PathError> {
        let mut arcs = Vec::with_capacity(self.arcs.len() + 1);
        arcs.extend_from_slice(&self.arcs);
        let mut next = Self {
            graph: self.graph,
            origin: self.origin,
            arcs,
            cost: self.cost,
            label: self.label.clone(),
        };
        next.append(arc)?;
        Ok(next)
    }

    /// Sum of the arc costs.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of arcs.
    #[inline]
    pub fn size(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// The `i`-th arc, if any.
    #[inline]
    pub fn arc_at(&self, i: usize) -> Option<ArcId> {
        self.arcs.get(i).copied()
    }

    /// A copy of the arc sequence.
    pub fn arcs(&self) -> Vec<ArcId> {
        self.arcs.clone()
    }

    /// Node names chained with `" -> "`.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn origin(&self) -> NodeId {
        self.origin
    }

    /// The node the path currently ends at.
    #[inline]
    pub fn terminal(&self) -> NodeId {
        match self.arcs.last() {
            Some(&a) => self.graph.arc(a).finish(),
            None => self.origin,
        }
    }

    /// Visited nodes in order, origin included.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.origin).chain(self.arcs.iter().map(|&a| self.graph.arc(a).finish()))
    }

    /// The graph this path walks.
    #[inline]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }
}

impl PartialEq for Path<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin && self.arcs == other.arcs
    }
}

impl fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("origin", &self.origin)
            .field("arcs", &self.arcs)
            .field("cost", &self.cost)
            .field("label", &self.label)
            .finish()
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
