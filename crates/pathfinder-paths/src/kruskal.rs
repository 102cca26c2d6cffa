//! Minimum spanning forest via Kruskal's algorithm.

use log::debug;
use pathfinder_core::{ArcId, Graph};

use crate::disjoint::DisjointSet;

/// One decision taken while scanning arcs in cost order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KruskalStep {
    /// The arc joined two components and is part of the forest.
    Accepted(ArcId),
    /// Both endpoints were already connected; the arc would close a cycle.
    Ignored(ArcId),
}

/// The arcs of a minimum spanning forest.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningForest {
    arcs: Vec<ArcId>,
    cost: f64,
    components: usize,
}

impl SpanningForest {
    /// Accepted arcs, in the order they were accepted (ascending cost).
    #[inline]
    pub fn arcs(&self) -> &[ArcId] {
        &self.arcs
    }

    /// Whether `arc` itself (not its reverse twin) was accepted.
    pub fn contains(&self, arc: ArcId) -> bool {
        self.arcs.contains(&arc)
    }

    /// Total cost of the accepted arcs.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of trees in the forest; isolated nodes count as one each.
    #[inline]
    pub fn components(&self) -> usize {
        self.components
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }
}

/// Compute a minimum spanning forest of `graph`.
pub fn minimum_spanning_forest(graph: &Graph) -> SpanningForest {
    minimum_spanning_forest_with(graph, |_| {})
}

/// Like [`minimum_spanning_forest`], reporting every accept/ignore decision
/// to `observer` as it is taken.
///
/// All arcs are scanned in ascending cost order; equal costs keep the
/// graph's arc order, so the result is deterministic. An arc is accepted
/// exactly when its endpoints are in different components. The reverse twin
/// of an accepted arc, and any self-loop, is therefore always ignored.
pub fn minimum_spanning_forest_with(
    graph: &Graph,
    mut observer: impl FnMut(KruskalStep),
) -> SpanningForest {
    let mut order: Vec<ArcId> = graph.arcs().map(|(id, _)| id).collect();
    order.sort_by(|&a, &b| graph.arc(a).cost().total_cmp(&graph.arc(b).cost()));

    let mut sets = DisjointSet::new(graph.node_count());
    let mut forest = SpanningForest::default();

    for id in order {
        let arc = graph.arc(id);
        let (from, to) = (graph.name(arc.start()), graph.name(arc.finish()));
        if sets.union(arc.start().index(), arc.finish().index()) {
            debug!("{}: {} - {}", arc.cost(), from, to);
            forest.arcs.push(id);
            forest.cost += arc.cost();
            observer(KruskalStep::Accepted(id));
        } else {
            debug!("{}: {} - {} (ignored)", arc.cost(), from, to);
            observer(KruskalStep::Ignored(id));
        }
    }

    forest.components = sets.components();
    forest
}
