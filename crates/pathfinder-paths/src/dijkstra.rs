use log::{debug, trace};
use pathfinder_core::{Graph, NodeId};

use crate::error::PathError;
use crate::frontier::Frontier;
use crate::path::Path;

/// Find the cheapest path from `start` to `finish` with Dijkstra's algorithm.
///
/// The frontier holds whole [`Path`]s keyed by their cost; the cheapest one
/// is expanded first and its end node is then fixed. Candidate paths whose
/// end node was fixed in the meantime are discarded when popped. Equal-cost
/// candidates are expanded in the order they were found.
///
/// Returns the empty path at `start` when `start == finish`, and
/// [`PathError::NoPathFound`] when the frontier runs dry first.
pub fn shortest_path<'g>(
    graph: &'g Graph,
    start: NodeId,
    finish: NodeId,
) -> Result<Path<'g>, PathError> {
    for id in [start, finish] {
        if !graph.contains(id) {
            return Err(PathError::UnknownNode(id));
        }
    }

    let mut fixed: Vec<Option<f64>> = vec![None; graph.node_count()];
    let mut frontier = Frontier::new();
    let mut path = Path::new(graph, start);

    while path.terminal() != finish {
        let node = path.terminal();
        if fixed[node.index()].is_none() {
            fixed[node.index()] = Some(path.cost());
            debug!("fix cost to {} at {}", graph.name(node), path.cost());

            for &arc in graph.arcs_from(node) {
                let next = graph.arc(arc).finish();
                if fixed[next.index()].is_some() {
                    debug!("   ignore {} because its distance is fixed", graph.name(next));
                    continue;
                }
                let candidate = path.then(arc)?;
                trace!("   enqueue path: {} ({})", candidate.label(), candidate.cost());
                let cost = candidate.cost();
                frontier.push(candidate, cost);
            }
        } else {
            debug!("ignore {} because its distance is fixed", graph.name(node));
        }

        path = frontier
            .pop()
            .ok_or(PathError::NoPathFound { start, finish })?;
        debug!("dequeue shortest path: {} ({})", path.label(), path.cost());
    }

    Ok(path)
}
