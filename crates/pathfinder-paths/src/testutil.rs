//! Graph fixtures shared by the solver tests.

use pathfinder_core::{Graph, NodeId, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A-B(1), B-C(2), A-C(4), C-D(1).
pub(crate) fn scenario() -> Graph {
    let mut g = Graph::new();
    g.add_node("A", Point::new(0, 0)).unwrap();
    g.add_node("B", Point::new(10, 0)).unwrap();
    g.add_node("C", Point::new(10, 10)).unwrap();
    g.add_node("D", Point::new(20, 10)).unwrap();
    g.add_edge("A", "B", 1.0).unwrap();
    g.add_edge("B", "C", 2.0).unwrap();
    g.add_edge("A", "C", 4.0).unwrap();
    g.add_edge("C", "D", 1.0).unwrap();
    g
}

/// `n` nodes; each pair is joined with probability `p` by an edge of integer
/// cost in `0..10`, so path sums are exact.
pub(crate) fn random_graph(seed: u64, n: usize, p: f64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = Graph::new();
    for i in 0..n {
        g.add_node(format!("N{i}"), Point::new(i as i32, 0)).unwrap();
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                let cost = rng.random_range(0..10u32) as f64;
                g.connect(NodeId::from_index(i), NodeId::from_index(j), cost)
                    .unwrap();
            }
        }
    }
    g
}
