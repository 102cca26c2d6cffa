//! The graph model: an arena of named nodes and directed arcs.
//!
//! Every undirected edge is stored as two [`Arc`]s, one per direction, at
//! consecutive slots of the arc arena. Nodes keep the ids of the arcs that
//! leave them. Ids are plain indices and stay valid until [`Graph::clear`].

use std::collections::HashMap;

use crate::error::GraphError;
use crate::geom::Point;

/// Stable handle to a node of a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Build an id from a raw arena index.
    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        Self(idx)
    }

    /// The arena index of this node.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Stable handle to an arc of a [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcId(usize);

impl ArcId {
    /// Build an id from a raw arena index.
    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        Self(idx)
    }

    /// The arena index of this arc.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A named location on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    pos: Point,
    arcs: Vec<ArcId>,
}

impl Node {
    /// Unique name of the node.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display coordinate.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Arcs leaving this node, in insertion order.
    #[inline]
    pub fn arcs(&self) -> &[ArcId] {
        &self.arcs
    }

    /// Number of arcs leaving this node.
    #[inline]
    pub fn degree(&self) -> usize {
        self.arcs.len()
    }
}

/// One traversal direction of an undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arc {
    start: NodeId,
    finish: NodeId,
    cost: f64,
}

impl Arc {
    #[inline]
    pub fn start(&self) -> NodeId {
        self.start
    }

    #[inline]
    pub fn finish(&self) -> NodeId {
        self.finish
    }

    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

/// Weighted undirected graph with named nodes.
///
/// Construction validates its input: names are unique and non-empty, edge
/// endpoints must exist and costs must be finite and non-negative. Once
/// built, the solvers only ever borrow the graph immutably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
    index: HashMap<String, NodeId>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every node and arc. All previously handed out ids become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
        self.index.clear();
    }

    /// Add a node named `name` at display position `pos`.
    pub fn add_node(&mut self, name: impl Into<String>, pos: Point) -> Result<NodeId, GraphError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.index.contains_key(&name) {
            return Err(GraphError::DuplicateNode(name));
        }
        let id = NodeId(self.nodes.len());
        self.index.insert(name.clone(), id);
        self.nodes.push(Node {
            name,
            pos,
            arcs: Vec::new(),
        });
        Ok(id)
    }

    /// Add an undirected edge between the nodes named `a` and `b`.
    ///
    /// Returns the ids of the `a -> b` and `b -> a` arcs.
    pub fn add_edge(&mut self, a: &str, b: &str, cost: f64) -> Result<(ArcId, ArcId), GraphError> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        self.connect(a, b, cost)
    }

    /// Add an undirected edge between two existing nodes.
    ///
    /// Returns the ids of the `a -> b` and `b -> a` arcs.
    pub fn connect(&mut self, a: NodeId, b: NodeId, cost: f64) -> Result<(ArcId, ArcId), GraphError> {
        for id in [a, b] {
            if !self.contains(id) {
                return Err(GraphError::UnknownNodeId(id));
            }
        }
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost {
                from: self.nodes[a.0].name.clone(),
                to: self.nodes[b.0].name.clone(),
                cost,
            });
        }

        let forward = ArcId(self.arcs.len());
        let backward = ArcId(forward.0 + 1);
        self.arcs.push(Arc {
            start: a,
            finish: b,
            cost,
        });
        self.arcs.push(Arc {
            start: b,
            finish: a,
            cost,
        });
        self.nodes[a.0].arcs.push(forward);
        self.nodes[b.0].arcs.push(backward);
        Ok((forward, backward))
    }

    /// Look up a node id by name.
    #[inline]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Like [`node_id`](Self::node_id) but with a descriptive error.
    pub fn lookup(&self, name: &str) -> Result<NodeId, GraphError> {
        self.node_id(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// First node (in insertion order) whose position lies within `radius`
    /// of `p` on both axes.
    pub fn node_at(&self, p: Point, radius: i32) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.pos.within(p, radius))
            .map(NodeId)
    }

    /// Whether `id` refers to a node of this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Borrow a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Borrow a node, or `None` if `id` does not belong to this graph.
    #[inline]
    pub fn get_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Borrow an arc.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this graph.
    #[inline]
    pub fn arc(&self, id: ArcId) -> &Arc {
        &self.arcs[id.0]
    }

    /// Borrow an arc, or `None` if `id` does not belong to this graph.
    #[inline]
    pub fn get_arc(&self, id: ArcId) -> Option<&Arc> {
        self.arcs.get(id.0)
    }

    /// The opposite direction of `id`: same endpoints swapped, same cost.
    #[inline]
    pub fn reverse(&self, id: ArcId) -> ArcId {
        ArcId(id.0 ^ 1)
    }

    /// Name of the node `id`. Shorthand for `self.node(id).name()`.
    #[inline]
    pub fn name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].name
    }

    /// Arcs leaving `id`.
    #[inline]
    pub fn arcs_from(&self, id: NodeId) -> &[ArcId] {
        &self.nodes[id.0].arcs
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// All arcs in insertion order (both directions of every edge).
    pub fn arcs(&self) -> impl ExactSizeIterator<Item = (ArcId, &Arc)> + '_ {
        self.arcs.iter().enumerate().map(|(i, a)| (ArcId(i), a))
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of arcs, i.e. twice the number of edges.
    #[inline]
    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Number of undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.arcs.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// serde: nodes and undirected edges by name, rebuilt through validation
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GraphRepr {
    nodes: Vec<NodeRepr>,
    edges: Vec<EdgeRepr>,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct NodeRepr {
    name: String,
    pos: Point,
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct EdgeRepr {
    from: String,
    to: String,
    cost: f64,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Graph {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let repr = GraphRepr {
            nodes: self
                .nodes
                .iter()
                .map(|n| NodeRepr {
                    name: n.name.clone(),
                    pos: n.pos,
                })
                .collect(),
            edges: self
                .arcs
                .iter()
                .step_by(2)
                .map(|a| EdgeRepr {
                    from: self.name(a.start).to_string(),
                    to: self.name(a.finish).to_string(),
                    cost: a.cost,
                })
                .collect(),
        };
        repr.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Graph {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = GraphRepr::deserialize(deserializer)?;
        let mut g = Graph::new();
        for n in repr.nodes {
            g.add_node(n.name, n.pos).map_err(D::Error::custom)?;
        }
        for e in repr.edges {
            g.add_edge(&e.from, &e.to, e.cost).map_err(D::Error::custom)?;
        }
        Ok(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut g = Graph::new();
        g.add_node("A", Point::new(0, 0)).unwrap();
        g.add_node("B", Point::new(10, 0)).unwrap();
        g.add_node("C", Point::new(0, 10)).unwrap();
        g.add_edge("A", "B", 1.0).unwrap();
        g.add_edge("B", "C", 2.5).unwrap();
        g.add_edge("C", "A", 4.0).unwrap();
        g
    }

    #[test]
    fn every_arc_has_a_reverse_twin() {
        let g = triangle();
        assert_eq!(g.arc_count(), 6);
        assert_eq!(g.edge_count(), 3);
        for (id, arc) in g.arcs() {
            let twin = g.arc(g.reverse(id));
            assert_eq!(twin.start(), arc.finish());
            assert_eq!(twin.finish(), arc.start());
            assert_eq!(twin.cost(), arc.cost());
            assert_ne!(g.reverse(id), id);
        }
    }

    #[test]
    fn arcs_are_linked_from_their_start_node() {
        let g = triangle();
        for (id, node) in g.nodes() {
            assert_eq!(node.degree(), 2);
            for &a in node.arcs() {
                assert_eq!(g.arc(a).start(), id);
            }
        }
        let b = g.node_id("B").unwrap();
        let finishes: Vec<&str> = g
            .arcs_from(b)
            .iter()
            .map(|&a| g.name(g.arc(a).finish()))
            .collect();
        assert_eq!(finishes, vec!["A", "C"]);
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut g = triangle();
        let err = g.add_node("A", Point::ZERO).unwrap_err();
        assert_eq!(err, GraphError::DuplicateNode("A".into()));
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut g = Graph::new();
        assert_eq!(g.add_node("", Point::ZERO), Err(GraphError::EmptyName));
    }

    #[test]
    fn dangling_endpoint_is_rejected() {
        let mut g = triangle();
        let err = g.add_edge("A", "Z", 1.0).unwrap_err();
        assert_eq!(err, GraphError::UnknownNode("Z".into()));
        assert_eq!(g.arc_count(), 6);

        let err = g.connect(NodeId::from_index(0), NodeId::from_index(9), 1.0).unwrap_err();
        assert_eq!(err, GraphError::UnknownNodeId(NodeId::from_index(9)));
    }

    #[test]
    fn bad_costs_are_rejected() {
        let mut g = triangle();
        for cost in [-1.0, f64::NAN, f64::INFINITY] {
            let err = g.add_edge("A", "B", cost).unwrap_err();
            assert!(matches!(err, GraphError::InvalidCost { .. }), "{err}");
        }
        assert!(g.add_edge("A", "B", 0.0).is_ok());
    }

    #[test]
    fn lookup_reports_unknown_names() {
        let g = triangle();
        assert_eq!(g.lookup("C").unwrap(), NodeId::from_index(2));
        assert_eq!(g.lookup("nope"), Err(GraphError::UnknownNode("nope".into())));
        assert!(g.get_node(NodeId::from_index(3)).is_none());
        assert!(g.get_arc(ArcId::from_index(6)).is_none());
    }

    #[test]
    fn node_at_hit_tests_positions() {
        let g = triangle();
        assert_eq!(g.node_at(Point::new(9, 2), 5), g.node_id("B"));
        assert_eq!(g.node_at(Point::new(5, 5), 5), None);
        assert_eq!(g.node_at(Point::new(i32::MAX, i32::MIN), 5), None);
    }

    #[test]
    fn graph_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Graph>();

        let g = triangle();
        let a = g.lookup("A").unwrap();
        std::thread::scope(|s| {
            s.spawn(|| assert_eq!(g.arcs_from(a).len(), 2));
            s.spawn(|| assert_eq!(g.name(a), "A"));
        });
    }

    #[test]
    fn clear_empties_the_graph() {
        let mut g = triangle();
        g.clear();
        assert!(g.is_empty());
        assert_eq!(g.arc_count(), 0);
        assert_eq!(g.node_id("A"), None);
        g.add_node("A", Point::ZERO).unwrap();
        assert_eq!(g.node_id("A"), Some(NodeId::from_index(0)));
    }

    #[test]
    fn error_messages_name_the_problem() {
        let mut g = triangle();
        let err = g.add_edge("A", "B", -2.0).unwrap_err();
        assert_eq!(err.to_string(), "edge A - B has invalid cost -2");
    }
}
