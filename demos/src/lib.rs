//! Text front end shared by the `pathfinder` binary.
//!
//! Loads a map, runs one of the solvers and prints what a graphical front
//! end would highlight: the chosen path, or the accepted spanning-forest
//! edges.

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use pathfinder_core::{Graph, GraphError, NodeId, Point};
use pathfinder_map::{MapError, MapFile};
use pathfinder_paths::{KruskalStep, PathError, minimum_spanning_forest_with, shortest_path};

/// Half-side of the square around a node that selects it by position.
pub const NODE_RADIUS: i32 = 10;

/// How a node is picked on the command line: by name, or `@X,Y` for the
/// node drawn at that position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Name(String),
    At(Point),
}

impl FromStr for Selector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(coords) = s.strip_prefix('@') else {
            return Ok(Self::Name(s.to_string()));
        };
        let (x, y) = coords
            .split_once(',')
            .ok_or_else(|| format!("expected @X,Y, got \u{201c}{s}\u{201d}"))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i32>()
                .map_err(|_| format!("invalid coordinate \u{201c}{v}\u{201d}"))
        };
        Ok(Self::At(Point::new(parse(x)?, parse(y)?)))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::At(p) => write!(f, "@{},{}", p.x, p.y),
        }
    }
}

impl Selector {
    /// Resolve to a node of `graph`.
    pub fn resolve(&self, graph: &Graph) -> Result<NodeId, DemoError> {
        match self {
            Self::Name(name) => Ok(graph.lookup(name)?),
            Self::At(p) => graph
                .node_at(*p, NODE_RADIUS)
                .ok_or(DemoError::NoNodeAt(*p)),
        }
    }
}

/// Everything that can stop a command.
#[derive(Debug)]
pub enum DemoError {
    Map(MapError),
    Graph(GraphError),
    NoNodeAt(Point),
    Path(PathError),
    Io(io::Error),
}

impl DemoError {
    /// Process exit code: 1 when no path exists, 2 for bad input or I/O.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Path(PathError::NoPathFound { .. }) => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(e) => write!(f, "{e}"),
            Self::Graph(e) => write!(f, "{e}"),
            Self::NoNodeAt(p) => write!(f, "no node near {p}"),
            Self::Path(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map(e) => Some(e),
            Self::Graph(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::NoNodeAt(_) => None,
        }
    }
}

impl From<MapError> for DemoError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

impl From<GraphError> for DemoError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

impl From<PathError> for DemoError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<io::Error> for DemoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// List every node with its position and every edge with its cost.
pub fn show(map: &MapFile, out: &mut impl Write) -> Result<(), DemoError> {
    let g = map.graph();
    writeln!(out, "image: {}", map.image())?;
    writeln!(out, "nodes:")?;
    for (_, node) in g.nodes() {
        writeln!(out, "  {} {}", node.name(), node.pos())?;
    }
    writeln!(out, "edges:")?;
    for (_, arc) in g.arcs().step_by(2) {
        writeln!(
            out,
            "  {} - {} ({})",
            g.name(arc.start()),
            g.name(arc.finish()),
            arc.cost()
        )?;
    }
    Ok(())
}

/// Print the shortest path between two selected nodes.
pub fn dijkstra(
    graph: &Graph,
    start: &Selector,
    finish: &Selector,
    out: &mut impl Write,
) -> Result<(), DemoError> {
    let start = start.resolve(graph)?;
    let finish = finish.resolve(graph)?;
    let path = match shortest_path(graph, start, finish) {
        Ok(path) => path,
        Err(e @ PathError::NoPathFound { .. }) => {
            writeln!(
                out,
                "no path from {} to {}",
                graph.name(start),
                graph.name(finish)
            )?;
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if path.is_empty() {
        writeln!(out, "already at {}", graph.name(start))?;
    } else {
        writeln!(out, "{}", path.label())?;
    }
    writeln!(out, "cost: {}", path.cost())?;
    for node in path.nodes() {
        let node = graph.node(node);
        writeln!(out, "  {} {}", node.name(), node.pos())?;
    }
    Ok(())
}

/// Print every Kruskal decision followed by the forest total.
pub fn kruskal(graph: &Graph, out: &mut impl Write) -> Result<(), DemoError> {
    let mut lines = Vec::with_capacity(graph.arc_count());
    let forest = minimum_spanning_forest_with(graph, |step| {
        let (id, ignored) = match step {
            KruskalStep::Accepted(id) => (id, false),
            KruskalStep::Ignored(id) => (id, true),
        };
        let arc = graph.arc(id);
        lines.push(format!(
            "{}: {} - {}{}",
            arc.cost(),
            graph.name(arc.start()),
            graph.name(arc.finish()),
            if ignored { " (ignored)" } else { "" }
        ));
    });

    for line in &lines {
        writeln!(out, "{line}")?;
    }
    let trees = forest.components();
    writeln!(
        out,
        "total: {} over {} edges ({} {})",
        forest.cost(),
        forest.len(),
        trees,
        if trees == 1 { "tree" } else { "trees" }
    )?;
    Ok(())
}
