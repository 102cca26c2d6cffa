//! Plain-text map files for the pathfinder engine.
//!
//! A map file names a background image, then lists nodes and undirected
//! edges:
//!
//! ```text
//! USA.png
//! NODES
//! Atlanta 508 288
//! Boston 620 120
//! ARCS
//! Atlanta Boston 1095
//! ```
//!
//! Fields are whitespace separated and blank lines are ignored. Node
//! coordinates are integers; edge costs are non-negative reals. Every edge
//! becomes a pair of arcs in the resulting [`Graph`].

mod error;

use std::fmt;
use std::fs;

use log::info;
use pathfinder_core::{Graph, Point};

pub use error::MapError;

/// A parsed map: the background image name plus the graph.
#[derive(Debug, Clone)]
pub struct MapFile {
    image: String,
    graph: Graph,
}

impl MapFile {
    /// Parse map text. See the crate docs for the format.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (_, image) = lines.next().ok_or(MapError::MissingImage)?;
        match lines.next() {
            Some((_, "NODES")) => {}
            _ => return Err(MapError::MissingSection("NODES")),
        }

        let mut graph = Graph::new();
        let mut in_arcs = false;
        for (line, text) in lines {
            if !in_arcs {
                if text == "ARCS" {
                    in_arcs = true;
                    continue;
                }
                let [name, x, y] = fields::<3>(line, text)?;
                let pos = Point::new(number(line, "x", x)?, number(line, "y", y)?);
                graph
                    .add_node(name, pos)
                    .map_err(|source| MapError::Graph { line, source })?;
            } else {
                let [from, to, cost] = fields::<3>(line, text)?;
                let cost = number(line, "cost", cost)?;
                graph
                    .add_edge(from, to, cost)
                    .map_err(|source| MapError::Graph { line, source })?;
            }
        }
        if !in_arcs {
            return Err(MapError::MissingSection("ARCS"));
        }

        Ok(Self {
            image: image.to_string(),
            graph,
        })
    }

    /// Read and parse the map file at `path`.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let map = Self::parse(&fs::read_to_string(path)?)?;
        info!(
            "loaded map {}: {} nodes, {} edges",
            path.display(),
            map.graph.node_count(),
            map.graph.edge_count()
        );
        Ok(map)
    }

    /// Name of the background image, as written in the file.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

/// Writes the map back out in the file format.
impl fmt::Display for MapFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.image)?;
        writeln!(f, "NODES")?;
        for (_, node) in self.graph.nodes() {
            writeln!(f, "{} {} {}", node.name(), node.pos().x, node.pos().y)?;
        }
        writeln!(f, "ARCS")?;
        for (_, arc) in self.graph.arcs().step_by(2) {
            writeln!(
                f,
                "{} {} {}",
                self.graph.name(arc.start()),
                self.graph.name(arc.finish()),
                arc.cost()
            )?;
        }
        Ok(())
    }
}

/// Parse map text. Shorthand for [`MapFile::parse`].
pub fn parse(s: &str) -> Result<MapFile, MapError> {
    MapFile::parse(s)
}

/// Read a map file. Shorthand for [`MapFile::load`].
pub fn load(path: impl AsRef<std::path::Path>) -> Result<MapFile, MapError> {
    MapFile::load(path)
}

fn fields<const N: usize>(line: usize, text: &str) -> Result<[&str; N], MapError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let found = parts.len();
    <[&str; N]>::try_from(parts).map_err(|_| MapError::BadLine {
        line,
        reason: format!("expected {N} fields, found {found}"),
    })
}

fn number<T: std::str::FromStr>(line: usize, what: &str, s: &str) -> Result<T, MapError> {
    s.parse().map_err(|_| MapError::BadLine {
        line,
        reason: format!("invalid {what} \u{201c}{s}\u{201d}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder_core::GraphError;

    const SMALL: &str = "\
Small.png
NODES
A 10 20
B 30 20

C 30 40
ARCS
A B 1.5
B C 2
";

    #[test]
    fn parses_nodes_and_edges() {
        let map = MapFile::parse(SMALL).unwrap();
        assert_eq!(map.image(), "Small.png");

        let g = map.graph();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.node(g.lookup("B").unwrap()).pos(), Point::new(30, 20));

        let a = g.lookup("A").unwrap();
        let ab = g.arc(g.arcs_from(a)[0]);
        assert_eq!(g.name(ab.finish()), "B");
        assert_eq!(ab.cost(), 1.5);
    }

    #[test]
    fn display_writes_the_file_format() {
        let map = MapFile::parse(SMALL).unwrap();
        let text = map.to_string();
        assert_eq!(
            text,
            "Small.png\nNODES\nA 10 20\nB 30 20\nC 30 40\nARCS\nA B 1.5\nB C 2\n"
        );
        let again = MapFile::parse(&text).unwrap();
        assert_eq!(again.graph().arc_count(), map.graph().arc_count());
    }

    #[test]
    fn arcs_section_may_be_empty() {
        let map = MapFile::parse("img.png\nNODES\nX 0 0\nY 1 1\nARCS\n").unwrap();
        assert_eq!(map.graph().node_count(), 2);
        assert_eq!(map.graph().arc_count(), 0);
    }

    #[test]
    fn empty_input_has_no_image() {
        assert!(matches!(MapFile::parse("\n  \n"), Err(MapError::MissingImage)));
    }

    #[test]
    fn missing_sections_are_reported() {
        assert!(matches!(
            MapFile::parse("img.png\nA 1 2\n"),
            Err(MapError::MissingSection("NODES"))
        ));
        assert!(matches!(
            MapFile::parse("img.png\nNODES\nA 1 2\n"),
            Err(MapError::MissingSection("ARCS"))
        ));
    }

    #[test]
    fn bad_lines_carry_line_numbers() {
        let err = MapFile::parse("img.png\nNODES\nA 1\nARCS\n").unwrap_err();
        assert_eq!(err.to_string(), "map line 3: expected 3 fields, found 2");

        let err = MapFile::parse("img.png\nNODES\nA 1 two\nARCS\n").unwrap_err();
        assert_eq!(err.to_string(), "map line 3: invalid y \u{201c}two\u{201d}");

        let err = MapFile::parse("img.png\nNODES\nA 1 2\nB 3 4\nARCS\nA B far\n").unwrap_err();
        assert!(matches!(err, MapError::BadLine { line: 6, .. }));
    }

    #[test]
    fn graph_errors_are_wrapped() {
        let err = MapFile::parse("img.png\nNODES\nA 1 2\nA 3 4\nARCS\n").unwrap_err();
        match err {
            MapError::Graph { line, source } => {
                assert_eq!(line, 4);
                assert_eq!(source, GraphError::DuplicateNode("A".into()));
            }
            other => panic!("expected Graph error, got {other:?}"),
        }

        let err = MapFile::parse("img.png\nNODES\nA 1 2\nARCS\nA Q 1\n").unwrap_err();
        assert!(matches!(
            err,
            MapError::Graph {
                line: 5,
                source: GraphError::UnknownNode(_)
            }
        ));

        let err = MapFile::parse("img.png\nNODES\nA 1 2\nB 1 2\nARCS\nA B -3\n").unwrap_err();
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn load_reports_missing_files() {
        let err = load("/definitely/not/a/map.txt").unwrap_err();
        assert!(matches!(err, MapError::Io(_)));
    }
}
