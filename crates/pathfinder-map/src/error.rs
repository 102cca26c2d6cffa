use std::fmt;
use std::io;

use pathfinder_core::GraphError;

/// Errors that can occur when reading a map file.
#[derive(Debug)]
pub enum MapError {
    /// The file could not be read.
    Io(io::Error),
    /// The file has no image line.
    MissingImage,
    /// A section header (`NODES` or `ARCS`) was not found.
    MissingSection(&'static str),
    /// A line could not be tokenized. `line` is 1-based.
    BadLine { line: usize, reason: String },
    /// The line was well formed but the graph rejected it.
    Graph { line: usize, source: GraphError },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "map: {e}"),
            Self::MissingImage => write!(f, "map: missing image line"),
            Self::MissingSection(name) => write!(f, "map: missing {name} section"),
            Self::BadLine { line, reason } => write!(f, "map line {line}: {reason}"),
            Self::Graph { line, source } => write!(f, "map line {line}: {source}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Graph { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
