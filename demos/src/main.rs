//! Command-line pathfinder.
//!
//! Run: cargo run --bin pathfinder -- demos/maps/small.txt dijkstra A D

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use pathfinder_demos::{DemoError, Selector, dijkstra, kruskal, show};
use pathfinder_map::MapFile;
use pathfinder_paths::PathError;
use tracing_subscriber::{EnvFilter, fmt};

/// Shortest paths and minimum spanning forests on map files.
#[derive(Parser)]
#[command(name = "pathfinder", version, about)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Map file to load
    map: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the nodes and edges of the map
    Show,
    /// Find the cheapest path between two nodes
    ///
    /// Nodes are given by name, or as @X,Y to pick the node drawn there.
    Dijkstra { start: Selector, finish: Selector },
    /// Compute a minimum spanning forest
    Kruskal,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !matches!(e, DemoError::Path(PathError::NoPathFound { .. })) {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let map = MapFile::load(&cli.map)?;
    let mut out = io::stdout().lock();
    match &cli.command {
        Command::Show => show(&map, &mut out),
        Command::Dijkstra { start, finish } => dijkstra(map.graph(), start, finish, &mut out),
        Command::Kruskal => kruskal(map.graph(), &mut out),
    }
}
