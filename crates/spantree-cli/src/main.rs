//! Spanning tree CLI.
//!
//! Provides the `spantree` binary with subcommands for working with weighted
//! undirected graphs. Currently supports `mst`, which reads a graph in the
//! textual format (first line `V E`, then `E` lines `u v w`) from a file or
//! standard input and prints the minimum spanning tree computed by
//! `spantree_core`.
//!
//! The computation itself never touches the terminal; this harness owns all
//! parsing and formatting.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use spantree_core::{Graph, VertexId, Weight};

/// Spanning tree tools.
#[derive(Parser)]
#[command(name = "spantree", about = "Minimum spanning tree tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Compute a minimum spanning tree with Prim's algorithm.
    Mst {
        /// Path to the graph description ('-' or absent reads stdin).
        input: Option<PathBuf>,

        /// Start vertex (0-indexed). Overrides a start line in the input;
        /// defaults to 0 when neither is given.
        #[arg(short, long)]
        start: Option<u32>,

        /// Print the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Mst { input, start, json } => {
            let exit_code = run_mst(input, start, json);
            process::exit(exit_code);
        }
    }
}

/// Execute the mst subcommand.
///
/// Returns exit code: 0 = success, 1 = malformed input,
/// 2 = graph error (invalid vertex), 3 = I/O error.
fn run_mst(input: Option<PathBuf>, start_flag: Option<u32>, json: bool) -> i32 {
    let text = match read_input(input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: failed to read input: {}", e);
            return 3;
        }
    };

    let parsed = match parse_graph(&text) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 1;
        }
    };

    let mut graph = Graph::new(parsed.vertex_count);
    for (u, v, weight) in parsed.edges {
        if let Err(e) = graph.add_edge(VertexId(u), VertexId(v), weight) {
            eprintln!("Error: {}", e);
            return 2;
        }
    }

    let start = VertexId(start_flag.or(parsed.start).unwrap_or(0));
    let tree = match graph.minimum_spanning_tree(start) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 2;
        }
    };

    if !tree.spans(&graph) {
        eprintln!(
            "warning: graph is disconnected; the tree covers {} of {} vertices",
            tree.vertex_count(),
            graph.vertex_count()
        );
    }

    if json {
        match serde_json::to_string_pretty(&tree) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: failed to serialize result: {}", e);
                return 1;
            }
        }
    } else {
        println!("Edges in the minimum spanning tree:");
        for edge in &tree.edges {
            println!("{} - {} (weight = {})", edge.parent, edge.child, edge.weight);
        }
        println!();
        println!("Total cost: {}", tree.total_cost);
    }

    0
}

/// Read the whole input, from a file or from stdin when the path is absent
/// or '-'.
fn read_input(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// A graph description parsed from the textual format.
#[derive(Debug)]
struct ParsedGraph {
    vertex_count: usize,
    edges: Vec<(u32, u32, Weight)>,
    /// Start vertex from the optional trailing line, if present.
    start: Option<u32>,
}

/// Parse the textual graph format.
///
/// First line `V E`, then exactly `E` lines `u v w` (0-indexed vertices,
/// integer weights), then optionally a single line naming the start vertex.
/// Blank lines are skipped.
fn parse_graph(text: &str) -> Result<ParsedGraph, String> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| "empty input, expected a 'V E' header".to_string())?;
    let mut fields = header.split_whitespace();
    let vertex_count = parse_field::<usize>(fields.next(), "vertex count")?;
    let edge_count = parse_field::<usize>(fields.next(), "edge count")?;
    if fields.next().is_some() {
        return Err(format!(
            "header '{}' has trailing fields, expected 'V E'",
            header
        ));
    }

    let mut edges = Vec::with_capacity(edge_count);
    for _ in 0..edge_count {
        let line = lines.next().ok_or_else(|| {
            format!("expected {} edge lines, found {}", edge_count, edges.len())
        })?;
        let mut fields = line.split_whitespace();
        let u = parse_field::<u32>(fields.next(), "source vertex")?;
        let v = parse_field::<u32>(fields.next(), "target vertex")?;
        let weight = parse_field::<Weight>(fields.next(), "edge weight")?;
        if fields.next().is_some() {
            return Err(format!(
                "edge line '{}' has trailing fields, expected 'u v w'",
                line
            ));
        }
        edges.push((u, v, weight));
    }

    let start = match lines.next() {
        None => None,
        Some(line) => {
            let mut fields = line.split_whitespace();
            let vertex = parse_field::<u32>(fields.next(), "start vertex")?;
            if fields.next().is_some() {
                return Err(format!(
                    "start line '{}' has trailing fields, expected a single vertex",
                    line
                ));
            }
            if let Some(extra) = lines.next() {
                return Err(format!("unexpected trailing line '{}'", extra));
            }
            Some(vertex)
        }
    };

    Ok(ParsedGraph {
        vertex_count,
        edges,
        start,
    })
}

/// Parse one whitespace-separated field, naming it in the error message.
fn parse_field<T: FromStr>(field: Option<&str>, what: &str) -> Result<T, String>
where
    T::Err: fmt::Display,
{
    let field = field.ok_or_else(|| format!("missing {}", what))?;
    field
        .parse()
        .map_err(|e| format!("invalid {} '{}': {}", what, field, e))
}
