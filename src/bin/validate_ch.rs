use std::path::PathBuf;

use clap::Parser;
use hierarchy_paths::{
    graphs::graph_factory::GraphFactory,
    search::{
        dijkstra::Dijkstra,
        validation::{generate_test_cases, random_requests, validate},
    },
    BuildConfig, ContractedGraph, Result,
};
use log::{error, info};

/// Builds a contraction hierarchy and checks it against Dijkstra.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .fmi format. A random grid is generated if missing.
    #[arg(short, long)]
    graph: Option<PathBuf>,
    /// Side length of the generated grid
    #[arg(long, default_value_t = 50)]
    grid_size: u32,
    /// Seed for the grid and the queries
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
    /// Build config in .json format
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of random queries
    #[arg(short, long, default_value_t = 10_000)]
    queries: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BuildConfig::from_json_file(path)?,
        None => BuildConfig {
            progress: true,
            ..Default::default()
        },
    };

    let graph = match &args.graph {
        Some(path) => {
            info!("Reading graph from {:?}", path);
            GraphFactory::from_fmi_file(path)?
        }
        None => {
            info!("Generating {0}x{0} grid", args.grid_size);
            GraphFactory::grid(args.grid_size, args.seed)
        }
    };
    info!(
        "Graph has {} vertices and {} edges",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    let contracted_graph = ContractedGraph::by_contraction(&graph, &config);
    info!(
        "Upward graph has {} edges, downward graph has {} edges",
        contracted_graph.upward_graph.number_of_edges(),
        contracted_graph.downward_graph.number_of_edges()
    );

    let requests = random_requests(&graph, args.queries, args.seed);
    let test_cases = generate_test_cases(&Dijkstra::new(&graph), requests, config.progress)?;
    let mismatches = validate(&contracted_graph, &test_cases, config.progress)?;

    for mismatch in mismatches.iter().take(10) {
        error!(
            "{} -> {}: expected {:?}, got {:?}",
            mismatch.test_case.request.source,
            mismatch.test_case.request.target,
            mismatch.test_case.distance,
            mismatch.actual
        );
    }

    if !mismatches.is_empty() {
        error!(
            "{} of {} queries failed",
            mismatches.len(),
            test_cases.len()
        );
        std::process::exit(1);
    }

    info!("All {} queries matched", test_cases.len());
    Ok(())
}
