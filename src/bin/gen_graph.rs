use std::io::{self, BufWriter};

use clap::Parser;
use waypath::graph::generators::{random_graph, GeneratorConfig, MAX_WEIGHT};

/// Generates a random graph in the plain-text format on stdout
#[derive(Debug, Parser)]
#[command(name = "gen_graph", version)]
struct Args {
    /// Number of vertices, labelled 1..=N
    vertices_count: usize,

    /// Number of edges to keep (random when omitted)
    #[arg(short, long)]
    edges_count: Option<usize>,

    /// Seed for the generator
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generate a directed graph
    #[arg(short, long)]
    directed: bool,

    /// Largest edge weight
    #[arg(short, long, default_value_t = MAX_WEIGHT)]
    weight: i64,

    /// Smallest edge weight
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    min_weight: i64,
}

impl Args {
    fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.vertices_count)
            .with_directed(self.directed)
            .with_weights(self.min_weight, self.weight);
        if let Some(edges) = self.edges_count {
            config = config.with_edges(edges);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let graph = random_graph(&args.generator_config());
    graph.write_to(BufWriter::new(io::stdout().lock()))?;
    Ok(())
}
