use crate::graph::Graph;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Default upper bound for generated edge weights
pub const MAX_WEIGHT: i64 = 1_000_000_000;

/// Parameters for random graph generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of vertices, labelled `1..=vertices`
    pub vertices: usize,
    /// Edge budget; a random count is drawn when absent
    pub edges: Option<usize>,
    /// Whether to generate a directed graph
    pub directed: bool,
    /// Smallest edge weight (use a negative value for SPFA/Levit inputs)
    pub min_weight: i64,
    /// Largest edge weight
    pub max_weight: i64,
    /// Seed for reproducible graphs
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vertices: 10,
            edges: None,
            directed: false,
            min_weight: 0,
            max_weight: MAX_WEIGHT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration for a graph with `vertices` vertices
    pub fn new(vertices: usize) -> Self {
        Self {
            vertices,
            ..Default::default()
        }
    }

    /// Set the edge budget
    pub fn with_edges(mut self, edges: usize) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Generate a directed graph
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set the inclusive weight range
    pub fn with_weights(mut self, min_weight: i64, max_weight: i64) -> Self {
        self.min_weight = min_weight.min(max_weight);
        self.max_weight = max_weight.max(min_weight);
        self
    }

    /// Set the seed for reproducible output
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generates a random graph.
///
/// Every pair `u < v` first receives an edge (both directions when the graph is
/// directed, sharing one weight), then random edges are dropped until the edge
/// budget is met.
pub fn random_graph(config: &GeneratorConfig) -> Graph<String, i64> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let n = config.vertices;

    let mut edges = Vec::new();
    for u in 1..=n {
        for v in (u + 1)..=n {
            let weight = rng.gen_range(config.min_weight..=config.max_weight);
            if config.directed {
                edges.push((v, u, weight));
            }
            edges.push((u, v, weight));
        }
    }

    let budget = config
        .edges
        .unwrap_or_else(|| rng.gen_range(0..=n * n.saturating_sub(1) / 2));
    while edges.len() > budget {
        let victim = rng.gen_range(0..edges.len());
        edges.swap_remove(victim);
    }

    let mut graph = Graph::new(config.directed);
    for v in 1..=n {
        graph.add_vertex(v.to_string());
    }
    for (u, v, weight) in edges {
        graph.add_edge(u.to_string(), v.to_string(), weight);
    }

    log::debug!(
        "generated {} graph with {} vertices and {} adjacency entries",
        if config.directed { "directed" } else { "undirected" },
        graph.len(),
        graph.edge_count()
    );
    graph
}
