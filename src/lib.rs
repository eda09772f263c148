//! Waypath - single-source shortest paths with ordered waypoints
//!
//! This library offers three interchangeable single-source shortest path algorithms
//! over weighted directed or undirected graphs:
//!
//! - [`Dijkstra`] for graphs with non-negative edge weights,
//! - [`Spfa`] (FIFO relaxation) for graphs with negative edges but no negative cycles,
//! - [`Levit`] (two-queue relaxation) with the same preconditions as SPFA.
//!
//! On top of any of them, [`MultiPathFinder`] answers queries that must visit a list
//! of waypoints in order, by temporarily detaching waypoint adjacency from the graph
//! and restoring it before returning.

pub mod algorithm;
pub mod benchmark;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, levit::Levit, multi::MultiPathFinder, spfa::Spfa, AlgorithmKind,
    PathFinder, SearchState, ShortestPath, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::Graph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Graph contains a negative cycle through vertex {vertex}")]
    NegativeCycle { vertex: String },

    #[error("Path cost overflows the weight type on edge from {from} to {to}")]
    WeightOverflow { from: String, to: String },

    #[error("Malformed graph at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
