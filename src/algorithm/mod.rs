pub mod traits;
pub mod dijkstra;
pub mod spfa;
pub mod levit;
pub mod negative_cycle;
pub mod pathfinder;
pub mod multi;
pub mod kind;

pub use traits::{SearchState, ShortestPath, ShortestPathAlgorithm};
pub use pathfinder::PathFinder;
pub use kind::AlgorithmKind;

/// Dijkstra bound to a graph with non-negative weights
pub type DijkstraPathFinder<'g, V, W> = PathFinder<'g, V, W, dijkstra::Dijkstra>;

/// SPFA bound to a graph without negative cycles
pub type SpfaPathFinder<'g, V, W> = PathFinder<'g, V, W, spfa::Spfa>;

/// Levit bound to a graph without negative cycles
pub type LevitPathFinder<'g, V, W> = PathFinder<'g, V, W, levit::Levit>;
