use crate::algorithm::traits::search_path;
use crate::algorithm::{SearchState, ShortestPath, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// An algorithm bound to a graph it has validated.
///
/// Construction fails if the graph breaks the algorithm's precondition
/// (negative weights for Dijkstra, negative cycles for SPFA and Levit).
#[derive(Debug)]
pub struct PathFinder<'g, V, W, A>
where
    V: VertexId,
    W: Weight,
    A: ShortestPathAlgorithm<V, W>,
{
    graph: &'g Graph<V, W>,
    algorithm: A,
}

impl<'g, V, W, A> PathFinder<'g, V, W, A>
where
    V: VertexId,
    W: Weight,
    A: ShortestPathAlgorithm<V, W>,
{
    /// Validates the graph and binds the algorithm to it
    pub fn new(graph: &'g Graph<V, W>, algorithm: A) -> Result<Self> {
        algorithm.validate(graph)?;
        Ok(PathFinder { graph, algorithm })
    }

    pub fn graph(&self) -> &'g Graph<V, W> {
        self.graph
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Shortest path from `start` to `goal`, `Ok(None)` if unreachable
    pub fn get_path(&self, start: &V, goal: &V) -> Result<Option<ShortestPath<V, W>>> {
        search_path(&self.algorithm, self.graph, start, goal)
    }

    /// Full single-source search from `source`
    pub fn find_paths(&self, source: &V) -> Result<SearchState<V, W>> {
        self.algorithm.search(self.graph, source)
    }
}
