use std::collections::HashMap;

use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// A path found by a query, inclusive of both endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPath<V, W> {
    /// Vertices from start to goal; empty when start and goal coincide
    pub vertices: Vec<V>,

    /// Sum of the edge weights along `vertices`
    pub cost: W,
}

impl<V, W: Weight> ShortestPath<V, W> {
    /// The path of a query whose start is its goal
    pub fn empty() -> Self {
        ShortestPath {
            vertices: Vec::new(),
            cost: W::zero(),
        }
    }
}

/// Traversal state of a single query.
///
/// Built fresh for every search, so nothing leaks from one source to the next.
/// A vertex missing from `costs` has not been reached.
#[derive(Debug, Clone)]
pub struct SearchState<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Source vertex of the search
    pub source: V,

    /// Best known distance from the source
    pub costs: HashMap<V, W>,

    /// Predecessor of each reached vertex in the shortest path tree
    pub predecessors: HashMap<V, V>,
}

impl<V, W> SearchState<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Starts a search with the source at cost zero
    pub fn new(source: V) -> Self {
        let mut costs = HashMap::new();
        costs.insert(source.clone(), W::zero());
        SearchState {
            source,
            costs,
            predecessors: HashMap::new(),
        }
    }

    /// Best known cost of a vertex, `None` if unreached
    pub fn cost(&self, vertex: &V) -> Option<W> {
        self.costs.get(vertex).copied()
    }

    pub fn is_reached(&self, vertex: &V) -> bool {
        self.costs.contains_key(vertex)
    }

    /// Relaxes the edge `from -> to`. Returns true if the cost of `to` improved.
    pub fn relax(&mut self, from: &V, to: &V, weight: W) -> Result<bool> {
        let Some(&base) = self.costs.get(from) else {
            return Ok(false);
        };
        let candidate = extend_cost(base, weight, from, to)?;
        let improved = match self.costs.get(to) {
            None => true,
            Some(&current) => candidate < current,
        };

        if improved {
            self.costs.insert(to.clone(), candidate);
            self.predecessors.insert(to.clone(), from.clone());
        }
        Ok(improved)
    }

    /// Walks the predecessors back from `goal` and returns the path from the source
    pub fn path_to(&self, goal: &V) -> Option<Vec<V>> {
        if !self.is_reached(goal) {
            return None;
        }

        let mut path = vec![goal.clone()];
        let mut current = goal;
        while *current != self.source {
            current = match self.predecessors.get(current) {
                Some(pred) => pred,
                None => {
                    log::warn!("broken predecessor chain at {:?}", current);
                    return None;
                }
            };
            path.push(current.clone());

            // A validated graph has no negative cycle, so this only trips on misuse
            if path.len() > self.costs.len() {
                log::warn!("predecessor cycle while rebuilding path to {:?}", goal);
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// `base + weight` for the step `from -> to`, or [`Error::WeightOverflow`]
pub(crate) fn extend_cost<V, W>(base: W, weight: W, from: &V, to: &V) -> Result<W>
where
    V: VertexId,
    W: Weight,
{
    base.checked_add(&weight).ok_or_else(|| Error::WeightOverflow {
        from: format!("{:?}", from),
        to: format!("{:?}", to),
    })
}

pub(crate) mod sealed {
    use crate::algorithm::SearchState;
    use crate::graph::{Graph, VertexId, Weight};
    use crate::Result;

    /// The main loop of an algorithm, run without checking its precondition.
    ///
    /// Only reachable inside the crate, where callers have validated the graph.
    pub trait Search<V, W>
    where
        V: VertexId,
        W: Weight,
    {
        fn search(&self, graph: &Graph<V, W>, source: &V) -> Result<SearchState<V, W>>;
    }
}

/// Trait for single-source shortest path algorithms.
///
/// Every public search validates the graph first. [`PathFinder`] and
/// [`MultiPathFinder`] validate once on construction instead of per query.
///
/// [`PathFinder`]: crate::algorithm::PathFinder
/// [`MultiPathFinder`]: crate::algorithm::multi::MultiPathFinder
pub trait ShortestPathAlgorithm<V, W>: sealed::Search<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Rejects graphs the algorithm cannot handle correctly
    fn validate(&self, graph: &Graph<V, W>) -> Result<()>;

    /// Compute shortest paths from a source vertex to every reachable vertex
    fn find_paths(&self, graph: &Graph<V, W>, source: &V) -> Result<SearchState<V, W>> {
        self.validate(graph)?;
        self.search(graph, source)
    }

    /// Get the shortest path from `start` to `goal`.
    ///
    /// Returns `Ok(None)` when `goal` cannot be reached, and an empty path of
    /// cost zero when `start == goal`.
    fn get_path(
        &self,
        graph: &Graph<V, W>,
        start: &V,
        goal: &V,
    ) -> Result<Option<ShortestPath<V, W>>> {
        self.validate(graph)?;
        search_path(self, graph, start, goal)
    }
}

/// Point-to-point query on a graph the caller has already validated
pub(crate) fn search_path<V, W, A>(
    algorithm: &A,
    graph: &Graph<V, W>,
    start: &V,
    goal: &V,
) -> Result<Option<ShortestPath<V, W>>>
where
    V: VertexId,
    W: Weight,
    A: ShortestPathAlgorithm<V, W> + ?Sized,
{
    if start == goal {
        if !graph.contains(start) {
            return Err(Error::UnknownVertex(format!("{:?}", start)));
        }
        return Ok(Some(ShortestPath::empty()));
    }

    let state = algorithm.search(graph, start)?;
    let path = state.path_to(goal).and_then(|vertices| {
        state
            .cost(goal)
            .map(|cost| ShortestPath { vertices, cost })
    });

    log::debug!(
        "{}: {:?} -> {:?} reached {} vertices, goal {}",
        algorithm.name(),
        start,
        goal,
        state.costs.len(),
        if path.is_some() { "found" } else { "unreachable" }
    );
    Ok(path)
}
