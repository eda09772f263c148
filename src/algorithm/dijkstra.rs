use crate::algorithm::traits::sealed::Search;
use crate::algorithm::{SearchState, ShortestPathAlgorithm};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// Requires every edge weight to be non-negative.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<V, W> ShortestPathAlgorithm<V, W> for Dijkstra
where
    V: VertexId,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn validate(&self, graph: &Graph<V, W>) -> Result<()> {
        match graph.find_negative_edge() {
            Some((from, to, weight)) => Err(Error::NegativeWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
                weight: format!("{:?}", weight),
            }),
            None => Ok(()),
        }
    }
}

impl<V, W> Search<V, W> for Dijkstra
where
    V: VertexId,
    W: Weight,
{
    fn search(&self, graph: &Graph<V, W>, source: &V) -> Result<SearchState<V, W>> {
        graph.get_adjacent(source)?;

        let mut state = SearchState::new(source.clone());
        let mut queue = MinPriorityQueue::new();
        queue.push(source.clone(), W::zero());

        // Main Dijkstra loop
        while let Some((u, dist_u)) = queue.pop() {
            // A cheaper entry for u was pushed later and already processed
            if let Some(current_dist) = state.cost(&u) {
                if current_dist < dist_u {
                    continue;
                }
            }

            // Relax all outgoing edges
            for (v, weight) in graph.get_adjacent(&u)? {
                if state.relax(&u, v, *weight)? {
                    if let Some(dist_v) = state.cost(v) {
                        queue.push(v.clone(), dist_v);
                    }
                }
            }
        }

        Ok(state)
    }
}
