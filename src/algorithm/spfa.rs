use std::collections::{HashSet, VecDeque};

use crate::algorithm::negative_cycle::check_negative_cycles;
use crate::algorithm::traits::sealed::Search;
use crate::algorithm::{SearchState, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Shortest Path Faster Algorithm: Bellman-Ford driven by a FIFO queue.
///
/// Handles negative edge weights as long as the graph has no negative cycle.
/// A vertex may be processed several times.
#[derive(Debug, Default, Clone, Copy)]
pub struct Spfa;

impl Spfa {
    pub fn new() -> Self {
        Spfa
    }
}

impl<V, W> ShortestPathAlgorithm<V, W> for Spfa
where
    V: VertexId,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "SPFA"
    }

    fn validate(&self, graph: &Graph<V, W>) -> Result<()> {
        check_negative_cycles(graph)
    }
}

impl<V, W> Search<V, W> for Spfa
where
    V: VertexId,
    W: Weight,
{
    fn search(&self, graph: &Graph<V, W>, source: &V) -> Result<SearchState<V, W>> {
        graph.get_adjacent(source)?;

        let mut state = SearchState::new(source.clone());
        let mut queue = VecDeque::from([source.clone()]);
        let mut enqueued = HashSet::from([source.clone()]);

        while let Some(current) = queue.pop_front() {
            enqueued.remove(&current);

            for (next, weight) in graph.get_adjacent(&current)? {
                if state.relax(&current, next, *weight)? && enqueued.insert(next.clone()) {
                    queue.push_back(next.clone());
                }
            }
        }

        Ok(state)
    }
}
