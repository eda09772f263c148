use std::collections::{HashMap, VecDeque};

use crate::algorithm::negative_cycle::check_negative_cycles;
use crate::algorithm::traits::sealed::Search;
use crate::algorithm::{SearchState, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Where a reached vertex currently sits. Unreached vertices have no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    /// Waiting in the normal or the urgent queue
    Queued,
    /// Processed, cost considered final until improved again
    Settled,
}

/// Levit's two-queue algorithm.
///
/// Newly reached vertices wait in a normal FIFO queue. A settled vertex whose
/// cost improves goes to an urgent queue that is always drained first, so its
/// correction spreads before more new vertices are expanded. Same
/// preconditions as [`Spfa`](crate::algorithm::spfa::Spfa).
#[derive(Debug, Default, Clone, Copy)]
pub struct Levit;

impl Levit {
    pub fn new() -> Self {
        Levit
    }
}

impl<V, W> ShortestPathAlgorithm<V, W> for Levit
where
    V: VertexId,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Levit"
    }

    fn validate(&self, graph: &Graph<V, W>) -> Result<()> {
        check_negative_cycles(graph)
    }
}

impl<V, W> Search<V, W> for Levit
where
    V: VertexId,
    W: Weight,
{
    fn search(&self, graph: &Graph<V, W>, source: &V) -> Result<SearchState<V, W>> {
        graph.get_adjacent(source)?;

        let mut state = SearchState::new(source.clone());
        let mut status = HashMap::from([(source.clone(), Status::Queued)]);
        let mut normal = VecDeque::from([source.clone()]);
        let mut urgent = VecDeque::new();

        while let Some(current) = urgent.pop_front().or_else(|| normal.pop_front()) {
            status.insert(current.clone(), Status::Settled);

            for (next, weight) in graph.get_adjacent(&current)? {
                if !state.relax(&current, next, *weight)? {
                    continue;
                }
                match status.get(next) {
                    Some(Status::Settled) => {
                        status.insert(next.clone(), Status::Queued);
                        urgent.push_back(next.clone());
                    }
                    Some(Status::Queued) => {}
                    None => {
                        status.insert(next.clone(), Status::Queued);
                        normal.push_back(next.clone());
                    }
                }
            }
        }

        Ok(state)
    }
}
