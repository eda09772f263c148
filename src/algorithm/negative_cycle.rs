//! Negative cycle detection shared by the algorithms that accept negative weights.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::algorithm::traits::extend_cost;
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Fails with [`Error::NegativeCycle`] if the graph contains a negative cycle.
///
/// Every vertex starts at cost zero and in the queue, as if a virtual source
/// had a zero-weight edge to each of them, so cycles anywhere in the graph are
/// found. The queue then relaxes edges like SPFA while tracking, per vertex,
/// how many edges the improving path has. A path of |V| edges must repeat a
/// vertex, and it can only keep improving if the repeated part is negative.
pub fn check_negative_cycles<V, W>(graph: &Graph<V, W>) -> Result<()>
where
    V: VertexId,
    W: Weight,
{
    let n = graph.len();
    let mut costs: HashMap<&V, W> = HashMap::with_capacity(n);
    let mut hops: HashMap<&V, usize> = HashMap::with_capacity(n);
    let mut enqueued: HashSet<&V> = HashSet::with_capacity(n);
    let mut queue: VecDeque<&V> = VecDeque::with_capacity(n);

    for vertex in graph.vertices() {
        costs.insert(vertex, W::zero());
        hops.insert(vertex, 0);
        enqueued.insert(vertex);
        queue.push_back(vertex);
    }

    while let Some(current) = queue.pop_front() {
        enqueued.remove(current);
        let base = costs[current];
        let current_hops = hops[current];

        for (next, weight) in graph.get_adjacent(current)? {
            let candidate = extend_cost(base, *weight, current, next)?;
            if candidate >= costs[next] {
                continue;
            }

            let next_hops = current_hops + 1;
            if next_hops >= n {
                log::debug!("negative cycle detected through {:?}", next);
                return Err(Error::NegativeCycle {
                    vertex: format!("{:?}", next),
                });
            }
            costs.insert(next, candidate);
            hops.insert(next, next_hops);
            if enqueued.insert(next) {
                queue.push_back(next);
            }
        }
    }

    Ok(())
}
