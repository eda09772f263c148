use std::collections::HashMap;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::traits::{extend_cost, search_path};
use crate::algorithm::{ShortestPath, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Temporary detachment of vertex adjacency.
///
/// Every list taken out of the graph is kept in the ledger until it is put
/// back, and whatever is still in the ledger when the guard goes away is
/// restored on drop, including on early returns and errors.
struct Detour<'a, V, W>
where
    V: VertexId,
    W: Weight,
{
    graph: &'a mut Graph<V, W>,
    ledger: HashMap<V, Vec<(V, W)>>,
}

impl<'a, V, W> Detour<'a, V, W>
where
    V: VertexId,
    W: Weight,
{
    fn new(graph: &'a mut Graph<V, W>) -> Self {
        Detour {
            graph,
            ledger: HashMap::new(),
        }
    }

    fn graph(&self) -> &Graph<V, W> {
        &*self.graph
    }

    /// Turns a vertex into a dead end. Already detached and unknown vertices are left alone.
    fn detach(&mut self, vertex: &V) {
        if self.ledger.contains_key(vertex) {
            return;
        }
        if let Some(edges) = self.graph.detach(vertex) {
            self.ledger.insert(vertex.clone(), edges);
        }
    }

    fn restore(&mut self, vertex: &V) {
        if let Some(edges) = self.ledger.remove(vertex) {
            self.graph.reattach(vertex, edges);
        }
    }
}

impl<V, W> Drop for Detour<'_, V, W>
where
    V: VertexId,
    W: Weight,
{
    fn drop(&mut self) {
        for (vertex, edges) in self.ledger.drain() {
            self.graph.reattach(&vertex, edges);
        }
    }
}

/// Finds shortest paths that visit a list of waypoints in order.
///
/// Each leg between consecutive waypoints is answered by the wrapped
/// algorithm while every waypoint not yet reached has its outgoing edges
/// detached, so a leg can end at such a waypoint but never pass through it.
/// Waypoints already left behind are detached again for the same reason.
/// The graph is exactly as it was once [`MultiPathFinder::get_path`] returns.
#[derive(Debug)]
pub struct MultiPathFinder<'g, V, W, A = Dijkstra>
where
    V: VertexId,
    W: Weight,
    A: ShortestPathAlgorithm<V, W>,
{
    graph: &'g mut Graph<V, W>,
    algorithm: A,
}

impl<'g, V, W> MultiPathFinder<'g, V, W, Dijkstra>
where
    V: VertexId,
    W: Weight,
{
    /// Waypoint routing backed by Dijkstra's algorithm
    pub fn dijkstra(graph: &'g mut Graph<V, W>) -> Result<Self> {
        Self::new(graph, Dijkstra)
    }
}

impl<'g, V, W, A> MultiPathFinder<'g, V, W, A>
where
    V: VertexId,
    W: Weight,
    A: ShortestPathAlgorithm<V, W>,
{
    /// Validates the graph for `algorithm` and takes exclusive access to it
    pub fn new(graph: &'g mut Graph<V, W>, algorithm: A) -> Result<Self> {
        algorithm.validate(graph)?;
        Ok(MultiPathFinder { graph, algorithm })
    }

    pub fn graph(&self) -> &Graph<V, W> {
        &*self.graph
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Shortest path through `waypoints` in the given order.
    ///
    /// Returns `Ok(None)` as soon as one leg is unreachable. No waypoints, or a
    /// single known one, give an empty path of cost zero.
    pub fn get_path(&mut self, waypoints: &[V]) -> Result<Option<ShortestPath<V, W>>> {
        let Some(first) = waypoints.first() else {
            return Ok(Some(ShortestPath::empty()));
        };
        if waypoints.len() == 1 {
            self.graph.get_adjacent(first)?;
            return Ok(Some(ShortestPath::empty()));
        }

        let mut detour = Detour::new(&mut *self.graph);
        for waypoint in waypoints {
            detour.detach(waypoint);
        }
        detour.restore(first);

        let mut vertices: Vec<V> = Vec::new();
        let mut cost = W::zero();
        for (leg, pair) in waypoints.windows(2).enumerate() {
            let (from, to) = (&pair[0], &pair[1]);
            detour.restore(to);

            let Some(path) = search_path(&self.algorithm, detour.graph(), from, to)? else {
                log::trace!("leg {} ({:?} -> {:?}) is unreachable", leg, from, to);
                return Ok(None);
            };
            log::trace!(
                "leg {} ({:?} -> {:?}) costs {:?} over {} vertices",
                leg,
                from,
                to,
                path.cost,
                path.vertices.len()
            );

            // The junction vertex already ends the previous leg
            let skip = usize::from(!vertices.is_empty());
            vertices.extend(path.vertices.into_iter().skip(skip));
            cost = extend_cost(cost, path.cost, from, to)?;

            if from != to {
                detour.detach(from);
            }
        }

        log::debug!(
            "{}: route through {} waypoints costs {:?}",
            self.algorithm.name(),
            waypoints.len(),
            cost
        );
        Ok(Some(ShortestPath { vertices, cost }))
    }
}
