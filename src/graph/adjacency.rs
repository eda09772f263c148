use crate::graph::traits::{VertexId, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A weighted graph stored as adjacency lists
///
/// Vertices keep their insertion order, and so does every adjacency list,
/// which makes traversal order (and therefore tie-breaking) deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Whether edges are one-way
    directed: bool,

    /// Vertices in the order they were first declared
    order: Vec<V>,

    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    adjacency: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> Graph<V, W>
where
    V: VertexId,
    W: Weight,
{
    /// Creates a new empty graph
    pub fn new(directed: bool) -> Self {
        Graph {
            directed,
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds a vertex to the graph; does nothing if it is already known
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            self.order.push(vertex.clone());
            self.adjacency.insert(vertex, Vec::new());
        }
    }

    /// Adds an edge between two vertices, declaring them if needed.
    ///
    /// Undirected graphs receive both `from -> to` and `to -> from`. Parallel
    /// edges and self-loops are kept as given.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(&to) {
                edges.push((from.clone(), weight));
            }
        }
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push((to, weight));
        }
    }

    /// Returns all vertices in insertion order
    pub fn vertices(&self) -> &[V] {
        &self.order
    }

    /// Returns the outgoing edges of a vertex
    pub fn get_adjacent(&self, vertex: &V) -> Result<&[(V, W)]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", vertex)))
    }

    /// Returns true if the vertex exists in the graph
    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Returns the number of vertices in the graph
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the number of adjacency entries (an undirected edge counts twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    /// Finds the first edge with a negative weight, if any
    pub fn find_negative_edge(&self) -> Option<(&V, &V, W)> {
        self.order.iter().find_map(|from| {
            self.adjacency[from]
                .iter()
                .find(|(_, weight)| *weight < W::zero())
                .map(|(to, weight)| (from, to, *weight))
        })
    }

    /// Detaches the outgoing edges of a vertex, leaving it as a dead end.
    /// Returns `None` for unknown vertices.
    pub(crate) fn detach(&mut self, vertex: &V) -> Option<Vec<(V, W)>> {
        self.adjacency.get_mut(vertex).map(std::mem::take)
    }

    /// Puts back edges previously taken with [`Graph::detach`]
    pub(crate) fn reattach(&mut self, vertex: &V, edges: Vec<(V, W)>) {
        if let Some(slot) = self.adjacency.get_mut(vertex) {
            *slot = edges;
        }
    }
}
