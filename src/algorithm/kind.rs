use std::fmt;
use std::str::FromStr;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::levit::Levit;
use crate::algorithm::spfa::Spfa;
use crate::algorithm::traits::sealed::Search;
use crate::algorithm::{SearchState, ShortestPathAlgorithm};
use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Algorithm picked at runtime, e.g. from a command line flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Dijkstra,
    Spfa,
    Levit,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] = [
        AlgorithmKind::Dijkstra,
        AlgorithmKind::Spfa,
        AlgorithmKind::Levit,
    ];
}

impl<V, W> ShortestPathAlgorithm<V, W> for AlgorithmKind
where
    V: VertexId,
    W: Weight,
{
    fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => ShortestPathAlgorithm::<V, W>::name(&Dijkstra),
            AlgorithmKind::Spfa => ShortestPathAlgorithm::<V, W>::name(&Spfa),
            AlgorithmKind::Levit => ShortestPathAlgorithm::<V, W>::name(&Levit),
        }
    }

    fn validate(&self, graph: &Graph<V, W>) -> Result<()> {
        match self {
            AlgorithmKind::Dijkstra => Dijkstra.validate(graph),
            AlgorithmKind::Spfa => Spfa.validate(graph),
            AlgorithmKind::Levit => Levit.validate(graph),
        }
    }
}

impl<V, W> Search<V, W> for AlgorithmKind
where
    V: VertexId,
    W: Weight,
{
    fn search(&self, graph: &Graph<V, W>, source: &V) -> Result<SearchState<V, W>> {
        match self {
            AlgorithmKind::Dijkstra => Dijkstra.search(graph, source),
            AlgorithmKind::Spfa => Spfa.search(graph, source),
            AlgorithmKind::Levit => Levit.search(graph, source),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::Spfa => "spfa",
            AlgorithmKind::Levit => "levit",
        };
        f.write_str(name)
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(AlgorithmKind::Dijkstra),
            "spfa" => Ok(AlgorithmKind::Spfa),
            "levit" => Ok(AlgorithmKind::Levit),
            other => Err(format!(
                "unknown algorithm `{}` (expected dijkstra, spfa or levit)",
                other
            )),
        }
    }
}
