//! Plain-text graph format.
//!
//! ```text
//! directed            <- or anything else for an undirected graph
//! 1 2 3 4             <- every vertex, including isolated ones
//! 1 2 7               <- zero or more `from to weight` lines
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::graph::Graph;
use crate::{Error, Result};

const DIRECTED_HEADER: &str = "directed";
const UNDIRECTED_HEADER: &str = "undirected";

impl Graph<String, i64> {
    /// Parses a graph from its textual representation
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines().enumerate();

        let directed = match lines.next() {
            Some((_, header)) => header == DIRECTED_HEADER,
            None => {
                return Err(Error::Parse {
                    line: 1,
                    message: "missing directedness header".to_string(),
                })
            }
        };
        let mut graph = Graph::new(directed);

        if let Some((_, vertex_line)) = lines.next() {
            for vertex in vertex_line.split_whitespace() {
                graph.add_vertex(vertex.to_string());
            }
        }

        for (index, line) in lines {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.is_empty() {
                continue;
            }
            let [from, to, weight] = tokens.as_slice() else {
                return Err(Error::Parse {
                    line: index + 1,
                    message: format!("expected `from to weight`, found {} tokens", tokens.len()),
                });
            };
            let weight: i64 = weight.parse().map_err(|_| Error::Parse {
                line: index + 1,
                message: format!("invalid integer weight `{}`", weight),
            })?;
            graph.add_edge(from.to_string(), to.to_string(), weight);
        }

        Ok(graph)
    }

    /// Reads a graph from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut text = String::new();
        BufReader::new(reader).read_to_string(&mut text)?;
        Self::parse(&text)
    }

    /// Reads a graph from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Writes the graph in the textual format.
    ///
    /// Each undirected edge is written once even though it is stored in both
    /// adjacency lists.
    pub fn write_to<Wr: Write>(&self, mut out: Wr) -> Result<()> {
        write!(out, "{}", self)?;
        out.flush()?;
        Ok(())
    }
}

impl fmt::Display for Graph<String, i64> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = if self.is_directed() {
            DIRECTED_HEADER
        } else {
            UNDIRECTED_HEADER
        };
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", self.vertices().join(" "))?;

        // Mirror entries still owed by undirected edges already written
        let mut mirrored: HashMap<(&str, &str, i64), usize> = HashMap::new();
        for from in self.vertices() {
            let edges = self.get_adjacent(from).map_err(|_| fmt::Error)?;
            for (to, weight) in edges {
                if !self.is_directed() {
                    if let Some(owed) = mirrored.get_mut(&(from.as_str(), to.as_str(), *weight)) {
                        if *owed > 0 {
                            *owed -= 1;
                            continue;
                        }
                    }
                    *mirrored
                        .entry((to.as_str(), from.as_str(), *weight))
                        .or_insert(0) += 1;
                }
                writeln!(f, "{} {} {}", from, to, weight)?;
            }
        }
        Ok(())
    }
}

