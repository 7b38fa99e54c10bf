//! Undirected weighted graph and the engines that explore it
//!
//! - [`Graph`]: adjacency lists in vertex insertion order
//! - [`traversal`]: depth-first and breadth-first traversal traces
//! - [`dijkstra`]: single-source shortest path with a relaxation trace
//!
//! Vertex identifiers are normalized (trimmed, uppercased) at the boundary by
//! [`normalize_vertex_id`] and [`parse_edge_spec`]; the graph itself stores
//! identifiers exactly as given.

pub mod dijkstra;
pub mod traversal;
pub mod types;

use std::collections::HashMap;

use crate::bail_invalid;
use crate::error::{Result, TraceError};

pub use dijkstra::{Dijkstra, DijkstraEvent, DijkstraStep, DistanceEntry, ShortestPathOutcome};
pub use traversal::{Bfs, Dfs, TraversalEvent, TraversalOutcome, TraversalStep};
pub use types::{Distance, Edge, EdgeRef, EdgeSpec};

/// Vertices shared by both sample graphs
pub const SAMPLE_VERTICES: &[&str] = &["A", "B", "C", "D", "E"];

/// Edge list of the unweighted sample graph used for traversals
pub const SAMPLE_TRAVERSAL_EDGES: &[&str] = &["A,B", "A,D", "B,C", "B,E", "C,E", "D,E"];

/// Edge list of the weighted sample graph used for shortest paths
pub const SAMPLE_WEIGHTED_EDGES: &[&str] = &[
    "A,B,4", "A,D,2", "B,C,3", "B,D,1", "B,E,7", "C,E,2", "D,E,5",
];

/// Adjacency entry keyed by vertex index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub(crate) target: usize,
    pub(crate) weight: u32,
}

/// Undirected weighted graph with deterministic vertex and neighbor order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<Link>>,
    edge_order: Vec<(usize, usize, u32)>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from edge specs, adding endpoints as they first appear
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        let mut graph = Graph::new();
        for edge in edges {
            for id in [&edge.from, &edge.to] {
                if !graph.contains(id) {
                    graph.add_vertex(id)?;
                }
            }
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    /// Add the listed vertices first (normalized, in order), then parse and
    /// add `A,B[,W]` edge specs, adding any endpoint not listed
    pub fn build<V, E>(vertices: &[V], edge_specs: &[E]) -> Result<Self>
    where
        V: AsRef<str>,
        E: AsRef<str>,
    {
        let mut graph = Graph::new();
        for raw in vertices {
            graph.add_vertex(&normalize_vertex_id(raw.as_ref())?)?;
        }
        for raw in edge_specs {
            let edge = parse_edge_spec(raw.as_ref())?;
            for id in [&edge.from, &edge.to] {
                if !graph.contains(id) {
                    graph.add_vertex(id)?;
                }
            }
            graph.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(graph)
    }

    pub fn add_vertex(&mut self, id: &str) -> Result<()> {
        if id.is_empty() {
            bail_invalid!("vertex id", "(empty)");
        }
        if self.index.contains_key(id) {
            return Err(TraceError::already_exists("vertex", id));
        }
        self.index.insert(id.to_string(), self.vertices.len());
        self.vertices.push(id.to_string());
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Insert `a - b` with the given weight in both adjacency lists
    pub fn add_edge(&mut self, a: &str, b: &str, weight: u32) -> Result<()> {
        if weight == 0 {
            bail_invalid!("edge weight", format!("{} (must be a positive integer)", weight));
        }
        if a == b {
            bail_invalid!("edge", format!("{}-{} (self-loops are not allowed)", a, b));
        }
        let from = self.require(a)?;
        let to = self.require(b)?;
        if self.adjacency[from].iter().any(|l| l.target == to) {
            return Err(TraceError::already_exists("edge", format!("{}-{}", a, b)));
        }

        self.adjacency[from].push(Link { target: to, weight });
        self.adjacency[to].push(Link {
            target: from,
            weight,
        });
        self.edge_order.push((from, to, weight));
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// The first vertex inserted, the default traversal start
    pub fn first_vertex(&self) -> Option<&str> {
        self.vertices.first().map(String::as_str)
    }

    /// Neighbors in stored order; empty for an unknown vertex
    pub fn neighbors(&self, id: &str) -> Vec<Edge> {
        self.index
            .get(id)
            .map(|&i| {
                self.adjacency[i]
                    .iter()
                    .map(|l| Edge {
                        neighbor: self.vertices[l.target].clone(),
                        weight: l.weight,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn weight(&self, a: &str, b: &str) -> Option<u32> {
        let from = *self.index.get(a)?;
        let to = *self.index.get(b)?;
        self.adjacency[from]
            .iter()
            .find(|l| l.target == to)
            .map(|l| l.weight)
    }

    /// Each undirected edge once, in the order it was added
    pub fn edges(&self) -> Vec<EdgeSpec> {
        self.edge_order
            .iter()
            .map(|&(from, to, weight)| {
                EdgeSpec::new(self.vertices[from].clone(), self.vertices[to].clone(), weight)
            })
            .collect()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn require(&self, id: &str) -> Result<usize> {
        self.index_of(id)
            .ok_or_else(|| TraceError::not_found("vertex", id))
    }

    pub(crate) fn name(&self, index: usize) -> &str {
        &self.vertices[index]
    }

    pub(crate) fn links(&self, index: usize) -> &[Link] {
        &self.adjacency[index]
    }
}

/// Trim and uppercase a user-supplied vertex id
pub fn normalize_vertex_id(raw: &str) -> Result<String> {
    let id = raw.trim();
    if id.is_empty() {
        bail_invalid!("vertex id", "(empty)");
    }
    Ok(id.to_uppercase())
}

/// Parse `FROM,TO` or `FROM,TO,WEIGHT`; the weight defaults to 1
pub fn parse_edge_spec(raw: &str) -> Result<EdgeSpec> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (*from, *to, 1),
        [from, to, weight] => (*from, *to, parse_weight(weight)?),
        _ => bail_invalid!("edge", format!("{} (expected FROM,TO[,WEIGHT])", raw)),
    };

    let from = normalize_vertex_id(from)?;
    let to = normalize_vertex_id(to)?;
    if from == to {
        bail_invalid!("edge", format!("{}-{} (self-loops are not allowed)", from, to));
    }
    Ok(EdgeSpec { from, to, weight })
}

fn parse_weight(raw: &str) -> Result<u32> {
    match raw.parse::<i64>() {
        Ok(w) if w > 0 => u32::try_from(w)
            .map_err(|_| TraceError::invalid_value("edge weight", format!("{} (too large)", w))),
        Ok(w) => Err(TraceError::invalid_value(
            "edge weight",
            format!("{} (must be a positive integer)", w),
        )),
        Err(_) => Err(TraceError::invalid_value("edge weight", raw)),
    }
}

/// A-B, A-D, B-C, B-E, C-E, D-E, every weight 1
pub fn sample_traversal_graph() -> Result<Graph> {
    Graph::build(SAMPLE_VERTICES, SAMPLE_TRAVERSAL_EDGES)
}

/// A-B:4, A-D:2, B-C:3, B-D:1, B-E:7, C-E:2, D-E:5
pub fn sample_weighted_graph() -> Result<Graph> {
    Graph::build(SAMPLE_VERTICES, SAMPLE_WEIGHTED_EDGES)
}
