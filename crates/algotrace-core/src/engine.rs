//! Capability traits implemented by the engines, plus name-based selection
//!
//! Engines are stateless unit structs. Every call builds fresh working state
//! from its inputs, so concurrent runs on shared inputs never interfere.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TraceError};
use crate::graph::{Bfs, Dfs, Dijkstra, Graph, ShortestPathOutcome, TraversalOutcome};
use crate::sort::{InsertionSort, MergeSort, QuickSort, SortOutcome};
use crate::trace::TraceValue;

/// An engine that sorts a slice and records every step
pub trait Sortable {
    fn name(&self) -> &'static str;

    /// Sort a copy of `input`; the caller's slice is never touched
    fn sort<T: TraceValue>(&self, input: &[T]) -> Result<SortOutcome<T>>;
}

/// An engine that walks a graph from a start vertex
pub trait Traversable {
    fn name(&self) -> &'static str;

    fn traverse(&self, graph: &Graph, start: &str) -> Result<TraversalOutcome>;
}

/// An engine that finds a shortest path between two vertices
pub trait ShortestPathRunnable {
    fn name(&self) -> &'static str;

    fn run(&self, graph: &Graph, source: &str, target: &str) -> Result<ShortestPathOutcome>;
}

/// Sorting algorithm selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Insertion => InsertionSort.name(),
            SortAlgorithm::Merge => MergeSort.name(),
            SortAlgorithm::Quick => QuickSort.name(),
        }
    }

    pub fn run<T: TraceValue>(self, input: &[T]) -> Result<SortOutcome<T>> {
        match self {
            SortAlgorithm::Insertion => InsertionSort.sort(input),
            SortAlgorithm::Merge => MergeSort.sort(input),
            SortAlgorithm::Quick => QuickSort.sort(input),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        SortAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| TraceError::unsupported("sort algorithm", s, supported(&SortAlgorithm::ALL)))
    }
}

/// Traversal order selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalAlgorithm {
    Dfs,
    Bfs,
}

impl TraversalAlgorithm {
    pub const ALL: [TraversalAlgorithm; 2] = [TraversalAlgorithm::Dfs, TraversalAlgorithm::Bfs];

    pub fn engine(self) -> &'static dyn Traversable {
        match self {
            TraversalAlgorithm::Dfs => &Dfs,
            TraversalAlgorithm::Bfs => &Bfs,
        }
    }

    pub fn name(self) -> &'static str {
        self.engine().name()
    }

    pub fn run(self, graph: &Graph, start: &str) -> Result<TraversalOutcome> {
        self.engine().traverse(graph, start)
    }
}

impl fmt::Display for TraversalAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalAlgorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        TraversalAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| {
                TraceError::unsupported("traversal", s, supported(&TraversalAlgorithm::ALL))
            })
    }
}

/// The single shortest-path engine, for symmetry with the other selectors
pub fn shortest_path_engine() -> &'static dyn ShortestPathRunnable {
    &Dijkstra
}

fn supported<A: fmt::Display>(all: &[A]) -> String {
    all.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
