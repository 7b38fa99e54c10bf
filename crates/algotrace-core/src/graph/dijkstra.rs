//! Single-source shortest paths with a full relaxation trace
//!
//! The selection step scans every unvisited vertex for the smallest
//! tentative distance (no priority queue). Ties go to the vertex inserted
//! first, so runs are reproducible.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::engine::ShortestPathRunnable;
use crate::error::Result;
use crate::graph::{Distance, EdgeRef, Graph};
use crate::trace::{StepKind, StepLog, StepRecorder, TraceStep};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DijkstraEvent {
    Start {
        source: String,
        target: String,
    },
    /// The vertex with the smallest tentative distance is settled
    Visit {
        vertex: String,
        distance: Distance,
    },
    Relax {
        from: String,
        to: String,
        weight: u32,
        previous_distance: Distance,
        distance: Distance,
    },
    PathFound {
        path: Vec<String>,
        total_distance: Distance,
    },
    NoPath {
        source: String,
        target: String,
    },
    Complete,
}

impl DijkstraEvent {
    pub fn kind(&self) -> StepKind {
        match self {
            DijkstraEvent::Start { .. } => StepKind::Start,
            DijkstraEvent::Visit { .. } => StepKind::Visit,
            DijkstraEvent::Relax { .. } => StepKind::Relax,
            DijkstraEvent::PathFound { .. } => StepKind::PathFound,
            DijkstraEvent::NoPath { .. } => StepKind::NoPath,
            DijkstraEvent::Complete => StepKind::Complete,
        }
    }
}

/// One row of the distance table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceEntry {
    pub vertex: String,
    pub distance: Distance,
    pub previous: Option<String>,
    pub visited: bool,
}

/// Full distance table and highlights right after a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DijkstraSnapshot {
    pub current: Option<String>,
    /// One entry per vertex, in vertex insertion order
    pub distances: Vec<DistanceEntry>,
    pub active_edges: Vec<EdgeRef>,
    pub path_edges: Vec<EdgeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DijkstraStep {
    #[serde(flatten)]
    pub event: DijkstraEvent,
    #[serde(flatten)]
    pub snapshot: DijkstraSnapshot,
    pub message: String,
}

impl TraceStep for DijkstraStep {
    fn kind(&self) -> StepKind {
        self.event.kind()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathOutcome {
    pub algorithm: &'static str,
    pub source: String,
    pub target: String,
    pub distances: BTreeMap<String, Distance>,
    pub previous: BTreeMap<String, String>,
    /// Path edges from source to target; empty when there is no path
    pub shortest_path_edges: Vec<EdgeRef>,
    /// Vertices from source to target; empty when there is no path
    pub path_sequence: Vec<String>,
    pub total_distance: Distance,
    pub relaxations: u64,
    pub steps: StepLog<DijkstraStep>,
}

impl ShortestPathOutcome {
    pub fn distance_to(&self, vertex: &str) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    pub fn has_path(&self) -> bool {
        !self.path_sequence.is_empty()
    }
}

/// Working state of one run
struct DijkstraRun<'g> {
    graph: &'g Graph,
    distances: Vec<Distance>,
    previous: Vec<Option<usize>>,
    visited: Vec<bool>,
    current: Option<usize>,
    active: Option<(usize, usize)>,
    path: Vec<usize>,
    relaxations: u64,
    recorder: StepRecorder<DijkstraStep>,
}

impl<'g> DijkstraRun<'g> {
    fn new(graph: &'g Graph, source: usize) -> Self {
        let mut distances = vec![Distance::Infinite; graph.vertex_count()];
        distances[source] = Distance::ZERO;
        Self {
            graph,
            distances,
            previous: vec![None; graph.vertex_count()],
            visited: vec![false; graph.vertex_count()],
            current: None,
            active: None,
            path: Vec::new(),
            relaxations: 0,
            recorder: StepRecorder::new(),
        }
    }

    fn name(&self, index: usize) -> String {
        self.graph.name(index).to_string()
    }

    fn edge(&self, from: usize, to: usize) -> EdgeRef {
        EdgeRef::new(self.graph.name(from), self.graph.name(to))
    }

    fn emit(&mut self, event: DijkstraEvent, message: String) {
        let distances = (0..self.graph.vertex_count())
            .map(|i| DistanceEntry {
                vertex: self.name(i),
                distance: self.distances[i],
                previous: self.previous[i].map(|p| self.name(p)),
                visited: self.visited[i],
            })
            .collect();
        let snapshot = DijkstraSnapshot {
            current: self.current.map(|i| self.name(i)),
            distances,
            active_edges: self
                .active
                .map(|(a, b)| vec![self.edge(a, b)])
                .unwrap_or_default(),
            path_edges: self.path.windows(2).map(|w| self.edge(w[0], w[1])).collect(),
        };
        self.recorder.push(DijkstraStep {
            event,
            snapshot,
            message,
        });
    }

    /// First unvisited vertex with the smallest finite distance
    fn select(&self) -> Option<usize> {
        (0..self.graph.vertex_count())
            .filter(|&v| !self.visited[v])
            .min_by_key(|&v| self.distances[v])
            .filter(|&v| self.distances[v].is_finite())
    }

    fn settle(&mut self, vertex: usize) {
        self.visited[vertex] = true;
        self.current = Some(vertex);
        self.active = None;
        let distance = self.distances[vertex];
        let name = self.name(vertex);
        self.emit(
            DijkstraEvent::Visit {
                vertex: name.clone(),
                distance,
            },
            format!("Visiting {} (distance {})", name, distance),
        );
    }

    fn relax_neighbors(&mut self, vertex: usize) {
        let graph = self.graph;
        for link in graph.links(vertex) {
            if self.visited[link.target] {
                continue;
            }
            let candidate = self.distances[vertex].extend(link.weight);
            let previous_distance = self.distances[link.target];
            if candidate >= previous_distance {
                continue;
            }

            self.distances[link.target] = candidate;
            self.previous[link.target] = Some(vertex);
            self.active = Some((vertex, link.target));
            self.relaxations += 1;

            let (from, to) = (self.name(vertex), self.name(link.target));
            let message = format!(
                "Updated distance of {} from {} to {} via {} (edge weight {})",
                to, previous_distance, candidate, from, link.weight
            );
            self.emit(
                DijkstraEvent::Relax {
                    from,
                    to,
                    weight: link.weight,
                    previous_distance,
                    distance: candidate,
                },
                message,
            );
        }
    }

    /// Walk `previous` back from the target; empty if it never reaches the source
    fn reconstruct(&self, source: usize, target: usize) -> Vec<usize> {
        if !self.distances[target].is_finite() {
            return Vec::new();
        }
        let mut path = vec![target];
        let mut cursor = target;
        while cursor != source {
            match self.previous[cursor] {
                Some(prev) => {
                    path.push(prev);
                    cursor = prev;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

/// Dijkstra's algorithm over positive integer weights
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl ShortestPathRunnable for Dijkstra {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn run(&self, graph: &Graph, source: &str, target: &str) -> Result<ShortestPathOutcome> {
        let source_index = graph.require(source)?;
        let target_index = graph.require(target)?;

        let mut run = DijkstraRun::new(graph, source_index);
        run.emit(
            DijkstraEvent::Start {
                source: source.to_string(),
                target: target.to_string(),
            },
            format!("Starting Dijkstra from {} to {}", source, target),
        );

        while let Some(vertex) = run.select() {
            run.settle(vertex);
            run.relax_neighbors(vertex);
        }

        run.current = None;
        run.active = None;
        run.path = run.reconstruct(source_index, target_index);
        let path_sequence: Vec<String> = run.path.iter().map(|&i| run.name(i)).collect();
        let total_distance = if path_sequence.is_empty() {
            Distance::Infinite
        } else {
            run.distances[target_index]
        };

        if path_sequence.is_empty() {
            run.emit(
                DijkstraEvent::NoPath {
                    source: source.to_string(),
                    target: target.to_string(),
                },
                format!("No path exists from {} to {}", source, target),
            );
        } else {
            run.emit(
                DijkstraEvent::PathFound {
                    path: path_sequence.clone(),
                    total_distance,
                },
                format!(
                    "Shortest path: {} (total distance {})",
                    path_sequence.join(" → "),
                    total_distance
                ),
            );
        }
        run.emit(DijkstraEvent::Complete, "Dijkstra completed!".to_string());

        let shortest_path_edges = run
            .path
            .windows(2)
            .map(|w| run.edge(w[0], w[1]))
            .collect();
        let distances = (0..graph.vertex_count())
            .map(|i| (run.name(i), run.distances[i]))
            .collect();
        let previous = (0..graph.vertex_count())
            .filter_map(|i| run.previous[i].map(|p| (run.name(i), run.name(p))))
            .collect();
        let relaxations = run.relaxations;
        let steps = run.recorder.finish()?;

        tracing::debug!(
            source,
            target,
            vertices = graph.vertex_count(),
            relaxations,
            steps = steps.len(),
            total_distance = %total_distance,
            "dijkstra_complete"
        );

        Ok(ShortestPathOutcome {
            algorithm: self.name(),
            source: source.to_string(),
            target: target.to_string(),
            distances,
            previous,
            shortest_path_edges,
            path_sequence,
            total_distance,
            relaxations,
            steps,
        })
    }
}

#[cfg(test)]
mod tests;
