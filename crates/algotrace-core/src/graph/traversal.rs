//! Depth-first and breadth-first traversal traces
//!
//! Both engines start from a single vertex and only reach its connected
//! component; vertices outside it are reported in
//! [`TraversalOutcome::unreached`] and never visited.

use std::collections::VecDeque;

use serde::Serialize;

use crate::engine::Traversable;
use crate::error::Result;
use crate::graph::{EdgeRef, Graph};
use crate::trace::{StepKind, StepLog, StepRecorder, TraceStep};

/// Event payload of a traversal step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TraversalEvent {
    Start { start: String },
    /// `order` is the 0-based position of the vertex in the visit order
    Visit { vertex: String, order: usize },
    ActivateEdge { edge: EdgeRef },
    Complete { visit_order: Vec<String> },
}

impl TraversalEvent {
    pub fn kind(&self) -> StepKind {
        match self {
            TraversalEvent::Start { .. } => StepKind::Start,
            TraversalEvent::Visit { .. } => StepKind::Visit,
            TraversalEvent::ActivateEdge { .. } => StepKind::ActivateEdge,
            TraversalEvent::Complete { .. } => StepKind::Complete,
        }
    }
}

/// State of the traversal right after a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalSnapshot {
    pub current: Option<String>,
    /// Visited vertices in visit order
    pub visited: Vec<String>,
    /// DFS: the active path from the start; BFS: the queue
    pub frontier: Vec<String>,
    pub active_edges: Vec<EdgeRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalStep {
    #[serde(flatten)]
    pub event: TraversalEvent,
    #[serde(flatten)]
    pub snapshot: TraversalSnapshot,
    pub message: String,
}

impl TraceStep for TraversalStep {
    fn kind(&self) -> StepKind {
        self.event.kind()
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalOutcome {
    pub algorithm: &'static str,
    pub start: String,
    pub visit_order: Vec<String>,
    /// Vertices outside the start vertex's component
    pub unreached: Vec<String>,
    pub steps: StepLog<TraversalStep>,
}

/// Working state of one traversal
struct TraversalRun<'g> {
    graph: &'g Graph,
    visited: Vec<bool>,
    order: Vec<usize>,
    current: Option<usize>,
    active: Option<(usize, usize)>,
    recorder: StepRecorder<TraversalStep>,
}

impl<'g> TraversalRun<'g> {
    fn start(graph: &'g Graph, start: usize, label: &str) -> Self {
        let mut run = Self {
            graph,
            visited: vec![false; graph.vertex_count()],
            order: Vec::new(),
            current: None,
            active: None,
            recorder: StepRecorder::new(),
        };
        let name = graph.name(start).to_string();
        run.emit(
            TraversalEvent::Start {
                start: name.clone(),
            },
            &[start],
            format!("Starting {} from {}", label, name),
        );
        run
    }

    fn visit(&mut self, vertex: usize, frontier: &[usize]) {
        self.visited[vertex] = true;
        self.order.push(vertex);
        self.current = Some(vertex);
        let name = self.graph.name(vertex).to_string();
        self.emit(
            TraversalEvent::Visit {
                vertex: name.clone(),
                order: self.order.len() - 1,
            },
            frontier,
            format!("Visiting {}", name),
        );
    }

    fn activate(&mut self, from: usize, to: usize, frontier: &[usize]) {
        self.active = Some((from, to));
        let edge = EdgeRef::new(self.graph.name(from), self.graph.name(to));
        let message = format!("Exploring edge {} -> {}", edge.from, edge.to);
        self.emit(TraversalEvent::ActivateEdge { edge }, frontier, message);
    }

    fn emit(&mut self, event: TraversalEvent, frontier: &[usize], message: String) {
        let names = |ids: &[usize]| -> Vec<String> {
            ids.iter().map(|&i| self.graph.name(i).to_string()).collect()
        };
        let snapshot = TraversalSnapshot {
            current: self.current.map(|i| self.graph.name(i).to_string()),
            visited: names(&self.order),
            frontier: names(frontier),
            active_edges: self
                .active
                .map(|(a, b)| vec![EdgeRef::new(self.graph.name(a), self.graph.name(b))])
                .unwrap_or_default(),
        };
        self.recorder.push(TraversalStep {
            event,
            snapshot,
            message,
        });
    }

    fn complete(mut self, algorithm: &'static str, label: &str) -> Result<TraversalOutcome> {
        self.current = None;
        self.active = None;
        let visit_order: Vec<String> = self
            .order
            .iter()
            .map(|&i| self.graph.name(i).to_string())
            .collect();
        let start = visit_order.first().cloned().unwrap_or_default();
        self.emit(
            TraversalEvent::Complete {
                visit_order: visit_order.clone(),
            },
            &[],
            format!("{}: {}", label, visit_order.join(" → ")),
        );

        let unreached = self
            .graph
            .vertices()
            .iter()
            .zip(&self.visited)
            .filter(|(_, &seen)| !seen)
            .map(|(v, _)| v.clone())
            .collect();
        let steps = self.recorder.finish()?;
        tracing::debug!(
            algorithm,
            start = %start,
            visited = visit_order.len(),
            steps = steps.len(),
            "traversal_complete"
        );
        Ok(TraversalOutcome {
            algorithm,
            start,
            visit_order,
            unreached,
            steps,
        })
    }
}

/// Depth-first traversal in stored neighbor order
///
/// Runs on an explicit frame stack that reproduces the recursive visit
/// order: a neighbor is checked for `visited` at the moment it is reached,
/// not when its parent was entered.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dfs;

impl Traversable for Dfs {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn traverse(&self, graph: &Graph, start: &str) -> Result<TraversalOutcome> {
        let start = graph.require(start)?;
        let mut run = TraversalRun::start(graph, start, "DFS");

        // (vertex, index of the next neighbor to examine)
        let mut frames: Vec<(usize, usize)> = vec![(start, 0)];
        run.visit(start, &[start]);

        while let Some(&(vertex, cursor)) = frames.last() {
            let next = graph
                .links(vertex)
                .iter()
                .enumerate()
                .skip(cursor)
                .find(|(_, link)| !run.visited[link.target])
                .map(|(i, link)| (i, link.target));

            match next {
                Some((i, neighbor)) => {
                    if let Some(frame) = frames.last_mut() {
                        frame.1 = i + 1;
                    }
                    let path: Vec<usize> = frames.iter().map(|f| f.0).collect();
                    run.activate(vertex, neighbor, &path);
                    frames.push((neighbor, 0));
                    let path: Vec<usize> = frames.iter().map(|f| f.0).collect();
                    run.visit(neighbor, &path);
                }
                None => {
                    frames.pop();
                }
            }
        }

        run.complete(self.name(), "DFS")
    }
}

/// Breadth-first traversal; vertices are marked when enqueued
#[derive(Debug, Clone, Copy, Default)]
pub struct Bfs;

impl Traversable for Bfs {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn traverse(&self, graph: &Graph, start: &str) -> Result<TraversalOutcome> {
        let start = graph.require(start)?;
        let mut run = TraversalRun::start(graph, start, "BFS");

        let mut discovered = vec![false; graph.vertex_count()];
        discovered[start] = true;
        let mut queue = VecDeque::from([start]);

        while let Some(vertex) = queue.pop_front() {
            run.visit(vertex, queue.make_contiguous());

            for link in graph.links(vertex) {
                if discovered[link.target] {
                    continue;
                }
                discovered[link.target] = true;
                queue.push_back(link.target);
                run.activate(vertex, link.target, queue.make_contiguous());
            }
        }

        run.complete(self.name(), "BFS")
    }
}
