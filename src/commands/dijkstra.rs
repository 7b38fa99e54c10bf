//! `algotrace dijkstra` - trace a single-source shortest path search

use algotrace_core::bail_usage;
use algotrace_core::engine::shortest_path_engine;
use algotrace_core::error::Result;
use algotrace_core::graph::{Graph, ShortestPathOutcome};

use crate::cli::commands::DijkstraArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{render, Report};

pub fn execute(ctx: &CommandContext, args: &DijkstraArgs) -> Result<()> {
    let config = &ctx.config.dijkstra;
    let (graph, defaults) = if args.edges.is_empty() {
        (config.build()?, Some(config.endpoints()?))
    } else {
        let graph = Graph::from_edges(args.edges.iter().cloned())?;
        // Custom edges default to first and last mentioned vertex
        let ends = graph
            .first_vertex()
            .zip(graph.vertices().last())
            .map(|(first, last)| (first.to_string(), last.clone()));
        (graph, ends)
    };

    let (source, target) = match (args.source.clone(), args.target.clone(), defaults) {
        (Some(source), Some(target), _) => (source, target),
        (source, target, Some((first, last))) => {
            (source.unwrap_or(first), target.unwrap_or(last))
        }
        _ => bail_usage!("graph has no vertices to search between"),
    };

    let outcome = shortest_path_engine().run(&graph, &source, &target)?;

    let report = Report::new("dijkstra", &outcome.steps, serde_json::to_value(&outcome)?)
        .field("source", &outcome.source)
        .field("target", &outcome.target)
        .field("path", path_label(&outcome))
        .field("total_distance", outcome.total_distance)
        .field("relaxations", outcome.relaxations)
        .field("distances", distance_table(&outcome));
    render(ctx, &report)
}

fn path_label(outcome: &ShortestPathOutcome) -> String {
    if outcome.has_path() {
        outcome.path_sequence.join(" -> ")
    } else {
        "none".to_string()
    }
}

fn distance_table(outcome: &ShortestPathOutcome) -> String {
    outcome
        .distances
        .iter()
        .map(|(vertex, distance)| format!("{}={}", vertex, distance))
        .collect::<Vec<_>>()
        .join(" ")
}
