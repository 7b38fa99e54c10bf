//! `algotrace traverse` - trace DFS or BFS

use algotrace_core::bail_usage;
use algotrace_core::error::Result;
use algotrace_core::graph::Graph;

use crate::cli::commands::TraverseArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::render::{join, render, Report};

pub fn execute(ctx: &CommandContext, args: &TraverseArgs) -> Result<()> {
    let (graph, default_start) = if args.edges.is_empty() {
        (ctx.config.graph.build()?, Some(ctx.config.graph.start_vertex()?))
    } else {
        let graph = Graph::from_edges(args.edges.iter().cloned())?;
        let first = graph.first_vertex().map(str::to_string);
        (graph, first)
    };

    let Some(start) = args.start.clone().or(default_start) else {
        bail_usage!("graph has no vertices to start from");
    };

    let outcome = args.algorithm.run(&graph, &start)?;
    tracing::debug!(
        algorithm = args.algorithm.name(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        steps = outcome.steps.len(),
        "traversal_traced"
    );

    let report = Report::new(
        format!("traverse.{}", outcome.algorithm),
        &outcome.steps,
        serde_json::to_value(&outcome)?,
    )
    .field("start", &outcome.start)
    .field("visit_order", join(&outcome.visit_order))
    .field("unreached", join(&outcome.unreached));
    render(ctx, &report)
}
